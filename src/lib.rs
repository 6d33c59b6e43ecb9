pub mod crypto;
pub use crypto::{ Digest, DigestFunction, HashAlgorithm, Hasher };

pub mod math;

pub mod utils;

mod errors;
pub use errors::SearchError;

pub mod search;
pub use search::{ search, Buffer, InputEncoding, SearchEngine, SearchOptions, SearchResult, SearchState };

pub mod benchmark;
pub use benchmark::{ BenchmarkOptions, BenchmarkReport };

pub mod interactive;

#[cfg(test)]
mod tests;
