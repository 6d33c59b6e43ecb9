mod hash;
pub use hash::{ HashFunction, HashAlgorithm, sha256, sha3_256, blake3 };

mod digest;
pub use digest::{ DigestFunction, Digest, Hasher };
