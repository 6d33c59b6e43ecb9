use std::fmt;
use std::str::FromStr;
use sha2::{ Sha256, Digest as Sha2Digest };
use sha3::{ Sha3_256, Digest as Sha3Digest };
use crate::SearchError;

// TYPES AND INTERFACES
// ================================================================================================

/// A hash function which writes its digest of `values` into `result`; `result` must be exactly
/// as long as the function's output.
pub type HashFunction = fn(&[u8], &mut [u8]);

/// Digest algorithms a search can be configured with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha3_256,
    Blake3,
}

// HASH FUNCTIONS
// ================================================================================================

pub fn sha256(values: &[u8], result: &mut [u8]) {
    let mut hasher = Sha256::new();
    Sha2Digest::input(&mut hasher, values);
    result.copy_from_slice(Sha2Digest::result(hasher).as_ref());
}

pub fn sha3_256(values: &[u8], result: &mut [u8]) {
    let mut hasher = Sha3_256::new();
    Sha3Digest::input(&mut hasher, values);
    result.copy_from_slice(Sha3Digest::result(hasher).as_ref());
}

pub fn blake3(values: &[u8], result: &mut [u8]) {
    let hash = ::blake3::hash(values);
    result.copy_from_slice(hash.as_bytes());
}

// HASH ALGORITHM IMPLEMENTATION
// ================================================================================================
impl HashAlgorithm {

    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Blake3,
    ];

    /// Returns the function computing this algorithm.
    pub fn function(&self) -> HashFunction {
        return match self {
            HashAlgorithm::Sha256   => sha256,
            HashAlgorithm::Sha3_256 => sha3_256,
            HashAlgorithm::Blake3   => blake3,
        };
    }

    /// Returns the length of the digest in bytes; all supported algorithms are 256-bit.
    pub fn digest_len(&self) -> usize {
        return 32;
    }

    pub fn name(&self) -> &'static str {
        return match self {
            HashAlgorithm::Sha256   => "sha256",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Blake3   => "blake3",
        };
    }
}

impl Default for HashAlgorithm {
    fn default() -> HashAlgorithm {
        return HashAlgorithm::Sha256;
    }
}

impl FromStr for HashAlgorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<HashAlgorithm, SearchError> {
        return match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256"   => Ok(HashAlgorithm::Sha256),
            "sha3-256" | "sha3"    => Ok(HashAlgorithm::Sha3_256),
            "blake3"               => Ok(HashAlgorithm::Blake3),
            _ => Err(SearchError::UnsupportedAlgorithm(s.to_string())),
        };
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.name());
    }
}
