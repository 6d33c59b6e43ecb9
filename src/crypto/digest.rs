use std::fmt;
use super::{ HashFunction, HashAlgorithm };
use crate::math;
use crate::utils::{ to_hex_string, to_binary_string };

// TYPES AND INTERFACES
// ================================================================================================

/// Something which maps a byte string to a fixed-length digest. Implementations must be
/// deterministic and free of observable side effects.
pub trait DigestFunction {

    /// Returns the digest of `bytes`.
    fn digest(&self, bytes: &[u8]) -> Digest;

    /// Returns the number of bytes in every digest produced by this function.
    fn digest_len(&self) -> usize;
}

/// An immutable hash output; byte 0 is the least significant byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: Vec<u8>,
}

/// A [DigestFunction] backed by one of the supported hash algorithms.
#[derive(Copy, Clone)]
pub struct Hasher {
    algorithm   : HashAlgorithm,
    hash_fn     : HashFunction,
    digest_len  : usize,
}

// DIGEST IMPLEMENTATION
// ================================================================================================
impl Digest {

    pub fn new(bytes: Vec<u8>) -> Digest {
        return Digest { bytes };
    }

    pub fn as_bytes(&self) -> &[u8] {
        return &self.bytes;
    }

    pub fn len(&self) -> usize {
        return self.bytes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.bytes.is_empty();
    }

    /// Number of zero bits before the first 1 bit, counting from bit 0 of byte 0.
    pub fn leading_zero_bits(&self) -> u32 {
        return math::count_leading_zero_bits(&self.bytes);
    }

    /// Most-significant-byte-first hex rendering; see [to_hex_string].
    pub fn to_hex_string(&self) -> String {
        return to_hex_string(&self.bytes);
    }

    /// Most-significant-byte-first binary rendering; see [to_binary_string].
    pub fn to_binary_string(&self) -> String {
        return to_binary_string(&self.bytes);
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        return &self.bytes;
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Digest({})", hex::encode(&self.bytes));
    }
}

// HASHER IMPLEMENTATION
// ================================================================================================
impl Hasher {

    pub fn new(algorithm: HashAlgorithm) -> Hasher {
        return Hasher {
            algorithm,
            hash_fn     : algorithm.function(),
            digest_len  : algorithm.digest_len(),
        };
    }
}

impl DigestFunction for Hasher {

    fn digest(&self, bytes: &[u8]) -> Digest {
        let mut result = vec![0u8; self.digest_len];
        (self.hash_fn)(bytes, &mut result);
        return Digest::new(result);
    }

    fn digest_len(&self) -> usize {
        return self.digest_len;
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Hasher({})", self.algorithm);
    }
}

impl<D: DigestFunction + ?Sized> DigestFunction for &D {

    fn digest(&self, bytes: &[u8]) -> Digest {
        return (**self).digest(bytes);
    }

    fn digest_len(&self) -> usize {
        return (**self).digest_len();
    }
}
