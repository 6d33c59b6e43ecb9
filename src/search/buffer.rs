use std::fmt;
use super::InputEncoding;
use crate::{ math, SearchError };

// TYPES AND INTERFACES
// ================================================================================================

/// A fixed-length byte buffer interpreted as a little-endian unsigned integer. The length is set
/// at construction and never changes; incrementing past the maximum value wraps to zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Buffer {
    bytes: Vec<u8>,
}

// BUFFER IMPLEMENTATION
// ================================================================================================
impl Buffer {

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    pub fn new(bytes: Vec<u8>) -> Buffer {
        return Buffer { bytes };
    }

    /// Converts caller-supplied text into a buffer using the specified encoding.
    pub fn from_text(text: &str, encoding: InputEncoding) -> Result<Buffer, SearchError> {
        return match encoding {
            InputEncoding::Utf8 => Ok(Buffer::new(text.as_bytes().to_vec())),
            InputEncoding::Hex  => {
                let bytes = hex::decode(text.trim()).map_err(|err| SearchError::InvalidEncoding {
                    encoding: encoding.name(),
                    reason  : err.to_string(),
                })?;
                Ok(Buffer::new(bytes))
            }
        };
    }

    /// Validates that raw console bytes form UTF-8 text and uses them as the buffer.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Buffer, SearchError> {
        let text = String::from_utf8(bytes).map_err(|err| SearchError::InvalidEncoding {
            encoding: InputEncoding::Utf8.name(),
            reason  : err.to_string(),
        })?;
        return Ok(Buffer::new(text.into_bytes()));
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    pub fn as_bytes(&self) -> &[u8] {
        return &self.bytes;
    }

    pub fn len(&self) -> usize {
        return self.bytes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.bytes.is_empty();
    }

    /// Buffer contents as text; bytes which are not valid UTF-8 are replaced.
    pub fn to_text(&self) -> String {
        return String::from_utf8_lossy(&self.bytes).into_owned();
    }

    // MUTATORS
    // --------------------------------------------------------------------------------------------

    /// Adds one to the value of the buffer; returns true if the buffer wrapped around to zero.
    pub fn increment(&mut self) -> bool {
        return math::increment(&mut self.bytes);
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Buffer {
        return Buffer::new(bytes.to_vec());
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        return &self.bytes;
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Buffer({})", hex::encode(&self.bytes));
    }
}
