use std::io;
use thiserror::Error;

// TYPES AND INTERFACES
// ================================================================================================

/// Errors which can abort a search before it starts. The search loop itself never fails.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The requested digest algorithm is not available.
    #[error("{0} hash algorithm isn't implemented on this system")]
    UnsupportedAlgorithm(String),

    /// Caller-supplied text could not be converted into the initial buffer.
    #[error("input is not valid {encoding}: {reason}")]
    InvalidEncoding {
        encoding    : &'static str,
        reason      : String,
    },

    /// The requested number of zero bits is not a non-negative integer.
    #[error("number of zero bits '{0}' is not a non-negative integer")]
    InvalidThreshold(String),

    /// Reading from or writing to the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}
