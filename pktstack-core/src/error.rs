//! Error types for pktstack

use thiserror::Error;

/// Result type alias for pktstack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pktstack
#[derive(Error, Debug)]
pub enum Error {
    /// A read would cross the end of the backing buffer
    #[error("read of {requested} bytes exceeds {remaining} remaining")]
    OutOfBounds { requested: usize, remaining: usize },

    /// I/O error while loading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed user input (hex strings, protocol names)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an out-of-bounds error for a read of `requested` bytes
    /// against `remaining` available bytes.
    pub fn out_of_bounds(requested: usize, remaining: usize) -> Self {
        Error::OutOfBounds {
            requested,
            remaining,
        }
    }

    /// Create an invalid input error with a custom message
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
