//! Error types for LUT handling.

use thiserror::Error;

/// Error type for LUT construction and .cube I/O.
#[derive(Error, Debug)]
pub enum LutError {
    /// Grid data doesn't match the declared size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Malformed .cube content.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Underlying file I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;
