//! Error types for core buffer handling.

use thiserror::Error;

/// Error type for buffer construction and format conversion.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// What went wrong.
        reason: String,
    },

    /// Two buffers that must match in size do not.
    #[error("size mismatch: {0:?} vs {1:?}")]
    SizeMismatch((u32, u32), (u32, u32)),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
