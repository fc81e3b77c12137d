//! Error types for pipeline stage operations.

use thiserror::Error;

/// Error type for stage operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Frames that must match in size do not.
    #[error("size mismatch: {0:?} vs {1:?}")]
    SizeMismatch((u32, u32), (u32, u32)),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for stage operations.
pub type OpsResult<T> = Result<T, OpsError>;
