//! Render error taxonomy.

use thiserror::Error;

/// Result alias for pipeline operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors a render or bake call can report.
///
/// Unknown enum ids (stock, format, color space) are never errors; they
/// fall back to documented defaults before the pipeline runs.
#[derive(Error, Debug)]
pub enum RenderError {
    /// One-time initialization failed; fatal to the whole effect.
    #[error("pipeline setup failed: {0}")]
    Setup(String),

    /// An intermediate buffer or stage failed mid-frame. The frame is
    /// aborted; shared state is untouched and the caller may re-invoke
    /// on the next frame.
    #[error("render resource failure: {0}")]
    Resource(String),

    /// The caller-provided buffers violate the render preconditions.
    #[error("invalid render request: {0}")]
    InvalidRequest(String),

    /// LUT serialization failed.
    #[error("LUT export failed")]
    Export(#[from] emulsion_lut::LutError),
}

impl From<emulsion_ops::OpsError> for RenderError {
    fn from(err: emulsion_ops::OpsError) -> Self {
        RenderError::Resource(err.to_string())
    }
}

impl From<emulsion_core::CoreError> for RenderError {
    fn from(err: emulsion_core::CoreError) -> Self {
        RenderError::Resource(err.to_string())
    }
}
