//! # emulsion-ops
//!
//! The per-stage image operations of the film emulation pipeline.
//!
//! Each operation reads one [`Frame`](emulsion_core::Frame) and writes a
//! distinct output frame; buffers are never aliased within a stage. Rows
//! are processed in parallel with [`rayon`], which stands in for the
//! per-pixel GPU dispatch the stages were designed around: no pixel
//! depends on another within a stage, stages are strictly ordered.
//!
//! # Stages
//!
//! - [`blur`] - separable Gaussian blur (halation/bloom spread)
//! - [`bright`] - bright-pass extraction above a luminance threshold
//! - [`glow`] - halation and bloom composites over a blurred bright-pass
//! - [`grain`] - procedural luminance/chroma grain
//! - [`weave`] - gate weave positional warp
//! - [`response`] - film-stock response (matrix, tone curve, tint)
//! - [`grade`] - final color grading and clamp

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blur;
pub mod bright;
mod error;
pub mod glow;
pub mod grade;
pub mod grain;
pub mod response;
pub mod weave;

pub use error::{OpsError, OpsResult};

use emulsion_core::Frame;

/// Checks that two frames have equal, non-zero dimensions.
pub(crate) fn check_pair(src: &Frame, dst: &Frame) -> OpsResult<()> {
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions("empty source frame".into()));
    }
    if src.dimensions() != dst.dimensions() {
        return Err(OpsError::SizeMismatch(src.dimensions(), dst.dimensions()));
    }
    Ok(())
}
