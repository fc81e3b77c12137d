//! # emulsion-pipeline
//!
//! The film emulation pipeline itself: parameter model, stage
//! orchestration, color-space edges and the LUT baker.
//!
//! One [`render`] call takes an input [`Frame`](emulsion_core::Frame),
//! an immutable [`EffectParameters`] snapshot and a
//! [`RenderContext`](emulsion_core::RenderContext), and writes the
//! finished frame into the caller's output buffer. The call is
//! synchronous and deterministic: the result is a pure function of
//! input, parameters and frame time/index.
//!
//! # Stage order
//!
//! input linearization → gate weave → film response → grain →
//! bright-pass → halation → bloom → color grade → output encoding.
//! Stages gated by an amount parameter are skipped at zero and the skip
//! is a bit-exact pass-through.
//!
//! # Usage
//!
//! ```rust
//! use emulsion_core::{Frame, RenderContext};
//! use emulsion_pipeline::{render, EffectParameters};
//!
//! let input = Frame::filled(16, 16, [0.5, 0.5, 0.5, 1.0]);
//! let mut output = Frame::new(16, 16);
//! render(
//!     &input,
//!     &mut output,
//!     &EffectParameters::neutral(),
//!     &RenderContext::still(),
//! )
//! .unwrap();
//! assert_eq!(output, input);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod baker;
mod colorspace;
mod error;
mod orchestrator;
mod params;
mod pool;

pub use colorspace::{InputColorSpace, OutputColorSpace};
pub use error::{RenderError, RenderResult};
pub use orchestrator::{render, Renderer};
pub use params::{EffectParameters, ProcessType};
