//! # emulsion-core
//!
//! Core types for the analog film emulation pipeline.
//!
//! This crate provides the data containers the rest of the workspace
//! operates on:
//!
//! - [`Frame`] - Owned RGBA image buffer in the f32 working format
//! - [`Sample`] - Pixel component trait for ingress/egress formats (u8, f16, f32)
//! - [`RenderContext`] - Per-frame time and frame-index state
//! - [`CoreError`] - Error type shared by buffer construction and conversion
//!
//! # Working format
//!
//! The whole pipeline works in interleaved RGBA `f32`, row-major,
//! top-to-bottom. Host buffers in 8-bit normalized or 16-bit float are
//! converted at the edges via [`Frame::from_samples`] and
//! [`Frame::write_samples`].
//!
//! # Usage
//!
//! ```rust
//! use emulsion_core::Frame;
//!
//! let mut frame = Frame::new(1920, 1080);
//! frame.set_pixel(100, 100, [1.0, 0.5, 0.25, 1.0]);
//! assert_eq!(frame.pixel(100, 100)[0], 1.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod context;
mod error;
mod frame;
mod sample;

pub use context::RenderContext;
pub use error::{CoreError, Result};
pub use frame::Frame;
pub use sample::Sample;
