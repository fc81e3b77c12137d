//! # emulsion-math
//!
//! Math utilities for the film emulation pipeline:
//!
//! - [`Mat3`] - 3x3 row-major matrices for color transforms
//! - Interpolation helpers (lerp, smoothstep, saturate)
//! - Band-limited procedural noise for grain and gate weave
//!
//! # Design
//!
//! [`Mat3`] wraps plain row arrays and defers inversion to [`glam`];
//! all matrix operations assume **row-major** storage and **column
//! vectors** (`result = matrix * vector`).
//!
//! # Usage
//!
//! ```rust
//! use emulsion_math::{Mat3, luma};
//!
//! let identity = Mat3::IDENTITY;
//! let rgb = [0.5, 0.25, 0.125];
//! assert_eq!(identity.transform(rgb), rgb);
//! assert!(luma([1.0, 1.0, 1.0]) > 0.999);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
pub mod noise;

pub use interp::*;
pub use mat3::*;
