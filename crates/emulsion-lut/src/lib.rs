//! # emulsion-lut
//!
//! 3D lookup-table support for the film emulation pipeline: the in-memory
//! [`Lut3D`] grid and the plain-text `.cube` serialization the baker
//! exports.
//!
//! # Usage
//!
//! ```rust
//! use emulsion_lut::Lut3D;
//!
//! let lut = Lut3D::identity(33);
//! let out = lut.apply([0.5, 0.3, 0.2]);
//! assert!((out[0] - 0.5).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cube;
mod error;
mod lut3d;

pub use error::{LutError, LutResult};
pub use lut3d::Lut3D;
