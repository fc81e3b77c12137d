//! # emulsion-transfer
//!
//! Transfer functions for the film emulation pipeline.
//!
//! The pipeline works in linear light; these curves sit at its edges.
//! Camera log curves linearize incoming footage, display curves encode
//! the final result.
//!
//! # Terminology
//!
//! - **decode / EOTF**: encoded signal -> linear light
//! - **encode / OETF**: linear light -> encoded signal
//!
//! # Supported curves
//!
//! | Module | Curve | Role |
//! |--------|-------|------|
//! | [`log_c`] | ARRI LogC3 (EI 800) | input linearization |
//! | [`s_log3`] | Sony S-Log3 | input linearization |
//! | [`v_log`] | Panasonic V-Log | input linearization |
//! | [`srgb`] | sRGB piecewise | input or output |
//! | [`rec709`] | ITU-R BT.709 OETF | output encoding |
//! | [`gamma`] | Pure power law (2.2, 2.6) | output encoding |
//!
//! # Usage
//!
//! ```rust
//! use emulsion_transfer::{log_c, rec709};
//!
//! let linear = log_c::decode(0.391);      // camera signal to scene light
//! let display = rec709::oetf(linear);     // scene light to broadcast signal
//! assert!(display > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod log_c;
pub mod rec709;
pub mod s_log3;
pub mod srgb;
pub mod v_log;
