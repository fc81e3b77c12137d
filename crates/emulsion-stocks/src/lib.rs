//! # emulsion-stocks
//!
//! The color science database: a closed catalog of film stock profiles
//! driving the emulation pipeline.
//!
//! Each [`FilmStock`] maps to exactly one immutable [`FilmStockProfile`]:
//! spectral sensitivity peaks, a 3x3 color matrix onto the working RGB
//! primaries, a characteristic [`ToneCurve`], and a [`GrainProfile`].
//! The catalog is built once, process-wide, and only ever read.
//!
//! # Lookup never fails
//!
//! [`profile`] is a total function. An id the host hands us that we do
//! not recognize falls back to the default stock
//! ([`FilmStock::KodakVision3_250D`]) instead of erroring; see
//! [`FilmStock::from_index`].
//!
//! # Usage
//!
//! ```rust
//! use emulsion_stocks::{profile, FilmStock};
//!
//! let p = profile(FilmStock::KodakVision3_500T);
//! assert_eq!(p.iso_speed, 500.0);
//! let mid = p.tone_curve.apply(0.18);
//! assert!(mid > 0.0 && mid < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(non_camel_case_types)]

mod catalog;
mod curve;
mod format;
mod profile;
mod spectral;

pub use catalog::{profile, FilmStock};
pub use curve::ToneCurve;
pub use format::FilmFormat;
pub use profile::{FilmStockProfile, GrainProfile};
pub use spectral::{SpectralPeak, SPECTRUM_SAMPLES, WAVELENGTH_MAX_NM, WAVELENGTH_MIN_NM, WAVELENGTH_STEP_NM};
