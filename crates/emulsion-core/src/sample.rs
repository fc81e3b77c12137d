//! Pixel component formats accepted at the pipeline edges.
//!
//! The pipeline itself works in f32. Host frames arrive as 8-bit
//! normalized, 16-bit float, or 32-bit float components; [`Sample`]
//! converts each to and from the working format.

use half::f16;

/// A pixel component type convertible to and from the f32 working format.
///
/// Implemented for [`u8`] (normalized to [0, 1]), [`f16`], and [`f32`].
pub trait Sample: Copy + Send + Sync {
    /// Converts this component to the f32 working format.
    fn to_f32(self) -> f32;

    /// Converts an f32 working value to this component format.
    fn from_f32(value: f32) -> Self;
}

impl Sample for u8 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32 / 255.0
    }

    #[inline]
    fn from_f32(value: f32) -> Self {
        (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
    }
}

impl Sample for f16 {
    #[inline]
    fn to_f32(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn from_f32(value: f32) -> Self {
        f16::from_f32(value)
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }
}
