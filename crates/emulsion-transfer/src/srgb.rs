//! sRGB piecewise transfer function (IEC 61966-2-1).
//!
//! A linear toe below the breakpoint, a 2.4 power segment above it;
//! the composite behaves close to gamma 2.2 overall.

const EOTF_CUT: f32 = 0.04045;
const OETF_CUT: f32 = 0.0031308;

/// Decodes an sRGB signal to linear light.
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= EOTF_CUT {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light as an sRGB signal.
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= OETF_CUT {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes an sRGB triple to linear light.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Encodes a linear triple as sRGB.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}
