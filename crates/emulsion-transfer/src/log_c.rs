//! ARRI LogC3 transfer function (EI 800).
//!
//! Logarithmic scene-referred encoding used by ALEXA-generation cameras.
//! Parameters vary with exposure index; EI 800 is the common default and
//! the only variant carried here.

// LogC3 EI 800 parameters
const CUT: f32 = 0.010591;
const A: f32 = 5.555556;
const B: f32 = 0.052272;
const C: f32 = 0.247190;
const D: f32 = 0.385537;
const E: f32 = 5.367655;
const F: f32 = 0.092809;

/// Encodes linear scene light as LogC3.
///
/// 18% gray lands near 0.391.
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear > CUT {
        C * (A * linear + B).log10() + D
    } else {
        E * linear + F
    }
}

/// Decodes a LogC3 signal to linear scene light.
#[inline]
pub fn decode(log: f32) -> f32 {
    if log > E * CUT + F {
        (10.0_f32.powf((log - D) / C) - B) / A
    } else {
        (log - F) / E
    }
}

/// Encodes a linear triple as LogC3.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Decodes a LogC3 triple to linear scene light.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}
