//! Panasonic V-Log transfer function.
//!
//! Log encoding for VariCam and Lumix cameras. Black is lifted: linear
//! zero encodes to 0.125.

const CUT_LINEAR: f32 = 0.01;
const CUT_LOG: f32 = 0.181;
const B: f32 = 0.00873;
const C: f32 = 0.241514;
const D: f32 = 0.598206;

/// Encodes linear scene light as V-Log.
///
/// 18% gray lands near 0.423.
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear < CUT_LINEAR {
        5.6 * linear + 0.125
    } else {
        C * (linear + B).log10() + D
    }
}

/// Decodes a V-Log signal to linear scene light.
#[inline]
pub fn decode(log: f32) -> f32 {
    if log < CUT_LOG {
        (log - 0.125) / 5.6
    } else {
        10.0_f32.powf((log - D) / C) - B
    }
}

/// Encodes a linear triple as V-Log.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Decodes a V-Log triple to linear scene light.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}
