//! Sony S-Log3 transfer function.
//!
//! Sony's cinema-camera log encoding, roughly 14 stops of range. The
//! linear segment below the cut keeps near-black noise well behaved.

const CUT_LINEAR: f32 = 0.01125;
const CUT_LOG: f32 = 171.2102946929;

/// Encodes linear scene light as S-Log3.
///
/// 18% gray lands near 0.41 (420/1023 in code values).
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear >= CUT_LINEAR {
        (420.0 + 261.5 * ((linear + 0.01) / 0.19).log10()) / 1023.0
    } else {
        (linear * (CUT_LOG - 95.0) / 0.01125 + 95.0) / 1023.0
    }
}

/// Decodes an S-Log3 signal to linear scene light.
#[inline]
pub fn decode(log: f32) -> f32 {
    let cv = log * 1023.0;
    if cv >= CUT_LOG {
        10.0_f32.powf((cv - 420.0) / 261.5) * 0.19 - 0.01
    } else {
        (cv - 95.0) * 0.01125 / (CUT_LOG - 95.0)
    }
}

/// Encodes a linear triple as S-Log3.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Decodes an S-Log3 triple to linear scene light.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_gray() {
        assert!((encode(0.18) - 0.41).abs() < 0.02);
    }

    #[test]
    fn roundtrip_scene_values() {
        for &l in &[0.001, 0.01, 0.18, 0.5, 1.0, 2.0] {
            let back = decode(encode(l));
            assert!((l - back).abs() < l * 1e-4 + 1e-5, "l={}, back={}", l, back);
        }
    }
}
