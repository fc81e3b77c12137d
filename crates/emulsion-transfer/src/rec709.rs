//! ITU-R BT.709 camera OETF.
//!
//! The scene-to-signal curve used for HDTV. The matching display EOTF in
//! practice is BT.1886 (gamma 2.4); the inverse OETF here is what the
//! output stage needs to undo its own encoding in tests.

/// Encodes linear light as a Rec.709 signal.
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l < 0.018 {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// Decodes a Rec.709 signal to linear light (inverse OETF).
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v < 0.081 {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

/// Encodes a linear triple as Rec.709.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

/// Decodes a Rec.709 triple to linear light.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn roundtrip_full_range() {
        for i in 0..=64 {
            let v = i as f32 / 64.0;
            assert_abs_diff_eq!(oetf(eotf(v)), v, epsilon = 1e-4);
        }
    }

    #[test]
    fn linear_toe() {
        assert_abs_diff_eq!(oetf(0.01), 0.045, epsilon = 1e-7);
    }
}
