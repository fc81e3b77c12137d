//! Pure power-law transfer functions.
//!
//! Used for gamma 2.2 (legacy broadcast monitoring) and gamma 2.6 (DCI
//! cinema projection) output encodings. Negative inputs clamp to zero.

/// Decodes a gamma-encoded signal to linear light.
#[inline]
pub fn eotf(v: f32, gamma: f32) -> f32 {
    v.max(0.0).powf(gamma)
}

/// Encodes linear light with a power-law gamma.
#[inline]
pub fn oetf(l: f32, gamma: f32) -> f32 {
    l.max(0.0).powf(1.0 / gamma)
}

/// Decodes a gamma-encoded triple to linear light.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3], gamma: f32) -> [f32; 3] {
    [eotf(rgb[0], gamma), eotf(rgb[1], gamma), eotf(rgb[2], gamma)]
}

/// Encodes a linear triple with a power-law gamma.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3], gamma: f32) -> [f32; 3] {
    [oetf(rgb[0], gamma), oetf(rgb[1], gamma), oetf(rgb[2], gamma)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn roundtrip_22_and_26() {
        for &g in &[2.2, 2.6] {
            for i in 0..=32 {
                let v = i as f32 / 32.0;
                assert_abs_diff_eq!(oetf(eotf(v, g), g), v, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(oetf(-0.5, 2.2), 0.0);
        assert_eq!(eotf(-0.5, 2.2), 0.0);
    }
}
