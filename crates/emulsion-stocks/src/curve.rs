//! Film characteristic (tone) curves.

use emulsion_math::lerp;

/// Parameters of a film stock's characteristic curve.
///
/// Applied per channel to linear values in this fixed order:
///
/// 1. shadow lift: `max(0, x + shadows * (1 - x))`
/// 2. gamma: `x^(1/gamma)`
/// 3. contrast: `x^contrast`
/// 4. highlight rolloff: `x / (x + highlights)`, skipped when
///    `highlights` is zero
/// 5. remap into `[black_point, white_point]`
///
/// Monotonic by construction over the shipped parameter ranges.
///
/// # Preconditions
///
/// `gamma > 0` and `highlights > -1`; these are documented bounds on the
/// catalog data, not runtime checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCurve {
    /// Shadow lift amount.
    pub shadows: f32,
    /// Highlight rolloff knee.
    pub highlights: f32,
    /// Encoding gamma.
    pub gamma: f32,
    /// Contrast exponent.
    pub contrast: f32,
    /// Output black level.
    pub black_point: f32,
    /// Output white level.
    pub white_point: f32,
}

impl ToneCurve {
    /// The identity curve, used when no stock is selected.
    pub const NEUTRAL: Self = Self {
        shadows: 0.0,
        highlights: 0.0,
        gamma: 1.0,
        contrast: 1.0,
        black_point: 0.0,
        white_point: 1.0,
    };

    /// Applies the characteristic curve to one linear channel value.
    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        let lifted = (x + self.shadows * (1.0 - x)).max(0.0);
        let g = lifted.powf(1.0 / self.gamma);
        let c = g.powf(self.contrast);
        // A zero knee means no rolloff; dividing would give 0/0 at black.
        let rolled = if self.highlights > 0.0 {
            c / (c + self.highlights)
        } else {
            c
        };
        lerp(self.black_point, self.white_point, rolled)
    }

    /// Applies the curve to an RGB triple.
    #[inline]
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        [self.apply(rgb[0]), self.apply(rgb[1]), self.apply(rgb[2])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unit_knee_halves_white() {
        let curve = ToneCurve {
            highlights: 1.0,
            ..ToneCurve::NEUTRAL
        };
        assert_abs_diff_eq!(curve.apply(1.0), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn neutral_is_identity_including_black() {
        for &x in &[0.0, 0.25, 0.5, 1.0] {
            assert_eq!(ToneCurve::NEUTRAL.apply(x), x);
        }
    }

    #[test]
    fn output_stays_in_remap_range() {
        let curve = ToneCurve {
            shadows: 0.05,
            highlights: 0.3,
            gamma: 2.2,
            contrast: 1.1,
            black_point: 0.02,
            white_point: 0.97,
        };
        for i in 0..=100 {
            let y = curve.apply(i as f32 / 100.0);
            assert!(y >= 0.02 - 1e-6 && y <= 0.97 + 1e-6, "y={}", y);
        }
    }

    #[test]
    fn monotonic_for_typical_parameters() {
        let curve = ToneCurve {
            shadows: 0.08,
            highlights: 0.25,
            gamma: 2.4,
            contrast: 1.15,
            black_point: 0.01,
            white_point: 0.99,
        };
        let mut prev = f32::NEG_INFINITY;
        for i in 0..=1000 {
            let y = curve.apply(i as f32 / 1000.0);
            assert!(y >= prev - 1e-7, "not monotonic at i={}", i);
            prev = y;
        }
    }
}
