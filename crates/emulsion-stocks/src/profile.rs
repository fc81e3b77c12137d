//! Per-stock profile records.

use crate::{SpectralPeak, ToneCurve};
use emulsion_math::Mat3;

/// Grain structure of one stock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrainProfile {
    /// Base grain size before format scaling.
    pub base_size: f32,
    /// Grain density (how much of the frame carries visible grain).
    pub density: f32,
    /// Sharpness of the grain distribution (clump definition).
    pub sharpness: f32,
    /// Extra grain weight in shadows.
    pub shadow_multiplier: f32,
    /// Extra grain weight in highlights.
    pub highlight_multiplier: f32,
    /// Chroma grain strength; 0 for monochrome stocks.
    pub chroma_intensity: f32,
}

/// Immutable profile of one film stock.
///
/// Constructed once at catalog initialization and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmStockProfile {
    /// Display name, e.g. "Kodak Vision3 250D".
    pub name: &'static str,
    /// Nominal ISO/ASA speed.
    pub iso_speed: f32,
    /// True for black-and-white stocks.
    pub monochrome: bool,
    /// Spectral sensitivity of the red-sensitive layer.
    pub red_response: SpectralPeak,
    /// Spectral sensitivity of the green-sensitive layer.
    pub green_response: SpectralPeak,
    /// Spectral sensitivity of the blue-sensitive layer.
    pub blue_response: SpectralPeak,
    /// Maps stock-native primaries onto working RGB.
    pub color_matrix: Mat3,
    /// Characteristic curve.
    pub tone_curve: ToneCurve,
    /// Grain structure.
    pub grain: GrainProfile,
}

/// Luminance-only matrix used by monochrome stocks: every output channel
/// is the same BT.601 luma mix of the input.
pub(crate) const MONOCHROME_MATRIX: Mat3 = Mat3::from_rows([
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monochrome_matrix_flattens_color() {
        let rgb = MONOCHROME_MATRIX.transform([0.8, 0.2, 0.4]);
        assert!((rgb[0] - rgb[1]).abs() < 1e-6);
        assert!((rgb[1] - rgb[2]).abs() < 1e-6);
    }
}
