//! Film-stock response.
//!
//! The look of the emulsion itself: the stock's color matrix, its
//! characteristic curve, a color-temperature tint, a process-type
//! saturation bias, and the time-varying breath/flicker exposure
//! multiplier. This stage always runs when a stock is selected.

use crate::{check_pair, OpsResult};
use emulsion_core::Frame;
use emulsion_math::{luma, Mat3};
use emulsion_stocks::ToneCurve;
use rayon::prelude::*;
use tracing::trace;

const CHANNELS: usize = 4;

/// Strength of the main color-temperature tint on the red/blue axis.
const TEMPERATURE_SCALE: f32 = 0.1;

/// Configuration of the response stage for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSettings {
    /// Stock-native primaries onto working RGB.
    pub color_matrix: Mat3,
    /// Characteristic curve.
    pub tone_curve: ToneCurve,
    /// Color temperature bias in [-1, 1]; positive warms.
    pub temperature: f32,
    /// Process-type saturation bias; 1 is neutral.
    pub saturation_bias: f32,
    /// Breath/flicker exposure multiplier for this frame; 1 is steady.
    pub exposure: f32,
}

#[inline]
fn tint(rgb: [f32; 3], temperature: f32, scale: f32) -> [f32; 3] {
    [
        rgb[0] * (1.0 + temperature * scale),
        rgb[1],
        rgb[2] * (1.0 - temperature * scale),
    ]
}

#[inline]
fn saturate_mix(rgb: [f32; 3], saturation: f32) -> [f32; 3] {
    let l = luma(rgb);
    [
        l + (rgb[0] - l) * saturation,
        l + (rgb[1] - l) * saturation,
        l + (rgb[2] - l) * saturation,
    ]
}

/// Applies the film-stock response to `src`, writing `dst`.
pub fn film_response(src: &Frame, dst: &mut Frame, settings: &ResponseSettings) -> OpsResult<()> {
    check_pair(src, dst)?;
    trace!(exposure = settings.exposure, "film_response");

    let row_len = src.width() as usize * CHANNELS;
    let src_data = src.data();
    let s = *settings;

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let in_row = &src_data[y * row_len..(y + 1) * row_len];
            for (out_px, in_px) in out_row
                .chunks_exact_mut(CHANNELS)
                .zip(in_row.chunks_exact(CHANNELS))
            {
                let mut rgb = s
                    .color_matrix
                    .transform([in_px[0], in_px[1], in_px[2]]);
                rgb = s.tone_curve.apply_rgb(rgb);
                rgb = tint(rgb, s.temperature, TEMPERATURE_SCALE);
                rgb = saturate_mix(rgb, s.saturation_bias);
                out_px[0] = rgb[0] * s.exposure;
                out_px[1] = rgb[1] * s.exposure;
                out_px[2] = rgb[2] * s.exposure;
                out_px[3] = in_px[3];
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral() -> ResponseSettings {
        ResponseSettings {
            color_matrix: Mat3::IDENTITY,
            tone_curve: ToneCurve::NEUTRAL,
            temperature: 0.0,
            saturation_bias: 1.0,
            exposure: 1.0,
        }
    }

    #[test]
    fn warm_temperature_raises_red_lowers_blue() {
        let src = Frame::filled(2, 2, [0.5, 0.5, 0.5, 1.0]);
        let mut dst = Frame::new(2, 2);
        let s = ResponseSettings {
            temperature: 1.0,
            ..neutral()
        };
        film_response(&src, &mut dst, &s).unwrap();
        let px = dst.pixel(0, 0);
        assert!(px[0] > 0.5 && px[2] < 0.5, "px={:?}", px);
        assert_eq!(px[1], 0.5);
    }

    #[test]
    fn exposure_multiplies_uniformly() {
        let src = Frame::filled(2, 2, [0.25, 0.5, 0.75, 1.0]);
        let mut dst = Frame::new(2, 2);
        let s = ResponseSettings {
            exposure: 1.1,
            ..neutral()
        };
        film_response(&src, &mut dst, &s).unwrap();
        let px = dst.pixel(0, 0);
        assert!((px[0] - 0.275).abs() < 1e-6);
        assert!((px[1] - 0.55).abs() < 1e-6);
        assert!((px[2] - 0.825).abs() < 1e-6);
    }

    #[test]
    fn zero_saturation_bias_flattens_to_luma() {
        let src = Frame::filled(2, 2, [0.8, 0.2, 0.4, 1.0]);
        let mut dst = Frame::new(2, 2);
        let s = ResponseSettings {
            saturation_bias: 0.0,
            ..neutral()
        };
        film_response(&src, &mut dst, &s).unwrap();
        let px = dst.pixel(0, 0);
        assert!((px[0] - px[1]).abs() < 1e-6);
        assert!((px[1] - px[2]).abs() < 1e-6);
    }

    #[test]
    fn stock_curve_reshapes_gray() {
        let profile = emulsion_stocks::profile(emulsion_stocks::FilmStock::KodakVision3_250D);
        let src = Frame::filled(2, 2, [0.18, 0.18, 0.18, 1.0]);
        let mut dst = Frame::new(2, 2);
        let s = ResponseSettings {
            color_matrix: profile.color_matrix,
            tone_curve: profile.tone_curve,
            ..neutral()
        };
        film_response(&src, &mut dst, &s).unwrap();
        let px = dst.pixel(0, 0);
        let expected = profile.tone_curve.apply(0.18);
        assert!((px[1] - expected).abs() < 1e-4, "px={:?}", px);
    }
}
