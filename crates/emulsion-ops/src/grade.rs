//! Final color grading.
//!
//! Always the last processing stage before output conversion: a contrast
//! power curve, a saturation mix, a fine color-temperature trim, and the
//! final clamp to [0, 1]. Components at their neutral value are skipped,
//! not applied as arithmetic no-ops, so a fully neutral grade only
//! clamps and in-range input passes through bit-exactly.

use crate::{check_pair, OpsResult};
use emulsion_core::Frame;
use emulsion_math::luma;
use rayon::prelude::*;
use tracing::trace;

const CHANNELS: usize = 4;

/// The grade's temperature trim is an order of magnitude finer than the
/// response stage's tint.
const FINE_TEMPERATURE_SCALE: f32 = 0.02;

/// Configuration of the grading stage.
#[derive(Debug, Clone, Copy)]
pub struct GradeSettings {
    /// Contrast exponent; 1 is neutral, values above 1 steepen.
    pub contrast: f32,
    /// Saturation; 1 is neutral, 0 is grayscale.
    pub saturation: f32,
    /// Color temperature trim in [-1, 1].
    pub temperature: f32,
}

impl Default for GradeSettings {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            saturation: 1.0,
            temperature: 0.0,
        }
    }
}

/// Applies the final grade to `src`, writing `dst`.
pub fn color_grade(src: &Frame, dst: &mut Frame, settings: &GradeSettings) -> OpsResult<()> {
    check_pair(src, dst)?;
    trace!(contrast = settings.contrast, "color_grade");

    let row_len = src.width() as usize * CHANNELS;
    let src_data = src.data();
    let s = *settings;

    // Neutral components must not run: the saturation mix rounds even at
    // saturation 1, which would break the disabled-stage pass-through.
    let contrast_live = s.contrast != 1.0;
    let saturation_live = s.saturation != 1.0;
    let temperature_live = s.temperature != 0.0;

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let in_row = &src_data[y * row_len..(y + 1) * row_len];
            for (out_px, in_px) in out_row
                .chunks_exact_mut(CHANNELS)
                .zip(in_row.chunks_exact(CHANNELS))
            {
                let mut rgb = [in_px[0], in_px[1], in_px[2]];

                if contrast_live {
                    rgb = [
                        rgb[0].max(0.0).powf(s.contrast),
                        rgb[1].max(0.0).powf(s.contrast),
                        rgb[2].max(0.0).powf(s.contrast),
                    ];
                }

                if saturation_live {
                    let l = luma(rgb);
                    rgb = [
                        l + (rgb[0] - l) * s.saturation,
                        l + (rgb[1] - l) * s.saturation,
                        l + (rgb[2] - l) * s.saturation,
                    ];
                }

                if temperature_live {
                    rgb[0] *= 1.0 + s.temperature * FINE_TEMPERATURE_SCALE;
                    rgb[2] *= 1.0 - s.temperature * FINE_TEMPERATURE_SCALE;
                }

                out_px[0] = rgb[0].clamp(0.0, 1.0);
                out_px[1] = rgb[1].clamp(0.0, 1.0);
                out_px[2] = rgb[2].clamp(0.0, 1.0);
                out_px[3] = in_px[3];
            }
        });

    Ok(())
}
