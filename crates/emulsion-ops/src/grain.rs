//! Procedural film grain.
//!
//! Grain is spatially stationary per frame, clumps like silver halide,
//! and scales with exposure. The field is a pseudo-3D fractal noise
//! (three averaged 2D slices) evaluated at the pixel position divided by
//! the effective grain size, with frame time as the third coordinate so
//! the pattern reseeds naturally over time.
//!
//! Grain perturbs luminance multiplicatively, then the pixel's RGB is
//! rescaled by the luminance ratio to preserve hue. Chroma grain, when
//! enabled, adds three small independently-seeded samples directly to
//! the channels.

use crate::{check_pair, OpsResult};
use emulsion_core::Frame;
use emulsion_math::noise::fbm3;
use emulsion_math::{luma, smoothstep};
use rayon::prelude::*;
use tracing::trace;

const CHANNELS: usize = 4;

/// Per-invocation grain configuration, already scaled by stock profile
/// and film format.
#[derive(Debug, Clone, Copy)]
pub struct GrainSettings {
    /// Overall grain strength; 0 disables the stage upstream.
    pub amount: f32,
    /// Grain size in pixels (noise wavelength).
    pub size: f32,
    /// Shadow grain weight.
    pub shadow: f32,
    /// Highlight grain weight.
    pub highlight: f32,
    /// Chroma grain strength; 0 for monochrome stocks.
    pub chroma: f32,
    /// Stock grain density.
    pub density: f32,
    /// Stock clump sharpness; higher values harden the distribution.
    pub sharpness: f32,
    /// Frame time in seconds.
    pub time: f32,
    /// Noise seed.
    pub seed: u32,
}

/// Applies grain to `src`, writing `dst`.
///
/// The caller skips this stage entirely when `amount == 0`; this
/// function assumes a live amount and always evaluates the field.
pub fn apply_grain(src: &Frame, dst: &mut Frame, settings: &GrainSettings) -> OpsResult<()> {
    check_pair(src, dst)?;
    trace!(
        amount = settings.amount,
        size = settings.size,
        "apply_grain"
    );

    let inv_size = 1.0 / settings.size.max(0.1);
    let t = settings.time * 0.1;
    let sharp_exp = 1.0 / settings.sharpness.max(0.1);
    let row_len = src.width() as usize * CHANNELS;
    let src_data = src.data();
    let s = *settings;

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let in_row = &src_data[y * row_len..(y + 1) * row_len];
            for x in 0..out_row.len() / CHANNELS {
                let o = x * CHANNELS;
                let rgb = [in_row[o], in_row[o + 1], in_row[o + 2]];

                let gx = x as f32 * inv_size;
                let gy = y as f32 * inv_size;
                let raw = fbm3(gx, gy, t, s.seed);
                // Sharpen the distribution toward discrete clumps.
                let n = raw.signum() * raw.abs().powf(sharp_exp);

                let l = luma(rgb);
                let shadow_w = smoothstep(0.0, 0.3, 1.0 - l) * s.shadow;
                let highlight_w = smoothstep(0.7, 1.0, l) * s.highlight;
                let intensity = (shadow_w + highlight_w + 0.5) * s.amount * s.density;

                let mut out = rgb;
                if l > 1e-6 {
                    let grained = (l * (1.0 + n * intensity)).max(0.0);
                    let ratio = grained / l;
                    out = [rgb[0] * ratio, rgb[1] * ratio, rgb[2] * ratio];
                }

                if s.chroma > 0.0 {
                    let scale = s.chroma * intensity * 0.05;
                    for (c, slot) in out.iter_mut().enumerate() {
                        let nc = fbm3(gx, gy, t, s.seed.wrapping_add(c as u32 + 1));
                        *slot += nc * scale;
                    }
                }

                out_row[o] = out[0].max(0.0);
                out_row[o + 1] = out[1].max(0.0);
                out_row[o + 2] = out[2].max(0.0);
                out_row[o + 3] = in_row[o + 3];
            }
        });

    Ok(())
}
