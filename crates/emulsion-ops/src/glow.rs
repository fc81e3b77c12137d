//! Halation and bloom composites.
//!
//! Both stages additively composite a blurred bright-pass over the base
//! image. Halation models light scattering back through the film base:
//! the scatter is tinted red-orange and is stronger over dark
//! backgrounds. Bloom is plain untinted lens glow.

use crate::{check_pair, OpsResult};
use emulsion_core::Frame;
use emulsion_math::luma;
use rayon::prelude::*;
use tracing::trace;

const CHANNELS: usize = 4;

/// Halation tint: scattered light re-exposes the red-sensitive layer
/// first, so halos skew red-orange.
const HALATION_TINT: [f32; 3] = [1.0, 0.7, 0.3];

/// Composites halation onto `base` from a blurred bright-pass.
///
/// Per pixel: `out = base + tint(blur) * amount * (1 + (1 - luma) * background_gain)`.
/// The background term strengthens halos over dark surroundings.
pub fn halation_composite(
    base: &Frame,
    blurred: &Frame,
    dst: &mut Frame,
    amount: f32,
    background_gain: f32,
) -> OpsResult<()> {
    check_pair(base, blurred)?;
    check_pair(base, dst)?;
    trace!(amount, background_gain, "halation_composite");

    let row_len = base.width() as usize * CHANNELS;
    let base_data = base.data();
    let blur_data = blurred.data();

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let base_row = &base_data[y * row_len..(y + 1) * row_len];
            let blur_row = &blur_data[y * row_len..(y + 1) * row_len];
            for x in 0..out_row.len() / CHANNELS {
                let o = x * CHANNELS;
                let b = [base_row[o], base_row[o + 1], base_row[o + 2]];
                let glow_r = blur_row[o];
                let boost = 1.0 + (1.0 - luma(b)).max(0.0) * background_gain;
                let gain = amount * boost;
                out_row[o] = b[0] + glow_r * HALATION_TINT[0] * gain;
                out_row[o + 1] = b[1] + glow_r * HALATION_TINT[1] * gain;
                out_row[o + 2] = b[2] + glow_r * HALATION_TINT[2] * gain;
                out_row[o + 3] = base_row[o + 3];
            }
        });

    Ok(())
}

/// Composites bloom onto `base` from a blurred bright-pass.
///
/// Plain additive glow: `out = base + blur * amount`, no tint, no
/// background gain.
pub fn bloom_composite(
    base: &Frame,
    blurred: &Frame,
    dst: &mut Frame,
    amount: f32,
) -> OpsResult<()> {
    check_pair(base, blurred)?;
    check_pair(base, dst)?;
    trace!(amount, "bloom_composite");

    let row_len = base.width() as usize * CHANNELS;
    let base_data = base.data();
    let blur_data = blurred.data();

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let base_row = &base_data[y * row_len..(y + 1) * row_len];
            let blur_row = &blur_data[y * row_len..(y + 1) * row_len];
            for x in 0..out_row.len() / CHANNELS {
                let o = x * CHANNELS;
                out_row[o] = base_row[o] + blur_row[o] * amount;
                out_row[o + 1] = base_row[o + 1] + blur_row[o + 1] * amount;
                out_row[o + 2] = base_row[o + 2] + blur_row[o + 2] * amount;
                out_row[o + 3] = base_row[o + 3];
            }
        });

    Ok(())
}
