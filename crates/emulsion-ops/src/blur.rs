//! Separable Gaussian blur.
//!
//! The halation and bloom stages each blur the shared bright-pass buffer
//! with their own radius. The blur is separable: a horizontal pass into a
//! scratch frame, then a vertical pass into the destination, so cost is
//! linear in kernel width instead of quadratic.

use crate::{check_pair, OpsResult};
use emulsion_core::Frame;
use rayon::prelude::*;
use tracing::trace;

const CHANNELS: usize = 4;

/// 1D Gaussian weights for a pixel radius.
///
/// Sigma is half the radius; the kernel extends to 2.5 sigma, which
/// keeps the truncated tail below 1% before renormalization.
fn gaussian_weights(radius: f32) -> Vec<f32> {
    let sigma = (radius * 0.5).max(0.1);
    let half = (sigma * 2.5).ceil() as i32;
    let inv_2s2 = 1.0 / (2.0 * sigma * sigma);

    let mut weights = Vec::with_capacity((2 * half + 1) as usize);
    let mut sum = 0.0f32;
    for i in -half..=half {
        let w = (-(i * i) as f32 * inv_2s2).exp();
        weights.push(w);
        sum += w;
    }
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Gaussian-blurs `src` into `dst`, using `scratch` for the horizontal
/// pass. All three frames must share dimensions.
///
/// A radius at or below zero degenerates to a copy.
pub fn gaussian_blur(
    src: &Frame,
    dst: &mut Frame,
    scratch: &mut Frame,
    radius: f32,
) -> OpsResult<()> {
    check_pair(src, dst)?;
    check_pair(src, scratch)?;
    trace!(radius, width = src.width(), "gaussian_blur");

    if radius <= 0.0 {
        dst.copy_from(src)
            .map_err(|_| crate::OpsError::SizeMismatch(dst.dimensions(), src.dimensions()))?;
        return Ok(());
    }

    let weights = gaussian_weights(radius);
    let half = (weights.len() / 2) as i64;
    let width = src.width() as usize;
    let height = src.height() as usize;
    let row_len = width * CHANNELS;

    // Horizontal pass: src -> scratch
    {
        let src_data = src.data();
        scratch
            .data_mut()
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, out_row)| {
                let in_row = &src_data[y * row_len..(y + 1) * row_len];
                for x in 0..width {
                    let mut acc = [0.0f32; CHANNELS];
                    for (k, &w) in weights.iter().enumerate() {
                        let sx = (x as i64 + k as i64 - half).clamp(0, width as i64 - 1) as usize;
                        let o = sx * CHANNELS;
                        for c in 0..CHANNELS {
                            acc[c] += in_row[o + c] * w;
                        }
                    }
                    out_row[x * CHANNELS..x * CHANNELS + CHANNELS].copy_from_slice(&acc);
                }
            });
    }

    // Vertical pass: scratch -> dst
    {
        let mid_data = scratch.data();
        dst.data_mut()
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, out_row)| {
                for x in 0..width {
                    let mut acc = [0.0f32; CHANNELS];
                    for (k, &w) in weights.iter().enumerate() {
                        let sy = (y as i64 + k as i64 - half).clamp(0, height as i64 - 1) as usize;
                        let o = (sy * width + x) * CHANNELS;
                        for c in 0..CHANNELS {
                            acc[c] += mid_data[o + c] * w;
                        }
                    }
                    out_row[x * CHANNELS..x * CHANNELS + CHANNELS].copy_from_slice(&acc);
                }
            });
    }

    Ok(())
}
