//! Gate weave warp.
//!
//! Mechanical film transport jitters the frame position slightly between
//! frames. The orchestrator derives a per-frame (dx, dy) offset from a
//! seeded hash of the frame index; this op shifts the whole image by
//! that offset, bilinearly sampling with source coordinates clamped to
//! the frame bounds so border pixels never read out of range.

use crate::{check_pair, OpsResult};
use emulsion_core::Frame;
use rayon::prelude::*;
use tracing::trace;

const CHANNELS: usize = 4;

/// Bilinear sample with edge clamping.
fn sample_clamped(data: &[f32], width: usize, height: usize, x: f32, y: f32) -> [f32; 4] {
    let x = x.clamp(0.0, (width - 1) as f32);
    let y = y.clamp(0.0, (height - 1) as f32);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let mut out = [0.0f32; CHANNELS];
    for (c, slot) in out.iter_mut().enumerate() {
        let p00 = data[(y0 * width + x0) * CHANNELS + c];
        let p10 = data[(y0 * width + x1) * CHANNELS + c];
        let p01 = data[(y1 * width + x0) * CHANNELS + c];
        let p11 = data[(y1 * width + x1) * CHANNELS + c];
        let top = p00 + (p10 - p00) * fx;
        let bot = p01 + (p11 - p01) * fx;
        *slot = top + (bot - top) * fy;
    }
    out
}

/// Shifts `src` by (`offset_x`, `offset_y`) pixels into `dst`.
pub fn apply_weave(src: &Frame, dst: &mut Frame, offset_x: f32, offset_y: f32) -> OpsResult<()> {
    check_pair(src, dst)?;
    trace!(offset_x, offset_y, "apply_weave");

    let width = src.width() as usize;
    let height = src.height() as usize;
    let row_len = width * CHANNELS;
    let src_data = src.data();

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let sy = y as f32 - offset_y;
            for x in 0..width {
                let sx = x as f32 - offset_x;
                let px = sample_clamped(src_data, width, height, sx, sy);
                out_row[x * CHANNELS..x * CHANNELS + CHANNELS].copy_from_slice(&px);
            }
        });

    Ok(())
}
