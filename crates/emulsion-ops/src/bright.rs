//! Bright-pass extraction.
//!
//! Pulls out the portion of the image above a luminance threshold as
//! input to halation and bloom. When both effects are active the
//! orchestrator extracts once at the lower of the two thresholds and
//! reuses the buffer for both blurs.

use crate::{check_pair, OpsResult};
use emulsion_core::Frame;
use emulsion_math::luma;
use rayon::prelude::*;
use tracing::trace;

const CHANNELS: usize = 4;

/// Extracts pixels brighter than `threshold` into `dst`.
///
/// A pixel with luminance `l > threshold` is scaled by
/// `(l - threshold) / (1 - threshold)`, so brightness ramps from zero at
/// the threshold to full strength at luminance 1; everything below the
/// threshold goes to black. Alpha is preserved.
pub fn bright_pass(src: &Frame, dst: &mut Frame, threshold: f32) -> OpsResult<()> {
    check_pair(src, dst)?;
    trace!(threshold, "bright_pass");

    let threshold = threshold.clamp(0.0, 0.999);
    let scale = 1.0 / (1.0 - threshold);
    let row_len = src.width() as usize * CHANNELS;
    let src_data = src.data();

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let in_row = &src_data[y * row_len..(y + 1) * row_len];
            for (out_px, in_px) in out_row
                .chunks_exact_mut(CHANNELS)
                .zip(in_row.chunks_exact(CHANNELS))
            {
                let l = luma([in_px[0], in_px[1], in_px[2]]);
                if l > threshold {
                    let excess = (l - threshold) * scale;
                    out_px[0] = in_px[0] * excess;
                    out_px[1] = in_px[1] * excess;
                    out_px[2] = in_px[2] * excess;
                } else {
                    out_px[0] = 0.0;
                    out_px[1] = 0.0;
                    out_px[2] = 0.0;
                }
                out_px[3] = in_px[3];
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_is_black() {
        let src = Frame::filled(4, 4, [0.5, 0.5, 0.5, 1.0]);
        let mut dst = Frame::new(4, 4);
        bright_pass(&src, &mut dst, 0.8).unwrap();
        assert_eq!(dst.pixel(0, 0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn excess_scales_linearly() {
        // luma 0.9 against threshold 0.8: excess = (0.9-0.8)/(1-0.8) = 0.5
        let src = Frame::filled(2, 2, [0.9, 0.9, 0.9, 1.0]);
        let mut dst = Frame::new(2, 2);
        bright_pass(&src, &mut dst, 0.8).unwrap();
        let px = dst.pixel(0, 0);
        for c in 0..3 {
            assert!((px[c] - 0.45).abs() < 1e-5, "px={:?}", px);
        }
    }

    #[test]
    fn full_white_passes_unscaled() {
        let src = Frame::filled(2, 2, [1.0, 1.0, 1.0, 1.0]);
        let mut dst = Frame::new(2, 2);
        bright_pass(&src, &mut dst, 0.5).unwrap();
        let px = dst.pixel(0, 0);
        for c in 0..3 {
            assert!((px[c] - 1.0).abs() < 1e-4);
        }
    }
}
