//! LUT baking.
//!
//! Runs an identity 3D color grid through the full pipeline as if it
//! were one image frame and captures the result as a [`Lut3D`]. The
//! bake is deterministic at time zero; the spatial and temporal stages
//! (grain, gate weave, breath, flicker, halation, bloom) cannot be
//! expressed by a purely tonal lookup and are forced off for the bake.
//! Halation and bloom in particular would blur across neighboring grid
//! cells and bake the packing layout into the table.
//!
//! The grid frame packs the red and blue axes along image rows (x =
//! blue * size + red) and the green axis along columns, so one render
//! call covers every grid cell.

use emulsion_core::{Frame, RenderContext};
use emulsion_lut::{cube, Lut3D};
use std::path::Path;
use tracing::info;

use crate::{EffectParameters, RenderError, RenderResult, Renderer};

/// Grid resolution used by the export trigger.
pub const DEFAULT_LUT_SIZE: usize = 33;

/// Packs the identity grid into a single frame.
fn identity_grid_frame(size: usize) -> Frame {
    let scale = 1.0 / (size - 1) as f32;
    let mut frame = Frame::new((size * size) as u32, size as u32);
    for b in 0..size {
        for g in 0..size {
            for r in 0..size {
                frame.set_pixel(
                    (b * size + r) as u32,
                    g as u32,
                    [r as f32 * scale, g as f32 * scale, b as f32 * scale, 1.0],
                );
            }
        }
    }
    frame
}

/// Strips the spatial and temporal stages out of a parameter snapshot.
fn tonal_only(params: &EffectParameters) -> EffectParameters {
    EffectParameters {
        grain_amount: 0.0,
        gate_weave: 0.0,
        film_breath: 0.0,
        projector_flicker: 0.0,
        halation_amount: 0.0,
        bloom_amount: 0.0,
        ..*params
    }
}

/// Bakes the tonal part of the pipeline into a LUT of `size` samples
/// per axis.
pub fn bake(params: &EffectParameters, size: usize) -> RenderResult<Lut3D> {
    if size < 2 {
        return Err(RenderError::InvalidRequest(format!(
            "LUT size must be at least 2, got {size}"
        )));
    }
    info!(size, "baking LUT");

    let input = identity_grid_frame(size);
    let mut output = Frame::new(input.width(), input.height());
    let params = tonal_only(params);
    let ctx = RenderContext::still();
    Renderer::new(input.width(), input.height())?.render(&input, &mut output, &params, &ctx)?;

    let mut data = Vec::with_capacity(size * size * size);
    for b in 0..size {
        for g in 0..size {
            for r in 0..size {
                let px = output.pixel((b * size + r) as u32, g as u32);
                data.push([px[0], px[1], px[2]]);
            }
        }
    }
    Ok(Lut3D::from_data(data, size)?)
}

/// Bakes and writes a `.cube` file in one step.
pub fn bake_to_file<P: AsRef<Path>>(
    path: P,
    params: &EffectParameters,
    size: usize,
    title: &str,
) -> RenderResult<()> {
    let lut = bake(params, size)?;
    cube::write_3d(path, &lut, title)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_parameters_bake_an_identity_lut() {
        let lut = bake(&EffectParameters::neutral(), 9).unwrap();
        let identity = Lut3D::identity(9);
        for (got, want) in lut.data.iter().zip(&identity.data) {
            for c in 0..3 {
                assert!(
                    (got[c] - want[c]).abs() < 1e-4,
                    "got={:?} want={:?}",
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn contrast_bends_the_lut() {
        let params = EffectParameters {
            contrast: 2.0,
            ..EffectParameters::neutral()
        };
        let lut = bake(&params, 9).unwrap();
        let mid = lut.apply([0.5, 0.5, 0.5]);
        assert!((mid[0] - 0.25).abs() < 1e-3, "mid={:?}", mid);
    }

    #[test]
    fn bake_ignores_halation_and_bloom() {
        // Glow would bleed across adjacent grid cells of the packed
        // frame; the bake must strip it like the other spatial stages.
        let glow = EffectParameters {
            halation_amount: 1.0,
            halation_threshold: 0.2,
            bloom_amount: 1.0,
            bloom_threshold: 0.2,
            ..EffectParameters::neutral()
        };
        let baked = bake(&glow, 5).unwrap();
        let base = bake(&EffectParameters::neutral(), 5).unwrap();
        assert_eq!(baked.data, base.data);
    }

    #[test]
    fn undersized_grid_is_rejected() {
        assert!(matches!(
            bake(&EffectParameters::neutral(), 1),
            Err(RenderError::InvalidRequest(_))
        ));
    }

    #[test]
    fn bake_to_file_round_trips_through_cube() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("look.cube");
        bake_to_file(&path, &EffectParameters::neutral(), 5, "neutral").unwrap();

        let lut = cube::read_3d(&path).unwrap();
        assert_eq!(lut.size, 5);
        let out = lut.apply([0.5, 0.25, 0.75]);
        assert!((out[0] - 0.5).abs() < 1e-4);
    }
}
