//! Stage sequencing and buffer discipline.
//!
//! One render call walks an ordered, conditional chain of stages: input
//! linearization, gate weave, film response, grain, the shared
//! bright-pass feeding halation and bloom, grading, output encoding.
//! Stages whose governing amount is zero are skipped outright so a
//! disabled stage is a bit-exact pass-through, not an approximate no-op.
//!
//! Intermediates live in a fixed [`BufferPool`]; each executed stage
//! reads the current slot and writes the next, then the two indices
//! swap. Skipped stages do not swap. The final stage always targets the
//! caller's output buffer.

use emulsion_core::{Frame, RenderContext};
use emulsion_math::noise::{frame_hash, value_noise};
use emulsion_math::Mat3;
use emulsion_ops::blur::gaussian_blur;
use emulsion_ops::bright::bright_pass;
use emulsion_ops::glow::{bloom_composite, halation_composite};
use emulsion_ops::grade::{color_grade, GradeSettings};
use emulsion_ops::grain::{apply_grain, GrainSettings};
use emulsion_ops::response::{film_response, ResponseSettings};
use emulsion_ops::weave::apply_weave;
use emulsion_stocks::ToneCurve;
use tracing::debug;

use crate::pool::{BufferPool, BLUR, BRIGHT, PING, PONG};
use crate::{colorspace, EffectParameters, RenderError, RenderResult};

/// Largest gate weave displacement at full strength, in pixels.
const WEAVE_MAX_OFFSET: f32 = 3.0;
/// Vertical weave is damped relative to horizontal; the gate constrains
/// the film more tightly along the pulldown axis.
const VERTICAL_WEAVE_SCALE: f32 = 0.7;
const WEAVE_SALT_X: u64 = 0x77ca_f21a;
const WEAVE_SALT_Y: u64 = 0x51ab_3e99;

/// Film breath drift rate in noise cells per second.
const BREATH_RATE: f32 = 0.3;
/// Peak exposure swing of film breath at full strength.
const BREATH_SCALE: f32 = 0.05;
/// Peak exposure swing of projector flicker at full strength.
const FLICKER_SCALE: f32 = 0.03;
const BREATH_SEED: u32 = 0x0b5e_a71;

const GRAIN_SEED: u32 = 0x6e4a_9c3d;

/// Reusable renderer: owns the intermediate buffer pool for one
/// in-flight render at a time.
///
/// Concurrent renders must use independent `Renderer` values; the stock
/// catalog they share is read-only.
pub struct Renderer {
    pool: BufferPool,
    scratch: Frame,
}

impl Renderer {
    /// Creates a renderer with buffers preallocated for the given size.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::Setup(format!(
                "frame dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            pool: BufferPool::new(width, height),
            scratch: Frame::new(width, height),
        })
    }

    /// Runs the full pipeline for one frame.
    ///
    /// `input` and `output` must share equal, positive dimensions. The
    /// call is synchronous: it returns once `output` holds the final
    /// image or an error if the frame was aborted.
    pub fn render(
        &mut self,
        input: &Frame,
        output: &mut Frame,
        params: &EffectParameters,
        ctx: &RenderContext,
    ) -> RenderResult<()> {
        if input.is_empty() {
            return Err(RenderError::InvalidRequest("empty input frame".into()));
        }
        if input.dimensions() != output.dimensions() {
            return Err(RenderError::InvalidRequest(format!(
                "input {:?} and output {:?} dimensions differ",
                input.dimensions(),
                output.dimensions()
            )));
        }
        debug!(
            width = input.width(),
            height = input.height(),
            frame = ctx.frame_index,
            "render"
        );

        let (width, height) = input.dimensions();
        self.pool.ensure_size(width, height);
        if self.scratch.dimensions() != (width, height) {
            self.scratch = Frame::new(width, height);
        }

        let mut cur = PING;
        let mut next = PONG;

        // Input linearization always lands in the pool, copying when the
        // input is already working-space linear.
        colorspace::linearize(input, self.pool.frame_mut(cur), params.input_space)?;

        // Gate weave.
        if params.gate_weave > 0.0 {
            let amp = params.gate_weave * params.effective_artifact_intensity() * WEAVE_MAX_OFFSET;
            let dx = frame_hash(ctx.frame_index, WEAVE_SALT_X) * amp;
            let dy = frame_hash(ctx.frame_index, WEAVE_SALT_Y) * amp * VERTICAL_WEAVE_SCALE;
            let (src, dst) = self.pool.pair(cur, next);
            apply_weave(src, dst, dx, dy)?;
            std::mem::swap(&mut cur, &mut next);
        }

        // Film response.
        let exposure = self.frame_exposure(params, ctx);
        let response_live = params.stock.is_some()
            || exposure != 1.0
            || params.color_temperature != 0.0
            || params.process.saturation_bias() != 1.0;
        if response_live {
            let (matrix, curve) = match params.stock_profile() {
                Some(p) => (p.color_matrix, p.tone_curve),
                None => (Mat3::IDENTITY, ToneCurve::NEUTRAL),
            };
            let settings = ResponseSettings {
                color_matrix: matrix,
                tone_curve: curve,
                temperature: params.color_temperature,
                saturation_bias: params.process.saturation_bias(),
                exposure,
            };
            let (src, dst) = self.pool.pair(cur, next);
            film_response(src, dst, &settings)?;
            std::mem::swap(&mut cur, &mut next);
        }

        // Grain.
        if params.grain_amount > 0.0 {
            let gp = params.grain_profile();
            let settings = GrainSettings {
                amount: params.effective_grain_amount(),
                size: params.effective_grain_size() * gp.base_size,
                shadow: params.grain_shadow * gp.shadow_multiplier,
                highlight: params.grain_highlight * gp.highlight_multiplier,
                chroma: params.grain_chroma * gp.chroma_intensity,
                density: gp.density,
                sharpness: gp.sharpness,
                time: ctx.time as f32,
                seed: GRAIN_SEED,
            };
            let (src, dst) = self.pool.pair(cur, next);
            apply_grain(src, dst, &settings)?;
            std::mem::swap(&mut cur, &mut next);
        }

        // Halation and bloom share one bright-pass extraction at the
        // lower of the two thresholds.
        let halation_live = params.halation_amount > 0.0;
        let bloom_live = params.bloom_amount > 0.0;
        if halation_live || bloom_live {
            let threshold = match (halation_live, bloom_live) {
                (true, true) => params.halation_threshold.min(params.bloom_threshold),
                (true, false) => params.halation_threshold,
                _ => params.bloom_threshold,
            };
            let (src, dst) = self.pool.pair(cur, BRIGHT);
            bright_pass(src, dst, threshold)?;
        }

        if halation_live {
            let (src, dst) = self.pool.pair(BRIGHT, BLUR);
            gaussian_blur(src, dst, &mut self.scratch, params.halation_radius)?;
            self.pool.composite(cur, BLUR, next, |base, glow, dst| {
                halation_composite(
                    base,
                    glow,
                    dst,
                    params.halation_amount,
                    params.halation_background_gain,
                )
            })?;
            std::mem::swap(&mut cur, &mut next);
        }

        if bloom_live {
            let (src, dst) = self.pool.pair(BRIGHT, BLUR);
            gaussian_blur(src, dst, &mut self.scratch, params.bloom_radius)?;
            self.pool.composite(cur, BLUR, next, |base, glow, dst| {
                bloom_composite(base, glow, dst, params.bloom_amount)
            })?;
            std::mem::swap(&mut cur, &mut next);
        }

        // Grading always runs; it owns the final clamp to [0, 1].
        {
            let settings = GradeSettings {
                contrast: params.contrast,
                saturation: params.saturation,
                temperature: params.color_temperature,
            };
            let (src, dst) = self.pool.pair(cur, next);
            color_grade(src, dst, &settings)?;
            std::mem::swap(&mut cur, &mut next);
        }

        // Output encoding always targets the caller's buffer, copying
        // when the output space is working-space linear.
        colorspace::encode(self.pool.frame(cur), output, params.output_space)?;
        Ok(())
    }

    /// Combined breath/flicker/process exposure multiplier for a frame.
    fn frame_exposure(&self, params: &EffectParameters, ctx: &RenderContext) -> f32 {
        let art = params.effective_artifact_intensity();
        let mut exposure = params.process.exposure_bias();
        if params.film_breath > 0.0 {
            let drift = value_noise(ctx.time as f32 * BREATH_RATE, 0.0, BREATH_SEED) * 2.0 - 1.0;
            exposure *= 1.0 + params.film_breath * art * BREATH_SCALE * drift;
        }
        if params.projector_flicker > 0.0 {
            let phase = std::f32::consts::TAU * params.flicker_frequency * ctx.time as f32;
            exposure *= 1.0 + params.projector_flicker * art * FLICKER_SCALE * phase.sin();
        }
        exposure
    }
}

/// One-shot render with a throwaway buffer pool.
///
/// Hosts rendering every frame should hold a [`Renderer`] instead to
/// reuse its intermediates.
pub fn render(
    input: &Frame,
    output: &mut Frame,
    params: &EffectParameters,
    ctx: &RenderContext,
) -> RenderResult<()> {
    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidRequest("empty input frame".into()));
    }
    Renderer::new(width, height)?.render(input, output, params, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_renderer_is_a_setup_failure() {
        assert!(matches!(Renderer::new(0, 10), Err(RenderError::Setup(_))));
    }

    #[test]
    fn mismatched_buffers_are_rejected() {
        let input = Frame::new(4, 4);
        let mut output = Frame::new(8, 8);
        let err = render(
            &input,
            &mut output,
            &EffectParameters::neutral(),
            &RenderContext::still(),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::InvalidRequest(_)));
    }

    #[test]
    fn breath_and_flicker_modulate_exposure() {
        let mut renderer = Renderer::new(2, 2).unwrap();
        let mut params = EffectParameters::neutral();
        params.projector_flicker = 1.0;
        params.flicker_frequency = 24.0;

        // Quarter period of a 24 Hz flicker peaks the sine.
        let ctx = RenderContext::new(1.0 / 96.0, 1);
        let exposure = renderer.frame_exposure(&params, &ctx);
        assert!(exposure > 1.0, "exposure={exposure}");

        let steady = renderer.frame_exposure(&EffectParameters::neutral(), &ctx);
        assert_eq!(steady, 1.0);
    }

    #[test]
    fn renderer_resizes_between_calls() {
        let mut renderer = Renderer::new(4, 4).unwrap();
        let params = EffectParameters::neutral();
        let ctx = RenderContext::still();

        let small = Frame::filled(4, 4, [0.3, 0.3, 0.3, 1.0]);
        let mut out_small = Frame::new(4, 4);
        renderer.render(&small, &mut out_small, &params, &ctx).unwrap();

        let large = Frame::filled(16, 8, [0.6, 0.6, 0.6, 1.0]);
        let mut out_large = Frame::new(16, 8);
        renderer.render(&large, &mut out_large, &params, &ctx).unwrap();
        assert_eq!(out_large, large);
    }
}
