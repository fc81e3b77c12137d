//! End-to-end pipeline behavior.

use approx::assert_abs_diff_eq;
use emulsion_core::{Frame, RenderContext};
use emulsion_pipeline::{
    render, EffectParameters, InputColorSpace, OutputColorSpace, ProcessType, Renderer,
};
use emulsion_stocks::FilmStock;

fn gradient_frame(width: u32, height: u32) -> Frame {
    let mut frame = Frame::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let t = (x + y * width) as f32 / (width * height) as f32;
            frame.set_pixel(x, y, [t, (t * 0.7).min(1.0), 1.0 - t, 1.0]);
        }
    }
    frame
}

#[test]
fn neutral_parameters_are_a_bit_exact_pass_through() {
    let input = gradient_frame(24, 16);
    let mut output = Frame::new(24, 16);
    render(
        &input,
        &mut output,
        &EffectParameters::neutral(),
        &RenderContext::still(),
    )
    .unwrap();
    assert_eq!(output, input);
}

#[test]
fn zero_amounts_disable_grain_halation_and_bloom() {
    // Non-zero thresholds and radii with zero amounts must not touch
    // the image; disabled stages skip, they do not run at strength 0.
    let input = gradient_frame(16, 16);
    let mut output = Frame::new(16, 16);
    let params = EffectParameters {
        grain_amount: 0.0,
        grain_size: 2.0,
        halation_amount: 0.0,
        halation_threshold: 0.1,
        halation_radius: 20.0,
        bloom_amount: 0.0,
        bloom_threshold: 0.1,
        bloom_radius: 20.0,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::still()).unwrap();
    assert_eq!(output, input);
}

#[test]
fn contrast_two_on_flat_gray_squares_it() {
    let input = Frame::filled(2, 2, [0.5, 0.5, 0.5, 1.0]);
    let mut output = Frame::new(2, 2);
    let params = EffectParameters {
        contrast: 2.0,
        saturation: 1.0,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::still()).unwrap();
    for (_, _, px) in output.pixels() {
        for c in 0..3 {
            assert_abs_diff_eq!(px[c], 0.25, epsilon = 1e-6);
        }
    }
}

#[test]
fn zero_weave_leaves_the_image_untouched() {
    let input = gradient_frame(16, 16);
    let mut output = Frame::new(16, 16);
    let params = EffectParameters {
        gate_weave: 0.0,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::new(0.5, 42)).unwrap();
    assert_eq!(output, input);
}

#[test]
fn weave_stays_finite_and_bounded_at_borders() {
    let input = Frame::filled(8, 8, [0.6, 0.6, 0.6, 1.0]);
    let mut output = Frame::new(8, 8);
    let params = EffectParameters {
        gate_weave: 1.0,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::new(1.0, 7)).unwrap();
    // A flat image weaved by any offset stays flat: border sampling
    // clamps instead of reading outside the frame.
    for (_, _, px) in output.pixels() {
        assert_eq!([px[0], px[1], px[2]], [0.6, 0.6, 0.6]);
    }
}

#[test]
fn weave_is_deterministic_per_frame_index() {
    let input = gradient_frame(16, 16);
    let params = EffectParameters {
        gate_weave: 0.8,
        ..EffectParameters::neutral()
    };

    let mut a = Frame::new(16, 16);
    let mut b = Frame::new(16, 16);
    let mut c = Frame::new(16, 16);
    render(&input, &mut a, &params, &RenderContext::new(0.0, 3)).unwrap();
    render(&input, &mut b, &params, &RenderContext::new(0.0, 3)).unwrap();
    render(&input, &mut c, &params, &RenderContext::new(0.0, 4)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c, "different frame indices must weave differently");
}

#[test]
fn grain_preserves_hue_end_to_end() {
    // Dim enough that grain cannot push a channel into the final clamp,
    // which would flatten the ratio.
    let input = Frame::filled(32, 32, [0.3, 0.15, 0.05, 1.0]);
    let mut output = Frame::new(32, 32);
    let params = EffectParameters {
        grain_amount: 0.8,
        grain_chroma: 0.0,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::still()).unwrap();

    let in_ratio = 0.3 / 0.15;
    for (_, _, px) in output.pixels() {
        if px[1] > 1e-4 {
            assert!((px[0] / px[1] - in_ratio).abs() < 1e-3, "px={:?}", px);
        }
    }
}

#[test]
fn halation_spreads_red_glow_around_highlights() {
    let mut input = Frame::filled(32, 32, [0.1, 0.1, 0.1, 1.0]);
    input.set_pixel(16, 16, [1.0, 1.0, 1.0, 1.0]);
    let mut output = Frame::new(32, 32);
    let params = EffectParameters {
        halation_amount: 1.0,
        halation_threshold: 0.8,
        halation_radius: 4.0,
        halation_background_gain: 0.5,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::still()).unwrap();

    // A neighbor inside the blur radius picks up a red-dominant halo.
    let halo = output.pixel(18, 16);
    assert!(halo[0] > 0.1, "no halo: {:?}", halo);
    assert!(halo[0] > halo[2], "halo not red-biased: {:?}", halo);
    // A far corner stays at the base level.
    let corner = output.pixel(0, 0);
    assert!((corner[0] - 0.1).abs() < 1e-3);
}

#[test]
fn bloom_glow_is_untinted() {
    let mut input = Frame::filled(32, 32, [0.0, 0.0, 0.0, 1.0]);
    input.set_pixel(16, 16, [1.0, 1.0, 1.0, 1.0]);
    let mut output = Frame::new(32, 32);
    let params = EffectParameters {
        bloom_amount: 1.0,
        bloom_threshold: 0.8,
        bloom_radius: 4.0,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::still()).unwrap();

    let halo = output.pixel(18, 16);
    assert!(halo[0] > 0.0);
    assert!((halo[0] - halo[1]).abs() < 1e-5 && (halo[1] - halo[2]).abs() < 1e-5);
}

#[test]
fn log_input_is_linearized_before_processing() {
    // LogC-encoded middle gray decodes to ~0.18 linear; with contrast 2
    // the output should be near 0.18^2, not (0.391)^2.
    let encoded = emulsion_transfer::log_c::encode(0.18);
    let input = Frame::filled(4, 4, [encoded, encoded, encoded, 1.0]);
    let mut output = Frame::new(4, 4);
    let params = EffectParameters {
        input_space: InputColorSpace::ArriLogC3,
        contrast: 2.0,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::still()).unwrap();
    let px = output.pixel(0, 0);
    assert!((px[0] - 0.18f32 * 0.18).abs() < 1e-3, "px={:?}", px);
}

#[test]
fn srgb_output_encoding_applies_after_grading() {
    let input = Frame::filled(4, 4, [0.18, 0.18, 0.18, 1.0]);
    let mut output = Frame::new(4, 4);
    let params = EffectParameters {
        output_space: OutputColorSpace::Srgb,
        ..EffectParameters::neutral()
    };
    render(&input, &mut output, &params, &RenderContext::still()).unwrap();
    let expected = emulsion_transfer::srgb::oetf(0.18);
    assert!((output.pixel(0, 0)[0] - expected).abs() < 1e-5);
}

#[test]
fn monochrome_stock_discards_chroma() {
    let input = Frame::filled(8, 8, [0.8, 0.2, 0.4, 1.0]);
    let mut output = Frame::new(8, 8);
    let params = EffectParameters {
        stock: Some(FilmStock::KodakTriX400),
        grain_amount: 0.0,
        halation_amount: 0.0,
        bloom_amount: 0.0,
        ..EffectParameters::default()
    };
    render(&input, &mut output, &params, &RenderContext::still()).unwrap();
    for (_, _, px) in output.pixels() {
        assert!((px[0] - px[1]).abs() < 1e-5);
        assert!((px[1] - px[2]).abs() < 1e-5);
    }
}

#[test]
fn bleach_bypass_desaturates_relative_to_standard() {
    let input = Frame::filled(8, 8, [0.7, 0.3, 0.2, 1.0]);
    let base = EffectParameters {
        stock: Some(FilmStock::KodakVision3_250D),
        grain_amount: 0.0,
        halation_amount: 0.0,
        bloom_amount: 0.0,
        ..EffectParameters::default()
    };

    let mut standard = Frame::new(8, 8);
    render(&input, &mut standard, &base, &RenderContext::still()).unwrap();

    let bleach = EffectParameters {
        process: ProcessType::BleachBypass,
        ..base
    };
    let mut bypassed = Frame::new(8, 8);
    render(&input, &mut bypassed, &bleach, &RenderContext::still()).unwrap();

    let spread = |px: [f32; 4]| {
        let max = px[0].max(px[1]).max(px[2]);
        let min = px[0].min(px[1]).min(px[2]);
        max - min
    };
    assert!(spread(bypassed.pixel(4, 4)) < spread(standard.pixel(4, 4)));
}

#[test]
fn full_look_is_deterministic() {
    let input = gradient_frame(48, 32);
    let params = EffectParameters {
        gate_weave: 0.5,
        film_breath: 0.5,
        projector_flicker: 0.5,
        ..EffectParameters::default()
    };
    let ctx = RenderContext::new(1.25, 30);

    let mut renderer = Renderer::new(48, 32).unwrap();
    let mut a = Frame::new(48, 32);
    let mut b = Frame::new(48, 32);
    renderer.render(&input, &mut a, &params, &ctx).unwrap();
    renderer.render(&input, &mut b, &params, &ctx).unwrap();
    assert_eq!(a, b);
}

#[test]
fn grade_clamps_the_final_image_to_unit_range() {
    let input = Frame::filled(8, 8, [3.0, -0.5, 1.5, 1.0]);
    let mut output = Frame::new(8, 8);
    render(
        &input,
        &mut output,
        &EffectParameters::neutral(),
        &RenderContext::still(),
    )
    .unwrap();
    for (_, _, px) in output.pixels() {
        for c in 0..3 {
            assert!((0.0..=1.0).contains(&px[c]), "px={:?}", px);
        }
    }
}
