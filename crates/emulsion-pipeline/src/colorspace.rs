//! Input linearization and output encoding.
//!
//! The pipeline works in linear-light Rec.709 primaries. The input stage
//! decodes camera log or display curves into that working space; the
//! output stage applies a fixed primaries matrix and transfer function.
//! When a stage's space already is the working space the orchestrator
//! short-circuits to a plain buffer copy instead of calling in here.

use emulsion_core::Frame;
use emulsion_math::Mat3;
use emulsion_transfer::{gamma, log_c, rec709, s_log3, srgb, v_log};
use rayon::prelude::*;

use crate::RenderResult;

const CHANNELS: usize = 4;

/// Rec.709 primaries onto P3-D65, derived from the CIE chromaticities.
const REC709_TO_P3_D65: Mat3 = Mat3::from_rows([
    [0.822462, 0.177538, 0.000000],
    [0.033194, 0.966806, 0.000000],
    [0.017083, 0.072397, 0.910520],
]);

/// Encoding of the frames handed to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputColorSpace {
    /// Already linear working space; decoded as a plain copy.
    #[default]
    Linear,
    /// sRGB piecewise display curve.
    Srgb,
    /// ITU-R BT.709 camera OETF.
    Rec709,
    /// ARRI LogC3 (EI 800).
    ArriLogC3,
    /// Sony S-Log3.
    SonySLog3,
    /// Panasonic V-Log.
    PanasonicVLog,
}

impl InputColorSpace {
    /// All supported input spaces, in host menu order.
    pub const ALL: [InputColorSpace; 6] = [
        InputColorSpace::Linear,
        InputColorSpace::Srgb,
        InputColorSpace::Rec709,
        InputColorSpace::ArriLogC3,
        InputColorSpace::SonySLog3,
        InputColorSpace::PanasonicVLog,
    ];

    /// Maps a host menu index; unknown indices fall back to linear.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            InputColorSpace::Linear => "Linear",
            InputColorSpace::Srgb => "sRGB",
            InputColorSpace::Rec709 => "Rec.709",
            InputColorSpace::ArriLogC3 => "ARRI LogC3",
            InputColorSpace::SonySLog3 => "Sony S-Log3",
            InputColorSpace::PanasonicVLog => "Panasonic V-Log",
        }
    }

    /// True when no decode is needed.
    pub fn is_working(self) -> bool {
        self == InputColorSpace::Linear
    }
}

/// Encoding applied to the pipeline's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputColorSpace {
    /// Linear working space; encoded as a plain copy.
    #[default]
    Linear,
    /// sRGB piecewise display curve.
    Srgb,
    /// ITU-R BT.709 OETF.
    Rec709,
    /// Pure 2.2 power law.
    Gamma22,
    /// Pure 2.6 power law.
    Gamma26,
    /// DCI-P3 with D65 white and a 2.6 power law.
    DciP3D65,
}

impl OutputColorSpace {
    /// All supported output spaces, in host menu order.
    pub const ALL: [OutputColorSpace; 6] = [
        OutputColorSpace::Linear,
        OutputColorSpace::Srgb,
        OutputColorSpace::Rec709,
        OutputColorSpace::Gamma22,
        OutputColorSpace::Gamma26,
        OutputColorSpace::DciP3D65,
    ];

    /// Maps a host menu index; unknown indices fall back to linear.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            OutputColorSpace::Linear => "Linear",
            OutputColorSpace::Srgb => "sRGB",
            OutputColorSpace::Rec709 => "Rec.709",
            OutputColorSpace::Gamma22 => "Gamma 2.2",
            OutputColorSpace::Gamma26 => "Gamma 2.6",
            OutputColorSpace::DciP3D65 => "DCI-P3 D65",
        }
    }

    /// True when no encode is needed.
    pub fn is_working(self) -> bool {
        self == OutputColorSpace::Linear
    }

    /// Primaries matrix from the working gamut to the target gamut.
    fn gamut_matrix(self) -> Option<Mat3> {
        match self {
            OutputColorSpace::DciP3D65 => Some(REC709_TO_P3_D65),
            _ => None,
        }
    }

    /// Per-channel transfer encode.
    fn transfer(self, x: f32) -> f32 {
        match self {
            OutputColorSpace::Linear => x,
            OutputColorSpace::Srgb => srgb::oetf(x),
            OutputColorSpace::Rec709 => rec709::oetf(x),
            OutputColorSpace::Gamma22 => gamma::oetf(x, 2.2),
            OutputColorSpace::Gamma26 | OutputColorSpace::DciP3D65 => gamma::oetf(x, 2.6),
        }
    }
}

fn for_each_pixel(src: &Frame, dst: &mut Frame, f: impl Fn([f32; 3]) -> [f32; 3] + Sync) {
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
                let rgb = f([in_px[0], in_px[1], in_px[2]]);
                out_px[0] = rgb[0];
                out_px[1] = rgb[1];
                out_px[2] = rgb[2];
                out_px[3] = in_px[3];
            }
        });
}

/// Decodes `src` from `space` into working linear light.
///
/// The orchestrator never calls this for the working space itself; that
/// case short-circuits to a buffer copy.
pub(crate) fn linearize(src: &Frame, dst: &mut Frame, space: InputColorSpace) -> RenderResult<()> {
    match space {
        InputColorSpace::Linear => dst.copy_from(src)?,
        InputColorSpace::Srgb => for_each_pixel(src, dst, srgb::eotf_rgb),
        InputColorSpace::Rec709 => for_each_pixel(src, dst, rec709::eotf_rgb),
        InputColorSpace::ArriLogC3 => for_each_pixel(src, dst, log_c::decode_rgb),
        InputColorSpace::SonySLog3 => for_each_pixel(src, dst, s_log3::decode_rgb),
        InputColorSpace::PanasonicVLog => for_each_pixel(src, dst, v_log::decode_rgb),
    }
    Ok(())
}

/// Encodes working linear light in `src` into `space`.
pub(crate) fn encode(src: &Frame, dst: &mut Frame, space: OutputColorSpace) -> RenderResult<()> {
    if space.is_working() {
        dst.copy_from(src)?;
        return Ok(());
    }

    let matrix = space.gamut_matrix();
    for_each_pixel(src, dst, |rgb| {
        let rgb = match matrix {
            Some(m) => m.transform(rgb),
            None => rgb,
        };
        [
            space.transfer(rgb[0]),
            space.transfer(rgb[1]),
            space.transfer(rgb[2]),
        ]
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_indices_fall_back_to_linear() {
        assert_eq!(InputColorSpace::from_index(99), InputColorSpace::Linear);
        assert_eq!(OutputColorSpace::from_index(99), OutputColorSpace::Linear);
    }

    #[test]
    fn log_decode_then_reencode_round_trips() {
        let encoded = Frame::filled(4, 4, [0.4, 0.5, 0.6, 1.0]);
        let mut linear = Frame::new(4, 4);
        linearize(&encoded, &mut linear, InputColorSpace::ArriLogC3).unwrap();

        let px = linear.pixel(0, 0);
        let back = emulsion_transfer::log_c::encode_rgb([px[0], px[1], px[2]]);
        assert!((back[0] - 0.4).abs() < 1e-4);
        assert!((back[1] - 0.5).abs() < 1e-4);
        assert!((back[2] - 0.6).abs() < 1e-4);
    }

    #[test]
    fn rec709_output_encodes_transfer() {
        let src = Frame::filled(2, 2, [0.18, 0.18, 0.18, 1.0]);
        let mut dst = Frame::new(2, 2);
        encode(&src, &mut dst, OutputColorSpace::Rec709).unwrap();
        let expected = emulsion_transfer::rec709::oetf(0.18);
        assert!((dst.pixel(0, 0)[0] - expected).abs() < 1e-6);
    }

    #[test]
    fn p3_output_applies_primaries_matrix() {
        // Pure working-space red lands inside the wider P3 gamut, so the
        // encoded red channel drops below 1 and green picks up energy.
        let src = Frame::filled(2, 2, [1.0, 0.0, 0.0, 1.0]);
        let mut dst = Frame::new(2, 2);
        encode(&src, &mut dst, OutputColorSpace::DciP3D65).unwrap();
        let px = dst.pixel(0, 0);
        assert!(px[0] < 1.0 && px[0] > 0.9);
        assert!(px[1] > 0.0);
    }

    #[test]
    fn gamut_rows_sum_to_one() {
        for row in REC709_TO_P3_D65.m {
            let sum: f32 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-4, "row={:?}", row);
        }
    }
}
