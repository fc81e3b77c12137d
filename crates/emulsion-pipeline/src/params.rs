//! Per-invocation parameter snapshot.
//!
//! The host owns the sliders and menus; at render time it hands the
//! pipeline one immutable [`EffectParameters`] value. Nothing in here is
//! mutated during a frame, and unknown menu indices fall back to
//! documented defaults instead of erroring.

use emulsion_stocks::{profile, FilmFormat, FilmStock, FilmStockProfile, GrainProfile};

use crate::{InputColorSpace, OutputColorSpace};

/// ISO speed the grain amount slider is calibrated against.
const REFERENCE_ISO: f32 = 400.0;

/// Grain structure used when no stock is selected.
const BYPASS_GRAIN: GrainProfile = GrainProfile {
    base_size: 1.0,
    density: 1.0,
    sharpness: 1.0,
    shadow_multiplier: 1.0,
    highlight_multiplier: 1.0,
    chroma_intensity: 1.0,
};

/// Lab process applied to the selected stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessType {
    /// Normal development.
    #[default]
    Standard,
    /// Push processing: overdeveloped, slightly hot and saturated.
    Push,
    /// Pull processing: underdeveloped, flat and muted.
    Pull,
    /// Bleach bypass: retained silver desaturates heavily.
    BleachBypass,
    /// Cross processing: wrong chemistry, oversaturated.
    CrossProcess,
}

impl ProcessType {
    /// All process types, in host menu order.
    pub const ALL: [ProcessType; 5] = [
        ProcessType::Standard,
        ProcessType::Push,
        ProcessType::Pull,
        ProcessType::BleachBypass,
        ProcessType::CrossProcess,
    ];

    /// Maps a host menu index; unknown indices fall back to standard.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ProcessType::Standard => "Standard",
            ProcessType::Push => "Push",
            ProcessType::Pull => "Pull",
            ProcessType::BleachBypass => "Bleach Bypass",
            ProcessType::CrossProcess => "Cross Process",
        }
    }

    /// Exposure multiplier folded into the film response stage.
    pub fn exposure_bias(self) -> f32 {
        match self {
            ProcessType::Standard | ProcessType::BleachBypass => 1.0,
            ProcessType::Push => 1.15,
            ProcessType::Pull => 0.87,
            ProcessType::CrossProcess => 1.05,
        }
    }

    /// Saturation multiplier folded into the film response stage.
    pub fn saturation_bias(self) -> f32 {
        match self {
            ProcessType::Standard => 1.0,
            ProcessType::Push => 1.05,
            ProcessType::Pull => 0.95,
            ProcessType::BleachBypass => 0.55,
            ProcessType::CrossProcess => 1.3,
        }
    }
}

/// Immutable snapshot of every user-controllable value for one render.
///
/// `stock` is `None` when the host's stock menu is set to its bypass
/// entry; the film response stage then runs with a neutral matrix and
/// curve (carrying only tint, process bias and breath/flicker exposure)
/// or is skipped outright when all of those are neutral too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParameters {
    /// Selected stock, or `None` for bypass.
    pub stock: Option<FilmStock>,
    /// Gauge the footage pretends to be shot on.
    pub format: FilmFormat,
    /// Lab process.
    pub process: ProcessType,

    /// Grain strength in [0, 2]; 0 skips the stage.
    pub grain_amount: f32,
    /// Grain size multiplier in [0.25, 4].
    pub grain_size: f32,
    /// Shadow grain weight in [0, 2].
    pub grain_shadow: f32,
    /// Highlight grain weight in [0, 2].
    pub grain_highlight: f32,
    /// Chroma grain strength in [0, 2].
    pub grain_chroma: f32,

    /// Halation strength in [0, 2]; 0 skips the stage.
    pub halation_amount: f32,
    /// Halation luminance threshold in [0, 1).
    pub halation_threshold: f32,
    /// Halation blur radius in pixels.
    pub halation_radius: f32,
    /// Extra halo gain over dark backgrounds, in [0, 2].
    pub halation_background_gain: f32,

    /// Bloom strength in [0, 2]; 0 skips the stage.
    pub bloom_amount: f32,
    /// Bloom luminance threshold in [0, 1).
    pub bloom_threshold: f32,
    /// Bloom blur radius in pixels.
    pub bloom_radius: f32,

    /// Gate weave strength in [0, 1]; 0 skips the stage.
    pub gate_weave: f32,
    /// Film breath (slow exposure drift) strength in [0, 1].
    pub film_breath: f32,
    /// Projector flicker strength in [0, 1].
    pub projector_flicker: f32,
    /// Flicker frequency in Hz.
    pub flicker_frequency: f32,

    /// Color temperature bias in [-1, 1]; positive warms.
    pub color_temperature: f32,
    /// Grading contrast exponent in (0, 4]; 1 is neutral.
    pub contrast: f32,
    /// Grading saturation in [0, 2]; 1 is neutral.
    pub saturation: f32,

    /// Encoding of the input frame.
    pub input_space: InputColorSpace,
    /// Encoding of the output frame.
    pub output_space: OutputColorSpace,
}

impl Default for EffectParameters {
    /// Host defaults: the default stock with a modest film look.
    fn default() -> Self {
        Self {
            stock: Some(FilmStock::default()),
            format: FilmFormat::default(),
            process: ProcessType::default(),
            grain_amount: 0.5,
            grain_size: 1.0,
            grain_shadow: 1.0,
            grain_highlight: 1.0,
            grain_chroma: 0.5,
            halation_amount: 0.3,
            halation_threshold: 0.8,
            halation_radius: 8.0,
            halation_background_gain: 0.5,
            bloom_amount: 0.2,
            bloom_threshold: 0.85,
            bloom_radius: 12.0,
            gate_weave: 0.0,
            film_breath: 0.0,
            projector_flicker: 0.0,
            flicker_frequency: 24.0,
            color_temperature: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            input_space: InputColorSpace::Linear,
            output_space: OutputColorSpace::Linear,
        }
    }
}

impl EffectParameters {
    /// Everything off: bypass stock, zero amounts, neutral grade, linear
    /// in and out. Rendering with these parameters copies the input.
    pub fn neutral() -> Self {
        Self {
            stock: None,
            grain_amount: 0.0,
            halation_amount: 0.0,
            bloom_amount: 0.0,
            ..Self::default()
        }
    }

    /// Resolved stock profile, if a stock is selected.
    pub fn stock_profile(&self) -> Option<&'static FilmStockProfile> {
        self.stock.map(profile)
    }

    /// Grain structure: the stock's profile, or a neutral one in bypass.
    pub fn grain_profile(&self) -> GrainProfile {
        self.stock_profile()
            .map(|p| p.grain)
            .unwrap_or(BYPASS_GRAIN)
    }

    /// Grain size after format scaling.
    pub fn effective_grain_size(&self) -> f32 {
        self.grain_size * self.format.grain_size_multiplier()
    }

    /// Grain amount after ISO scaling: faster stocks are grainier.
    pub fn effective_grain_amount(&self) -> f32 {
        let iso = self
            .stock_profile()
            .map_or(REFERENCE_ISO, |p| p.iso_speed);
        self.grain_amount * (iso / REFERENCE_ISO).sqrt()
    }

    /// Mechanical artifact scaling for the selected gauge.
    pub fn effective_artifact_intensity(&self) -> f32 {
        self.format.artifact_intensity_multiplier()
    }
}
