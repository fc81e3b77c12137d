//! Spectral sensitivity curves.
//!
//! Each emulsion layer is described by a Gaussian (peak wavelength,
//! width, sensitivity) triple sampled across the visible range. The
//! sampled curves are derivation data behind the per-stock color
//! matrices; the render path never evaluates them per pixel.

/// Lowest sampled wavelength, nanometers.
pub const WAVELENGTH_MIN_NM: f32 = 380.0;
/// Highest sampled wavelength, nanometers.
pub const WAVELENGTH_MAX_NM: f32 = 780.0;
/// Sampling step, nanometers.
pub const WAVELENGTH_STEP_NM: f32 = 10.0;
/// Number of samples across [380, 780] at 10 nm steps.
pub const SPECTRUM_SAMPLES: usize = 41;

/// Gaussian description of one emulsion layer's spectral response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    /// Wavelength of peak sensitivity, nm.
    pub peak_nm: f32,
    /// Gaussian width (standard deviation), nm.
    pub width_nm: f32,
    /// Peak sensitivity (relative).
    pub sensitivity: f32,
}

impl SpectralPeak {
    /// Creates a peak description.
    pub const fn new(peak_nm: f32, width_nm: f32, sensitivity: f32) -> Self {
        Self { peak_nm, width_nm, sensitivity }
    }

    /// Response at a single wavelength.
    #[inline]
    pub fn response_at(&self, wavelength_nm: f32) -> f32 {
        let d = (wavelength_nm - self.peak_nm) / self.width_nm;
        self.sensitivity * (-0.5 * d * d).exp()
    }

    /// Samples the response across the visible range at 10 nm steps.
    pub fn sample(&self) -> [f32; SPECTRUM_SAMPLES] {
        let mut out = [0.0; SPECTRUM_SAMPLES];
        for (i, value) in out.iter_mut().enumerate() {
            let nm = WAVELENGTH_MIN_NM + i as f32 * WAVELENGTH_STEP_NM;
            *value = self.response_at(nm);
        }
        out
    }
}
