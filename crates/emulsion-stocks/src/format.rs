//! Film gauge formats and their physical multipliers.

/// Film gauge the virtual print runs on.
///
/// Smaller gauges enlarge more in projection, so grain reads bigger and
/// transport artifacts are stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilmFormat {
    /// Regular/Super 8 mm.
    Format8mm,
    /// 16 mm / Super 16.
    Format16mm,
    /// Standard 35 mm.
    #[default]
    Format35mm,
    /// 65 mm large format.
    Format65mm,
}

impl FilmFormat {
    /// All formats in gauge order.
    pub const ALL: [FilmFormat; 4] = [
        FilmFormat::Format8mm,
        FilmFormat::Format16mm,
        FilmFormat::Format35mm,
        FilmFormat::Format65mm,
    ];

    /// Maps a host-supplied index to a format, falling back to 35 mm.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Scale applied to the grain size parameter.
    #[inline]
    pub fn grain_size_multiplier(self) -> f32 {
        match self {
            FilmFormat::Format8mm => 2.5,
            FilmFormat::Format16mm => 1.8,
            FilmFormat::Format35mm => 1.0,
            FilmFormat::Format65mm => 0.6,
        }
    }

    /// Scale applied to transport artifacts (weave, flicker).
    #[inline]
    pub fn artifact_intensity_multiplier(self) -> f32 {
        match self {
            FilmFormat::Format8mm => 2.0,
            FilmFormat::Format16mm => 1.4,
            FilmFormat::Format35mm => 1.0,
            FilmFormat::Format65mm => 0.5,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            FilmFormat::Format8mm => "8mm",
            FilmFormat::Format16mm => "16mm",
            FilmFormat::Format35mm => "35mm",
            FilmFormat::Format65mm => "65mm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_index_falls_back_to_35mm() {
        assert_eq!(FilmFormat::from_index(99), FilmFormat::Format35mm);
    }

    #[test]
    fn smaller_gauge_has_bigger_grain() {
        assert!(
            FilmFormat::Format8mm.grain_size_multiplier()
                > FilmFormat::Format65mm.grain_size_multiplier()
        );
    }
}
