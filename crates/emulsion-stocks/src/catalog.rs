//! The process-wide stock catalog.
//!
//! Fourteen fixed entries, built lazily on first lookup and read-only
//! afterwards; safe to share across concurrent frame renders.
//!
//! Matrix and curve values are tuned against published stock data sheets:
//! daylight stocks lean slightly warm-neutral, tungsten stocks carry a
//! blue-biased matrix, reversal stocks get steeper contrast, monochrome
//! stocks collapse to a luminance matrix with zero chroma grain.

use crate::profile::MONOCHROME_MATRIX;
use crate::{FilmStockProfile, GrainProfile, SpectralPeak, ToneCurve};
use emulsion_math::Mat3;
use std::sync::LazyLock;

/// The closed set of emulated film stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilmStock {
    /// Kodak Vision3 50D color negative (daylight).
    KodakVision3_50D,
    /// Kodak Vision3 250D color negative (daylight). Catalog default.
    #[default]
    KodakVision3_250D,
    /// Kodak Vision3 200T color negative (tungsten).
    KodakVision3_200T,
    /// Kodak Vision3 500T color negative (tungsten).
    KodakVision3_500T,
    /// Kodak Ektachrome 100D color reversal.
    KodakEktachrome100D,
    /// Kodachrome 64 color reversal.
    Kodachrome64,
    /// Kodak Portra 400 color negative (still emulsion).
    KodakPortra400,
    /// Kodak Tri-X 400 black-and-white negative.
    KodakTriX400,
    /// Kodak Double-X 5222 black-and-white negative.
    KodakDoubleX,
    /// Ilford HP5 Plus black-and-white negative.
    IlfordHP5,
    /// Fujifilm Eterna 250D color negative (daylight).
    FujiEterna250D,
    /// Fujifilm Eterna 500T color negative (tungsten).
    FujiEterna500T,
    /// Fujifilm Velvia 50 color reversal.
    FujiVelvia50,
    /// Fujifilm Provia 100F color reversal.
    FujiProvia100F,
}

impl FilmStock {
    /// All stocks, in catalog order.
    pub const ALL: [FilmStock; 14] = [
        FilmStock::KodakVision3_50D,
        FilmStock::KodakVision3_250D,
        FilmStock::KodakVision3_200T,
        FilmStock::KodakVision3_500T,
        FilmStock::KodakEktachrome100D,
        FilmStock::Kodachrome64,
        FilmStock::KodakPortra400,
        FilmStock::KodakTriX400,
        FilmStock::KodakDoubleX,
        FilmStock::IlfordHP5,
        FilmStock::FujiEterna250D,
        FilmStock::FujiEterna500T,
        FilmStock::FujiVelvia50,
        FilmStock::FujiProvia100F,
    ];

    /// Maps a host-supplied index to a stock.
    ///
    /// Unknown indices fall back to the default stock; the host's menu
    /// ordering matches [`FilmStock::ALL`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Position of this stock in [`FilmStock::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(1)
    }
}

/// Looks up the profile for a stock. Total: every variant has an entry.
pub fn profile(stock: FilmStock) -> &'static FilmStockProfile {
    &CATALOG[stock.index()]
}

struct ColorEntry {
    name: &'static str,
    iso: f32,
    peaks: [SpectralPeak; 3],
    matrix: Mat3,
    curve: ToneCurve,
    grain: GrainProfile,
}

fn color_stock(e: ColorEntry) -> FilmStockProfile {
    FilmStockProfile {
        name: e.name,
        iso_speed: e.iso,
        monochrome: false,
        red_response: e.peaks[0],
        green_response: e.peaks[1],
        blue_response: e.peaks[2],
        color_matrix: e.matrix,
        tone_curve: e.curve,
        grain: e.grain,
    }
}

fn mono_stock(
    name: &'static str,
    iso: f32,
    curve: ToneCurve,
    grain: GrainProfile,
) -> FilmStockProfile {
    // Panchromatic layers share one broad sensitivity hump.
    let pan = SpectralPeak::new(550.0, 110.0, 1.0);
    FilmStockProfile {
        name,
        iso_speed: iso,
        monochrome: true,
        red_response: pan,
        green_response: pan,
        blue_response: pan,
        color_matrix: MONOCHROME_MATRIX,
        tone_curve: curve,
        grain: GrainProfile {
            chroma_intensity: 0.0,
            ..grain
        },
    }
}

static CATALOG: LazyLock<[FilmStockProfile; 14]> = LazyLock::new(|| {
    [
        color_stock(ColorEntry {
            name: "Kodak Vision3 50D",
            iso: 50.0,
            peaks: [
                SpectralPeak::new(645.0, 32.0, 0.92),
                SpectralPeak::new(545.0, 36.0, 1.0),
                SpectralPeak::new(445.0, 30.0, 0.95),
            ],
            matrix: Mat3::from_rows([
                [1.04, -0.02, -0.02],
                [-0.03, 1.05, -0.02],
                [-0.02, -0.04, 1.06],
            ]),
            curve: ToneCurve {
                shadows: 0.02,
                highlights: 0.16,
                gamma: 2.3,
                contrast: 1.05,
                black_point: 0.005,
                white_point: 0.985,
            },
            grain: GrainProfile {
                base_size: 0.7,
                density: 0.8,
                sharpness: 1.3,
                shadow_multiplier: 1.1,
                highlight_multiplier: 0.7,
                chroma_intensity: 0.25,
            },
        }),
        color_stock(ColorEntry {
            name: "Kodak Vision3 250D",
            iso: 250.0,
            peaks: [
                SpectralPeak::new(648.0, 34.0, 0.94),
                SpectralPeak::new(548.0, 38.0, 1.0),
                SpectralPeak::new(446.0, 31.0, 0.96),
            ],
            matrix: Mat3::from_rows([
                [1.06, -0.03, -0.03],
                [-0.04, 1.07, -0.03],
                [-0.02, -0.05, 1.07],
            ]),
            curve: ToneCurve {
                shadows: 0.03,
                highlights: 0.18,
                gamma: 2.35,
                contrast: 1.08,
                black_point: 0.008,
                white_point: 0.98,
            },
            grain: GrainProfile {
                base_size: 1.0,
                density: 1.0,
                sharpness: 1.2,
                shadow_multiplier: 1.2,
                highlight_multiplier: 0.8,
                chroma_intensity: 0.3,
            },
        }),
        color_stock(ColorEntry {
            name: "Kodak Vision3 200T",
            iso: 200.0,
            peaks: [
                SpectralPeak::new(640.0, 33.0, 0.9),
                SpectralPeak::new(544.0, 37.0, 1.0),
                SpectralPeak::new(448.0, 33.0, 1.02),
            ],
            matrix: Mat3::from_rows([
                [1.02, -0.02, 0.0],
                [-0.03, 1.04, -0.01],
                [-0.03, -0.06, 1.09],
            ]),
            curve: ToneCurve {
                shadows: 0.035,
                highlights: 0.19,
                gamma: 2.3,
                contrast: 1.07,
                black_point: 0.008,
                white_point: 0.98,
            },
            grain: GrainProfile {
                base_size: 0.95,
                density: 0.95,
                sharpness: 1.2,
                shadow_multiplier: 1.25,
                highlight_multiplier: 0.8,
                chroma_intensity: 0.28,
            },
        }),
        color_stock(ColorEntry {
            name: "Kodak Vision3 500T",
            iso: 500.0,
            peaks: [
                SpectralPeak::new(638.0, 35.0, 0.9),
                SpectralPeak::new(542.0, 40.0, 1.0),
                SpectralPeak::new(450.0, 34.0, 1.04),
            ],
            matrix: Mat3::from_rows([
                [1.01, -0.01, 0.0],
                [-0.03, 1.03, 0.0],
                [-0.04, -0.07, 1.11],
            ]),
            curve: ToneCurve {
                shadows: 0.045,
                highlights: 0.2,
                gamma: 2.25,
                contrast: 1.06,
                black_point: 0.01,
                white_point: 0.975,
            },
            grain: GrainProfile {
                base_size: 1.3,
                density: 1.15,
                sharpness: 1.05,
                shadow_multiplier: 1.4,
                highlight_multiplier: 0.9,
                chroma_intensity: 0.35,
            },
        }),
        color_stock(ColorEntry {
            name: "Kodak Ektachrome 100D",
            iso: 100.0,
            peaks: [
                SpectralPeak::new(650.0, 28.0, 0.95),
                SpectralPeak::new(550.0, 32.0, 1.0),
                SpectralPeak::new(445.0, 28.0, 0.98),
            ],
            matrix: Mat3::from_rows([
                [1.1, -0.05, -0.05],
                [-0.05, 1.12, -0.07],
                [-0.03, -0.06, 1.09],
            ]),
            curve: ToneCurve {
                shadows: 0.01,
                highlights: 0.24,
                gamma: 2.1,
                contrast: 1.22,
                black_point: 0.01,
                white_point: 0.99,
            },
            grain: GrainProfile {
                base_size: 0.85,
                density: 0.85,
                sharpness: 1.35,
                shadow_multiplier: 1.0,
                highlight_multiplier: 0.75,
                chroma_intensity: 0.22,
            },
        }),
        color_stock(ColorEntry {
            name: "Kodachrome 64",
            iso: 64.0,
            peaks: [
                SpectralPeak::new(655.0, 26.0, 0.96),
                SpectralPeak::new(552.0, 30.0, 1.0),
                SpectralPeak::new(442.0, 27.0, 0.94),
            ],
            matrix: Mat3::from_rows([
                [1.14, -0.07, -0.07],
                [-0.06, 1.13, -0.07],
                [-0.04, -0.08, 1.12],
            ]),
            curve: ToneCurve {
                shadows: 0.005,
                highlights: 0.27,
                gamma: 2.0,
                contrast: 1.3,
                black_point: 0.012,
                white_point: 0.99,
            },
            grain: GrainProfile {
                base_size: 0.8,
                density: 0.9,
                sharpness: 1.4,
                shadow_multiplier: 1.05,
                highlight_multiplier: 0.7,
                chroma_intensity: 0.2,
            },
        }),
        color_stock(ColorEntry {
            name: "Kodak Portra 400",
            iso: 400.0,
            peaks: [
                SpectralPeak::new(644.0, 36.0, 0.92),
                SpectralPeak::new(546.0, 40.0, 1.0),
                SpectralPeak::new(447.0, 33.0, 0.95),
            ],
            matrix: Mat3::from_rows([
                [1.03, -0.01, -0.02],
                [-0.02, 1.03, -0.01],
                [-0.02, -0.03, 1.05],
            ]),
            curve: ToneCurve {
                shadows: 0.05,
                highlights: 0.15,
                gamma: 2.45,
                contrast: 1.0,
                black_point: 0.01,
                white_point: 0.97,
            },
            grain: GrainProfile {
                base_size: 1.1,
                density: 1.0,
                sharpness: 1.1,
                shadow_multiplier: 1.2,
                highlight_multiplier: 0.85,
                chroma_intensity: 0.26,
            },
        }),
        mono_stock(
            "Kodak Tri-X 400",
            400.0,
            ToneCurve {
                shadows: 0.04,
                highlights: 0.22,
                gamma: 2.2,
                contrast: 1.18,
                black_point: 0.01,
                white_point: 0.98,
            },
            GrainProfile {
                base_size: 1.4,
                density: 1.25,
                sharpness: 1.45,
                shadow_multiplier: 1.35,
                highlight_multiplier: 0.9,
                chroma_intensity: 0.0,
            },
        ),
        mono_stock(
            "Kodak Double-X 5222",
            250.0,
            ToneCurve {
                shadows: 0.035,
                highlights: 0.2,
                gamma: 2.25,
                contrast: 1.12,
                black_point: 0.012,
                white_point: 0.975,
            },
            GrainProfile {
                base_size: 1.25,
                density: 1.15,
                sharpness: 1.35,
                shadow_multiplier: 1.3,
                highlight_multiplier: 0.85,
                chroma_intensity: 0.0,
            },
        ),
        mono_stock(
            "Ilford HP5 Plus",
            400.0,
            ToneCurve {
                shadows: 0.05,
                highlights: 0.18,
                gamma: 2.35,
                contrast: 1.08,
                black_point: 0.01,
                white_point: 0.97,
            },
            GrainProfile {
                base_size: 1.35,
                density: 1.2,
                sharpness: 1.3,
                shadow_multiplier: 1.3,
                highlight_multiplier: 0.9,
                chroma_intensity: 0.0,
            },
        ),
        color_stock(ColorEntry {
            name: "Fuji Eterna 250D",
            iso: 250.0,
            peaks: [
                SpectralPeak::new(642.0, 34.0, 0.9),
                SpectralPeak::new(547.0, 38.0, 1.0),
                SpectralPeak::new(449.0, 32.0, 0.97),
            ],
            matrix: Mat3::from_rows([
                [1.02, 0.0, -0.02],
                [-0.02, 1.04, -0.02],
                [-0.01, -0.03, 1.04],
            ]),
            curve: ToneCurve {
                shadows: 0.04,
                highlights: 0.16,
                gamma: 2.4,
                contrast: 1.0,
                black_point: 0.008,
                white_point: 0.975,
            },
            grain: GrainProfile {
                base_size: 1.0,
                density: 0.95,
                sharpness: 1.15,
                shadow_multiplier: 1.2,
                highlight_multiplier: 0.8,
                chroma_intensity: 0.27,
            },
        }),
        color_stock(ColorEntry {
            name: "Fuji Eterna 500T",
            iso: 500.0,
            peaks: [
                SpectralPeak::new(637.0, 36.0, 0.88),
                SpectralPeak::new(543.0, 41.0, 1.0),
                SpectralPeak::new(451.0, 35.0, 1.03),
            ],
            matrix: Mat3::from_rows([
                [1.0, 0.0, 0.0],
                [-0.02, 1.02, 0.0],
                [-0.03, -0.06, 1.09],
            ]),
            curve: ToneCurve {
                shadows: 0.05,
                highlights: 0.17,
                gamma: 2.35,
                contrast: 1.02,
                black_point: 0.01,
                white_point: 0.97,
            },
            grain: GrainProfile {
                base_size: 1.35,
                density: 1.2,
                sharpness: 1.0,
                shadow_multiplier: 1.45,
                highlight_multiplier: 0.9,
                chroma_intensity: 0.33,
            },
        }),
        color_stock(ColorEntry {
            name: "Fuji Velvia 50",
            iso: 50.0,
            peaks: [
                SpectralPeak::new(652.0, 27.0, 1.0),
                SpectralPeak::new(549.0, 31.0, 1.0),
                SpectralPeak::new(444.0, 27.0, 1.0),
            ],
            matrix: Mat3::from_rows([
                [1.18, -0.09, -0.09],
                [-0.08, 1.18, -0.1],
                [-0.05, -0.09, 1.14],
            ]),
            curve: ToneCurve {
                shadows: 0.0,
                highlights: 0.3,
                gamma: 1.95,
                contrast: 1.35,
                black_point: 0.015,
                white_point: 0.995,
            },
            grain: GrainProfile {
                base_size: 0.75,
                density: 0.85,
                sharpness: 1.4,
                shadow_multiplier: 1.0,
                highlight_multiplier: 0.7,
                chroma_intensity: 0.24,
            },
        }),
        color_stock(ColorEntry {
            name: "Fuji Provia 100F",
            iso: 100.0,
            peaks: [
                SpectralPeak::new(648.0, 29.0, 0.95),
                SpectralPeak::new(550.0, 33.0, 1.0),
                SpectralPeak::new(446.0, 29.0, 0.97),
            ],
            matrix: Mat3::from_rows([
                [1.08, -0.04, -0.04],
                [-0.04, 1.09, -0.05],
                [-0.03, -0.05, 1.08],
            ]),
            curve: ToneCurve {
                shadows: 0.015,
                highlights: 0.23,
                gamma: 2.15,
                contrast: 1.18,
                black_point: 0.01,
                white_point: 0.99,
            },
            grain: GrainProfile {
                base_size: 0.85,
                density: 0.9,
                sharpness: 1.3,
                shadow_multiplier: 1.05,
                highlight_multiplier: 0.75,
                chroma_intensity: 0.23,
            },
        }),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stock_has_a_profile() {
        for stock in FilmStock::ALL {
            let p = profile(stock);
            assert!(!p.name.is_empty());
            assert!(p.iso_speed > 0.0);
        }
    }

    #[test]
    fn unknown_index_falls_back_to_default() {
        let fallback = FilmStock::from_index(usize::MAX);
        assert_eq!(fallback, FilmStock::KodakVision3_250D);
        assert_eq!(profile(fallback).name, "Kodak Vision3 250D");
    }

    #[test]
    fn index_roundtrips() {
        for (i, stock) in FilmStock::ALL.iter().enumerate() {
            assert_eq!(stock.index(), i);
            assert_eq!(FilmStock::from_index(i), *stock);
        }
    }

    #[test]
    fn monochrome_stocks_have_no_chroma_grain() {
        for stock in FilmStock::ALL {
            let p = profile(stock);
            if p.monochrome {
                assert_eq!(p.grain.chroma_intensity, 0.0, "{}", p.name);
                let rgb = p.color_matrix.transform([0.9, 0.1, 0.5]);
                assert!((rgb[0] - rgb[1]).abs() < 1e-6);
                assert!((rgb[1] - rgb[2]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn tone_curves_are_monotonic() {
        for stock in FilmStock::ALL {
            let curve = profile(stock).tone_curve;
            let mut prev = f32::NEG_INFINITY;
            for i in 0..=500 {
                let y = curve.apply(i as f32 / 500.0);
                assert!(
                    y >= prev - 1e-7,
                    "{} not monotonic at {}",
                    profile(stock).name,
                    i
                );
                prev = y;
            }
        }
    }

    #[test]
    fn spectral_peaks_sit_in_sensible_bands() {
        for stock in FilmStock::ALL {
            let p = profile(stock);
            if !p.monochrome {
                assert!(p.red_response.peak_nm > p.green_response.peak_nm);
                assert!(p.green_response.peak_nm > p.blue_response.peak_nm);
            }
        }
    }
}
