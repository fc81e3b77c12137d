//! Subcommand implementations.

pub mod bake;
pub mod curve;
pub mod stocks;

use anyhow::{bail, Result};
use emulsion_pipeline::{InputColorSpace, OutputColorSpace, ProcessType};
use emulsion_stocks::{profile, FilmFormat, FilmStock};

/// Kebab-case identifier for a display name, e.g.
/// "Kodak Vision3 250D" -> "kodak-vision3-250d".
pub(crate) fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Resolves a stock argument; "none" selects bypass.
pub(crate) fn parse_stock(arg: &str) -> Result<Option<FilmStock>> {
    if arg.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    for stock in FilmStock::ALL {
        if slug(profile(stock).name) == arg {
            return Ok(Some(stock));
        }
    }
    bail!(
        "unknown film stock '{}'; run `emulsion stocks` for the catalog",
        arg
    );
}

pub(crate) fn parse_format(arg: &str) -> Result<FilmFormat> {
    let format = match arg {
        "8mm" => FilmFormat::Format8mm,
        "16mm" => FilmFormat::Format16mm,
        "35mm" => FilmFormat::Format35mm,
        "65mm" => FilmFormat::Format65mm,
        _ => bail!("unknown film format '{}'; expected 8mm, 16mm, 35mm or 65mm", arg),
    };
    Ok(format)
}

pub(crate) fn parse_process(arg: &str) -> Result<ProcessType> {
    let process = match arg {
        "standard" => ProcessType::Standard,
        "push" => ProcessType::Push,
        "pull" => ProcessType::Pull,
        "bleach-bypass" => ProcessType::BleachBypass,
        "cross-process" => ProcessType::CrossProcess,
        _ => bail!("unknown process type '{}'", arg),
    };
    Ok(process)
}

pub(crate) fn parse_input_space(arg: &str) -> Result<InputColorSpace> {
    let space = match arg {
        "linear" => InputColorSpace::Linear,
        "srgb" => InputColorSpace::Srgb,
        "rec709" => InputColorSpace::Rec709,
        "logc3" => InputColorSpace::ArriLogC3,
        "slog3" => InputColorSpace::SonySLog3,
        "vlog" => InputColorSpace::PanasonicVLog,
        _ => bail!("unknown input color space '{}'", arg),
    };
    Ok(space)
}

pub(crate) fn parse_output_space(arg: &str) -> Result<OutputColorSpace> {
    let space = match arg {
        "linear" => OutputColorSpace::Linear,
        "srgb" => OutputColorSpace::Srgb,
        "rec709" => OutputColorSpace::Rec709,
        "gamma22" => OutputColorSpace::Gamma22,
        "gamma26" => OutputColorSpace::Gamma26,
        "p3d65" => OutputColorSpace::DciP3D65,
        _ => bail!("unknown output color space '{}'", arg),
    };
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_matches_catalog_names() {
        assert_eq!(
            slug(profile(FilmStock::KodakVision3_250D).name),
            "kodak-vision3-250d"
        );
    }

    #[test]
    fn every_stock_parses_by_its_slug() {
        for stock in FilmStock::ALL {
            let name = slug(profile(stock).name);
            assert_eq!(parse_stock(&name).unwrap(), Some(stock));
        }
        assert_eq!(parse_stock("none").unwrap(), None);
        assert!(parse_stock("kodak-gold-200").is_err());
    }
}
