//! LUT bake command.

use crate::BakeArgs;
use anyhow::{Context, Result};
use emulsion_pipeline::{baker, EffectParameters};
use emulsion_stocks::profile;

pub fn run(args: BakeArgs, verbose: bool) -> Result<()> {
    let stock = super::parse_stock(&args.stock)?;
    let params = EffectParameters {
        stock,
        format: super::parse_format(&args.format)?,
        process: super::parse_process(&args.process)?,
        contrast: args.contrast,
        saturation: args.saturation,
        color_temperature: args.temperature,
        input_space: super::parse_input_space(&args.input_space)?,
        output_space: super::parse_output_space(&args.output_space)?,
        ..EffectParameters::default()
    };

    let title = args.title.unwrap_or_else(|| match stock {
        Some(s) => profile(s).name.to_string(),
        None => "Neutral".to_string(),
    });

    if verbose {
        println!(
            "Baking {}^3 LUT '{}' to {}",
            args.size,
            title,
            args.output.display()
        );
    }

    baker::bake_to_file(&args.output, &params, args.size, &title)
        .with_context(|| format!("Failed to bake LUT to {}", args.output.display()))?;

    if verbose {
        println!("Done.");
    }
    Ok(())
}
