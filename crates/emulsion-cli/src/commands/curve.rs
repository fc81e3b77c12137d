//! Tone curve sampling.

use crate::CurveArgs;
use anyhow::{bail, Result};
use emulsion_stocks::profile;

pub fn run(args: CurveArgs, verbose: bool) -> Result<()> {
    let Some(stock) = super::parse_stock(&args.stock)? else {
        bail!("'none' has no tone curve; pick a stock from `emulsion stocks`");
    };
    if args.samples < 2 {
        bail!("need at least 2 samples, got {}", args.samples);
    }

    let p = profile(stock);
    if verbose {
        println!("# {} (ISO {})", p.name, p.iso_speed);
    }
    println!("# input output");
    for i in 0..args.samples {
        let x = i as f32 / (args.samples - 1) as f32;
        println!("{:.6} {:.6}", x, p.tone_curve.apply(x));
    }
    Ok(())
}
