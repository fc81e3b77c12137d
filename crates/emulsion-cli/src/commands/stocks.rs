//! Stock catalog listing.

use crate::StocksArgs;
use anyhow::Result;
use emulsion_stocks::{profile, FilmStock};

pub fn run(args: StocksArgs, _verbose: bool) -> Result<()> {
    println!(
        "{:<28} {:<24} {:>6}  {}",
        "ID", "NAME", "ISO", "TYPE"
    );
    for stock in FilmStock::ALL {
        let p = profile(stock);
        println!(
            "{:<28} {:<24} {:>6}  {}",
            super::slug(p.name),
            p.name,
            p.iso_speed,
            if p.monochrome { "B&W" } else { "color" }
        );
        if args.all {
            let c = &p.tone_curve;
            println!(
                "  curve: shadows {:.3} highlights {:.3} gamma {:.2} contrast {:.2} range [{:.3}, {:.3}]",
                c.shadows, c.highlights, c.gamma, c.contrast, c.black_point, c.white_point
            );
            let g = &p.grain;
            println!(
                "  grain: size {:.2} density {:.2} sharpness {:.2} chroma {:.2}",
                g.base_size, g.density, g.sharpness, g.chroma_intensity
            );
        }
    }
    Ok(())
}
