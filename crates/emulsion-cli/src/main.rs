//! emulsion - film emulation look development CLI
//!
//! Bakes pipeline looks into portable .cube LUTs and inspects the film
//! stock catalog.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "emulsion")]
#[command(author, version, about = "Analog film emulation look tools")]
#[command(long_about = "
Look development tools for the film emulation pipeline.

Examples:
  emulsion stocks                                # List the stock catalog
  emulsion curve kodak-vision3-250d              # Sample a stock's tone curve
  emulsion bake look.cube                        # Bake the default look
  emulsion bake look.cube --stock fuji-eterna-500t --contrast 1.2
  emulsion bake look.cube --size 65 --output-space rec709
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Bake the current look into a .cube LUT
    #[command(visible_alias = "b")]
    Bake(BakeArgs),

    /// List the film stock catalog
    #[command(visible_alias = "s")]
    Stocks(StocksArgs),

    /// Sample a stock's characteristic curve
    Curve(CurveArgs),
}

#[derive(Args)]
struct BakeArgs {
    /// Output .cube file
    output: PathBuf,

    /// Film stock (kebab-case name, or "none" to bypass)
    #[arg(long, default_value = "kodak-vision3-250d")]
    stock: String,

    /// Film format: 8mm, 16mm, 35mm, 65mm
    #[arg(long, default_value = "35mm")]
    format: String,

    /// Lab process: standard, push, pull, bleach-bypass, cross-process
    #[arg(long, default_value = "standard")]
    process: String,

    /// Grading contrast exponent
    #[arg(long, default_value = "1.0")]
    contrast: f32,

    /// Grading saturation
    #[arg(long, default_value = "1.0")]
    saturation: f32,

    /// Color temperature bias (-1 to 1, positive warms)
    #[arg(long, default_value = "0.0")]
    temperature: f32,

    /// Input color space: linear, srgb, rec709, logc3, slog3, vlog
    #[arg(long, default_value = "linear")]
    input_space: String,

    /// Output color space: linear, srgb, rec709, gamma22, gamma26, p3d65
    #[arg(long, default_value = "linear")]
    output_space: String,

    /// Samples per LUT axis
    #[arg(long, default_value = "33")]
    size: usize,

    /// Title written into the .cube header
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
struct StocksArgs {
    /// Show tone curve and grain parameters too
    #[arg(short, long)]
    all: bool,
}

#[derive(Args)]
struct CurveArgs {
    /// Film stock (kebab-case name)
    stock: String,

    /// Number of curve samples
    #[arg(short, long, default_value = "17")]
    samples: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Bake(args) => commands::bake::run(args, cli.verbose),
        Commands::Stocks(args) => commands::stocks::run(args, cli.verbose),
        Commands::Curve(args) => commands::curve::run(args, cli.verbose),
    }
}
