//! lutforge - camera log LUT toolkit
//!
//! Generates, concatenates and resamples 3D `.cube` LUTs for camera
//! log/gamut conversions.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "lutforge")]
#[command(author, version, about = "Camera log LUT toolkit")]
#[command(long_about = "
Generate, concatenate and resample 3D .cube LUTs for camera log workflows.

Examples:
  lutforge formats                                # list supported log formats
  lutforge generate -s LogC4 -t F-Log2 --size 65 -o out.cube
  lutforge generate -s LogC4 --batch --output-dir ./luts
  lutforge generate -s S-Log3.Cine --batch --targets F-Log2C C-Log3
  lutforge concat -1 camera.cube -2 look.cube -o combined.cube
  lutforge concat -1 ./camera_luts -2 look.cube -o ./out -w 4
  lutforge resize big_65.cube -o small_17.cube --size 17
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Concatenate two LUTs; one side may be a directory of LUTs
    #[command(visible_alias = "c")]
    Concat(ConcatArgs),

    /// Generate a log-to-log conversion LUT
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Resample a LUT to a new resolution
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),

    /// List supported log formats
    #[command(visible_alias = "f")]
    Formats,
}

#[derive(Args)]
struct ConcatArgs {
    /// First LUT file or directory (applied first)
    #[arg(short = '1', long = "input1")]
    input1: PathBuf,

    /// Second LUT file or directory (applied second)
    #[arg(short = '2', long = "input2")]
    input2: PathBuf,

    /// Output file path (file+file) or directory (batch)
    #[arg(short, long)]
    output: PathBuf,

    /// Parallel workers for batch operations (0 = CPU count)
    #[arg(short, long, default_value = "0")]
    workers: usize,
}

#[derive(Args)]
struct GenerateArgs {
    /// Source log format (e.g. 'LogC4', 'S-Log3.Cine')
    #[arg(short, long)]
    source: String,

    /// Target log format (required unless --batch)
    #[arg(short, long)]
    target: Option<String>,

    /// Batch mode: generate from source to multiple targets
    #[arg(short, long)]
    batch: bool,

    /// Target formats for batch mode (default: all except source)
    #[arg(long, num_args = 1..)]
    targets: Option<Vec<String>>,

    /// LUT resolution per axis
    #[arg(long, default_value = "65")]
    size: usize,

    /// Output file path (single conversion; derived from formats if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output directory (batch mode)
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Chromatic adaptation method (cat02, bradford, vonkries, xyz)
    #[arg(long, default_value = "cat02")]
    cat: String,
}

#[derive(Args)]
struct ResizeArgs {
    /// Input .cube file
    input: PathBuf,

    /// Output .cube file
    #[arg(short, long)]
    output: PathBuf,

    /// New resolution per axis
    #[arg(short, long)]
    size: usize,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Concat(args) => commands::concat::run(args, cli.verbose),
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Resize(args) => commands::resize::run(args, cli.verbose),
        Commands::Formats => commands::formats::run(),
    }
}
