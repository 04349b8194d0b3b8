use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use mprjfir::FirEngine;
use mprjfir::config::{FirConfig, parse_samples};
use mprjfir::constants::N;
use mprjfir::output::{FirOutput, OutputFormat, create_formatter};

#[derive(Parser, Debug)]
#[command(name = "mprjfir")]
#[command(about = "Run one fixed-length FIR filtering pass", long_about = None)]
struct Args {
    /// TOML file with `taps` and `input` arrays
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tap coefficients, comma-separated (overrides config)
    #[arg(short, long, allow_hyphen_values = true)]
    taps: Option<String>,

    /// Input samples, comma-separated (overrides config)
    #[arg(short, long, allow_hyphen_values = true)]
    input: Option<String>,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match args.config {
        Some(ref path) => FirConfig::load(path).context("Failed to load config file")?,
        None => FirConfig::default(),
    };

    if let Some(ref taps) = args.taps {
        config.taps = parse_samples(taps).context("Invalid --taps")?;
    }
    if let Some(ref input) = args.input {
        config.input = parse_samples(input).context("Invalid --input")?;
    }

    let taps: [i32; N] = config.taps_array()?;
    let input: [i32; N] = config.input_array()?;
    log::info!("Filtering {} samples", N);

    let mut engine = FirEngine::new(&taps);
    let output = engine.compute(&input);

    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    println!(
        "{}",
        formatter.format(&FirOutput::new(&taps, &input, output))
    );

    Ok(())
}
