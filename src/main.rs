use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use lanczos::config::ResponseConfig;
use lanczos::filter::{FilterKind, frequency_grid, ideal_response};
use lanczos::output::{OutputFormat, ResponseSample, create_formatter};
use lanczos::{LanczosError, bp_filter, high_filter, low_filter};

#[derive(Parser, Debug)]
#[command(name = "lanczos")]
#[command(about = "Evaluate Lanczos band-pass, low-pass and high-pass filter responses", long_about = None)]
struct Args {
    /// Cut-in frequency in cycles per sample [default: 0.2]
    cutin: Option<f64>,

    /// Cut-off frequency in cycles per sample [default: 0.3]
    cutoff: Option<f64>,

    /// Number of filter weights, must be odd [default: 43]
    num_taps: Option<usize>,

    /// Number of frequencies sampled over [0, 1) [default: 730]
    #[arg(short = 'p', long)]
    points: Option<usize>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match args.config {
        Some(ref path) => ResponseConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ResponseConfig::default(),
    };
    if let Some(cutin) = args.cutin {
        config.cutin = cutin;
    }
    if let Some(cutoff) = args.cutoff {
        config.cutoff = cutoff;
    }
    if let Some(num_taps) = args.num_taps {
        config.num_taps = num_taps;
    }
    if let Some(points) = args.points {
        config.points = points;
    }
    config.validate().context("Invalid configuration")?;

    log::info!(
        "Band-pass {}-{} cycles/sample, n={}, {} points",
        config.cutin,
        config.cutoff,
        config.num_taps,
        config.points
    );

    let samples = evaluate(&config).map_err(|e| match e {
        LanczosError::InsufficientOrder { minimum, .. } => anyhow::Error::new(e)
            .context(format!("Use at least {} weights for this band", minimum)),
        e => e.into(),
    })?;

    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    for sample in &samples {
        println!("{}", formatter.format(sample));
    }

    Ok(())
}

fn evaluate(config: &ResponseConfig) -> lanczos::Result<Vec<ResponseSample>> {
    let f = frequency_grid(config.points);

    let band = bp_filter(&f, config.cutin, config.cutoff, config.num_taps)?;
    let low = low_filter(&f, config.cutoff, config.num_taps)?;
    let high = high_filter(&f, config.cutin, config.num_taps)?;
    let ideal = ideal_response(
        FilterKind::BandPass {
            cutin: config.cutin,
            cutoff: config.cutoff,
        },
        &f,
    );

    Ok(f.iter()
        .enumerate()
        .map(|(j, &frequency)| ResponseSample {
            frequency,
            ideal: ideal[j],
            bandpass: band[j],
            lowpass: low[j],
            highpass: high[j],
        })
        .collect())
}
