//!
//! Command-line driver for the PMT QC analyzers.
#![allow(clippy::uninlined_format_args, clippy::cast_precision_loss)]

use clap::{Parser, Subcommand, ValueEnum};

use pmtqc_core::{
    Diagnostics, GeometryTable, GunEstimator, MuonEstimator, PmtPosition, TimingResult,
};
use pmtqc_io::read_hit_columns;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error: {0}")]
    PmtqcIo(#[from] pmtqc_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] pmtqc_core::Error),
}

/// Acquisition scenario.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Fixed light-source calibration on one (PMT, event) pair
    Gun,
    /// Earliest-hit-per-PMT coincidence run with optional TOF correction
    Muon,
}

/// Offline quality-control analyzers for PMT detector data.
#[derive(Parser)]
#[command(name = "pmtqc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the timing resolution (sigma_t) from hit files
    Timing {
        /// Input hit file(s)
        #[arg(required = true)]
        input: Vec<PathBuf>,

        /// Output JSON path
        #[arg(short, long, default_value = "out/qc/timing_sigma.json")]
        output: PathBuf,

        /// Calibration config (YAML) echoed into the result
        #[arg(short, long, default_value = "config/pmt.yaml")]
        config: PathBuf,

        /// Acquisition scenario
        #[arg(short, long, value_enum, default_value = "gun")]
        mode: Mode,

        /// Target PMT id (gun mode)
        #[arg(long, default_value = "0")]
        pmt: u32,

        /// Target event id (gun mode)
        #[arg(long, default_value = "0")]
        event: u32,

        /// Light-emission reference point as x,y,z millimetres (muon mode)
        #[arg(long, value_parser = parse_reference_point)]
        reference: Option<PmtPosition>,

        /// PMT geometry CSV with pmt,x,y,z columns (muon mode)
        #[arg(long)]
        geometry: Option<PathBuf>,

        /// Effective refractive index for the TOF correction
        #[arg(long, default_value = "1.33")]
        refractive_index: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about one hit file
    Info {
        /// Input hit file
        input: PathBuf,
    },
}

/// Parses `x,y,z` into a position in millimetres.
fn parse_reference_point(raw: &str) -> std::result::Result<PmtPosition, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z, got {raw:?}"));
    }
    let mut coords = [0.0f64; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("not a coordinate: {part:?}"))?;
    }
    Ok(PmtPosition::new(coords[0], coords[1], coords[2]))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Timing {
            input,
            output,
            config,
            mode,
            pmt,
            event,
            reference,
            geometry,
            refractive_index,
            verbose,
        } => {
            if verbose {
                eprintln!("Processing {} file(s)...", input.len());
                eprintln!("Mode: {:?}", mode);
            }

            let calibration = pmtqc_io::load_calibration(&config)?;
            let echo = calibration.echo();

            let geometry_table = match &geometry {
                Some(path) => pmtqc_io::load_geometry(path)?,
                None => GeometryTable::default(),
            };

            let mut diagnostics = Diagnostics::new();

            let result = match mode {
                Mode::Gun => {
                    let mut estimator = GunEstimator::new(pmt, event);
                    for path in &input {
                        if verbose {
                            eprintln!("Reading: {}", path.display());
                        }
                        estimator.collect(&read_hit_columns(path)?);
                    }
                    if verbose {
                        eprintln!("  {} matching hits collected", estimator.collected());
                    }
                    let summary = estimator.finish(&mut diagnostics)?;
                    TimingResult::gun(&summary, echo)
                }
                Mode::Muon => {
                    let mut estimator = MuonEstimator::new();
                    for path in &input {
                        if verbose {
                            eprintln!("Reading: {}", path.display());
                        }
                        estimator.collect(&read_hit_columns(path)?);
                    }
                    let summary = estimator.finish(
                        &geometry_table,
                        reference.as_ref(),
                        refractive_index,
                        &mut diagnostics,
                    );
                    if verbose {
                        eprintln!("  {} PMTs in spread", summary.n_pmts);
                    }
                    TimingResult::muon(&summary, echo)
                }
            };

            pmtqc_io::write_result(&output, &result)?;
            println!("[timing] wrote {}", output.display());
        }

        Commands::Info { input } => {
            let batch = read_hit_columns(&input)?;

            println!("File: {}", input.display());
            println!("Hits: {}", batch.len());

            if !batch.is_empty() {
                let pmts: HashSet<u32> = batch.pmt_id.iter().copied().collect();
                let events: HashSet<u32> = batch.event_id.iter().copied().collect();
                let min_t = batch.time_ns.iter().copied().fold(f64::INFINITY, f64::min);
                let max_t = batch
                    .time_ns
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max);

                println!("PMTs: {}", pmts.len());
                println!("Events: {}", events.len());
                println!("Time range: {:.3} - {:.3} ns", min_t, max_t);
            }
        }
    }

    Ok(())
}
