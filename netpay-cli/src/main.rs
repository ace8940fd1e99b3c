use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use netpay_cli::cli::{EstimateArgs, OutputFormat, render_batch, render_one};
use netpay_cli::validation::validate;
use netpay_cli::{csv_loader, logging, profile};
use netpay_core::{NetIncomeInput, NetIncomeResult, calculate_net_income};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Net take-home pay estimator.
///
/// Computes income tax, resident tax, social insurance premiums and the
/// donation limit for an annual salary, and prints the breakdown.
#[derive(Debug, Parser)]
#[command(name = "netpay", version)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `netpay_core=debug`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate from command-line flags.
    Estimate(EstimateArgs),

    /// Estimate from a TOML household profile.
    Profile {
        /// Path to the profile.
        path: PathBuf,
    },

    /// Estimate every row of a CSV file.
    Batch {
        /// Path to the CSV file.
        path: PathBuf,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn estimate(input: &NetIncomeInput) -> NetIncomeResult {
    debug!(salary = input.salary, "running estimate");
    calculate_net_income(input)
}

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let output = match cli.command {
        Command::Estimate(args) => {
            let input = NetIncomeInput::from(args);
            validate(&input)?;
            render_one(&estimate(&input), cli.format)?
        }
        Command::Profile { path } => {
            let input = profile::load_profile(&path)
                .with_context(|| format!("loading profile {}", path.display()))?;
            render_one(&estimate(&input), cli.format)?
        }
        Command::Batch { path } => {
            let inputs = csv_loader::load_from_file(&path)
                .with_context(|| format!("loading batch {}", path.display()))?;
            info!(rows = inputs.len(), "loaded batch");
            let results: Vec<NetIncomeResult> = inputs.iter().map(estimate).collect();
            render_batch(&results, cli.format)?
        }
    };

    println!("{output}");
    Ok(())
}
