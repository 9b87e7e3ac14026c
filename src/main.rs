//! Strictly Rewind - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_rewind::cli::{Cli, Command, Format};
use strictly_rewind::replay::{self, Step};
use strictly_rewind::{Config, tui};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            initialize_file_tracing(&config)?;
            tui::run_tui(&config)
        }
        Command::Replay { steps, format, strict } => {
            initialize_stderr_tracing(&config);
            run_replay(&steps, format, strict)
        }
    }
}

/// Runs scripted steps and prints the report to stdout.
#[instrument(skip(steps))]
fn run_replay(steps: &[Step], format: Format, strict: bool) -> Result<()> {
    let report = replay::run(steps);

    match format {
        Format::Text => print!("{}", report),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize replay report")?
        ),
    }

    let rejected = report.rejections().count();
    if rejected > 0 {
        warn!(rejected, "Some steps were rejected");
        if strict {
            anyhow::bail!("{} of {} steps were rejected", rejected, steps.len());
        }
    }
    Ok(())
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so output doesn't interfere with the TUI.
#[instrument(skip(config))]
fn initialize_file_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "TUI tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
