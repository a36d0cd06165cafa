//! RSDiag - support report generator
//!
//! Reads the diagnostic snapshot produced by the install scanners and writes
//! the shareable `output.log` report for support volunteers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rsdiag::DiagnosticReport;
use rsdiag_common::config::{ResolvedConfig, TomlConfig, CONFIG_ENV};
use rsdiag_common::DiagnosticSnapshot;
use tracing::info;

/// Command-line arguments for rsdiag
#[derive(Parser, Debug)]
#[command(name = "rsdiag")]
#[command(about = "Generate a shareable Rocksmith diagnostic report")]
#[command(version)]
struct Args {
    /// Diagnostic snapshot (JSON) produced by the install scanners
    #[arg(short, long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Report destination (default: output.log in the working directory)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Bootstrap configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Also print the report to stdout
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config is loaded before the subscriber exists, so its origin is logged later
    let (toml_config, config_origin) = TomlConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    let config = ResolvedConfig::resolve(
        args.snapshot.as_deref(),
        args.output.as_deref(),
        &toml_config,
    );

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting RSDiag v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    config_origin.log();

    // anyhow prints the error chain on exit
    run(&config, args.print)
}

fn run(config: &ResolvedConfig, print: bool) -> Result<()> {
    info!("Snapshot: {}", config.snapshot_file.display());

    let snapshot = DiagnosticSnapshot::import_json(&config.snapshot_file).with_context(|| {
        format!(
            "Failed to load snapshot {}",
            config.snapshot_file.display()
        )
    })?;

    let report = DiagnosticReport::from_snapshot(&snapshot);

    report
        .save(&config.output_file)
        .with_context(|| format!("Failed to write report {}", config.output_file.display()))?;

    if print {
        print!("{}", report.render());
    }

    Ok(())
}
