//! `krishi` binary: the advisory engines on the command line.
//!
//! # Startup Sequence
//!
//! 1. Parse arguments
//! 2. Load configuration from `krishi-config.yaml` (defaults when absent)
//! 3. Initialize structured logging to stderr (`RUST_LOG` overrides the
//!    configured level)
//! 4. Run the subcommand and print its JSON result to stdout

mod cli;
mod commands;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = commands::load_config(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        config = %cli.config.display(),
        config_found = cli.config.exists(),
        seeded = config.confidence.seed.is_some(),
        history = config.history.enabled,
        "krishi starting"
    );

    commands::execute(&cli, &config)
}
