use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use semantic_version::cli::{Cli, execute};
use semantic_version::config::{Config, DEFAULT_LOG_FILTER, LOG_ENV};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging();

    let config = Config::load(cli.config.as_deref())?;
    let success = execute(&cli, config, &mut std::io::stdout().lock())?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Log to stderr so stdout only carries command output
fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
