mod cli;
mod commands;
mod domain;
mod services;

use anyhow::Context;
use clap::Parser;

use crate::cli::{Cli, LOG_ENV};
use crate::commands::Session;
use crate::services::input::Console;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::new(console, cli.json);
    session.run().context("payroll session failed")?;
    let (registry, _) = session.into_parts();
    if registry.is_empty() {
        tracing::debug!("session finished without employees");
    } else {
        tracing::debug!(employees = registry.len(), "session finished");
    }
    Ok(())
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
