//! Main entry point for the unpackall CLI application.
//!
//! Extracts every supported archive in the current working directory
//! (or below it with `-r`) and removes the archives that extracted cleanly.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use unpackall::{Cli, Config, Orchestrator, SystemRunner};

/// Application entry point.
///
/// Exits non-zero only when the directory scan itself fails. Archives that
/// could not be extracted are reported in the summary but do not change the
/// exit status.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let orchestrator = Orchestrator::new(config, Arc::new(SystemRunner::new()));
    orchestrator.run().await?;

    Ok(())
}
