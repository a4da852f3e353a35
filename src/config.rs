use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Cli;

/// Run configuration handed to the [`Orchestrator`](crate::Orchestrator).
///
/// Everything the pipeline would otherwise read from process-wide state
/// (working directory, terminal color support) lives here, so a run can be
/// pointed at any directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan for archives
    pub root: PathBuf,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Emit ANSI colors in reports
    pub color: bool,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            root: root.into(),
            recursive,
            color: false,
        }
    }

    /// Build the configuration from parsed arguments and the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = std::env::current_dir().context("cannot determine the current directory")?;
        Ok(Self::new(root, cli.recursive).with_color(console::colors_enabled()))
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
