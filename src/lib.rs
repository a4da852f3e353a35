//! # unpackall
//!
//! Bulk extraction of the zip, rar and 7z archives in a directory.
//!
//! Archives are found under a root directory (optionally recursively), each
//! one is extracted by an external tool (`unzip`, `unrar`, `7z`) into a
//! sibling directory named after it, and the archive is deleted only when
//! the tool reports success. One failing archive never stops the run.
//!
//! ## Features
//!
//! - Flat or recursive discovery, in directory-listing order
//! - Case-insensitive `.zip` / `.rar` / `.7z` recognition
//! - Tool selection through a replaceable [`ToolTable`]
//! - Pluggable process execution via the [`ProcessRunner`] trait
//! - Per-archive failure isolation with a final [`RunSummary`]
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use unpackall::{Config, Orchestrator, SystemRunner};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new("/srv/downloads", true);
//!     let orchestrator = Orchestrator::new(config, Arc::new(SystemRunner::new()));
//!
//!     let summary = orchestrator.run().await?;
//!     println!("{} extracted, {} failed", summary.extracted.len(), summary.failed.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod orchestrator;
pub mod process;
pub mod report;
pub mod scan;

pub use cli::Cli;
pub use config::Config;
pub use error::{FailureCause, PlanError, PrepareError, ScanAccessError, ScanError};
pub use extract::{ExtractionOutcome, ExtractionPlan, ItemStatus, Tool, ToolTable};
pub use orchestrator::{Orchestrator, RunSummary};
pub use process::{ExtractCommand, ProcessOutput, ProcessRunner, SystemRunner};
pub use report::Reporter;
pub use scan::ArchivePath;
