//! Error taxonomy for a run.
//!
//! Only [`ScanError`] ends a run. Every other error here is scoped to a
//! single archive (or a single directory entry) and is reported before the
//! run moves on.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal discovery failure.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read directory {}", path.display())]
    RootRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("directory scan was interrupted")]
    Interrupted(#[from] tokio::task::JoinError),
}

/// A directory or entry that could not be listed or stat'ed during discovery.
#[derive(Debug, Error)]
#[error("skipping unreadable entry: {0}")]
pub struct ScanAccessError(#[from] pub walkdir::Error);

/// The output directory for an archive could not be created.
#[derive(Debug, Error)]
#[error("cannot create output directory {}", path.display())]
pub struct PrepareError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// No extraction tool is registered for an archive's extension.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("unsupported archive type '.{extension}': {}", path.display())]
    Unsupported { path: PathBuf, extension: String },
}

/// Why an extraction attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// The extraction program is not installed or not on `PATH`
    ToolNotFound,
    /// The program ran and reported an error
    ExtractionFailed,
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCause::ToolNotFound => f.write_str("tool not found"),
            FailureCause::ExtractionFailed => f.write_str("extraction failed"),
        }
    }
}
