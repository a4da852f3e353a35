use std::ffi::OsStr;

use tokio::fs;

use crate::error::FailureCause;
use crate::report::{Reporter, error_chain};
use crate::scan::ArchivePath;

use super::executor::ExtractionOutcome;

/// How one archive ended up after its outcome was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Extracted; `archive_removed` is false when deleting the source failed
    Extracted { archive_removed: bool },
    Failed(FailureCause),
}

/// Applies an extraction outcome: removes the archive on success, reports failures.
pub struct OutcomeHandler<'a> {
    reporter: &'a Reporter,
}

impl<'a> OutcomeHandler<'a> {
    pub fn new(reporter: &'a Reporter) -> Self {
        Self { reporter }
    }

    /// Apply the outcome of one extraction attempt.
    ///
    /// The archive is deleted if and only if `outcome` is a success. Tool
    /// diagnostics are printed in both cases: as a warning when a successful
    /// tool still wrote to stderr, and verbatim under the error otherwise.
    ///
    /// # Arguments
    ///
    /// * `archive` - The archive that was extracted
    /// * `program` - The tool that ran, named in install guidance
    /// * `outcome` - What the executor observed
    ///
    /// # Returns
    ///
    /// The item's final status, for the run summary. Deletion failures are
    /// reported as warnings and yield `Extracted { archive_removed: false }`.
    pub async fn handle(
        &self,
        archive: &ArchivePath,
        program: &OsStr,
        outcome: ExtractionOutcome,
    ) -> ItemStatus {
        match outcome {
            ExtractionOutcome::Success { stderr, .. } => {
                if !stderr.trim().is_empty() {
                    self.reporter
                        .warn(format!("{} reported warnings:", program.to_string_lossy()));
                    self.reporter.detail(&stderr);
                }
                let archive_removed = self.remove_archive(archive).await;
                ItemStatus::Extracted { archive_removed }
            }
            ExtractionOutcome::Failure {
                cause,
                message,
                stdout,
                stderr,
            } => {
                match cause {
                    FailureCause::ToolNotFound => {
                        self.reporter.error(format!(
                            "{message}; install '{}' and make sure it is on PATH, then run again",
                            program.to_string_lossy()
                        ));
                    }
                    FailureCause::ExtractionFailed => {
                        self.reporter.error(format!(
                            "failed to extract {}: {message}",
                            archive.path().display()
                        ));
                    }
                }
                for text in [stdout, stderr].into_iter().flatten() {
                    self.reporter.detail(&text);
                }
                self.reporter
                    .info(format!("  kept {}", archive.path().display()));
                ItemStatus::Failed(cause)
            }
        }
    }

    async fn remove_archive(&self, archive: &ArchivePath) -> bool {
        match fs::remove_file(archive.path()).await {
            Ok(()) => {
                self.reporter
                    .success(format!("  extracted and removed {}", archive.path().display()));
                true
            }
            Err(err) => {
                self.reporter.warn(format!(
                    "extracted {} but could not remove it: {}",
                    archive.path().display(),
                    error_chain(&err)
                ));
                false
            }
        }
    }
}
