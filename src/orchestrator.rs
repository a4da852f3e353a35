use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{FailureCause, ScanError};
use crate::extract::{
    ExtractionExecutor, ItemStatus, OutcomeHandler, ToolTable, ensure_dir, plan,
};
use crate::process::ProcessRunner;
use crate::report::{Reporter, error_chain};
use crate::scan::{ArchivePath, classify, discover};

/// What happened to every archive in a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Archives found, whatever their outcome
    pub processed: usize,
    pub extracted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, FailureCause)>,
    /// Archives that were never handed to a tool
    pub skipped: Vec<PathBuf>,
    /// Extracted archives whose removal failed
    pub retained: Vec<PathBuf>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    fn record(&mut self, archive: &ArchivePath, status: ItemStatus) {
        let path = archive.path().to_path_buf();
        match status {
            ItemStatus::Extracted { archive_removed } => {
                if !archive_removed {
                    self.retained.push(path.clone());
                }
                self.extracted.push(path);
            }
            ItemStatus::Failed(cause) => self.failed.push((path, cause)),
        }
    }
}

/// Drives discovery, classification, and per-archive extraction for one run.
///
/// Archives are handled one at a time in discovery order; an archive's
/// outcome is fully applied before the next one starts.
pub struct Orchestrator<R: ProcessRunner> {
    config: Config,
    tools: ToolTable,
    executor: ExtractionExecutor<R>,
    reporter: Reporter,
}

impl<R: ProcessRunner> Orchestrator<R> {
    pub fn new(config: Config, runner: Arc<R>) -> Self {
        let reporter = Reporter::new(config.color);
        Self {
            config,
            tools: ToolTable::default(),
            executor: ExtractionExecutor::new(runner),
            reporter,
        }
    }

    pub fn with_tools(mut self, tools: ToolTable) -> Self {
        self.tools = tools;
        self
    }

    /// Run the whole pipeline.
    ///
    /// Discovers candidates under the configured root, keeps the archives,
    /// and extracts them one at a time in discovery order. Each archive's
    /// outcome (including deletion of the source) is settled before the
    /// next archive starts.
    ///
    /// # Returns
    ///
    /// The [`RunSummary`] for the run, empty when no archives were found.
    /// Only a discovery failure on the root is returned as an error; every
    /// per-archive problem is reported and recorded in the summary.
    pub async fn run(&self) -> Result<RunSummary, ScanError> {
        let root = &self.config.root;
        let mode = if self.config.recursive {
            "recursively"
        } else {
            "non-recursively"
        };
        self.reporter
            .info(format!("Scanning {} {mode}", root.display()));

        let discovery = discover(root, self.config.recursive).await?;
        for warning in &discovery.warnings {
            self.reporter.warn(warning.to_string());
        }

        let archives = classify(discovery.paths).await;
        let mut summary = RunSummary::default();
        if archives.is_empty() {
            self.reporter.info("No archives found, nothing to do.");
            return Ok(summary);
        }

        self.reporter
            .info(format!("Found {} archive(s)", archives.len()));

        let total = archives.len();
        for (index, archive) in archives.iter().enumerate() {
            self.reporter.info(format!(
                "[{}/{}] extracting {}",
                index + 1,
                total,
                archive.path().display()
            ));
            summary.processed += 1;
            match self.process(archive).await {
                Some(status) => summary.record(archive, status),
                None => summary.skipped.push(archive.path().to_path_buf()),
            }
        }

        self.print_summary(&summary);
        Ok(summary)
    }

    /// Extract one archive. `None` means it was skipped before extraction.
    async fn process(&self, archive: &ArchivePath) -> Option<ItemStatus> {
        let plan = match plan(archive, &self.tools) {
            Ok(plan) => plan,
            Err(err) => {
                self.reporter.warn(format!("{err}, skipping"));
                return None;
            }
        };

        if let Err(err) = ensure_dir(&plan.output_dir).await {
            self.reporter
                .error(format!("{}, skipping {}", error_chain(&err), archive.path().display()));
            return None;
        }

        self.reporter.detail(&format!("$ {}", plan.command));
        let outcome = self.executor.execute(&plan.command).await;
        let status = OutcomeHandler::new(&self.reporter)
            .handle(archive, plan.tool.program(), outcome)
            .await;
        Some(status)
    }

    fn print_summary(&self, summary: &RunSummary) {
        self.reporter.info("");
        self.reporter.info(format!(
            "Processed {} archive(s): {} extracted, {} failed, {} skipped",
            summary.processed,
            summary.extracted.len(),
            summary.failed.len(),
            summary.skipped.len()
        ));
        for (path, cause) in &summary.failed {
            self.reporter
                .error(format!("{} ({cause})", path.display()));
        }
        if !summary.retained.is_empty() {
            self.reporter.warn(format!(
                "{} extracted archive(s) could not be removed",
                summary.retained.len()
            ));
        }
    }
}
