use std::io;
use std::sync::Arc;

use crate::error::FailureCause;
use crate::process::{ExtractCommand, ProcessOutput, ProcessRunner};

/// Exit status shells use for "command not found".
const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Result of one extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Success {
        stdout: String,
        stderr: String,
    },
    Failure {
        cause: FailureCause,
        message: String,
        /// Tool output, kept because some tools (`unzip`, p7zip) print errors here
        stdout: Option<String>,
        stderr: Option<String>,
    },
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionOutcome::Success { .. })
    }
}

/// Runs extraction commands and classifies how they ended.
pub struct ExtractionExecutor<R: ProcessRunner> {
    runner: Arc<R>,
}

impl<R: ProcessRunner> ExtractionExecutor<R> {
    pub fn new(runner: Arc<R>) -> Self {
        Self { runner }
    }

    pub async fn execute(&self, command: &ExtractCommand) -> ExtractionOutcome {
        match self.runner.run(command).await {
            Ok(output) => classify_output(command, output),
            Err(err) => classify_launch_error(command, err),
        }
    }
}

fn classify_output(command: &ExtractCommand, output: ProcessOutput) -> ExtractionOutcome {
    if output.success {
        return ExtractionOutcome::Success {
            stdout: output.stdout,
            stderr: output.stderr,
        };
    }

    let program = command.program_name().to_string_lossy();
    let stdout = non_blank(output.stdout);
    let stderr = non_blank(output.stderr);
    let not_found = output.code == Some(EXIT_COMMAND_NOT_FOUND)
        || stderr.as_deref().is_some_and(looks_like_missing_command);

    let status = match output.code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    };

    if not_found {
        ExtractionOutcome::Failure {
            cause: FailureCause::ToolNotFound,
            message: format!("'{program}' could not be found ({status})"),
            stdout,
            stderr,
        }
    } else {
        ExtractionOutcome::Failure {
            cause: FailureCause::ExtractionFailed,
            message: format!("'{program}' failed with {status}"),
            stdout,
            stderr,
        }
    }
}

fn classify_launch_error(command: &ExtractCommand, err: io::Error) -> ExtractionOutcome {
    let program = command.program_name().to_string_lossy();
    let cause = if err.kind() == io::ErrorKind::NotFound {
        FailureCause::ToolNotFound
    } else {
        FailureCause::ExtractionFailed
    };
    ExtractionOutcome::Failure {
        cause,
        message: format!("cannot run '{program}': {err}"),
        stdout: None,
        stderr: None,
    }
}

fn non_blank(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

/// Shell and Windows wording for a missing executable.
fn looks_like_missing_command(stderr: &str) -> bool {
    let stderr = stderr.to_ascii_lowercase();
    stderr.contains("command not found")
        || stderr.contains("is not recognized as an internal or external command")
}
