mod system;

pub use system::SystemRunner;

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;

use async_trait::async_trait;

/// A program invocation with its arguments kept as separate values.
///
/// Arguments are never joined into a shell string, so paths with spaces or
/// shell metacharacters reach the program as single literal arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl ExtractCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program_name(&self) -> &OsStr {
        &self.program
    }
}

impl fmt::Display for ExtractCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {:?}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub success: bool,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Capability to run an external program to completion.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `command`, wait for it to exit, and capture its output.
    ///
    /// An `Err` means the process could not be started at all.
    async fn run(&self, command: &ExtractCommand) -> io::Result<ProcessOutput>;
}
