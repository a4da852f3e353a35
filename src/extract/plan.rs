use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::error::PlanError;
use crate::process::ExtractCommand;
use crate::scan::ArchivePath;

/// External extraction programs and their command-line conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    /// Info-ZIP `unzip`
    Unzip { program: OsString },
    /// RARLAB `unrar`
    Unrar { program: OsString },
    /// `7z` from 7-Zip / p7zip
    SevenZip { program: OsString },
}

impl Tool {
    pub fn unzip() -> Self {
        Tool::Unzip {
            program: "unzip".into(),
        }
    }

    pub fn unrar() -> Self {
        Tool::Unrar {
            program: "unrar".into(),
        }
    }

    pub fn seven_zip() -> Self {
        Tool::SevenZip {
            program: "7z".into(),
        }
    }

    /// Same conventions, different executable (e.g. `7za`, `/opt/bin/unzip`).
    pub fn with_program(self, program: impl Into<OsString>) -> Self {
        let program = program.into();
        match self {
            Tool::Unzip { .. } => Tool::Unzip { program },
            Tool::Unrar { .. } => Tool::Unrar { program },
            Tool::SevenZip { .. } => Tool::SevenZip { program },
        }
    }

    pub fn program(&self) -> &OsString {
        match self {
            Tool::Unzip { program } | Tool::Unrar { program } | Tool::SevenZip { program } => {
                program
            }
        }
    }

    /// Extract everything in `archive` into `output_dir`, overwriting existing files.
    pub fn command(&self, archive: &Path, output_dir: &Path) -> ExtractCommand {
        match self {
            Tool::Unzip { program } => ExtractCommand::new(program)
                .arg("-o")
                .arg("-q")
                .arg(archive)
                .arg("-d")
                .arg(output_dir),
            Tool::Unrar { program } => {
                // unrar treats the destination as a directory only with a trailing separator
                let mut dest = output_dir.as_os_str().to_owned();
                if !dest.to_string_lossy().ends_with(MAIN_SEPARATOR_STR) {
                    dest.push(MAIN_SEPARATOR_STR);
                }
                ExtractCommand::new(program)
                    .arg("x")
                    .arg("-o+")
                    .arg("-y")
                    .arg(archive)
                    .arg(dest)
            }
            Tool::SevenZip { program } => {
                let mut dest = OsString::from("-o");
                dest.push(output_dir);
                ExtractCommand::new(program)
                    .arg("x")
                    .arg(archive)
                    .arg(dest)
                    .arg("-y")
            }
        }
    }
}

/// Extraction tools keyed by lowercase extension.
#[derive(Debug, Clone)]
pub struct ToolTable {
    tools: HashMap<String, Tool>,
}

impl ToolTable {
    pub fn empty() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn with_tool(mut self, extension: &str, tool: Tool) -> Self {
        self.tools.insert(extension.to_ascii_lowercase(), tool);
        self
    }

    pub fn get(&self, extension: &str) -> Option<&Tool> {
        self.tools.get(extension)
    }
}

impl Default for ToolTable {
    fn default() -> Self {
        Self::empty()
            .with_tool("zip", Tool::unzip())
            .with_tool("rar", Tool::unrar())
            .with_tool("7z", Tool::seven_zip())
    }
}

/// Where one archive goes and how to get it there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPlan {
    pub output_dir: PathBuf,
    pub tool: Tool,
    pub command: ExtractCommand,
}

/// Output directory for `archive`: a sibling named after its stem.
pub fn output_dir(archive: &ArchivePath) -> PathBuf {
    archive.parent().join(archive.stem())
}

/// Plan the extraction of `archive` with the tool registered for its extension.
pub fn plan(archive: &ArchivePath, tools: &ToolTable) -> Result<ExtractionPlan, PlanError> {
    let tool = tools
        .get(archive.extension())
        .ok_or_else(|| PlanError::Unsupported {
            path: archive.path().to_path_buf(),
            extension: archive.extension().to_string(),
        })?
        .clone();
    let output_dir = output_dir(archive);
    let command = tool.command(archive.path(), &output_dir);
    Ok(ExtractionPlan {
        output_dir,
        tool,
        command,
    })
}
