use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ScanAccessError, ScanError};

/// Candidate paths found under a root, plus the entries that could not be read.
#[derive(Debug, Default)]
pub struct Discovery {
    pub paths: Vec<PathBuf>,
    pub warnings: Vec<ScanAccessError>,
}

/// List candidate files under `root`.
///
/// Flat mode returns every immediate entry of `root`, directories included.
/// Recursive mode descends depth-first and returns only non-directory
/// entries. Unreadable entries become warnings; the walk continues with
/// their siblings. Failing to read `root` itself is fatal in flat mode only.
pub async fn discover(root: &Path, recursive: bool) -> Result<Discovery, ScanError> {
    let root = root.to_path_buf();
    tokio::task::spawn_blocking(move || walk(&root, recursive)).await?
}

fn walk(root: &Path, recursive: bool) -> Result<Discovery, ScanError> {
    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut discovery = Discovery::default();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if recursive && entry.file_type().is_dir() {
                    continue;
                }
                discovery.paths.push(entry.into_path());
            }
            Err(err) if !recursive && is_root_error(&err, root) => {
                return Err(ScanError::RootRead {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => discovery.warnings.push(ScanAccessError(err)),
        }
    }

    Ok(discovery)
}

fn is_root_error(err: &walkdir::Error, root: &Path) -> bool {
    err.depth() == 0 || err.path() == Some(root)
}
