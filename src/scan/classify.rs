use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Extensions recognized as archives, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["zip", "rar", "7z"];

/// A file identified as an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePath {
    path: PathBuf,
    stem: OsString,
    extension: String,
}

impl ArchivePath {
    /// Wrap `path` if its extension is a supported archive type (case-insensitive).
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }
        let stem = path.file_stem()?.to_owned();
        Some(Self {
            path,
            stem,
            extension,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the archive.
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// File name without its final extension (`foo.zip` -> `foo`), bytes preserved.
    pub fn stem(&self) -> &OsStr {
        &self.stem
    }

    /// Lowercase extension without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Keep the paths that are regular files with a supported archive extension.
///
/// Order is preserved. A path that can no longer be stat'ed (for example,
/// removed since discovery) is dropped without error.
pub async fn classify(paths: Vec<PathBuf>) -> Vec<ArchivePath> {
    let mut archives = Vec::new();
    for path in paths {
        let Some(archive) = ArchivePath::new(path) else {
            continue;
        };
        match tokio::fs::metadata(archive.path()).await {
            Ok(meta) if meta.is_file() => archives.push(archive),
            _ => {}
        }
    }
    archives
}
