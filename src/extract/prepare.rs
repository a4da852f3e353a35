use std::path::Path;

use tokio::fs;

use crate::error::PrepareError;

/// Create `dir` and any missing parents. An existing directory is fine.
pub async fn ensure_dir(dir: &Path) -> Result<(), PrepareError> {
    fs::create_dir_all(dir).await.map_err(|source| PrepareError {
        path: dir.to_path_buf(),
        source,
    })
}
