use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};

/// Resolves the configured CSV location against the working directory and
/// makes sure its parent directory exists.
pub fn resolve_artifact_path(configured: &Path) -> std::io::Result<PathBuf> {
    let path = if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        std::env::current_dir()?.join(configured)
    };
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(path)
}

/// Reads the whole CSV artifact; a missing file maps to `NotFound`.
pub async fn read_artifact(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|err| match err.kind() {
        ErrorKind::NotFound => AppError::NotFound(format!("{}", path.display())),
        _ => AppError::IoError(format!("Failed to read {}: {}", path.display(), err)),
    })
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
