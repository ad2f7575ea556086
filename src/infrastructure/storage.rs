use std::path::{Path, PathBuf};

use crate::domain::review::ExportArtifact;

/// Write an export artifact to `path`, creating parent directories as needed
pub async fn write_artifact(path: &Path, artifact: &ExportArtifact) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }
    tokio::fs::write(path, &artifact.bytes).await?;
    Ok(path.to_path_buf())
}

/// Resolve the output path: a directory target gets the artifact's file name
pub fn resolve_output_path(target: &Path, artifact: &ExportArtifact) -> PathBuf {
    if target.is_dir() {
        target.join(&artifact.file_name)
    } else {
        target.to_path_buf()
    }
}

async fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}
