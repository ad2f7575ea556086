use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};

/// Where the raw bytes of one input document come from
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Display name used in ingest outcomes
    fn name(&self) -> &str;

    async fn read(&self) -> Result<Vec<u8>>;
}

/// A review document on disk
pub struct FileDocument {
    path: PathBuf,
    name: String,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileDocument {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Document text already held in memory
pub struct InMemoryDocument {
    name: String,
    content: String,
}

impl InMemoryDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for InMemoryDocument {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Result<Vec<u8>> {
        Ok(self.content.clone().into_bytes())
    }
}
