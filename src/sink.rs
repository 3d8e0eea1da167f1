//! Append-only record of confirmed hits.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// A hit could not be written. Logged by the caller; the run continues.
#[derive(Debug, Error)]
#[error("failed to append to {}: {source}", .path.display())]
pub struct SinkError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Plain-text file receiving one confirmed URL per line.
///
/// The file is created if absent and never truncated. Only the scan's
/// consumer loop writes to it, so appends are not synchronized.
#[derive(Debug, Clone)]
pub struct HitSink {
    path: PathBuf,
}

impl HitSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `url` followed by a newline.
    pub async fn append(&self, url: &str) -> Result<(), SinkError> {
        self.write_line(url).await.map_err(|source| SinkError {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_line(&self, url: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{url}\n").as_bytes()).await?;
        file.flush().await
    }
}
