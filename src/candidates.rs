//! Candidate list loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The candidates file could not be read. Fatal to the run.
#[derive(Debug, Error)]
#[error("failed to read candidates file {}: {source}", .path.display())]
pub struct InputFileError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Split a candidates document into trimmed, non-empty lines.
///
/// Order and duplicates are preserved.
pub fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read candidates from a UTF-8, line-delimited file.
pub async fn load(path: &Path) -> Result<Vec<String>, InputFileError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InputFileError {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse(&content))
}
