use std::path::Path;

use tracing::debug;

use crate::config::ReferenceSource;
use crate::errors::AppError;

/// A reference dataset read from disk, kept as the raw delimited text.
#[derive(Debug, Clone)]
pub struct ReferenceDocument {
    pub file_name: String,
    pub period: String,
    pub content: String,
}

impl ReferenceDocument {
    /// Reads the whole file. The file is never written to.
    pub async fn load(source: &ReferenceSource) -> Result<Self, AppError> {
        let content = tokio::fs::read_to_string(&source.path)
            .await
            .map_err(|e| AppError::DocumentLoad {
                path: source.path.display().to_string(),
                source: e,
            })?;

        debug!(
            "Loaded reference document {} ({} bytes, columns: {})",
            source.path.display(),
            content.len(),
            header_columns(&content).len()
        );

        Ok(Self {
            file_name: file_name(&source.path),
            period: source.period.clone(),
            content,
        })
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Column names from the header row of a comma-delimited document.
pub fn header_columns(content: &str) -> Vec<&str> {
    content
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|header| {
            header
                .trim_start_matches('\u{feff}')
                .split(',')
                .map(|c| c.trim().trim_matches('"'))
                .filter(|c| !c.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
