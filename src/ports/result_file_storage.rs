//! ResultFileStorage port for saving exported results

use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;

use crate::domain::assessment::ExportFormat;
use crate::domain::foundation::SessionId;

/// Errors that can occur during file storage operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// File not found
    NotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// IO error
    IoError(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "File not found: {}", msg),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Where an export landed and the SHA-256 of its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredExport {
    pub path: PathBuf,
    pub checksum: String,
    pub bytes: usize,
}

/// File storage for rendered result exports
#[async_trait]
pub trait ResultFileStorage: Send + Sync {
    /// Write an export, replacing any earlier one of the same format
    async fn write(
        &self,
        session_id: &SessionId,
        format: ExportFormat,
        content: &str,
    ) -> Result<StoredExport, StorageError>;

    /// Remove every export for a session
    async fn delete_all(&self, session_id: &SessionId) -> Result<(), StorageError>;

    /// Compute checksum for content
    fn compute_checksum(&self, content: &str) -> String;

    /// Path an export of `format` is written to
    fn export_path(&self, session_id: &SessionId, format: ExportFormat) -> PathBuf;
}
