//! Filesystem storage adapter for exported results

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::domain::assessment::ExportFormat;
use crate::domain::foundation::SessionId;
use crate::ports::{ResultFileStorage, StorageError, StoredExport};

/// Filesystem-based result storage
///
/// Files are laid out as {base_dir}/results/{session_id}/learning_mbti_result.{txt,json}
pub struct FsResultStorage {
    base_dir: PathBuf,
}

impl FsResultStorage {
    /// Create new filesystem storage with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn session_dir(&self, session_id: &SessionId) -> PathBuf {
        self.base_dir.join("results").join(session_id.to_string())
    }

    async fn ensure_dir_exists(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::IoError(format!("Failed to create directory: {}", e)))?;
        }
        Ok(())
    }
}

fn map_io(action: &str, e: std::io::Error) -> StorageError {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => {
            StorageError::PermissionDenied(format!("Cannot {} file: {}", action, e))
        }
        std::io::ErrorKind::NotFound => StorageError::NotFound(e.to_string()),
        _ => StorageError::IoError(format!("Failed to {} file: {}", action, e)),
    }
}

#[async_trait]
impl ResultFileStorage for FsResultStorage {
    async fn write(
        &self,
        session_id: &SessionId,
        format: ExportFormat,
        content: &str,
    ) -> Result<StoredExport, StorageError> {
        let file_path = self.export_path(session_id, format);
        self.ensure_dir_exists(&file_path).await?;

        // Write to a uniquely named sibling, then rename over the target
        let temp_path = file_path.with_extension(format!(
            "{}.{}.tmp",
            format.extension(),
            Uuid::new_v4()
        ));
        fs::write(&temp_path, content)
            .await
            .map_err(|e| map_io("write", e))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| map_io("rename", e))?;

        tracing::debug!(path = %file_path.display(), %format, "Wrote result export");

        Ok(StoredExport {
            path: file_path,
            checksum: self.compute_checksum(content),
            bytes: content.len(),
        })
    }

    async fn delete_all(&self, session_id: &SessionId) -> Result<(), StorageError> {
        let dir = self.session_dir(session_id);

        if !dir.exists() {
            // Not an error - idempotent delete
            return Ok(());
        }

        fs::remove_dir_all(&dir)
            .await
            .map_err(|e| map_io("delete", e))
    }

    fn compute_checksum(&self, content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn export_path(&self, session_id: &SessionId, format: ExportFormat) -> PathBuf {
        self.session_dir(session_id).join(format.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn read_back(
        storage: &FsResultStorage,
        session_id: &SessionId,
        format: ExportFormat,
    ) -> String {
        fs::read_to_string(storage.export_path(session_id, format))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsResultStorage::new(temp_dir.path());
        let session_id = SessionId::new();

        let content = "[8비트 학습 성향 진단 결과]\nMBTI: ESTJ";

        let stored = storage
            .write(&session_id, ExportFormat::Text, content)
            .await
            .unwrap();
        assert!(stored.path.exists());
        assert_eq!(stored.bytes, content.len());

        assert_eq!(read_back(&storage, &session_id, ExportFormat::Text).await, content);
    }

    #[tokio::test]
    async fn test_formats_use_separate_files() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsResultStorage::new(temp_dir.path());
        let session_id = SessionId::new();

        storage.write(&session_id, ExportFormat::Text, "text").await.unwrap();
        storage.write(&session_id, ExportFormat::Json, "{}").await.unwrap();

        assert_eq!(read_back(&storage, &session_id, ExportFormat::Text).await, "text");
        assert_eq!(read_back(&storage, &session_id, ExportFormat::Json).await, "{}");
    }

    #[tokio::test]
    async fn test_delete_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsResultStorage::new(temp_dir.path());
        let session_id = SessionId::new();

        storage.write(&session_id, ExportFormat::Text, "x").await.unwrap();
        storage.delete_all(&session_id).await.unwrap();
        assert!(!storage.export_path(&session_id, ExportFormat::Text).exists());

        storage.delete_all(&session_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_checksum_matches_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsResultStorage::new(temp_dir.path());

        let stored = storage
            .write(&SessionId::new(), ExportFormat::Json, "{\"mbti\":\"INTP\"}")
            .await
            .unwrap();

        assert_eq!(stored.checksum, storage.compute_checksum("{\"mbti\":\"INTP\"}"));
        assert_eq!(stored.checksum.len(), 64);
        assert_ne!(stored.checksum, storage.compute_checksum("other"));
    }

    #[tokio::test]
    async fn test_export_path_layout() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsResultStorage::new(temp_dir.path());
        let session_id = SessionId::new();

        let path = storage.export_path(&session_id, ExportFormat::Json);
        let path = path.to_str().unwrap();
        assert!(path.contains(&session_id.to_string()));
        assert!(path.ends_with("learning_mbti_result.json"));
    }

    #[tokio::test]
    async fn test_rewrite_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsResultStorage::new(temp_dir.path());
        let session_id = SessionId::new();

        storage.write(&session_id, ExportFormat::Text, "version 1").await.unwrap();
        storage.write(&session_id, ExportFormat::Text, "version 2").await.unwrap();

        assert_eq!(read_back(&storage, &session_id, ExportFormat::Text).await, "version 2");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writes_leave_one_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(FsResultStorage::new(temp_dir.path()));
        let session_id = SessionId::new();
        let first = "A".repeat(64 * 1024);
        let second = "B".repeat(64 * 1024);

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let storage = storage.clone();
                let content = if i % 2 == 0 { first.clone() } else { second.clone() };
                tokio::spawn(async move {
                    storage.write(&session_id, ExportFormat::Text, &content).await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let content = read_back(&storage, &session_id, ExportFormat::Text).await;
        assert!(content == first || content == second);

        let mut entries = fs::read_dir(storage.session_dir(&session_id)).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(names, vec!["learning_mbti_result.txt".to_string()]);
    }
}
