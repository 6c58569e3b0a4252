//! ExportResult - Render a scored session as text or JSON, optionally saving it.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::{AssessmentResult, ExportFormat};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{ResultFileStorage, SessionRepository, StorageError, StoredExport};

/// Query for an in-memory rendering of a session's result.
#[derive(Debug, Clone)]
pub struct ExportResultQuery {
    pub session_id: SessionId,
    pub format: ExportFormat,
}

/// Command to render and persist a session's result.
#[derive(Debug, Clone)]
pub struct SaveExportCommand {
    pub session_id: SessionId,
    pub format: ExportFormat,
}

/// A rendered export ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct RenderedExport {
    pub format: ExportFormat,
    pub file_name: String,
    pub content: String,
}

/// Handler for result exports.
pub struct ExportResultHandler {
    repository: Arc<dyn SessionRepository>,
    storage: Arc<dyn ResultFileStorage>,
}

impl ExportResultHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        storage: Arc<dyn ResultFileStorage>,
    ) -> Self {
        Self { repository, storage }
    }

    /// Renders the latest result without touching storage.
    pub async fn render(&self, query: ExportResultQuery) -> Result<RenderedExport, DomainError> {
        let result = self.scored_result(&query.session_id).await?;
        let content = render(&result, query.format)?;

        Ok(RenderedExport {
            format: query.format,
            file_name: query.format.file_name(),
            content,
        })
    }

    /// Renders the latest result and writes it through the storage port.
    ///
    /// A later save of the same format replaces the earlier file.
    pub async fn save(&self, cmd: SaveExportCommand) -> Result<StoredExport, DomainError> {
        let result = self.scored_result(&cmd.session_id).await?;
        let content = render(&result, cmd.format)?;

        let stored = self
            .storage
            .write(&cmd.session_id, cmd.format, &content)
            .await
            .map_err(storage_error)?;

        tracing::info!(
            session_id = %cmd.session_id,
            format = %cmd.format,
            path = %stored.path.display(),
            checksum = %stored.checksum,
            "Result export saved"
        );

        Ok(stored)
    }

    async fn scored_result(&self, session_id: &SessionId) -> Result<AssessmentResult, DomainError> {
        let session = load_session(self.repository.as_ref(), session_id).await?;
        session.result().cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::ResultNotAvailable,
                "Session has not been scored yet",
            )
            .with_detail("session_id", session_id.to_string())
        })
    }
}

fn render(result: &AssessmentResult, format: ExportFormat) -> Result<String, DomainError> {
    result.render(format).map_err(|e| {
        DomainError::new(ErrorCode::InternalError, format!("Failed to render export: {}", e))
    })
}

fn storage_error(err: StorageError) -> DomainError {
    DomainError::new(ErrorCode::StorageError, err.to_string())
}
