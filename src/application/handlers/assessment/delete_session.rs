//! DeleteSession - Command handler for discarding a session and its saved exports.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{ResultFileStorage, SessionRepository};

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    repository: Arc<dyn SessionRepository>,
    storage: Arc<dyn ResultFileStorage>,
}

impl DeleteSessionHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        storage: Arc<dyn ResultFileStorage>,
    ) -> Self {
        Self { repository, storage }
    }

    /// Removes the session, then every export saved for it.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session does not exist
    /// - `StorageError` if the export directory cannot be removed
    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), DomainError> {
        self.repository.delete(&cmd.session_id).await?;

        self.storage.delete_all(&cmd.session_id).await.map_err(|e| {
            DomainError::new(ErrorCode::StorageError, e.to_string())
                .with_detail("session_id", cmd.session_id.to_string())
        })?;

        tracing::info!(session_id = %cmd.session_id, "Assessment session deleted");

        Ok(())
    }
}
