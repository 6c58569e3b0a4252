//! In-Memory Session Repository Adapter
//!
//! Holds assessment sessions for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{SessionMutation, SessionRepository};

/// In-memory storage for assessment sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, AssessmentSession>>>,
}

impl InMemorySessionRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn not_found(id: &SessionId) -> DomainError {
    DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
        .with_detail("session_id", id.to_string())
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn modify(
        &self,
        id: &SessionId,
        mutation: SessionMutation<'_>,
    ) -> Result<AssessmentSession, DomainError> {
        let mut sessions = self.sessions.write().await;
        let slot = sessions.get_mut(id).ok_or_else(|| not_found(id))?;

        let mut draft = slot.clone();
        mutation(&mut draft)?;
        *slot = draft.clone();
        Ok(draft)
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<AssessmentSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}
