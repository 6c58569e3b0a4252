//! StartSession - Command handler for opening a new assessment session.

use std::sync::Arc;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::questionnaire::QuestionBank;
use crate::ports::SessionRepository;

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    pub total_questions: usize,
    pub created_at: Timestamp,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    repository: Arc<dyn SessionRepository>,
    bank: Arc<QuestionBank>,
}

impl StartSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, bank: Arc<QuestionBank>) -> Self {
        Self { repository, bank }
    }

    pub async fn handle(&self) -> Result<StartSessionResult, DomainError> {
        let session = AssessmentSession::new();
        self.repository.save(&session).await?;

        tracing::info!(session_id = %session.id(), "Assessment session started");

        Ok(StartSessionResult {
            session_id: session.id(),
            total_questions: self.bank.len(),
            created_at: session.created_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::SessionMutation;
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl SessionRepository for FailingRepository {
        async fn save(&self, _session: &AssessmentSession) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::InternalError, "Repository error"))
        }

        async fn modify(
            &self,
            _id: &SessionId,
            _mutation: SessionMutation<'_>,
        ) -> Result<AssessmentSession, DomainError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            _id: &SessionId,
        ) -> Result<Option<AssessmentSession>, DomainError> {
            unimplemented!()
        }

        async fn delete(&self, _id: &SessionId) -> Result<(), DomainError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_start_session_persists_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = StartSessionHandler::new(repo.clone(), Arc::new(QuestionBank::builtin()));

        let result = handler.handle().await.unwrap();

        assert_eq!(result.total_questions, 12);
        assert!(repo.find_by_id(&result.session_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_start_session_propagates_repository_error() {
        let handler =
            StartSessionHandler::new(Arc::new(FailingRepository), Arc::new(QuestionBank::builtin()));

        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
