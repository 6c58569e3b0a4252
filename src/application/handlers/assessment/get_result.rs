//! GetResult - Query handler for a session's latest scored result.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::profile::{profile_for, LearningProfile};
use crate::ports::SessionRepository;

#[derive(Debug, Clone)]
pub struct GetResultQuery {
    pub session_id: SessionId,
}

/// Stored result with its profile.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub result: AssessmentResult,
    pub profile: &'static LearningProfile,
}

pub struct GetResultHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetResultHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `SessionNotFound` if the session does not exist
    /// - `ResultNotAvailable` if the session has not been scored since its last change
    pub async fn handle(&self, query: GetResultQuery) -> Result<ResultView, DomainError> {
        let session = load_session(self.repository.as_ref(), &query.session_id).await?;
        let result = session.result().cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::ResultNotAvailable,
                "Session has not been scored yet",
            )
            .with_detail("session_id", query.session_id.to_string())
        })?;

        Ok(ResultView {
            profile: profile_for(result.code.as_str()),
            result,
        })
    }
}
