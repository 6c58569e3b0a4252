//! GetProgress - Query handler for a session's answer progress.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::Progress;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::QuestionBank;
use crate::ports::SessionRepository;

/// Query for one session's progress.
#[derive(Debug, Clone)]
pub struct GetProgressQuery {
    pub session_id: SessionId,
}

pub struct GetProgressHandler {
    repository: Arc<dyn SessionRepository>,
    bank: Arc<QuestionBank>,
}

impl GetProgressHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, bank: Arc<QuestionBank>) -> Self {
        Self { repository, bank }
    }

    pub async fn handle(&self, query: GetProgressQuery) -> Result<Progress, DomainError> {
        let session = load_session(self.repository.as_ref(), &query.session_id).await?;
        Ok(session.progress(&self.bank))
    }
}
