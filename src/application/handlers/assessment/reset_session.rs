//! ResetSession - Command handler for clearing all answers of a session.

use std::sync::Arc;

use crate::domain::assessment::Progress;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::QuestionBank;
use crate::ports::{mutate_session, SessionRepository};

/// Command to reset a session.
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    pub session_id: SessionId,
}

/// Handler for resetting sessions.
pub struct ResetSessionHandler {
    repository: Arc<dyn SessionRepository>,
    bank: Arc<QuestionBank>,
}

impl ResetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, bank: Arc<QuestionBank>) -> Self {
        Self { repository, bank }
    }

    pub async fn handle(&self, cmd: ResetSessionCommand) -> Result<Progress, DomainError> {
        let session = self
            .repository
            .modify(
                &cmd.session_id,
                mutate_session(|session| {
                    session.reset();
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(session_id = %cmd.session_id, "Assessment session reset");

        Ok(session.progress(&self.bank))
    }
}
