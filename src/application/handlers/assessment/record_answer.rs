//! RecordAnswer - Command handler for selecting a choice on a question.

use std::sync::Arc;

use crate::domain::assessment::Progress;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::{Choice, QuestionBank, QuestionKey};
use crate::ports::{mutate_session, SessionRepository};

/// Command to record one answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub session_id: SessionId,
    pub key: QuestionKey,
    pub choice: Choice,
}

/// Result of recording an answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerResult {
    /// Choice that was overwritten, if any.
    pub previous: Option<Choice>,
    pub progress: Progress,
}

/// Handler for recording answers.
pub struct RecordAnswerHandler {
    repository: Arc<dyn SessionRepository>,
    bank: Arc<QuestionBank>,
}

impl RecordAnswerHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, bank: Arc<QuestionBank>) -> Self {
        Self { repository, bank }
    }

    pub async fn handle(&self, cmd: RecordAnswerCommand) -> Result<RecordAnswerResult, DomainError> {
        let bank = self.bank.as_ref();
        let mut previous = None;
        let session = self
            .repository
            .modify(
                &cmd.session_id,
                mutate_session(|session| {
                    previous = session.record_answer(bank, cmd.key, cmd.choice)?;
                    Ok(())
                }),
            )
            .await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            question = %cmd.key,
            choice = %cmd.choice,
            "Answer recorded"
        );

        Ok(RecordAnswerResult {
            previous,
            progress: session.progress(bank),
        })
    }
}
