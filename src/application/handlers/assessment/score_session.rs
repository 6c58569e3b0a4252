//! ScoreSession - Command handler for scoring a session's answers.
//!
//! Scoring an incomplete session is not an error. The caller gets the
//! warning and the list of unanswered questions, and nothing is stored.
//! Scoring runs inside the repository's `modify`, so the stored result
//! always matches the answers it was computed from.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentResult, IncompleteAnswers, ScoreOutcome};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::profile::{profile_for, LearningProfile};
use crate::domain::questionnaire::QuestionBank;
use crate::ports::{mutate_session, SessionRepository};

/// Command to score a session.
#[derive(Debug, Clone)]
pub struct ScoreSessionCommand {
    pub session_id: SessionId,
}

/// Result of a scoring request.
#[derive(Debug, Clone)]
pub enum ScoreSessionResult {
    Scored {
        result: AssessmentResult,
        profile: &'static LearningProfile,
    },
    Incomplete(IncompleteAnswers),
}

/// Handler for scoring sessions.
pub struct ScoreSessionHandler {
    repository: Arc<dyn SessionRepository>,
    bank: Arc<QuestionBank>,
}

impl ScoreSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, bank: Arc<QuestionBank>) -> Self {
        Self { repository, bank }
    }

    pub async fn handle(&self, cmd: ScoreSessionCommand) -> Result<ScoreSessionResult, DomainError> {
        let bank = self.bank.as_ref();
        let mut outcome = None;
        self.repository
            .modify(
                &cmd.session_id,
                mutate_session(|session| {
                    outcome = Some(session.score(bank));
                    Ok(())
                }),
            )
            .await?;

        let outcome = outcome.ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Scoring did not run")
        })?;

        match outcome {
            ScoreOutcome::Scored(result) => {
                tracing::info!(
                    session_id = %cmd.session_id,
                    code = %result.code,
                    totals = %result.totals,
                    "Assessment scored"
                );

                Ok(ScoreSessionResult::Scored {
                    profile: profile_for(result.code.as_str()),
                    result,
                })
            }
            ScoreOutcome::Incomplete(incomplete) => {
                tracing::debug!(
                    session_id = %cmd.session_id,
                    answered = incomplete.answered,
                    total = incomplete.total,
                    "Scoring skipped, answers incomplete"
                );
                Ok(ScoreSessionResult::Incomplete(incomplete))
            }
        }
    }
}
