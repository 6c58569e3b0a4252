//! Assessment application handlers.
//!
//! Command and query handlers for answering, scoring, and exporting.

mod delete_session;
mod export_result;
mod get_profile;
mod get_progress;
mod get_questionnaire;
mod get_result;
mod record_answer;
mod reset_session;
mod score_session;
mod start_session;

pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use export_result::{
    ExportResultHandler, ExportResultQuery, RenderedExport, SaveExportCommand,
};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use get_progress::{GetProgressHandler, GetProgressQuery};
pub use get_questionnaire::{
    AxisView, ChoiceView, GetQuestionnaireHandler, QuestionView, QuestionnaireView,
};
pub use get_result::{GetResultHandler, GetResultQuery, ResultView};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use reset_session::{ResetSessionCommand, ResetSessionHandler};
pub use score_session::{ScoreSessionCommand, ScoreSessionHandler, ScoreSessionResult};
pub use start_session::{StartSessionHandler, StartSessionResult};

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::SessionRepository;

/// Loads a session or fails with `SessionNotFound`.
async fn load_session(
    repository: &dyn SessionRepository,
    session_id: &SessionId,
) -> Result<AssessmentSession, DomainError> {
    repository.find_by_id(session_id).await?.ok_or_else(|| {
        DomainError::new(
            ErrorCode::SessionNotFound,
            format!("Session not found: {}", session_id),
        )
        .with_detail("session_id", session_id.to_string())
    })
}
