//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::{RecordAnswerResult, StartSessionResult};
use crate::domain::assessment::{AssessmentResult, IncompleteAnswers, Progress};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::profile::LearningProfile;
use crate::domain::questionnaire::{ChoiceInput, QuestionKey};
use crate::ports::StoredExport;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to record one answer.
///
/// `choice` accepts the scale value (`-2..=2`), its label, or its snake_case name.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAnswerRequest {
    pub axis: String,
    pub index: i64,
    pub choice: ChoiceInput,
}

/// `?format=` query for export endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
    pub total_questions: usize,
    pub created_at: String,
}

impl From<StartSessionResult> for SessionCreatedResponse {
    fn from(result: StartSessionResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            total_questions: result.total_questions,
            created_at: result.created_at.to_iso8601(),
        }
    }
}

/// Progress of one session.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub session_id: String,
    pub answered: usize,
    pub total: usize,
    pub ratio: f64,
    /// Unanswered questions as `AXIS-index`, in questionnaire order.
    pub missing: Vec<String>,
    pub scored: bool,
}

impl ProgressResponse {
    pub fn new(session_id: SessionId, progress: Progress) -> Self {
        Self {
            session_id: session_id.to_string(),
            answered: progress.answered,
            total: progress.total,
            ratio: progress.ratio(),
            missing: keys_to_strings(&progress.missing),
            scored: progress.scored,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerRecordedResponse {
    /// Scale value that was replaced, if the question had been answered before.
    pub previous_choice: Option<i8>,
    #[serde(flatten)]
    pub progress: ProgressResponse,
}

impl AnswerRecordedResponse {
    pub fn new(session_id: SessionId, result: RecordAnswerResult) -> Self {
        Self {
            previous_choice: result.previous.map(|c| c.value()),
            progress: ProgressResponse::new(session_id, result.progress),
        }
    }
}

/// Profile as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub code: Option<String>,
    pub label: String,
    pub desc: String,
    pub tips: Vec<String>,
    pub is_default: bool,
}

impl From<&LearningProfile> for ProfileResponse {
    fn from(profile: &LearningProfile) -> Self {
        Self {
            code: profile.code.map(str::to_string),
            label: profile.label.to_string(),
            desc: profile.description.to_string(),
            tips: profile.tips.iter().map(|t| t.to_string()).collect(),
            is_default: profile.is_default(),
        }
    }
}

/// A scored result with its profile.
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
    pub result: AssessmentResult,
    pub profile: ProfileResponse,
}

/// Outcome of `POST /sessions/:id/score`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreResponse {
    Scored {
        result: AssessmentResult,
        profile: ProfileResponse,
    },
    Incomplete {
        warning: String,
        answered: usize,
        total: usize,
        missing: Vec<String>,
    },
}

impl From<IncompleteAnswers> for ScoreResponse {
    fn from(incomplete: IncompleteAnswers) -> Self {
        ScoreResponse::Incomplete {
            warning: incomplete.warning().to_string(),
            answered: incomplete.answered,
            total: incomplete.total,
            missing: keys_to_strings(&incomplete.missing),
        }
    }
}

/// Where a saved export landed.
#[derive(Debug, Clone, Serialize)]
pub struct SavedExportResponse {
    pub path: String,
    pub checksum: String,
    pub bytes: usize,
}

impl From<StoredExport> for SavedExportResponse {
    fn from(stored: StoredExport) -> Self {
        Self {
            path: stored.path.display().to_string(),
            checksum: stored.checksum,
            bytes: stored.bytes,
        }
    }
}

fn keys_to_strings(keys: &[QuestionKey]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Error response
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };

        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::questionnaire::{Axis, Choice};

    #[test]
    fn record_answer_request_accepts_value_or_label() {
        let req: RecordAnswerRequest =
            serde_json::from_str(r#"{"axis": "EI", "index": 1, "choice": -2}"#).unwrap();
        assert_eq!(Choice::try_from(req.choice).unwrap(), Choice::StronglyDisagree);

        let req: RecordAnswerRequest =
            serde_json::from_str(r#"{"axis": "tf", "index": 3, "choice": "그렇다 (+1)"}"#).unwrap();
        assert_eq!(Choice::try_from(req.choice).unwrap(), Choice::Agree);
    }

    #[test]
    fn incomplete_score_response_is_tagged() {
        let response = ScoreResponse::from(IncompleteAnswers {
            answered: 11,
            total: 12,
            missing: vec![QuestionKey::new(Axis::JP, 3)],
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "incomplete");
        assert_eq!(json["warning"], "모든 문항에 응답해주세요.");
        assert_eq!(json["missing"][0], "JP-3");
    }

    #[test]
    fn error_response_carries_code_and_details() {
        let error = DomainError::new(ErrorCode::SessionNotFound, "Session not found: x")
            .with_detail("session_id", "x");
        let response = ErrorResponse::from(&error);

        assert_eq!(response.code, "SESSION_NOT_FOUND");
        assert_eq!(response.details.unwrap()["session_id"], "x");
    }

    #[test]
    fn error_response_omits_empty_details() {
        let error = DomainError::new(ErrorCode::InternalError, "boom");
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();
        assert!(json.get("details").is_none());
    }
}
