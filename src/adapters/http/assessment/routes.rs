//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    delete_session, download_export, get_profile, get_progress, get_questionnaire, get_result,
    record_answer, reset_session, save_export, score_session, start_session, AssessmentHandlers,
};

/// Creates the assessment router; nest it under `/api`.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/questionnaire", get(get_questionnaire))
        .route("/sessions", post(start_session))
        .route("/sessions/:id", get(get_progress).delete(delete_session))
        .route("/sessions/:id/answers", put(record_answer).delete(reset_session))
        .route("/sessions/:id/score", post(score_session))
        .route("/sessions/:id/result", get(get_result))
        .route("/sessions/:id/export", get(download_export).post(save_export))
        .route("/profiles/:code", get(get_profile))
        .with_state(handlers)
}
