//! HTTP handlers for assessment endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    DeleteSessionCommand, DeleteSessionHandler, ExportResultHandler, ExportResultQuery, GetProfileHandler, GetProfileQuery,
    GetProgressHandler, GetProgressQuery, GetQuestionnaireHandler, GetResultHandler,
    GetResultQuery, RecordAnswerCommand, RecordAnswerHandler, ResetSessionCommand,
    ResetSessionHandler, SaveExportCommand, ScoreSessionCommand, ScoreSessionHandler,
    ScoreSessionResult, StartSessionHandler,
};
use crate::domain::assessment::ExportFormat;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};
use crate::domain::questionnaire::{Axis, Choice, QuestionBank, QuestionKey};
use crate::ports::{ResultFileStorage, SessionRepository};

use super::dto::{
    AnswerRecordedResponse, ErrorResponse, ExportParams, ProfileResponse, ProgressResponse,
    RecordAnswerRequest, ResultResponse, SavedExportResponse, ScoreResponse,
    SessionCreatedResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    start_handler: Arc<StartSessionHandler>,
    record_handler: Arc<RecordAnswerHandler>,
    reset_handler: Arc<ResetSessionHandler>,
    delete_handler: Arc<DeleteSessionHandler>,
    progress_handler: Arc<GetProgressHandler>,
    score_handler: Arc<ScoreSessionHandler>,
    result_handler: Arc<GetResultHandler>,
    export_handler: Arc<ExportResultHandler>,
    questionnaire_handler: Arc<GetQuestionnaireHandler>,
    profile_handler: Arc<GetProfileHandler>,
}

impl AssessmentHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_handler: Arc<StartSessionHandler>,
        record_handler: Arc<RecordAnswerHandler>,
        reset_handler: Arc<ResetSessionHandler>,
        delete_handler: Arc<DeleteSessionHandler>,
        progress_handler: Arc<GetProgressHandler>,
        score_handler: Arc<ScoreSessionHandler>,
        result_handler: Arc<GetResultHandler>,
        export_handler: Arc<ExportResultHandler>,
        questionnaire_handler: Arc<GetQuestionnaireHandler>,
        profile_handler: Arc<GetProfileHandler>,
    ) -> Self {
        Self {
            start_handler,
            record_handler,
            reset_handler,
            delete_handler,
            progress_handler,
            score_handler,
            result_handler,
            export_handler,
            questionnaire_handler,
            profile_handler,
        }
    }

    /// Builds every handler over one repository, bank, and export store.
    pub fn wire(
        repository: Arc<dyn SessionRepository>,
        bank: Arc<QuestionBank>,
        storage: Arc<dyn ResultFileStorage>,
    ) -> Self {
        Self::new(
            Arc::new(StartSessionHandler::new(repository.clone(), bank.clone())),
            Arc::new(RecordAnswerHandler::new(repository.clone(), bank.clone())),
            Arc::new(ResetSessionHandler::new(repository.clone(), bank.clone())),
            Arc::new(DeleteSessionHandler::new(repository.clone(), storage.clone())),
            Arc::new(GetProgressHandler::new(repository.clone(), bank.clone())),
            Arc::new(ScoreSessionHandler::new(repository.clone(), bank.clone())),
            Arc::new(GetResultHandler::new(repository.clone())),
            Arc::new(ExportResultHandler::new(repository, storage)),
            Arc::new(GetQuestionnaireHandler::new(bank)),
            Arc::new(GetProfileHandler::new()),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/questionnaire - Questions and answer scale
pub async fn get_questionnaire(State(handlers): State<AssessmentHandlers>) -> Response {
    (StatusCode::OK, Json(handlers.questionnaire_handler.handle())).into_response()
}

/// POST /api/sessions - Start a new session
pub async fn start_session(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.start_handler.handle().await {
        Ok(result) => {
            let response = SessionCreatedResponse::from(result);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/sessions/:id - Session progress
pub async fn get_progress(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .progress_handler
        .handle(GetProgressQuery { session_id })
        .await
    {
        Ok(progress) => {
            (StatusCode::OK, Json(ProgressResponse::new(session_id, progress))).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// PUT /api/sessions/:id/answers - Record or overwrite one answer
pub async fn record_answer(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
    payload: Result<Json<RecordAnswerRequest>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };

    let cmd = match build_record_command(session_id, req) {
        Ok(cmd) => cmd,
        Err(e) => return handle_assessment_error(e.into()),
    };

    match handlers.record_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(AnswerRecordedResponse::new(session_id, result)),
        )
            .into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// DELETE /api/sessions/:id/answers - Clear every answer
pub async fn reset_session(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .reset_handler
        .handle(ResetSessionCommand { session_id })
        .await
    {
        Ok(progress) => {
            (StatusCode::OK, Json(ProgressResponse::new(session_id, progress))).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// DELETE /api/sessions/:id - Discard the session and its saved exports
pub async fn delete_session(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteSessionCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/sessions/:id/score - Score the session
///
/// An incomplete session is answered with 200 and `status: "incomplete"`.
pub async fn score_session(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .score_handler
        .handle(ScoreSessionCommand { session_id })
        .await
    {
        Ok(ScoreSessionResult::Scored { result, profile }) => {
            let response = ScoreResponse::Scored {
                result,
                profile: profile.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(ScoreSessionResult::Incomplete(incomplete)) => {
            (StatusCode::OK, Json(ScoreResponse::from(incomplete))).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/sessions/:id/result - Latest scored result
pub async fn get_result(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .result_handler
        .handle(GetResultQuery { session_id })
        .await
    {
        Ok(view) => {
            let response = ResultResponse {
                result: view.result,
                profile: view.profile.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/sessions/:id/export?format=text|json - Download the result
pub async fn download_export(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
    Query(params): Query<ExportParams>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let format = match parse_format(params) {
        Ok(format) => format,
        Err(response) => return response,
    };

    match handlers
        .export_handler
        .render(ExportResultQuery { session_id, format })
        .await
    {
        Ok(export) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, export.format.content_type().to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.file_name),
                ),
            ],
            export.content,
        )
            .into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/sessions/:id/export?format=text|json - Save the result to disk
pub async fn save_export(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
    Query(params): Query<ExportParams>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let format = match parse_format(params) {
        Ok(format) => format,
        Err(response) => return response,
    };

    match handlers
        .export_handler
        .save(SaveExportCommand { session_id, format })
        .await
    {
        Ok(stored) => (StatusCode::CREATED, Json(SavedExportResponse::from(stored))).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/profiles/:code - Profile for a type code
pub async fn get_profile(
    State(handlers): State<AssessmentHandlers>,
    Path(code): Path<String>,
) -> Response {
    let profile = handlers.profile_handler.handle(GetProfileQuery { code });
    (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn parse_format(params: ExportParams) -> Result<ExportFormat, Response> {
    match params.format {
        None => Ok(ExportFormat::default()),
        Some(raw) => ExportFormat::from_str(&raw).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }),
    }
}

fn build_record_command(
    session_id: SessionId,
    req: RecordAnswerRequest,
) -> Result<RecordAnswerCommand, ValidationError> {
    let axis = req.axis.parse::<Axis>()?;
    let index = u8::try_from(req.index).map_err(|_| {
        ValidationError::out_of_range(
            "index",
            1,
            u8::MAX as i32,
            req.index.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        )
    })?;
    let choice = Choice::try_from(req.choice)?;

    Ok(RecordAnswerCommand {
        session_id,
        key: QuestionKey::new(axis, index),
        choice,
    })
}

fn handle_assessment_error(error: DomainError) -> Response {
    let status = match error.code() {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ResultNotAvailable => StatusCode::CONFLICT,
        ErrorCode::StorageError | ErrorCode::InternalError => {
            tracing::error!(error = %error, "Assessment request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse::from(&error))).into_response()
}
