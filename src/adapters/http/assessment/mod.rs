//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRecordedResponse, ErrorResponse, ExportParams, ProfileResponse, ProgressResponse,
    RecordAnswerRequest, ResultResponse, SavedExportResponse, ScoreResponse,
    SessionCreatedResponse,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
