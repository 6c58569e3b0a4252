//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change a session; query handlers only read.

pub mod handlers;

pub use handlers::assessment::{
    DeleteSessionHandler, ExportResultHandler, GetProfileHandler, GetProgressHandler, GetQuestionnaireHandler,
    GetResultHandler, RecordAnswerHandler, ResetSessionHandler, ScoreSessionHandler,
    StartSessionHandler,
};
