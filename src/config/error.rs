//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Failed to read question bank {path}: {source}")]
    BankUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid question bank {path}: {source}")]
    BankInvalid {
        path: PathBuf,
        source: crate::domain::foundation::ValidationError,
    },
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Question bank file not found: {0}")]
    BankNotFound(PathBuf),

    #[error("Export directory must not be empty")]
    EmptyExportDir,
}
