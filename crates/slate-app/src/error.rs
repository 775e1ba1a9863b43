// Rust guideline compliant 2026-08-28

//! Error handling for Slate application services.

use serde::Serialize;
use slate_core::Error as CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for tool and resource responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested task or subtask was not found.
    NotFound,
    /// A subtask was addressed at a task that does not exist.
    ParentNotFound,
    /// Input validation failed.
    ValidationError,
    /// IO failure while reading or writing repository data.
    IoError,
    /// The repository has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
    /// AI generation failed or returned unusable output.
    GenerationError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Slate repository not initialized at {path}. Run 'slate init' first.")]
    RepoNotInitialized {
        /// Path where `.slate` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// AI generation failed or produced no usable output.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Generation(_) => ErrorCode::GenerationError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::ParentNotFound(_) => ErrorCode::ParentNotFound,
                CoreError::InvalidData(_) => ErrorCode::ValidationError,
                CoreError::CycleDetected(_) => ErrorCode::ValidationError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(core) => match core {
                CoreError::ParentNotFound(parent) => Some(serde_json::json!({
                    "parent": parent,
                })),
                CoreError::CycleDetected(cycle) => Some(serde_json::json!({
                    "cycle": cycle,
                })),
                _ => None,
            },
            _ => None,
        }
    }
}
