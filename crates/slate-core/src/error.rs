// Rust guideline compliant 2026-08-28

//! Error types for the Slate core library.

use thiserror::Error;

/// Result type alias for Slate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Slate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid task or configuration data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Task or subtask not found.
    #[error("Task not found: {0}")]
    NotFound(String),

    /// Parent task missing when adding a subtask.
    #[error("Parent task not found: {0}")]
    ParentNotFound(u32),

    /// Cycle detected in the dependency graph.
    #[error("Cycle detected: {0:?}")]
    CycleDetected(Vec<String>),
}
