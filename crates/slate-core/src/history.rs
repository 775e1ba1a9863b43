// Rust guideline compliant 2026-08-28

//! In-process audit log of status transitions.
//!
//! The log is append-only, lives for the duration of the process, and is
//! owned by whoever owns the task collection; it is observability data,
//! not durable state.

use crate::models::Status;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single recorded status transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChange {
    /// Identifier string of the task or subtask (`"3"` or `"3.2"`).
    pub item: String,
    /// Status before the transition.
    pub from: Status,
    /// Status after the transition.
    pub to: Status,
    /// When the transition started.
    pub started_at: DateTime<Utc>,
    /// When the transition finished.
    pub finished_at: DateTime<Utc>,
    /// Wall-clock seconds the transition took.
    pub elapsed_secs: f64,
    /// Whether the transition applied.
    pub success: bool,
}

/// Append-only status-transition history.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<StatusChange>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn record(&mut self, change: StatusChange) {
        self.records.push(change);
    }

    /// Returns all recorded transitions, oldest first.
    #[must_use]
    pub fn records(&self) -> &[StatusChange] {
        &self.records
    }

    /// Returns the number of recorded transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
