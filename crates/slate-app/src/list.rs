// Rust guideline compliant 2026-08-28

//! Listing and filtering helpers for tasks.

use crate::error::{AppError, Result};
use rayon::prelude::*;
use slate_core::{Priority, Status, Task};
use std::str::FromStr;

/// List options for filtering and sorting tasks.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<Status>,
    /// Filter by priority.
    pub priority: Option<Priority>,
    /// Sort field override.
    pub sort: Option<String>,
}

/// Parses a status string into a `Status` value.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<Status> {
    Status::from_str(value)
        .map_err(|_| AppError::InvalidInput(format!("Invalid status filter: {}", value)))
}

/// Parses a priority string into a `Priority` value.
///
/// # Errors
///
/// Returns an error if the priority is invalid.
pub fn parse_priority(value: &str) -> Result<Priority> {
    Priority::from_str(value)
        .map_err(|_| AppError::InvalidInput(format!("Invalid priority filter: {}", value)))
}

/// Filters and sorts a list of tasks based on `ListOptions`.
///
/// # Arguments
///
/// * `tasks` - Tasks to filter and sort
/// * `options` - List options
///
/// # Returns
///
/// The filtered and sorted list of tasks.
#[must_use]
pub fn list_tasks(mut tasks: Vec<Task>, options: &ListOptions) -> Vec<Task> {
    tasks = apply_filters(tasks, options);

    if let Some(field) = &options.sort {
        sort_tasks(&mut tasks, field);
    } else {
        tasks.sort_by_key(|t| t.id);
    }

    tasks
}

fn apply_filters(tasks: Vec<Task>, options: &ListOptions) -> Vec<Task> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |t: &Task| {
        if let Some(status) = options.status {
            if t.status != status {
                return false;
            }
        }

        if let Some(priority) = options.priority {
            if t.priority != priority {
                return false;
            }
        }

        true
    };

    if tasks.len() >= PARALLEL_THRESHOLD {
        tasks.into_par_iter().filter(|t| predicate(t)).collect()
    } else {
        tasks.into_iter().filter(predicate).collect()
    }
}

fn sort_tasks(tasks: &mut [Task], field: &str) {
    match field {
        "title" => tasks.sort_by(|a, b| a.title.cmp(&b.title)),
        "status" => tasks.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
        "priority" => tasks.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
        _ => tasks.sort_by_key(|t| t.id),
    }
}
