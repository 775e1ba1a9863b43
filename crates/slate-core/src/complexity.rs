// Rust guideline compliant 2026-08-28

//! Heuristic complexity scoring for tasks and subtasks.
//!
//! The score is additive over the item's surface area: description
//! length, dependency fan-in, subtask count, and presence of detail
//! fields. Subtasks have no children or test strategy, so those factors
//! only apply to tasks. Scores map to three coarse levels used in
//! listings and reports.

use crate::models::{Subtask, Task};
use serde::Serialize;
use std::fmt;

/// Coarse complexity level derived from a [`score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Stable lowercase label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the additive complexity score for a task.
///
/// One point for a description over 100 characters, another over 300;
/// one point per dependency and per subtask; one each for populated
/// `details` and `test_strategy`.
#[must_use]
pub fn score(task: &Task) -> u32 {
    let mut score = description_score(task.description.as_deref());

    score += task.dependencies.len() as u32;
    score += task.subtasks.len() as u32;

    if task.details.is_some() {
        score += 1;
    }
    if task.test_strategy.is_some() {
        score += 1;
    }

    score
}

/// Computes the additive complexity score for a subtask.
///
/// Same description buckets and per-dependency points as [`score`];
/// subtasks carry no children or test strategy, so only `details` adds
/// a further point.
#[must_use]
pub fn score_subtask(subtask: &Subtask) -> u32 {
    let mut score = description_score(subtask.description.as_deref());

    score += subtask.dependencies.len() as u32;

    if subtask.details.is_some() {
        score += 1;
    }

    score
}

fn description_score(description: Option<&str>) -> u32 {
    let len = description.map_or(0, str::len);
    let mut score = 0;
    if len > 100 {
        score += 1;
    }
    if len > 300 {
        score += 1;
    }
    score
}

/// Maps a score to its level: 0 is low, up to 3 is medium, above is high.
#[must_use]
pub fn level(score: u32) -> Level {
    match score {
        0 => Level::Low,
        1..=3 => Level::Medium,
        _ => Level::High,
    }
}

/// Convenience for `level(score(task))`.
#[must_use]
pub fn assess(task: &Task) -> Level {
    level(score(task))
}

/// Convenience for `level(score_subtask(subtask))`.
#[must_use]
pub fn assess_subtask(subtask: &Subtask) -> Level {
    level(score_subtask(subtask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DepRef, Priority, Status};

    fn task() -> Task {
        Task {
            id: 1,
            title: "Task".to_string(),
            description: None,
            details: None,
            test_strategy: None,
            status: Status::Pending,
            priority: Priority::Medium,
            dependencies: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    fn subtask() -> Subtask {
        Subtask {
            id: 1,
            parent_id: 1,
            title: "Subtask".to_string(),
            description: None,
            details: None,
            status: Status::Pending,
            priority: Priority::Medium,
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn test_bare_task_scores_low() {
        let task = task();
        assert_eq!(score(&task), 0);
        assert_eq!(assess(&task), Level::Low);
    }

    #[test]
    fn test_task_description_buckets() {
        let mut task = task();
        task.description = Some("x".repeat(101));
        assert_eq!(score(&task), 1);
        task.description = Some("x".repeat(301));
        assert_eq!(score(&task), 2);
    }

    #[test]
    fn test_task_counts_all_factors() {
        let mut task = task();
        task.description = Some("x".repeat(301));
        task.dependencies = vec![DepRef::Task(2), DepRef::Task(3)];
        task.subtasks = vec![subtask(), subtask()];
        task.details = Some("details".to_string());
        task.test_strategy = Some("manual".to_string());

        assert_eq!(score(&task), 8);
        assert_eq!(assess(&task), Level::High);
    }

    #[test]
    fn test_bare_subtask_scores_low() {
        let subtask = subtask();
        assert_eq!(score_subtask(&subtask), 0);
        assert_eq!(assess_subtask(&subtask), Level::Low);
    }

    #[test]
    fn test_subtask_counts_description_dependencies_and_details() {
        let mut subtask = subtask();
        subtask.description = Some("x".repeat(101));
        subtask.dependencies = vec![DepRef::Task(2)];
        subtask.details = Some("details".to_string());

        assert_eq!(score_subtask(&subtask), 3);
        assert_eq!(assess_subtask(&subtask), Level::Medium);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level(0), Level::Low);
        assert_eq!(level(1), Level::Medium);
        assert_eq!(level(3), Level::Medium);
        assert_eq!(level(4), Level::High);
    }
}
