// Rust guideline compliant 2026-08-28

//! Next-task selection.
//!
//! Picks the best eligible top-level task: dependencies satisfied, not
//! done, not blocked, highest priority first with the lowest id breaking
//! ties.

use crate::ids::find_ref;
use crate::models::{DepRef, Status, Task};
use std::collections::HashSet;

/// Outcome of a scheduling pass.
///
/// Warnings describe dependency references that could not be resolved;
/// the affected tasks are excluded from selection. Surfacing the
/// warnings is the caller's decision.
#[derive(Debug, Default)]
pub struct NextPick<'a> {
    /// The selected task, if any is eligible.
    pub task: Option<&'a Task>,
    /// Human-readable notes about skipped tasks.
    pub warnings: Vec<String>,
}

/// Selects the next task to work on.
///
/// A task-id dependency is satisfied when that task is done; a composite
/// dependency is satisfied when the referenced subtask (or task) is
/// done. A reference that resolves to nothing makes the task ineligible
/// and produces a warning.
///
/// # Arguments
///
/// * `tasks` - The task collection to schedule over
///
/// # Returns
///
/// The pick, with `task: None` when nothing is eligible (including the
/// case where every task is blocked).
#[must_use]
pub fn find_next(tasks: &[Task]) -> NextPick<'_> {
    let completed: HashSet<u32> = tasks
        .iter()
        .filter(|task| task.status == Status::Done)
        .map(|task| task.id)
        .collect();

    let mut warnings = Vec::new();
    let mut eligible: Vec<&Task> = Vec::new();

    for task in tasks {
        if task.status == Status::Done {
            continue;
        }

        let mut deps_met = true;
        for dep in &task.dependencies {
            let satisfied = match dep {
                DepRef::Task(id) => {
                    if find_ref(tasks, *dep).is_none() {
                        warnings.push(format!(
                            "Task {} depends on unknown task {}",
                            task.id, id
                        ));
                        deps_met = false;
                        break;
                    }
                    completed.contains(id)
                }
                DepRef::Subtask { .. } => match find_ref(tasks, *dep) {
                    Some(item) => item.status() == Status::Done,
                    None => {
                        warnings.push(format!(
                            "Task {} depends on unknown item {}",
                            task.id, dep
                        ));
                        deps_met = false;
                        break;
                    }
                },
            };
            if !satisfied {
                deps_met = false;
                break;
            }
        }

        // Blocked tasks still get their dependencies audited above; they
        // just never become candidates.
        if deps_met && task.status != Status::Blocked {
            eligible.push(task);
        }
    }

    eligible.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then(a.id.cmp(&b.id))
    });

    NextPick {
        task: eligible.first().copied(),
        warnings,
    }
}
