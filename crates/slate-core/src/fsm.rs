// Rust guideline compliant 2026-08-28

//! Status state machine: validated transitions and cross-entity
//! propagation.
//!
//! Two propagation rules apply on top of the plain assignment:
//!
//! - down: completing a task force-completes every subtask it owns;
//! - up: completing the last open subtask completes the parent, guarded
//!   so an already-done ancestor is never revisited.

use crate::history::{History, StatusChange};
use crate::ids::{self, find_task_mut};
use crate::models::{DepRef, Status, Task};
use chrono::Utc;

/// Sets the status of the task or subtask named by `id`.
///
/// Invalid identifiers and unresolvable items yield `false` without any
/// mutation. Setting the current status again is a successful no-op and
/// records nothing. Applied transitions are appended to `history`.
///
/// # Arguments
///
/// * `tasks` - The task collection to mutate
/// * `id` - Identifier string (`"3"` or `"3.2"`)
/// * `new_status` - The status to apply
/// * `history` - Audit log receiving the transition record
///
/// # Returns
///
/// True if the item was found (whether or not a change was needed).
pub fn set_status(tasks: &mut Vec<Task>, id: &str, new_status: Status, history: &mut History) -> bool {
    let Some(parsed) = ids::parse_id(id) else {
        return false;
    };

    let started_at = Utc::now();

    match parsed {
        DepRef::Task(task_id) => {
            let Some(task) = find_task_mut(tasks, task_id) else {
                return false;
            };
            let old = task.status;
            if old == new_status {
                return true;
            }

            task.status = new_status;
            if new_status == Status::Done {
                // Rule down: subtasks follow without re-triggering the
                // upward rule.
                for subtask in &mut task.subtasks {
                    subtask.status = Status::Done;
                }
            }

            let finished_at = Utc::now();
            history.record(StatusChange {
                item: id.to_string(),
                from: old,
                to: new_status,
                started_at,
                finished_at,
                elapsed_secs: (finished_at - started_at).num_milliseconds() as f64 / 1000.0,
                success: true,
            });
            true
        }
        DepRef::Subtask { parent, sub } => {
            let Some(task) = find_task_mut(tasks, parent) else {
                return false;
            };
            let Some(subtask) = task.subtasks.iter_mut().find(|s| s.id == sub) else {
                return false;
            };
            let old = subtask.status;
            if old == new_status {
                return true;
            }

            subtask.status = new_status;

            let finished_at = Utc::now();
            history.record(StatusChange {
                item: id.to_string(),
                from: old,
                to: new_status,
                started_at,
                finished_at,
                elapsed_secs: (finished_at - started_at).num_milliseconds() as f64 / 1000.0,
                success: true,
            });

            if new_status == Status::Done {
                complete_parent(tasks, parent);
            }
            true
        }
    }
}

/// Completes `parent_id` if every subtask it owns is now done.
///
/// The already-done guard keeps propagation from looping should the
/// ownership hierarchy ever grow deeper than the current two levels.
fn complete_parent(tasks: &mut [Task], parent_id: u32) {
    let Some(task) = find_task_mut(tasks, parent_id) else {
        return;
    };
    if task.status == Status::Done {
        return;
    }
    if task.subtasks.is_empty() {
        return;
    }
    if task.subtasks.iter().all(|s| s.status == Status::Done) {
        task.status = Status::Done;
    }
}
