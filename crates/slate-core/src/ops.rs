// Rust guideline compliant 2026-08-28

//! Mutating operations over the task collection.
//!
//! All creation goes through these functions so identifiers stay dense
//! and dependency lists only ever contain references that resolved at
//! creation time. Unresolvable dependencies are dropped, not fatal; the
//! dropped set is returned so callers can warn. The one true error is
//! adding a subtask to a parent that does not exist.

use crate::ids::{self, find_task_mut};
use crate::models::{DepRef, Priority, Status, Subtask, Task};
use crate::{Error, Result};

/// Attributes for a new task or subtask.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    /// Title (required, non-empty).
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority; callers supply their configured default.
    pub priority: Priority,
    /// Requested dependencies, filtered before storage.
    pub dependencies: Vec<DepRef>,
}

/// Splits a dependency list into resolvable and dangling references.
///
/// Pure filter: the first vector is what should be stored, the second is
/// what was dropped and may be surfaced as warnings.
#[must_use]
pub fn filter_dependencies(tasks: &[Task], deps: Vec<DepRef>) -> (Vec<DepRef>, Vec<DepRef>) {
    let mut kept = Vec::new();
    let mut dropped = Vec::new();
    for dep in deps {
        if ids::find_ref(tasks, dep).is_some() {
            kept.push(dep);
        } else {
            dropped.push(dep);
        }
    }
    (kept, dropped)
}

/// Adds a new top-level task.
///
/// The id is `max(existing) + 1`, or 1 for an empty collection. This
/// operation cannot fail: unresolvable dependencies are dropped and
/// returned alongside the new task's id.
///
/// # Arguments
///
/// * `tasks` - The task collection to extend
/// * `item` - Attributes for the new task
///
/// # Returns
///
/// The new task's id and the dependency references that were dropped.
pub fn add_task(tasks: &mut Vec<Task>, item: NewItem) -> (u32, Vec<DepRef>) {
    let id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
    let (dependencies, dropped) = filter_dependencies(tasks, item.dependencies);

    tasks.push(Task {
        id,
        title: item.title,
        description: item.description,
        details: None,
        test_strategy: None,
        status: Status::Pending,
        priority: item.priority,
        dependencies,
        subtasks: Vec::new(),
    });

    (id, dropped)
}

/// Adds a subtask to an existing task.
///
/// Sibling ids mirror task ids: `max(existing sibling) + 1`, starting
/// at 1. Dependency filtering matches [`add_task`].
///
/// # Arguments
///
/// * `tasks` - The task collection
/// * `parent_id` - Id of the owning task
/// * `item` - Attributes for the new subtask
///
/// # Returns
///
/// The new subtask's composite reference and the dropped dependencies.
///
/// # Errors
///
/// Returns [`Error::ParentNotFound`] if `parent_id` does not name an
/// existing task; nothing is mutated in that case.
pub fn add_subtask(
    tasks: &mut Vec<Task>,
    parent_id: u32,
    item: NewItem,
) -> Result<(DepRef, Vec<DepRef>)> {
    if ids::find_task(tasks, parent_id).is_none() {
        return Err(Error::ParentNotFound(parent_id));
    }

    let (dependencies, dropped) = filter_dependencies(tasks, item.dependencies);

    // Checked above; resolve again to take the mutable borrow.
    let Some(parent) = find_task_mut(tasks, parent_id) else {
        return Err(Error::ParentNotFound(parent_id));
    };

    let sub_id = parent.subtasks.iter().map(|s| s.id).max().unwrap_or(0) + 1;
    parent.subtasks.push(Subtask {
        id: sub_id,
        parent_id,
        title: item.title,
        description: item.description,
        details: None,
        status: Status::Pending,
        priority: item.priority,
        dependencies,
    });

    Ok((
        DepRef::Subtask {
            parent: parent_id,
            sub: sub_id,
        },
        dropped,
    ))
}

/// Removes a subtask from the task named by `id`.
///
/// # Arguments
///
/// * `tasks` - The task collection
/// * `id` - Identifier string of the owning task
/// * `subtask_id` - Sibling id of the subtask to remove
///
/// # Returns
///
/// True if a subtask was removed; false if the task is absent, owns no
/// subtasks, or no sibling matched.
pub fn remove_subtask(tasks: &mut [Task], id: &str, subtask_id: u32) -> bool {
    let Some(DepRef::Task(task_id)) = ids::parse_id(id) else {
        return false;
    };
    let Some(task) = find_task_mut(tasks, task_id) else {
        return false;
    };
    if task.subtasks.is_empty() {
        return false;
    }

    let before = task.subtasks.len();
    task.subtasks.retain(|s| s.id != subtask_id);
    task.subtasks.len() < before
}

/// Removes the task or subtask named by `id`.
///
/// Composite ids route to subtask removal within the matched parent;
/// simple ids remove the whole task by rebuilding the top-level
/// sequence. Dependency references held by other tasks are deliberately
/// left untouched; dangling references are tolerated throughout.
///
/// # Arguments
///
/// * `tasks` - The task collection
/// * `id` - Identifier string (`"3"` or `"3.2"`)
///
/// # Returns
///
/// True if something was removed.
pub fn remove_item(tasks: &mut Vec<Task>, id: &str) -> bool {
    match ids::parse_id(id) {
        Some(DepRef::Task(task_id)) => {
            let before = tasks.len();
            tasks.retain(|task| task.id != task_id);
            tasks.len() < before
        }
        Some(DepRef::Subtask { parent, sub }) => {
            remove_subtask(tasks, &parent.to_string(), sub)
        }
        None => false,
    }
}
