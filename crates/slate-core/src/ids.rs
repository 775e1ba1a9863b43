// Rust guideline compliant 2026-08-28

//! Identifier resolution for tasks and subtasks.
//!
//! Identifiers are either a plain integer (`"3"`) naming a top-level task
//! or a composite (`"3.2"`) naming a subtask within its parent. Every
//! failure path returns `None`; malformed input is never an error here
//! because the caller decides whether absence matters.

use crate::models::{DepRef, Subtask, Task};

/// Resolved view of a task or subtask.
#[derive(Debug, Clone, Copy)]
pub enum ItemRef<'a> {
    /// A top-level task.
    Task(&'a Task),
    /// A subtask.
    Subtask(&'a Subtask),
}

impl<'a> ItemRef<'a> {
    /// Returns the item's current status.
    #[must_use]
    pub fn status(&self) -> crate::models::Status {
        match self {
            ItemRef::Task(task) => task.status,
            ItemRef::Subtask(subtask) => subtask.status,
        }
    }

    /// Returns the item's title.
    #[must_use]
    pub fn title(&self) -> &'a str {
        match self {
            ItemRef::Task(task) => &task.title,
            ItemRef::Subtask(subtask) => &subtask.title,
        }
    }
}

/// Mutable resolved view of a task or subtask.
#[derive(Debug)]
pub enum ItemMut<'a> {
    /// A top-level task.
    Task(&'a mut Task),
    /// A subtask.
    Subtask(&'a mut Subtask),
}

/// Parses an identifier string into a reference shape.
///
/// Returns `None` for anything that is not a plain integer or an
/// `"N.M"` composite with two non-empty integer parts.
#[must_use]
pub fn parse_id(id: &str) -> Option<DepRef> {
    id.parse().ok()
}

/// Finds a task by its integer id.
#[must_use]
pub fn find_task(tasks: &[Task], id: u32) -> Option<&Task> {
    tasks.iter().find(|task| task.id == id)
}

/// Finds a task by its integer id, mutably.
#[must_use]
pub fn find_task_mut(tasks: &mut [Task], id: u32) -> Option<&mut Task> {
    tasks.iter_mut().find(|task| task.id == id)
}

/// Resolves an identifier string against the collection.
///
/// Composite ids resolve the parent first, then the subtask within it;
/// failure at either step yields `None`.
#[must_use]
pub fn find_item<'a>(tasks: &'a [Task], id: &str) -> Option<ItemRef<'a>> {
    match parse_id(id)? {
        DepRef::Task(task_id) => find_task(tasks, task_id).map(ItemRef::Task),
        DepRef::Subtask { parent, sub } => find_task(tasks, parent)?
            .subtasks
            .iter()
            .find(|subtask| subtask.id == sub)
            .map(ItemRef::Subtask),
    }
}

/// Resolves an identifier string against the collection, mutably.
#[must_use]
pub fn find_item_mut<'a>(tasks: &'a mut [Task], id: &str) -> Option<ItemMut<'a>> {
    match parse_id(id)? {
        DepRef::Task(task_id) => find_task_mut(tasks, task_id).map(ItemMut::Task),
        DepRef::Subtask { parent, sub } => find_task_mut(tasks, parent)?
            .subtasks
            .iter_mut()
            .find(|subtask| subtask.id == sub)
            .map(ItemMut::Subtask),
    }
}

/// Resolves a dependency reference against the collection.
#[must_use]
pub fn find_ref<'a>(tasks: &'a [Task], dep: DepRef) -> Option<ItemRef<'a>> {
    match dep {
        DepRef::Task(task_id) => find_task(tasks, task_id).map(ItemRef::Task),
        DepRef::Subtask { parent, sub } => find_task(tasks, parent)?
            .subtasks
            .iter()
            .find(|subtask| subtask.id == sub)
            .map(ItemRef::Subtask),
    }
}
