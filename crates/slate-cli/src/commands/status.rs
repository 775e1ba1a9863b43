// Rust guideline compliant 2026-08-29

//! Implementation of the `slate status` command.
//!
//! Sets the status of a task or subtask, applying the propagation
//! rules: a completed task completes its subtasks, and the last
//! completed subtask completes its parent.

use crate::terminal::print_success;
use anyhow::Result;
use slate_app::{parse_status, RepoContext, Store};
use slate_core::set_status;

/// Sets the status of the item named by `id`.
///
/// # Arguments
///
/// * `id` - Task or subtask identifier string
/// * `status` - New status value
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - The status string is invalid
/// - The id does not resolve to a task or subtask
/// - The document cannot be saved
pub fn execute(id: &str, status: &str) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let mut store = Store::open(&ctx)?;

    let new_status = parse_status(status)?;
    let store_ref = &mut store;
    let applied = {
        let (data, history) = store_ref.split_mut();
        set_status(&mut data.tasks, id, new_status, history)
    };
    if !applied {
        anyhow::bail!("No task or subtask with id '{}'", id);
    }

    store.save()?;
    print_success(&format!("Set {} to {}", id, new_status));
    Ok(())
}
