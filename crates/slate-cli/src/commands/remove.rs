// Rust guideline compliant 2026-08-29

//! Implementation of the `slate remove` command.

use crate::terminal::print_success;
use anyhow::Result;
use slate_app::{RepoContext, Store};
use slate_core::remove_item;

/// Removes the task or subtask named by `id`.
///
/// Dependency references held by other items are left in place; the
/// rest of the system tolerates dangling references.
///
/// # Errors
///
/// Returns an error if the repository is not initialized, the id does
/// not resolve, or the document cannot be saved.
pub fn execute(id: &str) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let mut store = Store::open(&ctx)?;

    if !remove_item(&mut store.data_mut().tasks, id) {
        anyhow::bail!("No task or subtask with id '{}'", id);
    }

    store.save()?;
    print_success(&format!("Removed {}", id));
    Ok(())
}
