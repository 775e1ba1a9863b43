// Rust guideline compliant 2026-08-29

//! Implementation of the `slate show` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use slate_app::{RepoContext, Store};
use slate_core::{complexity, find_item, ItemRef};

/// Shows the task or subtask named by `id`.
///
/// # Errors
///
/// Returns an error if the repository is not initialized or the id does
/// not resolve.
pub fn execute(id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let store = Store::open(&ctx)?;

    match find_item(&store.data().tasks, id) {
        Some(ItemRef::Task(task)) => {
            println!("{}", formatter.format_task(task));
            if !crate::output_mode::is_json_output() {
                println!("Complexity: {}", complexity::assess(task));
            }
        }
        Some(ItemRef::Subtask(subtask)) => {
            println!("ID:       {}", id);
            println!("Title:    {}", subtask.title);
            println!("Status:   {}", subtask.status);
            println!("Priority: {}", subtask.priority);
            if let Some(description) = &subtask.description {
                println!("Description: {}", description);
            }
            if !crate::output_mode::is_json_output() {
                println!("Complexity: {}", complexity::assess_subtask(subtask));
            }
        }
        None => {
            anyhow::bail!("No task or subtask with id '{}'", id);
        }
    }

    Ok(())
}
