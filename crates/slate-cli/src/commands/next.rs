// Rust guideline compliant 2026-08-29

//! Implementation of the `slate next` command.

use crate::output::OutputFormatter;
use crate::terminal::print_warning;
use anyhow::Result;
use slate_app::{RepoContext, Store};
use slate_core::find_next;

/// Shows the next task to work on.
///
/// Picks the highest-priority task whose dependencies are all done,
/// breaking ties by lowest id. Dangling dependencies are reported as
/// warnings.
///
/// # Errors
///
/// Returns an error if the repository is not initialized.
pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let store = Store::open(&ctx)?;

    let pick = find_next(&store.data().tasks);
    for warning in &pick.warnings {
        print_warning(warning);
    }

    match pick.task {
        Some(task) => println!("{}", formatter.format_task(task)),
        None => println!("No eligible task. All caught up or everything is blocked."),
    }

    Ok(())
}
