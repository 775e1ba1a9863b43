// Rust guideline compliant 2026-08-29

//! Implementation of the `slate check` command.
//!
//! Runs dependency graph checks and reports any cycle with a witness
//! path.

use crate::terminal::{print_error, print_success};
use anyhow::Result;
use slate_app::{RepoContext, Store};
use slate_core::find_cycle;

/// Checks the dependency graph for cycles.
///
/// # Errors
///
/// Returns an error if the repository is not initialized or a cycle is
/// found. The cycle's witness path is printed before returning.
pub fn execute() -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let store = Store::open(&ctx)?;

    match find_cycle(&store.data().tasks) {
        Some(cycle) => {
            print_error(&format!("Dependency cycle: {}", cycle.join(" -> ")));
            anyhow::bail!("Dependency graph contains a cycle");
        }
        None => {
            print_success("No dependency cycles found");
            Ok(())
        }
    }
}
