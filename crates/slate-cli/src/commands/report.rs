// Rust guideline compliant 2026-08-29

//! Implementation of the `slate report` command.

use crate::terminal::print_success;
use anyhow::Result;
use slate_app::{RepoContext, Store};
use slate_core::report;

/// Generates the markdown progress report.
///
/// # Arguments
///
/// * `output` - Optional file path; stdout when absent
///
/// # Errors
///
/// Returns an error if the repository is not initialized or the file
/// cannot be written.
pub fn execute(output: Option<&str>) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let store = Store::open(&ctx)?;

    let rendered = report::render(store.data());
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            print_success(&format!("Wrote report to {}", path));
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}
