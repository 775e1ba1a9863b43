// Rust guideline compliant 2026-08-28

//! PRD intake: generate a task document from a requirements file and
//! merge it into the store.

use crate::error::{AppError, Result};
use crate::generator::TaskGenerator;
use crate::store::Store;
use serde::Serialize;
use slate_core::TaskData;
use std::collections::HashSet;
use std::path::Path;

/// Outcome of a PRD intake run.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeSummary {
    /// Number of new top-level tasks appended.
    pub added_tasks: usize,
    /// Number of subtasks merged into tasks that already existed.
    pub merged_subtasks: usize,
}

/// Reads a requirements document, generates tasks, and merges them.
///
/// Generated tasks whose id is not present yet are appended whole.
/// When a generated task collides with an existing id, only its
/// subtasks with unseen sibling ids are merged in; the existing task's
/// own fields are never overwritten. The merged document is validated
/// and saved before returning.
///
/// # Arguments
///
/// * `store` - The open store to merge into
/// * `generator` - Backend producing the task document
/// * `prd_path` - Path to the requirements document
///
/// # Errors
///
/// Returns an error if:
/// - The file is missing or empty
/// - Generation fails or the payload is not a valid task document
/// - The merged document fails validation or cannot be saved
pub fn parse_prd(
    store: &mut Store,
    generator: &dyn TaskGenerator,
    prd_path: &Path,
) -> Result<IntakeSummary> {
    let content = std::fs::read_to_string(prd_path)?;
    if content.trim().is_empty() {
        return Err(AppError::InvalidInput(format!(
            "PRD file '{}' is empty",
            prd_path.display()
        )));
    }

    let payload = generator.generate_tasks(&content)?;
    let mut generated: TaskData = serde_json::from_str(&payload)
        .map_err(|e| AppError::Generation(format!("Generated payload is not a task document: {}", e)))?;
    generated.normalize();

    let mut added_tasks = 0;
    let mut merged_subtasks = 0;

    let data = store.data_mut();
    // A fresh store adopts the generated metadata wholesale.
    if data.tasks.is_empty() {
        data.meta = generated.meta;
    }
    for mut task in generated.tasks {
        match data.tasks.iter().position(|t| t.id == task.id) {
            None => {
                data.tasks.push(task);
                added_tasks += 1;
            }
            Some(index) => {
                let existing = &mut data.tasks[index];
                let seen: HashSet<u32> = existing.subtasks.iter().map(|s| s.id).collect();
                for mut subtask in task.subtasks.drain(..) {
                    if !seen.contains(&subtask.id) {
                        subtask.parent_id = existing.id;
                        existing.subtasks.push(subtask);
                        merged_subtasks += 1;
                    }
                }
            }
        }
    }

    if data.meta.prd_source.is_none() {
        data.meta.prd_source = Some(prd_path.display().to_string());
    }

    store.save()?;
    Ok(IntakeSummary {
        added_tasks,
        merged_subtasks,
    })
}
