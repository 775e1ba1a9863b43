// Rust guideline compliant 2026-08-28

//! Task expansion: break a task into AI-generated subtasks.

use crate::error::{AppError, Result};
use crate::generator::TaskGenerator;
use crate::store::Store;
use serde::Deserialize;
use slate_core::{
    filter_dependencies, find_task, find_task_mut, parse_id, DepRef, Status, Subtask, Task,
};
use std::collections::HashMap;

/// Subtask draft as produced by the generator.
///
/// Dependencies may arrive as sequence indices (1-based position in the
/// generated list), as sibling titles, or as `"N.M"` strings; all three
/// forms are rewritten to composite references before storage.
#[derive(Debug, Deserialize)]
struct SubtaskDraft {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    dependencies: Vec<serde_json::Value>,
}

/// Expands the task named by `id` into generated subtasks.
///
/// Composite ids and tasks already done are refused. Drafts that fail
/// validation (an empty title) are skipped individually; dependencies
/// that cannot be resolved after rewriting are dropped. New subtasks
/// get sequential sibling ids after the existing maximum and inherit
/// the parent's priority.
///
/// # Arguments
///
/// * `store` - The open store
/// * `generator` - Backend producing subtask drafts
/// * `id` - Identifier of the task to expand
/// * `target_count` - Desired subtask count, passed to the generator as a hint
///
/// # Returns
///
/// The number of subtasks appended.
///
/// # Errors
///
/// Returns an error if:
/// - The id is malformed, composite, or names no task
/// - The task is already done
/// - Generation fails or yields no valid subtasks
/// - The updated document cannot be saved
pub fn expand_task(
    store: &mut Store,
    generator: &dyn TaskGenerator,
    id: &str,
    target_count: u8,
) -> Result<usize> {
    let task_id = match parse_id(id) {
        Some(DepRef::Task(task_id)) => task_id,
        Some(DepRef::Subtask { .. }) => {
            return Err(AppError::InvalidInput(format!(
                "'{}' is a subtask and cannot be expanded",
                id
            )));
        }
        None => {
            return Err(AppError::InvalidInput(format!("Invalid id '{}'", id)));
        }
    };

    let Some(task) = find_task(&store.data().tasks, task_id) else {
        return Err(AppError::Core(slate_core::Error::NotFound(id.to_string())));
    };
    if task.status == Status::Done {
        return Err(AppError::InvalidInput(format!(
            "Task '{}' is already done",
            id
        )));
    }

    let title = task.title.clone();
    let description = task.description.clone();
    let context = expansion_context(task, target_count);
    let priority = task.priority;
    let next_sub_id = task.subtasks.iter().map(|s| s.id).max().unwrap_or(0) + 1;

    let payload = generator.expand_task(&title, description.as_deref(), &context)?;
    let drafts: Vec<SubtaskDraft> = serde_json::from_str(&payload).map_err(|e| {
        AppError::Generation(format!("Generated payload is not a subtask list: {}", e))
    })?;

    // Titles map to the composite ids the drafts will receive, so
    // title-based dependencies can be rewritten.
    let title_to_ref: HashMap<String, DepRef> = drafts
        .iter()
        .enumerate()
        .map(|(i, draft)| {
            (
                draft.title.clone(),
                DepRef::Subtask {
                    parent: task_id,
                    sub: next_sub_id + i as u32,
                },
            )
        })
        .collect();

    let mut new_subtasks = Vec::new();
    for (i, draft) in drafts.into_iter().enumerate() {
        if draft.title.trim().is_empty() {
            continue;
        }

        new_subtasks.push(Subtask {
            id: next_sub_id + i as u32,
            parent_id: task_id,
            title: draft.title,
            description: draft.description,
            details: draft.details,
            status: Status::Pending,
            priority,
            dependencies: rewrite_dependencies(
                &draft.dependencies,
                task_id,
                next_sub_id,
                &title_to_ref,
            ),
        });
    }

    if new_subtasks.is_empty() {
        return Err(AppError::Generation(
            "No valid subtasks in generated payload".to_string(),
        ));
    }

    let count = new_subtasks.len();
    let new_ids: Vec<u32> = new_subtasks.iter().map(|s| s.id).collect();

    let data = store.data_mut();
    if let Some(parent) = find_task_mut(&mut data.tasks, task_id) {
        parent.subtasks.extend(new_subtasks);
    }

    // Filter against the collection with the new siblings in place, so
    // forward references between drafts survive while dangling ones go.
    for sub_id in new_ids {
        let current = match find_task(&data.tasks, task_id)
            .and_then(|t| t.subtasks.iter().find(|s| s.id == sub_id))
        {
            Some(subtask) => subtask.dependencies.clone(),
            None => continue,
        };
        let (kept, _) = filter_dependencies(&data.tasks, current);
        if let Some(stored) = find_task_mut(&mut data.tasks, task_id)
            .and_then(|t| t.subtasks.iter_mut().find(|s| s.id == sub_id))
        {
            stored.dependencies = kept;
        }
    }

    store.save()?;
    Ok(count)
}

fn expansion_context(task: &Task, target_count: u8) -> String {
    format!(
        "Parent task priority: {}\nExisting subtask count: {}\nDesired subtask count: {}",
        task.priority,
        task.subtasks.len(),
        target_count
    )
}

fn rewrite_dependencies(
    raw: &[serde_json::Value],
    parent: u32,
    next_sub_id: u32,
    title_to_ref: &HashMap<String, DepRef>,
) -> Vec<DepRef> {
    let mut deps = Vec::new();
    for value in raw {
        match value {
            // A bare number is the 1-based position in the generated list.
            // Values outside u32 range are dropped, not truncated.
            serde_json::Value::Number(n) => {
                let index = n.as_u64().and_then(|i| u32::try_from(i).ok());
                if let Some(index) = index.filter(|&i| i >= 1) {
                    if let Some(sub) = next_sub_id.checked_add(index - 1) {
                        deps.push(DepRef::Subtask { parent, sub });
                    }
                }
            }
            serde_json::Value::String(text) => {
                if let Some(dep) = title_to_ref.get(text) {
                    deps.push(*dep);
                } else if let Some(dep) = parse_id(text) {
                    deps.push(dep);
                }
            }
            _ => {}
        }
    }
    deps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::RepoContext;
    use slate_core::{add_task, NewItem, Priority};
    use tempfile::TempDir;

    struct StubGenerator {
        payload: String,
    }

    impl TaskGenerator for StubGenerator {
        fn generate_tasks(&self, _prd: &str) -> Result<String> {
            Ok(self.payload.clone())
        }

        fn expand_task(
            &self,
            _title: &str,
            _description: Option<&str>,
            _context: &str,
        ) -> Result<String> {
            Ok(self.payload.clone())
        }
    }

    fn open_store_with_task(temp_dir: &TempDir) -> Store {
        let ctx = RepoContext::init(Some(temp_dir.path())).unwrap();
        let mut store = Store::open(&ctx).unwrap();
        add_task(
            &mut store.data_mut().tasks,
            NewItem {
                title: "Build the parser".to_string(),
                description: Some("Parse things".to_string()),
                priority: Priority::High,
                dependencies: Vec::new(),
            },
        );
        store
    }

    #[test]
    fn test_expand_appends_valid_drafts() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store_with_task(&temp_dir);
        let generator = StubGenerator {
            payload: r#"[
                {"title": "Tokenize", "dependencies": []},
                {"title": "Build AST", "dependencies": [1]},
                {"title": "", "dependencies": []}
            ]"#
            .to_string(),
        };

        let added = expand_task(&mut store, &generator, "1", 5).unwrap();
        assert_eq!(added, 2);

        let task = &store.data().tasks[0];
        assert_eq!(task.subtasks.len(), 2);
        assert_eq!(task.subtasks[0].id, 1);
        assert_eq!(task.subtasks[0].priority, Priority::High);
        assert_eq!(
            task.subtasks[1].dependencies,
            vec![DepRef::Subtask { parent: 1, sub: 1 }]
        );
    }

    #[test]
    fn test_expand_rewrites_title_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store_with_task(&temp_dir);
        let generator = StubGenerator {
            payload: r#"[
                {"title": "Tokenize"},
                {"title": "Build AST", "dependencies": ["Tokenize"]}
            ]"#
            .to_string(),
        };

        expand_task(&mut store, &generator, "1", 5).unwrap();
        let task = &store.data().tasks[0];
        assert_eq!(
            task.subtasks[1].dependencies,
            vec![DepRef::Subtask { parent: 1, sub: 1 }]
        );
    }

    #[test]
    fn test_expand_drops_out_of_range_index_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store_with_task(&temp_dir);
        // 4294967297 is 2^32 + 1; truncation would alias sibling 1.
        let generator = StubGenerator {
            payload: r#"[
                {"title": "Tokenize"},
                {"title": "Build AST", "dependencies": [4294967297]}
            ]"#
            .to_string(),
        };

        expand_task(&mut store, &generator, "1", 5).unwrap();
        let task = &store.data().tasks[0];
        assert!(
            task.subtasks[1].dependencies.is_empty(),
            "An index outside u32 range must be dropped, not truncated"
        );
    }

    #[test]
    fn test_expand_refuses_composite_id() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store_with_task(&temp_dir);
        let generator = StubGenerator {
            payload: "[]".to_string(),
        };

        assert!(expand_task(&mut store, &generator, "1.1", 5).is_err());
    }

    #[test]
    fn test_expand_refuses_done_task() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store_with_task(&temp_dir);
        store.data_mut().tasks[0].status = Status::Done;
        let generator = StubGenerator {
            payload: "[]".to_string(),
        };

        assert!(expand_task(&mut store, &generator, "1", 5).is_err());
    }

    #[test]
    fn test_expand_with_no_valid_drafts_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store_with_task(&temp_dir);
        let generator = StubGenerator {
            payload: r#"[{"title": "   "}]"#.to_string(),
        };

        assert!(expand_task(&mut store, &generator, "1", 5).is_err());
        assert!(store.data().tasks[0].subtasks.is_empty());
    }
}
