// Rust guideline compliant 2026-08-29

//! Integration tests for CLI commands.

use slate_app::{list_tasks, ListOptions, RepoContext, Store};
use slate_core::{
    add_subtask, add_task, find_cycle, find_item, find_next, find_task, remove_item, report,
    set_status, DepRef, ItemRef, NewItem, Priority, Status,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to verify .slate directory structure.
fn verify_slate_dir(slate_dir: &Path) {
    assert!(slate_dir.exists(), ".slate directory should exist");
    assert!(
        slate_dir.join("tasks.json").exists(),
        "tasks.json should exist"
    );
    assert!(
        slate_dir.join("config.toml").exists(),
        "config.toml should exist"
    );
}

fn init_repo() -> (TempDir, RepoContext) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ctx = RepoContext::init(Some(temp_dir.path())).expect("Failed to init repository");
    (temp_dir, ctx)
}

fn new_item(title: &str, priority: Priority, dependencies: Vec<DepRef>) -> NewItem {
    NewItem {
        title: title.to_string(),
        description: None,
        priority,
        dependencies,
    }
}

#[test]
fn test_init_creates_correct_structure() {
    let (temp_dir, ctx) = init_repo();
    verify_slate_dir(ctx.slate_dir());
    assert_eq!(ctx.root(), temp_dir.path());

    // Verify tasks.json holds an empty default document
    let content =
        fs::read_to_string(ctx.tasks_path()).expect("Failed to read tasks.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("tasks.json should be valid JSON");
    assert_eq!(
        parsed["tasks"].as_array().map(|tasks| tasks.len()),
        Some(0),
        "Fresh repository should have no tasks"
    );
    assert!(
        parsed["meta"]["projectName"].is_string(),
        "meta should carry a project name"
    );

    // Verify config.toml contains default values
    let config_content =
        fs::read_to_string(ctx.config_path()).expect("Failed to read config.toml");
    assert!(
        config_content.contains("default_priority"),
        "config.toml should contain default_priority"
    );
}

#[test]
fn test_init_idempotent() {
    let (temp_dir, ctx) = init_repo();

    // Add a task, then init again; the existing document must survive
    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("Survivor", Priority::Medium, Vec::new()),
    );
    store.save().expect("Failed to save");

    let ctx2 = RepoContext::init(Some(temp_dir.path())).expect("Re-init should not fail");
    verify_slate_dir(ctx2.slate_dir());

    let store = Store::open(&ctx2).expect("Failed to reopen store");
    assert_eq!(store.data().tasks.len(), 1, "Re-init must not clobber data");
    assert_eq!(store.data().tasks[0].title, "Survivor");
}

#[test]
fn test_add_task_persists() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    let (id, dropped) = add_task(
        &mut store.data_mut().tasks,
        new_item("Write the parser", Priority::High, Vec::new()),
    );
    assert_eq!(id, 1, "First task should get id 1");
    assert!(dropped.is_empty());
    store.save().expect("Failed to save");

    // Reload through a fresh store handle
    let store = Store::open(&ctx).expect("Failed to reopen store");
    let task = find_task(&store.data().tasks, 1).expect("Task should persist");
    assert_eq!(task.title, "Write the parser");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.status, Status::Pending);
}

#[test]
fn test_add_task_filters_dangling_dependencies() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("Base", Priority::Medium, Vec::new()),
    );
    let (id, dropped) = add_task(
        &mut store.data_mut().tasks,
        new_item(
            "Dependent",
            Priority::Medium,
            vec![DepRef::Task(1), DepRef::Task(42)],
        ),
    );
    store.save().expect("Failed to save");

    let task = find_task(&store.data().tasks, id).expect("Task should exist");
    assert_eq!(
        task.dependencies,
        vec![DepRef::Task(1)],
        "Dangling reference should be dropped before storage"
    );
    assert_eq!(dropped, vec![DepRef::Task(42)]);
}

#[test]
fn test_add_subtask_under_parent() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("Parent", Priority::Medium, Vec::new()),
    );
    let (dep_ref, _) = add_subtask(
        &mut store.data_mut().tasks,
        1,
        new_item("Child", Priority::Low, Vec::new()),
    )
    .expect("Failed to add subtask");
    assert_eq!(dep_ref.to_string(), "1.1");
    store.save().expect("Failed to save");

    let store = Store::open(&ctx).expect("Failed to reopen store");
    match find_item(&store.data().tasks, "1.1") {
        Some(ItemRef::Subtask(subtask)) => {
            assert_eq!(subtask.title, "Child");
            assert_eq!(subtask.parent_id, 1, "parent_id must point at the owner");
        }
        other => panic!("Expected subtask, got {:?}", other.is_some()),
    }
}

#[test]
fn test_status_cascades_to_subtasks() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("Parent", Priority::Medium, Vec::new()),
    );
    add_subtask(
        &mut store.data_mut().tasks,
        1,
        new_item("Child A", Priority::Medium, Vec::new()),
    )
    .expect("Failed to add subtask");
    add_subtask(
        &mut store.data_mut().tasks,
        1,
        new_item("Child B", Priority::Medium, Vec::new()),
    )
    .expect("Failed to add subtask");

    let (data, history) = store.split_mut();
    assert!(
        set_status(&mut data.tasks, "1", Status::Done, history),
        "Status change should apply"
    );
    store.save().expect("Failed to save");

    let store = Store::open(&ctx).expect("Failed to reopen store");
    let task = find_task(&store.data().tasks, 1).expect("Task should exist");
    assert_eq!(task.status, Status::Done);
    assert!(
        task.subtasks.iter().all(|s| s.status == Status::Done),
        "Marking a task done must cascade to its subtasks"
    );
}

#[test]
fn test_last_subtask_completes_parent() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("Parent", Priority::Medium, Vec::new()),
    );
    add_subtask(
        &mut store.data_mut().tasks,
        1,
        new_item("Only child", Priority::Medium, Vec::new()),
    )
    .expect("Failed to add subtask");

    let (data, history) = store.split_mut();
    assert!(set_status(&mut data.tasks, "1.1", Status::Done, history));

    let task = find_task(&store.data().tasks, 1).expect("Task should exist");
    assert_eq!(
        task.status,
        Status::Done,
        "Completing the last subtask must complete the parent"
    );
}

#[test]
fn test_list_with_filters() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("High one", Priority::High, Vec::new()),
    );
    add_task(
        &mut store.data_mut().tasks,
        new_item("Low one", Priority::Low, Vec::new()),
    );
    let (data, history) = store.split_mut();
    set_status(&mut data.tasks, "2", Status::Done, history);

    let by_priority = list_tasks(
        store.data().tasks.clone(),
        &ListOptions {
            status: None,
            priority: Some(Priority::High),
            sort: None,
        },
    );
    assert_eq!(by_priority.len(), 1, "Should have 1 high priority task");
    assert_eq!(by_priority[0].title, "High one");

    let by_status = list_tasks(
        store.data().tasks.clone(),
        &ListOptions {
            status: Some(Status::Done),
            priority: None,
            sort: None,
        },
    );
    assert_eq!(by_status.len(), 1, "Should have 1 done task");
    assert_eq!(by_status[0].id, 2);
}

#[test]
fn test_next_prefers_unblocked_priority() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("Foundation", Priority::Low, Vec::new()),
    );
    add_task(
        &mut store.data_mut().tasks,
        new_item("Blocked high", Priority::High, vec![DepRef::Task(1)]),
    );

    // Task 2 outranks task 1 but waits on it
    let pick = find_next(&store.data().tasks);
    assert_eq!(pick.task.expect("Expected a pick").id, 1);

    let (data, history) = store.split_mut();
    set_status(&mut data.tasks, "1", Status::Done, history);
    let pick = find_next(&store.data().tasks);
    assert_eq!(
        pick.task.expect("Expected a pick").id,
        2,
        "Satisfying the dependency should unblock the high priority task"
    );
}

#[test]
fn test_remove_task_and_subtask() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("Keep", Priority::Medium, Vec::new()),
    );
    add_task(
        &mut store.data_mut().tasks,
        new_item("Drop", Priority::Medium, Vec::new()),
    );
    add_subtask(
        &mut store.data_mut().tasks,
        1,
        new_item("Child", Priority::Medium, Vec::new()),
    )
    .expect("Failed to add subtask");

    assert!(remove_item(&mut store.data_mut().tasks, "2"));
    assert!(remove_item(&mut store.data_mut().tasks, "1.1"));
    assert!(
        !remove_item(&mut store.data_mut().tasks, "2"),
        "Removing an absent task should report false"
    );
    store.save().expect("Failed to save");

    let store = Store::open(&ctx).expect("Failed to reopen store");
    assert_eq!(store.data().tasks.len(), 1);
    assert!(store.data().tasks[0].subtasks.is_empty());
}

#[test]
fn test_report_written_to_file() {
    let (temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("Reported task", Priority::Medium, Vec::new()),
    );
    store.save().expect("Failed to save");

    let rendered = report::render(store.data());
    let output = temp_dir.path().join("report.md");
    fs::write(&output, &rendered).expect("Failed to write report");

    let content = fs::read_to_string(&output).expect("Failed to read report");
    assert!(content.contains("Reported task"));
    assert!(
        content.contains("| ID |"),
        "Report should carry the markdown table header"
    );
}

#[test]
fn test_check_detects_cycle() {
    let (_temp_dir, ctx) = init_repo();

    let mut store = Store::open(&ctx).expect("Failed to open store");
    add_task(
        &mut store.data_mut().tasks,
        new_item("First", Priority::Medium, Vec::new()),
    );
    add_task(
        &mut store.data_mut().tasks,
        new_item("Second", Priority::Medium, vec![DepRef::Task(1)]),
    );
    assert!(
        find_cycle(&store.data().tasks).is_none(),
        "A linear chain is not a cycle"
    );

    // Close the loop; creation-time filtering only drops unknown refs
    store.data_mut().tasks[0].dependencies.push(DepRef::Task(2));
    let cycle = find_cycle(&store.data().tasks).expect("Cycle should be detected");
    assert!(cycle.contains(&"1".to_string()));
    assert!(cycle.contains(&"2".to_string()));
}

#[test]
fn test_discover_requires_initialized_repo() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let result = RepoContext::discover(Some(temp_dir.path()));
    assert!(
        result.is_err(),
        "Discovery without a .slate directory must fail"
    );
}
