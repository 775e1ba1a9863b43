// Rust guideline compliant 2026-08-30

//! Unit tests for identifier parsing and resolution.

use slate_core::{find_item, find_ref, parse_id, DepRef, ItemRef, Priority, Status, Subtask, Task};

fn task(id: u32) -> Task {
    Task {
        id,
        title: format!("Task {}", id),
        description: None,
        details: None,
        test_strategy: None,
        status: Status::Pending,
        priority: Priority::Medium,
        dependencies: Vec::new(),
        subtasks: Vec::new(),
    }
}

fn fixture() -> Vec<Task> {
    let mut t1 = task(1);
    t1.subtasks = vec![Subtask {
        id: 2,
        parent_id: 1,
        title: "Subtask 1.2".to_string(),
        description: None,
        details: None,
        status: Status::InProgress,
        priority: Priority::High,
        dependencies: Vec::new(),
    }];
    vec![t1, task(3)]
}

#[test]
fn test_parse_simple_id() {
    assert_eq!(parse_id("7"), Some(DepRef::Task(7)));
    assert_eq!(parse_id("0"), Some(DepRef::Task(0)));
}

#[test]
fn test_parse_composite_id() {
    assert_eq!(
        parse_id("3.14"),
        Some(DepRef::Subtask { parent: 3, sub: 14 })
    );
}

#[test]
fn test_parse_rejects_malformed() {
    for bad in ["", ".", "1.", ".2", "1.2.3", "a", "1.b", "-1", "1 .2", " 1"] {
        assert_eq!(parse_id(bad), None, "{:?} should not parse", bad);
    }
}

#[test]
fn test_find_item_task() {
    let tasks = fixture();
    match find_item(&tasks, "3") {
        Some(ItemRef::Task(t)) => assert_eq!(t.id, 3),
        other => panic!("Expected task 3, got {:?}", other.is_some()),
    }
}

#[test]
fn test_find_item_subtask() {
    let tasks = fixture();
    match find_item(&tasks, "1.2") {
        Some(ItemRef::Subtask(s)) => {
            assert_eq!(s.id, 2);
            assert_eq!(s.status, Status::InProgress);
        }
        other => panic!("Expected subtask 1.2, got {:?}", other.is_some()),
    }
}

#[test]
fn test_find_item_absent() {
    let tasks = fixture();
    assert!(find_item(&tasks, "9").is_none());
    assert!(find_item(&tasks, "1.9").is_none());
    assert!(find_item(&tasks, "9.1").is_none());
    assert!(find_item(&tasks, "nonsense").is_none());
}

#[test]
fn test_find_ref_matches_find_item() {
    let tasks = fixture();
    assert!(find_ref(&tasks, DepRef::Task(1)).is_some());
    assert!(find_ref(&tasks, DepRef::Subtask { parent: 1, sub: 2 }).is_some());
    assert!(find_ref(&tasks, DepRef::Subtask { parent: 3, sub: 1 }).is_none());
}
