// Rust guideline compliant 2026-08-28

//! Markdown progress report generation.

use crate::models::{Priority, Status, TaskData};
use chrono::Local;
use std::fmt::Write as _;

/// Emoji marker for a status value.
#[must_use]
pub fn status_emoji(status: Status) -> &'static str {
    match status {
        Status::Done => "\u{2705}",       // ✅
        Status::Pending => "\u{26aa}",    // ⚪
        Status::InProgress => "\u{23f3}", // ⏳
        Status::Blocked => "\u{26d4}",    // ⛔
        Status::Deferred => "\u{1f4c5}",  // 📅
        Status::Review => "\u{1f50d}",    // 🔍
    }
}

/// Emoji marker for a priority value.
#[must_use]
pub fn priority_emoji(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "\u{1f525}",  // 🔥
        Priority::Medium => "\u{2b50}", // ⭐
        Priority::Low => "\u{26aa}",    // ⚪
    }
}

fn deps_cell(deps: &[crate::models::DepRef]) -> String {
    if deps.is_empty() {
        "-".to_string()
    } else {
        deps.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Renders the full markdown report for a task collection.
///
/// Tasks are table rows with bold ids; subtasks follow their parent as
/// indented rows using the composite `N.M` id. The footer carries the
/// local generation timestamp.
#[must_use]
pub fn render(data: &TaskData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {} - Progress Report", data.meta.project_name);
    out.push('\n');

    let total = data.tasks.len();
    let done = data
        .tasks
        .iter()
        .filter(|t| t.status == Status::Done)
        .count();
    let _ = writeln!(out, "**Tasks:** {done}/{total} done");
    out.push('\n');

    out.push_str("| ID | Title | Status | Priority | Dependencies | Subtasks |\n");
    out.push_str("|----|-------|--------|----------|--------------|----------|\n");

    for task in &data.tasks {
        let _ = writeln!(
            out,
            "| **{}** | {} | {} {} | {} {} | {} | {} |",
            task.id,
            task.title,
            status_emoji(task.status),
            task.status,
            priority_emoji(task.priority),
            task.priority,
            deps_cell(&task.dependencies),
            task.subtasks.len(),
        );
        for sub in &task.subtasks {
            let _ = writeln!(
                out,
                "| &nbsp;&nbsp;{}.{} | &nbsp;&nbsp;{} | {} {} | {} {} | {} | - |",
                task.id,
                sub.id,
                sub.title,
                status_emoji(sub.status),
                sub.status,
                priority_emoji(sub.priority),
                sub.priority,
                deps_cell(&sub.dependencies),
            );
        }
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "_Generated {}_",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    out
}
