// Rust guideline compliant 2026-08-29

//! MCP tool input and output types for Slate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use slate_core::{Status, Subtask, Task};

/// Empty input for tools without parameters.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct EmptyInput {}

/// A task or subtask payload, flattened to whichever shape matched.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ItemPayload {
    /// A top-level task.
    Task(Task),
    /// A subtask.
    Subtask(Subtask),
}

/// Input parameters for the `get_task` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskInput {
    /// Task or subtask identifier, `"3"` or `"3.2"`.
    pub id: String,
}

/// Output payload for the `get_task` tool.
#[derive(Debug, Clone, Serialize)]
pub struct GetTaskResult {
    /// The requested item.
    pub item: ItemPayload,
    /// Estimated complexity of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
}

/// Output payload for the `next_task` tool.
#[derive(Debug, Clone, Serialize)]
pub struct NextTaskResult {
    /// The selected task, if any is eligible.
    pub task: Option<Task>,
    /// Optional note when nothing is eligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Input parameters for the `set_status` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SetStatusInput {
    /// Task or subtask identifier.
    pub id: String,
    /// Target status, e.g. `"done"` or `"in-progress"`.
    pub status: String,
}

/// Output payload for the `set_status` tool.
#[derive(Debug, Clone, Serialize)]
pub struct SetStatusResult {
    /// The identifier that changed.
    pub id: String,
    /// The applied status.
    pub status: Status,
}

/// Input parameters for the `add_task` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct AddTaskInput {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority, `"low"` / `"medium"` / `"high"`; config default when absent.
    pub priority: Option<String>,
    /// Dependency identifiers, `"N"` or `"N.M"`.
    pub dependencies: Option<Vec<String>>,
}

/// Output payload for the `add_task` tool.
#[derive(Debug, Clone, Serialize)]
pub struct AddTaskResult {
    /// The created task.
    pub task: Task,
}

/// Input parameters for the `add_subtask` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct AddSubtaskInput {
    /// Parent task id.
    pub parent: u32,
    /// Subtask title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority, `"low"` / `"medium"` / `"high"`; config default when absent.
    pub priority: Option<String>,
    /// Dependency identifiers, `"N"` or `"N.M"`.
    pub dependencies: Option<Vec<String>>,
}

/// Output payload for the `add_subtask` tool.
#[derive(Debug, Clone, Serialize)]
pub struct AddSubtaskResult {
    /// Composite identifier of the created subtask, `"N.M"`.
    pub id: String,
    /// The created subtask.
    pub subtask: Subtask,
}

/// Input parameters for the `remove_task` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct RemoveTaskInput {
    /// Task or subtask identifier to remove.
    pub id: String,
}

/// Output payload for the `remove_task` tool.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveTaskResult {
    /// The removed identifier.
    pub id: String,
}

/// Input parameters for the `remove_subtask` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct RemoveSubtaskInput {
    /// Parent task id.
    pub parent: u32,
    /// Sibling id of the subtask to remove.
    pub sub: u32,
}

/// Output payload for the `remove_subtask` tool.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveSubtaskResult {
    /// Composite identifier of the removed subtask.
    pub id: String,
}

/// Output payload for the `report` tool and the `slate://report` resource.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    /// Markdown progress report.
    pub report: String,
}

/// Output payload for the `find_cycles` tool.
#[derive(Debug, Clone, Serialize)]
pub struct FindCyclesResult {
    /// Whether the dependency graph contains a cycle.
    pub has_cycle: bool,
    /// One witness path when a cycle exists, first node repeated last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<String>>,
}

/// Input parameters for the `complexity` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ComplexityInput {
    /// Task id to assess.
    pub id: u32,
}

/// Output payload for the `complexity` tool.
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityResult {
    /// The assessed task id.
    pub id: u32,
    /// Raw heuristic score.
    pub score: u32,
    /// Bucketed level, `"low"` / `"medium"` / `"high"`.
    pub level: String,
}
