// Rust guideline compliant 2026-08-28

//! Core data models for Slate.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a task or subtask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started yet.
    #[default]
    Pending,
    /// Currently being worked on.
    InProgress,
    /// Completed.
    Done,
    /// Blocked and not schedulable.
    Blocked,
    /// Postponed for later.
    Deferred,
    /// Awaiting review.
    Review,
}

impl Status {
    /// Returns all valid status values in display order.
    pub const ALL: [Status; 6] = [
        Status::Pending,
        Status::InProgress,
        Status::Done,
        Status::Blocked,
        Status::Deferred,
        Status::Review,
    ];

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Done => "done",
            Status::Blocked => "blocked",
            Status::Deferred => "deferred",
            Status::Review => "review",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in-progress" | "in_progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            "blocked" => Ok(Status::Blocked),
            "deferred" => Ok(Status::Deferred),
            "review" => Ok(Status::Review),
            other => Err(crate::Error::InvalidData(format!(
                "Invalid status '{}'",
                other
            ))),
        }
    }
}

/// Priority of a task or subtask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Returns the scheduling rank (higher is more urgent).
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(crate::Error::InvalidData(format!(
                "Invalid priority '{}'",
                other
            ))),
        }
    }
}

/// Non-owning reference to another task or subtask.
///
/// Serialized as a bare integer for task references and as an `"N.M"`
/// string for subtask references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepRef {
    /// Reference to a top-level task by id.
    Task(u32),
    /// Reference to a subtask by parent and sibling id.
    Subtask {
        /// Id of the owning task.
        parent: u32,
        /// Id of the subtask within its parent.
        sub: u32,
    },
}

impl fmt::Display for DepRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepRef::Task(id) => write!(f, "{}", id),
            DepRef::Subtask { parent, sub } => write!(f, "{}.{}", parent, sub),
        }
    }
}

impl FromStr for DepRef {
    type Err = crate::Error;

    /// Parses `"N"` as a task reference and `"N.M"` as a subtask reference.
    ///
    /// Exactly one separator with two non-empty integer parts denotes a
    /// subtask; any other form must parse as a plain integer. Malformed
    /// input (empty, stray separators, non-numeric parts) is an error,
    /// never a panic.
    fn from_str(value: &str) -> crate::Result<Self> {
        if value.is_empty() {
            return Err(crate::Error::InvalidData("Empty id".to_string()));
        }

        if let Some((left, right)) = value.split_once('.') {
            // A second separator or an empty part means the id is malformed.
            if left.is_empty() || right.is_empty() || right.contains('.') {
                return Err(crate::Error::InvalidData(format!("Invalid id '{}'", value)));
            }
            let parent: u32 = left
                .parse()
                .map_err(|_| crate::Error::InvalidData(format!("Invalid id '{}'", value)))?;
            let sub: u32 = right
                .parse()
                .map_err(|_| crate::Error::InvalidData(format!("Invalid id '{}'", value)))?;
            return Ok(DepRef::Subtask { parent, sub });
        }

        let id: u32 = value
            .parse()
            .map_err(|_| crate::Error::InvalidData(format!("Invalid id '{}'", value)))?;
        Ok(DepRef::Task(id))
    }
}

impl Serialize for DepRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DepRef::Task(id) => serializer.serialize_u32(*id),
            DepRef::Subtask { .. } => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for DepRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDep::deserialize(deserializer)?;
        raw.try_into().map_err(de::Error::custom)
    }
}

/// Wire form of a dependency reference.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDep {
    Id(u32),
    Text(String),
}

impl TryFrom<RawDep> for DepRef {
    type Error = crate::Error;

    fn try_from(raw: RawDep) -> crate::Result<Self> {
        match raw {
            RawDep::Id(id) => Ok(DepRef::Task(id)),
            RawDep::Text(text) => text.parse(),
        }
    }
}

/// Deserializes a dependency list, dropping malformed entries.
///
/// Stored files may carry references that no longer parse; those are
/// tolerated and skipped rather than failing the whole document.
fn lenient_deps<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<DepRef>, D::Error> {
    let raw: Vec<RawDep> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|entry| DepRef::try_from(entry).ok())
        .collect())
}

/// A subtask owned by exactly one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    /// Identifier, unique within the owning task only.
    pub id: u32,
    /// Id of the owning task. Rewritten on load to match the owner.
    #[serde(default)]
    pub parent_id: u32,
    /// One-line summary.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional implementation notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: Status,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
    /// References that must be done before this subtask.
    #[serde(default, deserialize_with = "lenient_deps")]
    pub dependencies: Vec<DepRef>,
}

/// A top-level task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique across the whole collection.
    pub id: u32,
    /// One-line summary.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional implementation notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Optional test strategy.
    #[serde(
        default,
        rename = "testStrategy",
        skip_serializing_if = "Option::is_none"
    )]
    pub test_strategy: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: Status,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
    /// References that must be done before this task.
    #[serde(default, deserialize_with = "lenient_deps")]
    pub dependencies: Vec<DepRef>,
    /// Owned subtasks, insertion order preserved.
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Validates the task and its subtasks.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title is empty
    /// - A subtask title is empty
    /// - A subtask's parent back-reference disagrees with this task
    /// - Two subtasks share an id
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidData(format!(
                "Task {} has an empty title",
                self.id
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for subtask in &self.subtasks {
            if subtask.title.trim().is_empty() {
                return Err(crate::Error::InvalidData(format!(
                    "Subtask {}.{} has an empty title",
                    self.id, subtask.id
                )));
            }
            if subtask.parent_id != self.id {
                return Err(crate::Error::InvalidData(format!(
                    "Subtask {}.{} points at parent {}",
                    self.id, subtask.id, subtask.parent_id
                )));
            }
            if !seen.insert(subtask.id) {
                return Err(crate::Error::InvalidData(format!(
                    "Duplicate subtask id {}.{}",
                    self.id, subtask.id
                )));
            }
        }

        Ok(())
    }
}

/// Collection metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Project name.
    #[serde(default = "default_project_name")]
    pub project_name: String,
    /// Document format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Source requirements document, if the tasks were generated from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prd_source: Option<String>,
    /// Creation timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_project_name() -> String {
    "Slate Project".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            version: default_version(),
            prd_source: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// The persisted document: metadata plus the ordered task collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskData {
    /// Collection metadata.
    #[serde(default)]
    pub meta: Meta,
    /// Top-level tasks, insertion order preserved.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskData {
    /// Rewrites every subtask's parent back-reference to its owning task.
    ///
    /// The on-disk value is advisory; the container is authoritative.
    pub fn normalize(&mut self) {
        for task in &mut self.tasks {
            let parent_id = task.id;
            for subtask in &mut task.subtasks {
                subtask.parent_id = parent_id;
            }
        }
    }

    /// Validates the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if any task fails validation or two tasks share
    /// an id.
    pub fn validate(&self) -> crate::Result<()> {
        let mut seen = std::collections::HashSet::new();
        for task in &self.tasks {
            task.validate()?;
            if !seen.insert(task.id) {
                return Err(crate::Error::InvalidData(format!(
                    "Duplicate task id {}",
                    task.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_strings() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_serialized_kebab_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_dep_ref_parse_forms() {
        assert_eq!("7".parse::<DepRef>().unwrap(), DepRef::Task(7));
        assert_eq!(
            "3.2".parse::<DepRef>().unwrap(),
            DepRef::Subtask { parent: 3, sub: 2 }
        );
        for bad in ["", ".", "1.", ".2", "1.2.3", "a", "1.b", "-1"] {
            assert!(bad.parse::<DepRef>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_dep_ref_wire_format() {
        let deps = vec![DepRef::Task(1), DepRef::Subtask { parent: 2, sub: 3 }];
        let json = serde_json::to_string(&deps).unwrap();
        assert_eq!(json, "[1,\"2.3\"]");
        let back: Vec<DepRef> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deps);
    }

    #[test]
    fn test_lenient_deps_drop_malformed() {
        let json = r#"{
            "id": 1,
            "title": "T",
            "dependencies": [2, "3.1", "not-an-id", "4.5.6"]
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(
            task.dependencies,
            vec![DepRef::Task(2), DepRef::Subtask { parent: 3, sub: 1 }]
        );
    }

    #[test]
    fn test_normalize_rewrites_parent_ids() {
        let mut data = TaskData {
            tasks: vec![Task {
                id: 4,
                title: "T".to_string(),
                description: None,
                details: None,
                test_strategy: None,
                status: Status::Pending,
                priority: Priority::Medium,
                dependencies: Vec::new(),
                subtasks: vec![Subtask {
                    id: 1,
                    parent_id: 99,
                    title: "S".to_string(),
                    description: None,
                    details: None,
                    status: Status::Pending,
                    priority: Priority::Medium,
                    dependencies: Vec::new(),
                }],
            }],
            ..TaskData::default()
        };
        data.normalize();
        assert_eq!(data.tasks[0].subtasks[0].parent_id, 4);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_task_ids() {
        let task = Task {
            id: 1,
            title: "T".to_string(),
            description: None,
            details: None,
            test_strategy: None,
            status: Status::Pending,
            priority: Priority::Medium,
            dependencies: Vec::new(),
            subtasks: Vec::new(),
        };
        let data = TaskData {
            tasks: vec![task.clone(), task],
            ..TaskData::default()
        };
        assert!(data.validate().is_err());
    }
}
