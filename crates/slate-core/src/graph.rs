// Rust guideline compliant 2026-08-28

//! Dependency graph construction and cycle detection.
//!
//! Tasks and subtasks become graph nodes labelled `"N"` and `"N.M"`;
//! dependency references become directed edges. References that do not
//! resolve to a node are skipped: dangling references are tolerated
//! everywhere, so they are neither errors nor cycle candidates here.

use crate::models::Task;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// Directed dependency graph over a task collection.
pub struct DepGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl DepGraph {
    /// Builds the dependency graph for a collection.
    ///
    /// # Arguments
    ///
    /// * `tasks` - Tasks (with their subtasks) to build the graph from
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();

        for task in tasks {
            let label = task.id.to_string();
            let index = graph.add_node(label.clone());
            nodes.insert(label, index);
            for subtask in &task.subtasks {
                let label = format!("{}.{}", task.id, subtask.id);
                let index = graph.add_node(label.clone());
                nodes.insert(label, index);
            }
        }

        for task in tasks {
            let from = nodes[&task.id.to_string()];
            for dep in &task.dependencies {
                if let Some(&to) = nodes.get(&dep.to_string()) {
                    graph.add_edge(from, to, ());
                }
            }
            for subtask in &task.subtasks {
                let from = nodes[&format!("{}.{}", task.id, subtask.id)];
                for dep in &subtask.dependencies {
                    if let Some(&to) = nodes.get(&dep.to_string()) {
                        graph.add_edge(from, to, ());
                    }
                }
            }
        }

        Self { graph, nodes }
    }

    /// Returns true if the graph contains at least one cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Finds a dependency cycle if one exists.
    ///
    /// The returned path runs from the node where the cycle closes back
    /// to that same node (repeated at the end), e.g. `["1", "2", "1"]`.
    /// Which equivalent cycle is reported depends on traversal order, so
    /// callers should treat the result as a witness set rather than a
    /// canonical sequence.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut on_path: HashSet<NodeIndex> = HashSet::new();
        let mut path: Vec<NodeIndex> = Vec::new();

        for start in self.graph.node_indices() {
            if visited.contains(&start) {
                continue;
            }
            if let Some(cycle) = self.dfs(start, &mut visited, &mut on_path, &mut path) {
                return Some(cycle);
            }
        }

        None
    }

    fn dfs(
        &self,
        node: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        on_path: &mut HashSet<NodeIndex>,
        path: &mut Vec<NodeIndex>,
    ) -> Option<Vec<String>> {
        visited.insert(node);
        on_path.insert(node);
        path.push(node);

        for neighbor in self.graph.neighbors(node) {
            if on_path.contains(&neighbor) {
                // Back edge: the cycle runs from the earlier occurrence of
                // the neighbor through the current node and closes on it.
                let close = path
                    .iter()
                    .position(|n| *n == neighbor)
                    .unwrap_or_default();
                let mut cycle: Vec<String> = path[close..]
                    .iter()
                    .map(|n| self.graph[*n].clone())
                    .collect();
                cycle.push(self.graph[neighbor].clone());
                return Some(cycle);
            }
            if !visited.contains(&neighbor) {
                if let Some(cycle) = self.dfs(neighbor, visited, on_path, path) {
                    return Some(cycle);
                }
            }
        }

        on_path.remove(&node);
        path.pop();
        None
    }
}

/// Finds a dependency cycle in the collection, if any.
///
/// Returns `None` for acyclic collections, including the empty one.
#[must_use]
pub fn find_cycle(tasks: &[Task]) -> Option<Vec<String>> {
    DepGraph::from_tasks(tasks).find_cycle()
}
