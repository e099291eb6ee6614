//! Per-vertex adjacency record.

use super::VertexLabel;

/// One slot of the graph: its connection set plus the state of the last traversal.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    /// Adjacent vertices, unique, in insertion order.
    connections: Vec<VertexLabel>,
    /// Visited flag of the most recent traversal.
    pub(crate) known: bool,
    /// Hop count from the last traversal's start; None when unreached.
    pub(crate) dist: Option<u32>,
}

impl Vertex {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection, returning false if it was already present.
    pub fn connect(&mut self, label: VertexLabel) -> bool {
        if self.connections.contains(&label) {
            return false;
        }
        self.connections.push(label);
        true
    }

    pub fn is_connected_to(&self, label: VertexLabel) -> bool {
        self.connections.contains(&label)
    }

    /// Connections in insertion order.
    pub fn connections(&self) -> &[VertexLabel] {
        &self.connections
    }

    /// Connections sorted alphabetically. Sorts a copy; the stored set is untouched.
    pub fn sorted_connections(&self) -> Vec<VertexLabel> {
        let mut sorted = self.connections.clone();
        sorted.sort_unstable();
        sorted
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// A vertex is part of the graph iff it has at least one connection.
    pub fn is_present(&self) -> bool {
        !self.connections.is_empty()
    }

    pub fn is_known(&self) -> bool {
        self.known
    }

    pub fn dist(&self) -> Option<u32> {
        self.dist
    }

    /// Distance with `-1` standing for "not reached by the last traversal".
    pub fn distance_value(&self) -> i64 {
        self.dist.map_or(-1, i64::from)
    }

    pub(crate) fn reset_traversal(&mut self) {
        self.known = false;
        self.dist = None;
    }
}
