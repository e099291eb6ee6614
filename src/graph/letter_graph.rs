//! Core graph structure: 26 lettered vertex slots with symmetric adjacency.

use crate::engine::decay::count_expired;
use crate::engine::query::{distance_report, DistanceReport};
use crate::types::{GraphError, GraphResult, Vertex, VertexLabel, GRAPH_SIZE};

use super::builder::{parse_edge_tokens, EdgeDeclaration};
use super::traversal::bfs_traverse;

/// An undirected, unweighted graph over the vertices `A`..=`Z`.
///
/// Slots are indexed by letter offset. A vertex is part of the graph iff its
/// connection set is non-empty; there is no separate existence flag.
///
/// Traversal state (`known`/`dist`) lives in the slots and describes only the
/// most recent [`traverse`](Self::traverse). Derive every report from one
/// traversal before starting the next.
#[derive(Debug, Clone)]
pub struct LetterGraph {
    /// One slot per letter.
    vertices: [Vertex; GRAPH_SIZE],
    /// Start vertex of the most recent traversal.
    pub(crate) last_start: Option<VertexLabel>,
}

impl LetterGraph {
    /// Create an empty graph: 26 slots, no edges.
    pub fn new() -> Self {
        Self {
            vertices: std::array::from_fn(|_| Vertex::new()),
            last_start: None,
        }
    }

    /// Parse an edge list such as `"A BC B CADE C AB D B E B"` and add its edges.
    ///
    /// Every neighbor letter produces a symmetric edge, so `"A BC"` also
    /// creates B and C. Duplicate declarations in either direction are
    /// ignored. The input is validated in full before the graph is touched.
    pub fn build(&mut self, input: &str) -> GraphResult<()> {
        let declarations = parse_edge_tokens(input)?;
        self.build_pairs(declarations);
        Ok(())
    }

    /// Apply already-parsed declarations.
    pub fn build_pairs<I>(&mut self, declarations: I)
    where
        I: IntoIterator<Item = EdgeDeclaration>,
    {
        let mut applied = 0usize;
        for decl in declarations {
            for &neighbor in &decl.neighbors {
                self.add_edge(decl.vertex, neighbor);
            }
            applied += 1;
        }
        log::debug!(
            "applied {} edge declarations; graph now has {} vertices",
            applied,
            self.count_vertices()
        );
    }

    /// Insert the undirected edge `a - b`. Returns false if it already existed.
    pub fn add_edge(&mut self, a: VertexLabel, b: VertexLabel) -> bool {
        let forward = self.vertices[a.index()].connect(b);
        let backward = self.vertices[b.index()].connect(a);
        forward || backward
    }

    /// Number of vertices with at least one edge.
    pub fn count_vertices(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_present()).count()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut self_loops = 0;
        let mut endpoints = 0;
        for label in VertexLabel::all() {
            let vertex = &self.vertices[label.index()];
            if vertex.is_connected_to(label) {
                self_loops += 1;
                endpoints += vertex.degree() - 1;
            } else {
                endpoints += vertex.degree();
            }
        }
        endpoints / 2 + self_loops
    }

    /// Whether `label` is part of the graph.
    pub fn contains(&self, label: VertexLabel) -> bool {
        self.vertices[label.index()].is_present()
    }

    /// The slot for `label`, present or not.
    pub fn vertex(&self, label: VertexLabel) -> &Vertex {
        &self.vertices[label.index()]
    }

    /// Labels of all present vertices, alphabetically.
    pub fn labels(&self) -> Vec<VertexLabel> {
        VertexLabel::all().filter(|&l| self.contains(l)).collect()
    }

    /// The slot for `label`, or VertexNotFound if it has no edges.
    pub(crate) fn require(&self, label: VertexLabel) -> GraphResult<&Vertex> {
        let vertex = &self.vertices[label.index()];
        if vertex.is_present() {
            Ok(vertex)
        } else {
            Err(GraphError::VertexNotFound(label))
        }
    }

    /// Neighbors of `label` in alphabetical order.
    pub fn neighbors(&self, label: VertexLabel) -> GraphResult<Vec<VertexLabel>> {
        Ok(self.require(label)?.sorted_connections())
    }

    /// Neighbors of `label` as a string of letters, e.g. `"ACDE"`.
    pub fn neighbors_string(&self, label: VertexLabel) -> GraphResult<String> {
        let neighbors = self.neighbors(label)?;
        Ok(neighbors.iter().map(|l| l.as_char()).collect())
    }

    /// Distance of `label` in the last traversal, None if unreached.
    pub fn distance(&self, label: VertexLabel) -> Option<u32> {
        self.vertices[label.index()].dist()
    }

    /// Start vertex of the last traversal.
    pub fn last_start(&self) -> Option<VertexLabel> {
        self.last_start
    }

    /// Breadth-first traversal from `start`; returns labels in visitation order.
    ///
    /// Resets and then overwrites every slot's traversal state.
    pub fn traverse(&mut self, start: VertexLabel) -> GraphResult<Vec<VertexLabel>> {
        bfs_traverse(self, start)
    }

    /// Vertices grouped by distance, as left by the last traversal.
    pub fn distances(&self) -> GraphResult<DistanceReport> {
        distance_report(self)
    }

    /// Count vertices reached from `start` only after more than `expiration` hops.
    ///
    /// Always runs a fresh traversal. Vertices that are never reached do not count.
    pub fn unreachable_nodes(&mut self, start: VertexLabel, expiration: u32) -> GraphResult<usize> {
        self.traverse(start)?;
        Ok(count_expired(self, expiration))
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Vertex; GRAPH_SIZE] {
        &mut self.vertices
    }
}

impl Default for LetterGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders like a sorted map: `{A=[B, C], B=[A, C, D, E], C=[A, B]}`.
impl std::fmt::Display for LetterGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, label) in self.labels().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}=[", label)?;
            for (j, neighbor) in self.vertex(label).sorted_connections().iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", neighbor)?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
