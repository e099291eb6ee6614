//! Edge-list parsing and a fluent API for building LetterGraph instances.

use crate::types::{parse_labels, parse_single_label, GraphError, GraphResult, VertexLabel};

use super::LetterGraph;

/// One `(vertex, neighbors)` token pair from an edge list, e.g. `"B CADE"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDeclaration {
    pub vertex: VertexLabel,
    pub neighbors: Vec<VertexLabel>,
}

impl EdgeDeclaration {
    pub fn new(vertex: VertexLabel, neighbors: Vec<VertexLabel>) -> Self {
        Self { vertex, neighbors }
    }
}

/// Split an edge list into declarations.
///
/// Tokens are whitespace separated and read in pairs. The first token of a
/// pair is a single letter, the second a run of letters. Nothing is returned
/// unless the whole input is well formed.
pub fn parse_edge_tokens(input: &str) -> GraphResult<Vec<EdgeDeclaration>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(GraphError::MalformedInput("empty edge list".to_string()));
    }
    if tokens.len() % 2 != 0 {
        return Err(GraphError::MalformedInput(format!(
            "edge list has an odd number of tokens ({}); last vertex {:?} has no neighbor list",
            tokens.len(),
            tokens[tokens.len() - 1]
        )));
    }

    tokens
        .chunks_exact(2)
        .map(|pair| {
            let vertex = parse_single_label(pair[0])?;
            let neighbors = parse_labels(pair[1])?;
            Ok(EdgeDeclaration::new(vertex, neighbors))
        })
        .collect()
}

/// Fluent builder for constructing a LetterGraph.
pub struct GraphBuilder {
    declarations: Vec<EdgeDeclaration>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Declare `vertex` adjacent to every label in `neighbors`.
    pub fn declare(&mut self, vertex: VertexLabel, neighbors: &[VertexLabel]) -> &mut Self {
        self.declarations
            .push(EdgeDeclaration::new(vertex, neighbors.to_vec()));
        self
    }

    /// Add a single undirected edge.
    pub fn link(&mut self, a: VertexLabel, b: VertexLabel) -> &mut Self {
        self.declare(a, &[b])
    }

    /// Append every declaration of a textual edge list.
    pub fn parse(&mut self, input: &str) -> GraphResult<&mut Self> {
        let parsed = parse_edge_tokens(input)?;
        self.declarations.extend(parsed);
        Ok(self)
    }

    /// Build the final LetterGraph.
    pub fn build(self) -> LetterGraph {
        let mut graph = LetterGraph::new();
        graph.build_pairs(self.declarations);
        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
