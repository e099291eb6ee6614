//! Packet-decay expiration: counting vertices reached only after the hop budget runs out.

use serde::Serialize;

use crate::graph::LetterGraph;
use crate::types::{parse_single_label, GraphError, GraphResult, VertexLabel};

/// A single `(start, expiration)` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationQuery {
    pub start: VertexLabel,
    /// Hop budget.
    pub expiration: u32,
}

impl ExpirationQuery {
    pub fn new(start: VertexLabel, expiration: u32) -> Self {
        Self { start, expiration }
    }
}

/// Result of running one ExpirationQuery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpirationOutcome {
    pub start: VertexLabel,
    pub expiration: u32,
    pub unreachable: usize,
}

impl std::fmt::Display for ExpirationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Can't reach {} nodes starting at {} with expiration of {}",
            self.unreachable, self.start, self.expiration
        )
    }
}

/// Count slots whose last-traversal distance exceeds `expiration`.
///
/// Unreached slots carry no distance and are never counted, so a vertex in
/// another component is not reported as expired.
pub fn count_expired(graph: &LetterGraph, expiration: u32) -> usize {
    VertexLabel::all()
        .filter(|&label| matches!(graph.distance(label), Some(d) if d > expiration))
        .count()
}

/// Parse a query line of `(vertex, expiration)` token pairs, e.g. `"F 2 F 3 H 2"`.
pub fn parse_expiration_queries(line: &str) -> GraphResult<Vec<ExpirationQuery>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(GraphError::MalformedInput(format!(
            "query line has an odd number of tokens ({})",
            tokens.len()
        )));
    }

    tokens
        .chunks_exact(2)
        .map(|pair| {
            let start = parse_single_label(pair[0])?;
            let expiration = pair[1].parse::<u32>().map_err(|_| {
                GraphError::MalformedInput(format!(
                    "expiration for {} must be a non-negative integer, got {:?}",
                    start, pair[1]
                ))
            })?;
            Ok(ExpirationQuery::new(start, expiration))
        })
        .collect()
}

/// Run queries in order, each with its own fresh traversal.
///
/// Stops at the first query whose start vertex is not in the graph.
pub fn run_expiration_queries(
    graph: &mut LetterGraph,
    queries: &[ExpirationQuery],
) -> GraphResult<Vec<ExpirationOutcome>> {
    let mut outcomes = Vec::with_capacity(queries.len());
    for query in queries {
        let unreachable = graph.unreachable_nodes(query.start, query.expiration)?;
        log::trace!(
            "expiration query {} / {}: {} unreachable",
            query.start,
            query.expiration,
            unreachable
        );
        outcomes.push(ExpirationOutcome {
            start: query.start,
            expiration: query.expiration,
            unreachable,
        });
    }
    Ok(outcomes)
}
