//! Distance report derived from the last traversal.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::LetterGraph;
use crate::types::{GraphError, GraphResult, VertexLabel};

/// Present vertices grouped by hop count from the traversal start.
///
/// Distance 0 (the start itself) is never included, and neither are vertices
/// the traversal did not reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceReport {
    start: VertexLabel,
    buckets: BTreeMap<u32, Vec<VertexLabel>>,
}

impl DistanceReport {
    /// Start vertex of the traversal this report was taken from.
    pub fn start(&self) -> VertexLabel {
        self.start
    }

    /// Non-empty buckets keyed by distance, ascending.
    pub fn buckets(&self) -> &BTreeMap<u32, Vec<VertexLabel>> {
        &self.buckets
    }

    /// Vertices at exactly `distance` hops, alphabetically.
    pub fn at(&self, distance: u32) -> &[VertexLabel] {
        self.buckets.get(&distance).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Largest distance reached, None if only the start was visited.
    pub fn max_distance(&self) -> Option<u32> {
        self.buckets.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Formats as `1:BC 2:DE `: one `distance:letters` group per bucket, each followed by a space.
impl std::fmt::Display for DistanceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (distance, labels) in &self.buckets {
            write!(f, "{}:", distance)?;
            for label in labels {
                write!(f, "{}", label)?;
            }
            write!(f, " ")?;
        }
        Ok(())
    }
}

/// Bucket the present vertices of `graph` by the distances its last traversal left behind.
///
/// Does not traverse. Fails with NoTraversal if no traversal has run yet.
pub fn distance_report(graph: &LetterGraph) -> GraphResult<DistanceReport> {
    let start = graph.last_start().ok_or(GraphError::NoTraversal)?;

    let mut buckets: BTreeMap<u32, Vec<VertexLabel>> = BTreeMap::new();
    // Labels come out alphabetically, so each bucket is already sorted.
    for label in graph.labels() {
        match graph.distance(label) {
            Some(0) | None => {}
            Some(d) => buckets.entry(d).or_default().push(label),
        }
    }

    Ok(DistanceReport { start, buckets })
}
