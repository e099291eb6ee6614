//! packet-decay: a lettered undirected graph with packet-decay expiration queries.
//!
//! Vertices are the letters `A` through `Z`. Graphs are built from edge lists
//! such as `"A BC B CADE C AB D B E B"`, traversed breadth-first, and queried
//! for how many vertices a packet with a given hop budget fails to reach.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    count_expired, distance_report, parse_expiration_queries, run_expiration_queries,
    DistanceReport, ExpirationOutcome, ExpirationQuery,
};
pub use graph::{bfs_traverse, parse_edge_tokens, EdgeDeclaration, GraphBuilder, LetterGraph};
pub use types::{
    labels_to_string, parse_labels, GraphError, GraphResult, Vertex, VertexLabel, GRAPH_SIZE,
};
