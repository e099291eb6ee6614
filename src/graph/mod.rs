//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod letter_graph;
pub mod traversal;

pub use builder::{parse_edge_tokens, EdgeDeclaration, GraphBuilder};
pub use letter_graph::LetterGraph;
pub use traversal::bfs_traverse;
