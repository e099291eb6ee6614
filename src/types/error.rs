//! Error types for the packet-decay library.

use thiserror::Error;

use super::VertexLabel;

/// All errors that can occur in the packet-decay library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Character outside the `A`..=`Z` vertex alphabet.
    #[error("Invalid vertex label {0:?}: expected an uppercase letter A-Z")]
    InvalidVertexLabel(char),

    /// Vertex has no edges, so it is not part of the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexLabel),

    /// Token stream does not have the expected shape.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A distance report was requested before any traversal.
    #[error("No traversal has been run on this graph")]
    NoTraversal,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
