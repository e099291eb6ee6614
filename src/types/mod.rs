//! All data types for the packet-decay library.

pub mod error;
pub mod label;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use label::{labels_to_string, parse_labels, parse_single_label, VertexLabel};
pub use vertex::Vertex;

/// Number of vertex slots: one per letter `A`..=`Z`.
pub const GRAPH_SIZE: usize = 26;
