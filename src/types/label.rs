//! Vertex labels: the letters `A` through `Z`.

use serde::{Serialize, Serializer};

use super::{GraphError, GraphResult, GRAPH_SIZE};

/// A vertex label, stored as its offset from `'A'`.
///
/// Ordering follows the alphabet, so sorting labels sorts them alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexLabel(u8);

impl VertexLabel {
    /// Parse an uppercase ASCII letter.
    pub fn from_char(c: char) -> GraphResult<Self> {
        if c.is_ascii_uppercase() {
            Ok(Self(c as u8 - b'A'))
        } else {
            Err(GraphError::InvalidVertexLabel(c))
        }
    }

    /// Build a label from a slot index, returning None for indexes past `Z`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < GRAPH_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Slot index in the graph's vertex table.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter this label stands for.
    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// All 26 labels in alphabetical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GRAPH_SIZE as u8).map(Self)
    }
}

impl std::fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for VertexLabel {
    type Error = GraphError;

    fn try_from(c: char) -> GraphResult<Self> {
        Self::from_char(c)
    }
}

impl Serialize for VertexLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// Parse every character of `token` as a label.
pub fn parse_labels(token: &str) -> GraphResult<Vec<VertexLabel>> {
    token.chars().map(VertexLabel::from_char).collect()
}

/// Parse a token that must name exactly one vertex.
pub fn parse_single_label(token: &str) -> GraphResult<VertexLabel> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => VertexLabel::from_char(c),
        _ => Err(GraphError::MalformedInput(format!(
            "expected a single vertex letter, got {:?}",
            token
        ))),
    }
}

/// Concatenate labels into a string with no separators, e.g. `"ABCDE"`.
pub fn labels_to_string(labels: &[VertexLabel]) -> String {
    labels.iter().map(|l| l.as_char()).collect()
}
