//! Line-oriented input: one network description followed by query lines.

use std::io::Read;
use std::path::Path;

use crate::engine::{parse_expiration_queries, ExpirationQuery};
use crate::graph::LetterGraph;
use crate::types::{GraphError, GraphResult};

/// Raw contents of an input file.
///
/// The first non-blank line describes the network (`"A BC B CADE ..."`).
/// Each later non-blank line holds expiration queries (`"A 1 B 2"`).
#[derive(Debug, Clone)]
pub struct NetworkInput {
    pub network: String,
    pub query_lines: Vec<String>,
}

impl NetworkInput {
    /// Split text into the network line and query lines.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
        let network = lines
            .next()
            .ok_or_else(|| GraphError::MalformedInput("input has no network description".to_string()))?
            .to_string();
        let query_lines = lines.map(str::to_string).collect();
        Ok(Self {
            network,
            query_lines,
        })
    }

    /// Build a graph from the network line.
    pub fn to_graph(&self) -> GraphResult<LetterGraph> {
        let mut graph = LetterGraph::new();
        graph.build(&self.network)?;
        Ok(graph)
    }

    /// Queries of every query line, grouped by line.
    pub fn query_groups(&self) -> GraphResult<Vec<Vec<ExpirationQuery>>> {
        self.query_lines
            .iter()
            .map(|line| parse_expiration_queries(line))
            .collect()
    }
}

/// Read input from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> GraphResult<NetworkInput> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    log::debug!("read {} bytes of input from {}", text.len(), path.display());
    NetworkInput::parse(&text)
}
