//! CLI command implementations.

use std::path::Path;

use crate::engine::{run_expiration_queries, ExpirationQuery};
use crate::graph::LetterGraph;
use crate::types::{labels_to_string, GraphResult, VertexLabel};

use super::input::read_input;

/// Load the network description from `path` and build it.
fn load_graph(path: &Path) -> GraphResult<LetterGraph> {
    read_input(path)?.to_graph()
}

fn adjacency_json(graph: &LetterGraph) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for label in graph.labels() {
        let neighbors = graph.vertex(label).sorted_connections();
        map.insert(label.to_string(), serde_json::json!(neighbors));
    }
    serde_json::Value::Object(map)
}

/// Print the adjacency of the network in `path`.
pub fn cmd_show(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;

    if json {
        let info = serde_json::json!({
            "vertices": graph.count_vertices(),
            "edges": graph.edge_count(),
            "adjacency": adjacency_json(&graph),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{}", graph);
        println!("Vertices: {}", graph.count_vertices());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print the neighbors of one vertex.
pub fn cmd_neighbors(path: &Path, vertex: VertexLabel, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let neighbors = graph.neighbors(vertex)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"vertex": vertex, "neighbors": neighbors})
        );
    } else {
        println!("{}: {}", vertex, labels_to_string(&neighbors));
    }
    Ok(())
}

/// Traverse from `start` and print the visitation order and distance groups.
pub fn cmd_traverse(path: &Path, start: VertexLabel, json: bool) -> GraphResult<()> {
    let mut graph = load_graph(path)?;
    let order = graph.traverse(start)?;
    let report = graph.distances()?;

    if json {
        let info = serde_json::json!({
            "start": start,
            "order": labels_to_string(&order),
            "distances": report,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Traversal from {}: {}", start, labels_to_string(&order));
        println!("Distances: {}", report.to_string().trim_end());
    }
    Ok(())
}

/// Run a single expiration query.
pub fn cmd_expire(path: &Path, start: VertexLabel, expiration: u32, json: bool) -> GraphResult<()> {
    let mut graph = load_graph(path)?;
    let outcomes = run_expiration_queries(&mut graph, &[ExpirationQuery::new(start, expiration)])?;

    for outcome in &outcomes {
        if json {
            println!("{}", serde_json::json!(outcome));
        } else {
            println!("{}", outcome);
        }
    }
    Ok(())
}

/// Build the network, print it, then answer every query line of the input.
pub fn cmd_run(path: &Path, json: bool) -> GraphResult<()> {
    let input = read_input(path)?;
    let mut graph = input.to_graph()?;
    // Parse everything up front so a bad line aborts before any output.
    let groups = input.query_groups()?;

    let mut results = Vec::with_capacity(groups.len());
    for queries in &groups {
        results.push(run_expiration_queries(&mut graph, queries)?);
    }

    if json {
        let info = serde_json::json!({
            "graph": graph.to_string(),
            "vertices": graph.count_vertices(),
            "queries": results,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{}", graph);
        for outcomes in &results {
            for outcome in outcomes {
                println!("{}", outcome);
            }
        }
    }
    Ok(())
}
