//! Graph traversal algorithms (BFS).

use std::collections::VecDeque;

use crate::types::{GraphResult, VertexLabel};

use super::LetterGraph;

/// BFS from `start`, writing `known`/`dist` into every slot of the graph.
///
/// Neighbors are expanded in alphabetical order, which fixes the visitation
/// order when several vertices sit at the same distance. Returns the labels
/// in the order they were dequeued. Vertices never reached keep `dist = None`.
pub fn bfs_traverse(graph: &mut LetterGraph, start: VertexLabel) -> GraphResult<Vec<VertexLabel>> {
    graph.require(start)?;

    for slot in graph.slots_mut().iter_mut() {
        slot.reset_traversal();
    }
    graph.last_start = Some(start);

    let mut visited_order: Vec<VertexLabel> = Vec::new();
    let mut queue: VecDeque<VertexLabel> = VecDeque::new();

    {
        let slots = graph.slots_mut();
        slots[start.index()].known = true;
        slots[start.index()].dist = Some(0);
    }
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        visited_order.push(current);

        let slots = graph.slots_mut();
        let depth = slots[current.index()].dist.unwrap_or(0);
        for neighbor in slots[current.index()].sorted_connections() {
            let next = &mut slots[neighbor.index()];
            if next.known {
                continue;
            }
            next.known = true;
            next.dist = Some(depth + 1);
            queue.push_back(neighbor);
        }
    }

    log::debug!(
        "traversal from {} visited {} vertices",
        start,
        visited_order.len()
    );

    Ok(visited_order)
}
