//! Breadth-first path finding
//!
//! Hop count is the only cost notion here; whatever weights the edges
//! carry are ignored entirely.

use crate::graph::algos::path;
use crate::graph::GraphView;
use std::collections::{HashMap, HashSet, VecDeque};

/// Find a path with the fewest edges from `start` to `end`.
///
/// Returns the edges in source-to-destination order. An empty result means
/// either `start == end` or that no path exists; neither is an error.
/// Resolving `start` and `end` to members of the graph is the caller's
/// responsibility.
#[tracing::instrument(skip_all)]
pub fn bfs_find_path<G: GraphView>(graph: &G, start: &G::Vertex, end: &G::Vertex) -> Vec<G::Edge> {
    if start == end {
        return Vec::new();
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut predecessors: HashMap<G::Vertex, G::Edge> = HashMap::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for edge in graph.outgoing_edges(&current) {
            let target = graph.edge_target(&edge);

            // The frontier expands level by level, so the first edge to
            // reach the destination completes a fewest-hop path.
            if target == *end {
                predecessors.insert(target, edge);
                return path::rebuild(graph, &predecessors, end);
            }

            // Marking at enqueue time keeps cycles from requeueing a
            // vertex and guarantees termination on any finite graph.
            if visited.insert(target.clone()) {
                predecessors.insert(target.clone(), edge);
                queue.push_back(target);
            }
        }
    }

    Vec::new()
}
