//! Path reconstruction utilities for graph traversal

use crate::graph::GraphView;
use std::collections::HashMap;

/// Rebuild the ordered edge sequence recorded in `predecessors`.
///
/// Walks backward from `destination`, following each vertex to the edge
/// that reached it, until a vertex with no entry is found; by construction
/// that vertex is the search start. The collected edges are then reversed
/// into source-to-destination order.
pub fn rebuild<G: GraphView>(
    graph: &G,
    predecessors: &HashMap<G::Vertex, G::Edge>,
    destination: &G::Vertex,
) -> Vec<G::Edge> {
    let mut edges: Vec<G::Edge> = Vec::new();
    let mut current = destination.clone();

    while let Some(edge) = predecessors.get(&current) {
        edges.push(edge.clone());
        current = graph.edge_source(edge);
    }

    edges.reverse();
    edges
}
