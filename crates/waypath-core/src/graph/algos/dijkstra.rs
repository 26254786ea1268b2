//! Weighted shortest-path finding (Dijkstra)
//!
//! The cost of an edge comes from a caller-supplied selector, so one
//! implementation serves every metric a caller can express as
//! `Fn(&Edge) -> f64`.

use crate::graph::algos::path;
use crate::graph::GraphView;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
struct HeapEntry<V> {
    vertex: V,
    accumulated_cost: f64,
}

impl<V: Eq> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
            && self
                .accumulated_cost
                .total_cmp(&other.accumulated_cost)
                .is_eq()
    }
}

impl<V: Eq> Eq for HeapEntry<V> {}

impl<V: Eq> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Eq> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost.total_cmp(&other.accumulated_cost)
    }
}

/// Find a minimum-total-weight path from `start` to `end`.
///
/// `weight` must return a finite, non-negative cost for every edge it is
/// handed; the minimality guarantee does not survive negative weights.
/// Returns the edges in source-to-destination order. An empty result means
/// either `start == end` or that no path exists; neither is an error.
/// Resolving `start` and `end` to members of the graph is the caller's
/// responsibility.
#[tracing::instrument(skip_all)]
pub fn dijkstra_find_path<G, W>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
    weight: W,
) -> Vec<G::Edge>
where
    G: GraphView,
    W: Fn(&G::Edge) -> f64,
{
    if start == end {
        return Vec::new();
    }

    let mut closed: HashSet<G::Vertex> = HashSet::new();
    let mut best_costs: HashMap<G::Vertex, f64> = HashMap::new();
    let mut predecessors: HashMap<G::Vertex, G::Edge> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<G::Vertex>>> = BinaryHeap::new();

    best_costs.insert(start.clone(), 0.0);
    heap.push(Reverse(HeapEntry {
        vertex: start.clone(),
        accumulated_cost: 0.0,
    }));

    while let Some(Reverse(HeapEntry {
        vertex: current,
        accumulated_cost,
    })) = heap.pop()
    {
        // A vertex pops first at its final distance, so reaching the
        // destination here means its cost cannot improve further.
        if current == *end {
            return path::rebuild(graph, &predecessors, end);
        }

        // Relaxation reinserts vertices instead of decreasing keys, so
        // stale duplicates surface later and are dropped here.
        if !closed.insert(current.clone()) {
            continue;
        }

        for edge in graph.outgoing_edges(&current) {
            let target = graph.edge_target(&edge);
            if closed.contains(&target) {
                continue;
            }

            let candidate = accumulated_cost + weight(&edge);
            let improved = match best_costs.get(&target) {
                Some(&best) => candidate < best,
                None => true,
            };

            if improved {
                best_costs.insert(target.clone(), candidate);
                predecessors.insert(target.clone(), edge);
                heap.push(Reverse(HeapEntry {
                    vertex: target,
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    Vec::new()
}
