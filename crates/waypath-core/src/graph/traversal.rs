use std::hash::Hash;

/// Trait for providing graph adjacency to the path finders.
///
/// Implementors own the vertex set and the adjacency structure; the finders
/// read through this interface and never inspect vertex or edge contents
/// beyond identity, endpoints, and whatever a caller-supplied weight
/// selector derives. The structure must not change while a traversal call
/// is in flight.
///
/// No ordering is guaranteed for [`vertices`](GraphView::vertices) or
/// [`outgoing_edges`](GraphView::outgoing_edges); the finders do not depend
/// on enumeration order for correctness, only for tie-breaking among
/// equally good paths, which is unspecified.
pub trait GraphView {
    /// Vertex handle, compared by value
    type Vertex: Clone + Eq + Hash;
    /// Directed edge handle, resolvable to its endpoints
    type Edge: Clone;

    /// All vertices in the graph
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Outgoing edges of `v`; empty when `v` has none (or is unknown to
    /// the graph, though resolving handles is the caller's job)
    fn outgoing_edges(&self, v: &Self::Vertex) -> Vec<Self::Edge>;

    /// The vertex `e` leaves from
    fn edge_source(&self, e: &Self::Edge) -> Self::Vertex;

    /// The vertex `e` arrives at
    fn edge_target(&self, e: &Self::Edge) -> Self::Vertex;
}
