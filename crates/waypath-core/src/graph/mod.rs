//! Graph traversal and path-finding operations
//!
//! Provides shortest-path algorithms over any graph exposed through the
//! [`GraphView`] capability:
//! - BFS for fewest-hop paths
//! - Dijkstra path-finding for weighted shortest paths
//! - Graph view trait for pluggable data sources

pub mod algos;
pub mod traversal;

pub use algos::{bfs_find_path, dijkstra_find_path};
pub use traversal::GraphView;
