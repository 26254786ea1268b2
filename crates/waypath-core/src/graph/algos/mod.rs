//! Graph algorithm implementations
//!
//! Contains concrete implementations of shortest-path algorithms:
//! - `bfs`: breadth-first search for fewest-hop paths
//! - `dijkstra`: weighted shortest path finding
//! - `path`: predecessor-map reconstruction shared by both

pub mod bfs;
pub mod dijkstra;
pub mod path;

pub use bfs::bfs_find_path;
pub use dijkstra::dijkstra_find_path;
