//! Waypath Core Library
//!
//! Core routing logic for the Waypath journey planner: the graph traversal
//! engine, the transit network domain model, and the route planner that
//! ties them together.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
pub mod planner;
