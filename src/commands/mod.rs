//! CLI commands for waypath

pub mod departures;
pub mod dispatch;
pub mod route;
pub mod stations;
