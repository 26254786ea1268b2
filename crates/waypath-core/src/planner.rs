//! Route planning over a transit network
//!
//! The planner resolves station names, picks the algorithm for the
//! requested metric, and wraps the engine's edge list in a serializable
//! route with summed totals. Name resolution happens here, before any
//! search runs; the finders themselves never see an unknown station.

use crate::error::{Result, WaypathError};
use crate::graph::{bfs_find_path, dijkstra_find_path};
use crate::network::{csv, Connection, Network};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which cost a route query optimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Fewest legs
    Connections,
    /// Least total travel time
    Minutes,
    /// Least total fare
    Price,
}

impl std::str::FromStr for Metric {
    type Err = WaypathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "connections" => Ok(Metric::Connections),
            "minutes" => Ok(Metric::Minutes),
            "price" => Ok(Metric::Price),
            other => Err(WaypathError::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Connections => write!(f, "connections"),
            Metric::Minutes => write!(f, "minutes"),
            Metric::Price => write!(f, "price"),
        }
    }
}

/// A computed route between two stations.
///
/// An empty `legs` list is a valid answer: the endpoints are the same
/// station, or no route exists. `found` distinguishes the second case.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub metric: Metric,
    pub found: bool,
    pub leg_count: usize,
    pub total_price: f64,
    pub total_minutes: f64,
    pub legs: Vec<Connection>,
}

/// Loads networks and answers route queries
#[derive(Debug, Clone)]
pub struct Planner {
    network: Network,
}

impl Planner {
    /// Load a planner from stations and connections CSV files
    pub fn load(stations_path: &Path, connections_path: &Path) -> Result<Self> {
        Ok(Self {
            network: csv::load_network(stations_path, connections_path)?,
        })
    }

    /// Wrap an already-built network
    pub fn from_network(network: Network) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Compute the best route from `from` to `to` under `metric`.
    ///
    /// Both endpoints must name stations of the network; unknown names
    /// error out before any search runs.
    #[tracing::instrument(skip(self), fields(from = %from, to = %to, metric = %metric))]
    pub fn route(&self, from: &str, to: &str, metric: Metric) -> Result<Route> {
        self.network.station(from)?;
        self.network.station(to)?;

        let from_vertex = from.to_string();
        let to_vertex = to.to_string();
        let legs = match metric {
            Metric::Connections => bfs_find_path(&self.network, &from_vertex, &to_vertex),
            Metric::Minutes => {
                dijkstra_find_path(&self.network, &from_vertex, &to_vertex, |c| c.minutes)
            }
            Metric::Price => {
                dijkstra_find_path(&self.network, &from_vertex, &to_vertex, |c| c.price)
            }
        };

        let found = !legs.is_empty() || from == to;
        tracing::debug!(found, legs = legs.len(), "route_computed");

        Ok(Route {
            from: from.to_string(),
            to: to.to_string(),
            metric,
            found,
            leg_count: legs.len(),
            total_price: legs.iter().map(|c| c.price).sum(),
            total_minutes: legs.iter().map(|c| c.minutes).sum(),
            legs,
        })
    }

    /// Route with the fewest connections
    pub fn most_direct_route(&self, from: &str, to: &str) -> Result<Route> {
        self.route(from, to, Metric::Connections)
    }

    /// Route with the least total travel time
    pub fn fastest_route(&self, from: &str, to: &str) -> Result<Route> {
        self.route(from, to, Metric::Minutes)
    }

    /// Route with the least total fare
    pub fn cheapest_route(&self, from: &str, to: &str) -> Result<Route> {
        self.route(from, to, Metric::Price)
    }
}
