//! Transit network domain model
//!
//! Stations keyed by name, each owning the connections that leave it. The
//! network implements [`GraphView`] so the path finders run on it directly,
//! with station names as vertices and connections as edges.

pub mod csv;

use crate::error::{Result, WaypathError};
use crate::graph::GraphView;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// How a connection is operated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Train,
    Bus,
    Plane,
}

impl std::str::FromStr for Mode {
    type Err = WaypathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "train" => Ok(Mode::Train),
            "bus" => Ok(Mode::Bus),
            "plane" => Ok(Mode::Plane),
            other => Err(WaypathError::UnknownMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Train => write!(f, "train"),
            Mode::Bus => write!(f, "bus"),
            Mode::Plane => write!(f, "plane"),
        }
    }
}

/// A directed connection between two stations.
///
/// Endpoints are held by name, never as references back into the network,
/// so connections stay plain data the finders can clone freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub origin: String,
    pub destination: String,
    pub mode: Mode,
    pub price: f64,
    pub minutes: f64,
}

/// A station and the connections leaving it
#[derive(Debug, Clone)]
pub struct Station {
    pub name: String,
    pub outgoing: Vec<Connection>,
}

/// The full transit graph: stations by name, adjacency owned by each
/// station
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<String, Station>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station. Re-adding an existing name replaces the previous
    /// entry, outgoing connections included.
    pub fn add_station(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.stations.insert(
            name.clone(),
            Station {
                name,
                outgoing: Vec::new(),
            },
        );
    }

    /// Append a connection to its origin station's outgoing list. Both
    /// endpoints must already be stations of this network.
    pub fn add_connection(&mut self, connection: Connection) -> Result<()> {
        if !self.stations.contains_key(&connection.destination) {
            return Err(WaypathError::StationNotFound {
                name: connection.destination,
            });
        }
        let origin = self
            .stations
            .get_mut(&connection.origin)
            .ok_or_else(|| WaypathError::StationNotFound {
                name: connection.origin.clone(),
            })?;
        origin.outgoing.push(connection);
        Ok(())
    }

    /// Look up a station by name
    pub fn station(&self, name: &str) -> Result<&Station> {
        self.stations
            .get(name)
            .ok_or_else(|| WaypathError::StationNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// Station names in sorted order, for deterministic listings
    pub fn station_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.stations.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Total number of connections across all stations
    pub fn connection_count(&self) -> usize {
        self.stations.values().map(|s| s.outgoing.len()).sum()
    }
}

impl GraphView for Network {
    type Vertex = String;
    type Edge = Connection;

    fn vertices(&self) -> Vec<String> {
        self.stations.keys().cloned().collect()
    }

    fn outgoing_edges(&self, v: &String) -> Vec<Connection> {
        self.stations
            .get(v)
            .map(|s| s.outgoing.clone())
            .unwrap_or_default()
    }

    fn edge_source(&self, e: &Connection) -> String {
        e.origin.clone()
    }

    fn edge_target(&self, e: &Connection) -> String {
        e.destination.clone()
    }
}
