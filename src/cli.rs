//! CLI argument parsing for waypath
//!
//! Uses clap for argument parsing. Global flags locate the network data
//! files and control output: --stations, --connections, --network,
//! --config, --format, --quiet, --verbose, --log-level, --log-json.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use waypath_core::format::OutputFormat;
use waypath_core::planner::Metric;

/// Waypath - route planning CLI for transit networks
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Stations CSV file
    #[arg(long, global = true, env = "WAYPATH_STATIONS")]
    pub stations: Option<PathBuf>,

    /// Connections CSV file
    #[arg(long, global = true, env = "WAYPATH_CONNECTIONS")]
    pub connections: Option<PathBuf>,

    /// Directory holding stations.csv and connections.csv
    #[arg(long, global = true, env = "WAYPATH_NETWORK")]
    pub network: Option<PathBuf>,

    /// Configuration file (default: ./waypath.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the best route between two stations
    Route {
        /// Departure station name
        from: String,

        /// Destination station name
        to: String,

        /// Metric to optimize (default from config, else minutes)
        #[arg(long, value_parser = parse_metric)]
        by: Option<Metric>,
    },

    /// List the stations of the network
    Stations,

    /// List the connections leaving one station
    Departures {
        /// Station name
        station: String,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse route metric from string
fn parse_metric(s: &str) -> std::result::Result<Metric, String> {
    s.parse::<Metric>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route() {
        let cli =
            Cli::try_parse_from(["waypath", "route", "Providence", "Boston"]).unwrap();
        match cli.command {
            Commands::Route { from, to, by } => {
                assert_eq!(from, "Providence");
                assert_eq!(to, "Boston");
                assert!(by.is_none());
            }
            other => panic!("expected route, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_route_metric() {
        let cli = Cli::try_parse_from([
            "waypath", "route", "Providence", "Boston", "--by", "price",
        ])
        .unwrap();
        match cli.command {
            Commands::Route { by, .. } => assert_eq!(by, Some(Metric::Price)),
            other => panic!("expected route, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let err = Cli::try_parse_from([
            "waypath", "route", "Providence", "Boston", "--by", "speed",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_format_defaults_to_human() {
        let cli = Cli::try_parse_from(["waypath", "stations"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "waypath",
            "departures",
            "Boston",
            "--format",
            "json",
            "--network",
            "data",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.network, Some(PathBuf::from("data")));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["waypath"]).is_err());
    }
}
