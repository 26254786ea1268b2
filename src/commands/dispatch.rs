//! Command dispatch logic for waypath

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use waypath_core::config::{Config, CONFIG_FILE_NAME};
use waypath_core::error::{Result, WaypathError};
use waypath_core::planner::{Metric, Planner};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    let (stations, connections) = resolve_data_paths(cli, &config)?;

    let planner = Planner::load(&stations, &connections)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_network");

    match &cli.command {
        Commands::Route { from, to, by } => {
            let metric = by.or(config.default_metric).unwrap_or(Metric::Minutes);
            commands::route::execute(cli, &planner, from, to, metric)
        }
        Commands::Stations => commands::stations::execute(cli, &planner),
        Commands::Departures { station } => commands::departures::execute(cli, &planner, station),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        // An explicitly named config file must exist
        Some(path) => Config::load(path),
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::load_or_default(&cwd.join(CONFIG_FILE_NAME))
        }
    }
}

/// Resolve where the network CSV files live.
///
/// Precedence: explicit `--stations`/`--connections` flags, then the
/// `--network` directory, then the config file.
fn resolve_data_paths(cli: &Cli, config: &Config) -> Result<(PathBuf, PathBuf)> {
    let stations = cli
        .stations
        .clone()
        .or_else(|| cli.network.as_ref().map(|dir| dir.join("stations.csv")))
        .or_else(|| config.network.stations.clone());
    let connections = cli
        .connections
        .clone()
        .or_else(|| cli.network.as_ref().map(|dir| dir.join("connections.csv")))
        .or_else(|| config.network.connections.clone());

    match (stations, connections) {
        (Some(stations), Some(connections)) => Ok((stations, connections)),
        _ => Err(WaypathError::UsageError(
            "no network data: pass --stations and --connections, --network <dir>, \
             or set [network] in waypath.toml"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use waypath_core::config::NetworkConfig;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["waypath"];
        argv.extend_from_slice(args);
        argv.push("stations");
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_flags_win() {
        let cli = cli(&[
            "--stations",
            "s.csv",
            "--connections",
            "c.csv",
            "--network",
            "data",
        ]);
        let config = Config {
            network: NetworkConfig {
                stations: Some(PathBuf::from("cfg-s.csv")),
                connections: Some(PathBuf::from("cfg-c.csv")),
            },
            default_metric: None,
        };

        let (stations, connections) = resolve_data_paths(&cli, &config).unwrap();
        assert_eq!(stations, PathBuf::from("s.csv"));
        assert_eq!(connections, PathBuf::from("c.csv"));
    }

    #[test]
    fn test_network_dir_expands_to_both_files() {
        let cli = cli(&["--network", "data"]);
        let (stations, connections) = resolve_data_paths(&cli, &Config::default()).unwrap();
        assert_eq!(stations, PathBuf::from("data/stations.csv"));
        assert_eq!(connections, PathBuf::from("data/connections.csv"));
    }

    #[test]
    fn test_config_fills_the_gaps() {
        let cli = cli(&["--stations", "s.csv"]);
        let config = Config {
            network: NetworkConfig {
                stations: Some(PathBuf::from("cfg-s.csv")),
                connections: Some(PathBuf::from("cfg-c.csv")),
            },
            default_metric: None,
        };

        let (stations, connections) = resolve_data_paths(&cli, &config).unwrap();
        assert_eq!(stations, PathBuf::from("s.csv"));
        assert_eq!(connections, PathBuf::from("cfg-c.csv"));
    }

    #[test]
    fn test_no_data_is_a_usage_error() {
        let cli = cli(&[]);
        let err = resolve_data_paths(&cli, &Config::default()).unwrap_err();
        assert!(matches!(err, WaypathError::UsageError(_)));
    }
}
