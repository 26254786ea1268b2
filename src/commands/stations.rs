//! Stations listing command

use crate::cli::Cli;
use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::planner::Planner;

/// Execute the stations command
pub fn execute(cli: &Cli, planner: &Planner) -> Result<()> {
    let network = planner.network();
    let names = network.station_names();

    match cli.format {
        OutputFormat::Human => {
            for name in &names {
                println!("{}", name);
            }
            if !cli.quiet {
                println!(
                    "{} station(s), {} connection(s)",
                    network.len(),
                    network.connection_count()
                );
            }
        }
        OutputFormat::Json => {
            let stations: Vec<serde_json::Value> = names
                .iter()
                .map(|name| {
                    let departures = network
                        .station(name)
                        .map(|s| s.outgoing.len())
                        .unwrap_or(0);
                    serde_json::json!({ "name": name, "departures": departures })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&stations)?);
        }
    }

    Ok(())
}
