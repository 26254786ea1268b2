//! Departures command

use crate::cli::Cli;
use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::planner::Planner;

/// Execute the departures command
pub fn execute(cli: &Cli, planner: &Planner, station: &str) -> Result<()> {
    // Unknown names are a data error, surfaced before any output
    let station = planner.network().station(station)?;

    match cli.format {
        OutputFormat::Human => {
            if station.outgoing.is_empty() {
                if !cli.quiet {
                    println!("No departures from {}", station.name);
                }
                return Ok(());
            }
            for leg in &station.outgoing {
                println!(
                    "{} -> {}  [{}]  {:.2}  {:.0} min",
                    leg.origin, leg.destination, leg.mode, leg.price, leg.minutes
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&station.outgoing)?);
        }
    }

    Ok(())
}
