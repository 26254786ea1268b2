//! Route command

mod human;
mod json;

use crate::cli::Cli;
use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::planner::{Metric, Planner};

/// Execute the route command
pub fn execute(cli: &Cli, planner: &Planner, from: &str, to: &str, metric: Metric) -> Result<()> {
    let route = planner.route(from, to, metric)?;

    match cli.format {
        OutputFormat::Human => human::output_human(cli, &route),
        OutputFormat::Json => json::output_json(&route)?,
    }

    Ok(())
}
