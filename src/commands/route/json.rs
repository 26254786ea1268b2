use waypath_core::error::Result;
use waypath_core::planner::Route;

/// Output the serialized route
pub fn output_json(route: &Route) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(route)?);
    Ok(())
}
