use crate::cli::Cli;
use waypath_core::planner::Route;

/// Output in human-readable format
pub fn output_human(cli: &Cli, route: &Route) {
    if route.legs.is_empty() {
        if cli.quiet {
            return;
        }
        if route.from == route.to {
            println!("Already at {}", route.to);
        } else {
            println!("No route found from {} to {}", route.from, route.to);
        }
        return;
    }

    for leg in &route.legs {
        println!(
            "{} -> {}  [{}]  {:.2}  {:.0} min",
            leg.origin, leg.destination, leg.mode, leg.price, leg.minutes
        );
    }

    if !cli.quiet {
        println!(
            "{} leg(s), total price {:.2}, total {:.0} min (by {})",
            route.leg_count, route.total_price, route.total_minutes, route.metric
        );
    }
}
