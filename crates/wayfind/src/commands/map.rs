use anyhow::{Result, bail};
use colored::Colorize;

use crate::render::{legend, render_map};
use crate::routing::serialize::string_to_route;
use crate::routing::types::{Route, TripOutcome};

/// Run the `map` command: draw the store map, optionally with a route.
///
/// The overlay comes either from routing to a product (`--route`) or from an
/// explicit route given in compact notation (`--path`).
pub fn run(route_to: Option<&str>, path: Option<&str>, quiet: bool) -> Result<()> {
    let navigator = super::default_session()?;

    let overlay: Option<Route> = if let Some(notation) = path {
        let Some(route) = string_to_route(notation) else {
            bail!("Invalid route notation '{notation}' (expected e.g. entrance->a1->b1)");
        };
        for stop in &route.stops {
            if !navigator.map().contains(stop) {
                bail!("Route stop '{stop}' is not on the store map");
            }
        }
        Some(route)
    } else if let Some(product) = route_to {
        match navigator.find_product(product) {
            TripOutcome::Found(trip) => Some(trip.route),
            TripOutcome::UnknownProduct => {
                println!("{}", "Product not found".red());
                return Ok(());
            }
            TripOutcome::NoRoute { .. } => {
                println!("{}", "No route found.".red());
                return Ok(());
            }
        }
    } else {
        None
    };

    print!("{}", render_map(navigator.map(), overlay.as_ref()));

    if quiet {
        return Ok(());
    }

    println!();
    for (letter, names) in legend(navigator.map()) {
        println!("  {} {}", letter.to_string().bold(), names);
    }
    println!();
    println!("  Start node: {}", navigator.current_start().cyan());
    if overlay.is_some() {
        println!("  {} start  {} goal  {} route", "S".bold(), "@".bold(), "*");
    }

    Ok(())
}
