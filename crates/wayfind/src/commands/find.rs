use anyhow::{Result, bail};
use colored::Colorize;

use crate::playback::MarkerPlayback;
use crate::routing::serialize::route_to_string;
use crate::routing::types::{MapPoint, Trip, TripOutcome};
use crate::session::Navigator;

/// Run the `find` command: route from the current start to a product.
pub fn run(
    product: &str,
    from: Option<&str>,
    at: Option<&str>,
    animate: bool,
    notation: bool,
    quiet: bool,
) -> Result<()> {
    let mut navigator = super::default_session()?;

    if let Some(node) = from {
        navigator.set_start(node)?;
    } else if let Some(raw) = at {
        let point = parse_point(raw)?;
        let start = navigator.set_start_near(point).to_string();
        if !quiet {
            println!("Start location updated to: {}", start.cyan());
        }
    }

    match navigator.find_product(product) {
        TripOutcome::Found(trip) => {
            println!(
                "{} in Aisle {}",
                "Product found".green().bold(),
                trip.aisle.bold()
            );
            if !quiet {
                println!();
                println!(
                    "Route ({} stops): {}",
                    trip.route.len(),
                    route_to_string(&trip.route).cyan()
                );
            }
            for (i, instruction) in trip.instructions.iter().enumerate() {
                println!("  {}. {}", i + 1, instruction);
            }

            if notation {
                println!("{}", route_to_string(&trip.route));
            }

            if animate {
                println!();
                print_trace(&navigator, &trip, quiet);
            }
        }
        TripOutcome::UnknownProduct => {
            println!("{}", "Product not found".red());
        }
        TripOutcome::NoRoute { .. } => {
            println!("{}", "No route found.".red());
        }
    }

    Ok(())
}

/// Parse an `X,Y` point argument.
fn parse_point(raw: &str) -> Result<MapPoint> {
    let Some((x, y)) = raw.split_once(',') else {
        bail!("Expected a point as X,Y (e.g. 90,110), got '{raw}'");
    };
    let x: i32 = x.trim().parse()?;
    let y: i32 = y.trim().parse()?;
    Ok(MapPoint::new(x, y))
}

/// Print the marker positions the animation would play, one per line.
fn print_trace(navigator: &Navigator, trip: &Trip, quiet: bool) {
    let points: Vec<MapPoint> = trip
        .route
        .stops
        .iter()
        .filter_map(|s| navigator.map().position(s))
        .collect();

    let mut playback = MarkerPlayback::new(points);
    if !quiet {
        println!(
            "Marker trace to {} ({} positions):",
            trip.product,
            playback.total_positions()
        );
    }
    while let Some((x, y)) = playback.tick() {
        println!("  ({x:.1}, {y:.1})");
    }
}
