mod determinism;
mod directions;

use crate::catalog::ProductCatalog;
use crate::session::Navigator;
use crate::store::StoreMap;

use super::types::{Route, Trip, TripOutcome};

/// The fixed demo store map.
fn demo_map() -> StoreMap {
    StoreMap::default_layout()
}

/// A fresh demo session starting at the entrance.
fn demo_navigator() -> Navigator {
    Navigator::default_store()
}

/// A session over a custom map with the demo catalog.
fn navigator_with_map(map: StoreMap, start: &str) -> Navigator {
    Navigator::new(map, ProductCatalog::default_catalog(), start)
        .expect("test map should be consistent with the demo catalog")
}

/// Stop names of a route as plain string slices.
fn stops(route: &Route) -> Vec<&str> {
    route.stops.iter().map(String::as_str).collect()
}

/// Shortest distance in edges from `start` to every reachable node.
///
/// Plain BFS level counting with no path tracking, kept independent of the
/// pathfinder so it can serve as a cross-check on route lengths.
fn distances_from(map: &StoreMap, start: &str) -> Vec<(String, usize)> {
    use std::collections::{HashSet, VecDeque};

    let mut out = Vec::new();
    if !map.contains(start) {
        return out;
    }

    let mut queue: VecDeque<(String, usize)> = VecDeque::new();
    let mut visited: HashSet<String> = HashSet::new();

    queue.push_back((start.to_string(), 0));
    visited.insert(start.to_string());

    while let Some((node, dist)) = queue.pop_front() {
        for neighbor in map.neighbors(&node) {
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor.clone(), dist + 1));
            }
        }
        out.push((node, dist));
    }

    out
}

/// Unwrap a successful trip or panic with the failure.
fn expect_trip(outcome: TripOutcome) -> Trip {
    match outcome {
        TripOutcome::Found(trip) => trip,
        TripOutcome::UnknownProduct => panic!("Expected a trip, product was not recognized"),
        TripOutcome::NoRoute { product } => {
            panic!("Expected a trip, no route to '{product}'")
        }
    }
}
