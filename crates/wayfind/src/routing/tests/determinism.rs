use super::*;
use crate::routing::search::find_path;
use crate::routing::serialize::route_to_string;

/// Run the same query repeatedly and assert identical notation every time.
fn assert_deterministic(start: &str, goal: &str, iterations: usize) {
    let map = demo_map();
    let reference = find_path(&map, start, goal).map(|r| route_to_string(&r));
    for i in 1..iterations {
        let result = find_path(&map, start, goal).map(|r| route_to_string(&r));
        assert_eq!(
            reference, result,
            "Non-deterministic route for {start} -> {goal} on iteration {i}"
        );
    }
}

#[test]
fn corridor_route_deterministic() {
    assert_deterministic("entrance", "milk", 50);
}

#[test]
fn branch_route_deterministic() {
    assert_deterministic("entrance", "toothpaste", 50);
}

#[test]
fn failed_route_deterministic() {
    assert_deterministic("milk", "entrance", 50);
}

#[test]
fn full_query_deterministic_across_sessions() {
    // Fresh sessions must agree: map and catalog are fixed data and the
    // search has no hidden state.
    let reference: Vec<String> = {
        let navigator = demo_navigator();
        let trip = expect_trip(navigator.find_product("bread"));
        trip.instructions.iter().map(|i| i.to_string()).collect()
    };
    for _ in 0..20 {
        let navigator = demo_navigator();
        let trip = expect_trip(navigator.find_product("bread"));
        let texts: Vec<String> = trip.instructions.iter().map(|i| i.to_string()).collect();
        assert_eq!(reference, texts);
    }
}
