use super::*;
use crate::routing::search::find_path;
use crate::routing::synthesize;
use crate::routing::types::{MapPoint, Route, Turn};

#[test]
fn one_instruction_per_leg() {
    let map = demo_map();
    for goal in ["milk", "rice", "bread", "toothpaste", "a1"] {
        let route = find_path(&map, "entrance", goal).expect("reachable");
        let instructions = synthesize(&map, &route);
        assert_eq!(instructions.len(), route.legs());
    }
}

#[test]
fn single_stop_route_has_no_instructions() {
    let map = demo_map();
    let route = find_path(&map, "a2", "a2").expect("trivial route");
    assert!(synthesize(&map, &route).is_empty());
}

#[test]
fn strictly_increasing_x_is_all_go_right() {
    // Along the top corridor every leg increases x with y fixed.
    let map = demo_map();
    let route = find_path(&map, "entrance", "milk").expect("reachable");
    let instructions = synthesize(&map, &route);
    assert_eq!(instructions.len(), 4);
    for instruction in &instructions {
        assert_eq!(instruction.turn, Turn::Right);
    }
}

#[test]
fn instruction_text_names_the_destination() {
    let map = demo_map();
    let route = find_path(&map, "entrance", "a2").expect("reachable");
    let instructions = synthesize(&map, &route);
    let texts: Vec<String> = instructions.iter().map(|i| i.to_string()).collect();
    assert_eq!(texts, ["Go Right to a1", "Go Right to a2"]);
}

#[test]
fn vertical_moves_classify_up_and_down() {
    // a1(100,0) -> b1(100,100): same x, larger y → Down.
    let map = demo_map();
    let down = Turn::between(
        map.position("a1").unwrap(),
        map.position("b1").unwrap(),
    );
    assert_eq!(down, Turn::Down);
    let up = Turn::between(
        map.position("b1").unwrap(),
        map.position("a1").unwrap(),
    );
    assert_eq!(up, Turn::Up);
}

#[test]
fn leftward_move_classifies_left() {
    assert_eq!(
        Turn::between(MapPoint::new(200, 50), MapPoint::new(100, 50)),
        Turn::Left
    );
}

#[test]
fn both_axes_differing_is_diagonal() {
    // b1(100,100) -> bread(150,200).
    let map = demo_map();
    assert_eq!(
        Turn::between(
            map.position("b1").unwrap(),
            map.position("bread").unwrap()
        ),
        Turn::Diagonal
    );
}

#[test]
fn zero_length_edge_falls_into_diagonal() {
    // Identical points hit the diagonal fallback; there is no separate
    // zero-length case.
    let p = MapPoint::new(40, 40);
    assert_eq!(Turn::between(p, p), Turn::Diagonal);
}

#[test]
fn stops_without_coordinates_are_skipped() {
    // A route mentioning a node the map does not know cannot be classified;
    // the leg is dropped rather than panicking.
    let map = demo_map();
    let route = Route::new(vec![
        "entrance".to_string(),
        "ghost".to_string(),
        "a1".to_string(),
    ]);
    let instructions = synthesize(&map, &route);
    assert!(instructions.is_empty());
}

#[test]
fn phrases_match_the_store_voice() {
    assert_eq!(Turn::Up.phrase(), "Go Up");
    assert_eq!(Turn::Down.phrase(), "Go Down");
    assert_eq!(Turn::Left.phrase(), "Go Left");
    assert_eq!(Turn::Right.phrase(), "Go Right");
    assert_eq!(Turn::Diagonal.phrase(), "Turn diagonally");
}
