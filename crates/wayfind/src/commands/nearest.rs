use colored::Colorize;

use crate::routing::types::MapPoint;
use crate::store::StoreMap;

/// Run the `nearest` command: report the node closest to a point.
pub fn run(x: i32, y: i32) {
    let map = StoreMap::default_layout();
    let point = MapPoint::new(x, y);
    match map.nearest_node(point) {
        Some(name) => {
            let pos = map.position(name).unwrap_or(point);
            println!("Nearest node to {point}: {} at {pos}", name.cyan());
        }
        None => println!("The store map has no nodes."),
    }
}
