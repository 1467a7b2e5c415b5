use crate::store::StoreMap;

use super::types::{Instruction, Route, Turn};

/// Convert a route into turn-by-turn instructions, one per leg.
///
/// Each consecutive stop pair is classified by comparing coordinates. A
/// one-stop route produces no instructions. Stops missing a coordinate entry
/// would be an internal consistency defect; the map builder rejects such maps,
/// so the pair is skipped rather than guarded with its own error path.
pub fn synthesize(map: &StoreMap, route: &Route) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(route.legs());

    for pair in route.stops.windows(2) {
        let (Some(from), Some(to)) = (map.position(&pair[0]), map.position(&pair[1])) else {
            continue;
        };
        instructions.push(Instruction {
            turn: Turn::between(from, to),
            destination: pair[1].clone(),
        });
    }

    instructions
}
