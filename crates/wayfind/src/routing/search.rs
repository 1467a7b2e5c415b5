use std::collections::{HashSet, VecDeque};

use crate::store::StoreMap;

use super::types::Route;

/// Find a shortest route (by edge count) from `start` to `goal`.
///
/// Breadth-first search over the directed store graph, carrying the full
/// path-so-far per queue entry. BFS explores all paths of length k before any
/// of length k+1, so the first time `goal` is dequeued the path has the
/// minimum number of edges. Among equally short routes, the one discovered
/// first under the map's declared neighbor order wins, which makes the result
/// deterministic.
///
/// Nodes are marked visited when enqueued, so no node ever carries more than
/// one pending path.
///
/// Returns `None` when either endpoint is not on the map or the goal is
/// unreachable from the start. `start == goal` yields the one-stop route.
pub fn find_path(map: &StoreMap, start: &str, goal: &str) -> Option<Route> {
    if !map.contains(start) || !map.contains(goal) {
        return None;
    }

    let mut queue: VecDeque<Vec<String>> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();

    queue.push_back(vec![start.to_string()]);
    visited.insert(start);

    while let Some(path) = queue.pop_front() {
        let node = path.last().expect("queued paths are never empty");

        if node == goal {
            return Some(Route::new(path));
        }

        for neighbor in map.neighbors(node) {
            if visited.insert(neighbor.as_str()) {
                let mut next = path.clone();
                next.push(neighbor.clone());
                queue.push_back(next);
            }
        }
    }

    None
}
