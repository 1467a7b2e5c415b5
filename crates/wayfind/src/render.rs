use std::collections::HashMap;

use crate::routing::types::Route;
use crate::store::StoreMap;

/// Character-grid width the map is scaled into.
const GRID_COLS: usize = 49;
/// Character-grid height the map is scaled into.
const GRID_ROWS: usize = 13;

/// Render the store map as a character grid.
///
/// Node positions are scaled from pixel space into a fixed-size grid. Each
/// node is drawn as the first letter of its name (uppercase). When a route is
/// given, the legs are traced with `*`, the start is marked `S` and the goal
/// `@`. Route markers win over plain node letters on the same cell.
///
/// Output is plain text; callers decide about color.
pub fn render_map(map: &StoreMap, route: Option<&Route>) -> String {
    let nodes = map.nodes();
    if nodes.is_empty() {
        return String::new();
    }

    let min_x = nodes.iter().map(|n| n.pos.x).min().unwrap_or(0);
    let max_x = nodes.iter().map(|n| n.pos.x).max().unwrap_or(0);
    let min_y = nodes.iter().map(|n| n.pos.y).min().unwrap_or(0);
    let max_y = nodes.iter().map(|n| n.pos.y).max().unwrap_or(0);

    let to_cell = |x: i32, y: i32| -> (usize, usize) {
        let col = scale(x, min_x, max_x, GRID_COLS - 1);
        let row = scale(y, min_y, max_y, GRID_ROWS - 1);
        (col, row)
    };

    let mut grid = vec![vec![' '; GRID_COLS]; GRID_ROWS];

    // Node letters first; route markers overwrite them below.
    for node in nodes {
        let (col, row) = to_cell(node.pos.x, node.pos.y);
        let letter = node
            .name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        grid[row][col] = letter;
    }

    if let Some(route) = route {
        let cells: Vec<(usize, usize)> = route
            .stops
            .iter()
            .filter_map(|stop| map.position(stop))
            .map(|p| to_cell(p.x, p.y))
            .collect();

        for pair in cells.windows(2) {
            trace_leg(&mut grid, pair[0], pair[1]);
        }
        if let Some(&(col, row)) = cells.first() {
            grid[row][col] = 'S';
        }
        if let Some(&(col, row)) = cells.last() {
            grid[row][col] = '@';
        }
    }

    let mut out = String::new();
    for row in &grid {
        let line: String = row.iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Legend of node letters to full names, for printing under the map.
pub fn legend(map: &StoreMap) -> Vec<(char, String)> {
    let mut seen: HashMap<char, Vec<&str>> = HashMap::new();
    let mut order = Vec::new();
    for node in map.nodes() {
        let letter = node
            .name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        let entry = seen.entry(letter).or_default();
        if entry.is_empty() {
            order.push(letter);
        }
        entry.push(node.name.as_str());
    }
    order
        .into_iter()
        .map(|letter| (letter, seen[&letter].join(", ")))
        .collect()
}

fn scale(v: i32, min: i32, max: i32, span: usize) -> usize {
    if max == min {
        return 0;
    }
    let t = f64::from(v - min) / f64::from(max - min);
    (t * span as f64).round() as usize
}

/// Trace a route leg between two grid cells with `*`, stepping one cell at a
/// time toward the target, horizontal first then vertical.
fn trace_leg(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (mut col, mut row) = (from.0 as i32, from.1 as i32);
    let (tcol, trow) = (to.0 as i32, to.1 as i32);

    while (col, row) != (tcol, trow) {
        if col != tcol {
            col += (tcol - col).signum();
        } else {
            row += (trow - row).signum();
        }
        if (col, row) != (tcol, trow) {
            let cell = &mut grid[row as usize][col as usize];
            if *cell == ' ' {
                *cell = '*';
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::search::find_path;

    #[test]
    fn every_node_letter_appears() {
        let map = StoreMap::default_layout();
        let out = render_map(&map, None);
        for letter in ['E', 'A', 'M', 'R', 'B', 'T'] {
            assert!(out.contains(letter), "missing letter {letter} in:\n{out}");
        }
    }

    #[test]
    fn route_overlay_marks_start_and_goal() {
        let map = StoreMap::default_layout();
        let route = find_path(&map, "entrance", "milk").expect("reachable");
        let out = render_map(&map, Some(&route));
        assert!(out.contains('S'));
        assert!(out.contains('@'));
        assert!(out.contains('*'));
    }

    #[test]
    fn empty_map_renders_empty() {
        let map = StoreMap::builder().build().expect("empty map is valid");
        assert!(render_map(&map, None).is_empty());
    }

    #[test]
    fn legend_groups_nodes_by_letter() {
        let map = StoreMap::default_layout();
        let legend = legend(&map);
        let a_entry = legend
            .iter()
            .find(|(letter, _)| *letter == 'A')
            .expect("aisle nodes present");
        assert!(a_entry.1.contains("a1"));
        assert!(a_entry.1.contains("a3"));
    }
}
