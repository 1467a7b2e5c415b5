use super::types::Route;

/// Separator in route notation. Node names never contain it.
const ARROW: &str = "->";

/// Serialize a route to compact route notation.
///
/// Format: stop names joined by `->`, e.g. `entrance->a1->b1->bread`.
/// A one-stop route is just the stop name.
pub fn route_to_string(route: &Route) -> String {
    route.stops.join(ARROW)
}

/// Parse route notation back into a route.
///
/// Returns `None` for an empty string, an empty segment (dangling or doubled
/// arrow), or a segment with surrounding whitespace. Parsing is purely
/// syntactic; whether each stop exists on a map is the caller's concern.
pub fn string_to_route(s: &str) -> Option<Route> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let mut stops = Vec::new();
    for segment in s.split(ARROW) {
        if segment.is_empty() || segment != segment.trim() {
            return None;
        }
        stops.push(segment.to_string());
    }

    Some(Route::new(stops))
}
