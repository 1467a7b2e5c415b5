use std::cmp::Ordering;
use std::fmt;

/// Integer map coordinate in pixel space.
///
/// Node positions on the store plan are whole pixels, so coordinates are stored
/// as `i32`. This keeps Eq, Hash and Ord exact with no floating-point
/// comparison issues; distances are compared in squared form for the same
/// reason.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapPoint {
    pub x: i32,
    pub y: i32,
}

impl MapPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Used for nearest-node queries where only the ordering matters, so the
    /// square root is never taken.
    pub fn distance_sq(self, other: MapPoint) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl Ord for MapPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for MapPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Coarse travel direction between two consecutive route stops.
///
/// Classification is purely coordinate-based: aligned moves become one of the
/// four axis directions, everything else (including the degenerate case where both
/// points coincide) falls into `Diagonal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Up,
    Down,
    Left,
    Right,
    Diagonal,
}

impl Turn {
    /// Classify the move from `from` to `to`.
    ///
    /// Same x, differing y → Up/Down; same y, differing x → Left/Right;
    /// anything else → Diagonal. The map's y axis grows downward, so a larger
    /// y means further down the store plan.
    pub fn between(from: MapPoint, to: MapPoint) -> Turn {
        if from.x == to.x && from.y != to.y {
            if to.y > from.y { Turn::Down } else { Turn::Up }
        } else if from.y == to.y && from.x != to.x {
            if to.x > from.x { Turn::Right } else { Turn::Left }
        } else {
            Turn::Diagonal
        }
    }

    /// The spoken phrase for this turn.
    pub fn phrase(self) -> &'static str {
        match self {
            Turn::Up => "Go Up",
            Turn::Down => "Go Down",
            Turn::Left => "Go Left",
            Turn::Right => "Go Right",
            Turn::Diagonal => "Turn diagonally",
        }
    }
}

/// One turn-by-turn instruction: a direction and the stop it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub turn: Turn,
    pub destination: String,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.turn.phrase(), self.destination)
    }
}

/// An ordered sequence of node names from a start to a goal, both inclusive.
///
/// Produced fresh per query and never persisted. A single-stop route (start
/// equals goal) is valid and has zero legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub stops: Vec<String>,
}

impl Route {
    pub fn new(stops: Vec<String>) -> Self {
        Self { stops }
    }

    /// Number of stops, endpoints included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of edges traversed. One instruction is produced per leg.
    pub fn legs(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    pub fn goal(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }
}

/// The full answer to one wayfinding query.
#[derive(Debug, Clone)]
pub struct Trip {
    /// Searchable product name, as stored in the catalog.
    pub product: String,
    /// Display aisle label for the product.
    pub aisle: String,
    pub route: Route,
    pub instructions: Vec<Instruction>,
}

/// Outcome of a wayfinding query.
///
/// Both failure cases are recoverable conditions surfaced to the user, never
/// panics: an unrecognized product name, or a product whose shelf cannot be
/// reached from the current start.
#[derive(Debug, Clone)]
pub enum TripOutcome {
    Found(Trip),
    UnknownProduct,
    NoRoute {
        /// The product that was found in the catalog but could not be routed to.
        product: String,
    },
}
