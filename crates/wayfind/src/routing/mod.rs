pub mod directions;
pub mod search;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

pub use directions::synthesize;
pub use search::find_path;
pub use types::{Instruction, MapPoint, Route, Trip, TripOutcome, Turn};
