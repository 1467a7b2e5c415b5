use crate::routing::types::MapPoint;

/// Interpolation steps per route leg.
const STEPS_PER_LEG: u32 = 20;

/// Self-paced playback of a marker along a route polyline.
///
/// Purely cosmetic: it replays an already-computed route as a finite sequence
/// of interpolated positions and has no coupling to the pathfinder. The timer
/// lives with the caller; each `tick` yields the next position until the
/// sequence is exhausted. Starting a new route via [`restart`] abandons the
/// in-flight sequence, which is how cancellation works when a new route is
/// drawn before the previous animation completes.
///
/// [`restart`]: MarkerPlayback::restart
#[derive(Debug, Clone)]
pub struct MarkerPlayback {
    points: Vec<MapPoint>,
    leg: usize,
    step: u32,
}

impl MarkerPlayback {
    /// Start playback over the given polyline points.
    pub fn new(points: Vec<MapPoint>) -> Self {
        Self {
            points,
            leg: 0,
            step: 0,
        }
    }

    /// Replace the current sequence with a new polyline and rewind.
    pub fn restart(&mut self, points: Vec<MapPoint>) {
        self.points = points;
        self.leg = 0;
        self.step = 0;
    }

    /// Whether the sequence has been fully played.
    pub fn is_finished(&self) -> bool {
        self.points.is_empty() || self.leg >= self.points.len().saturating_sub(1)
    }

    /// Advance one step and return the marker position, or `None` once the
    /// sequence is exhausted.
    ///
    /// Each leg plays `STEPS_PER_LEG + 1` positions, from the leg's start
    /// point (progress 0) through its end point (progress 1). A single-point
    /// polyline yields nothing; the marker is simply placed at the goal by
    /// the caller in that case.
    pub fn tick(&mut self) -> Option<(f64, f64)> {
        if self.is_finished() {
            return None;
        }

        let start = self.points[self.leg];
        let end = self.points[self.leg + 1];
        let progress = f64::from(self.step) / f64::from(STEPS_PER_LEG);

        let x = f64::from(start.x) + f64::from(end.x - start.x) * progress;
        let y = f64::from(start.y) + f64::from(end.y - start.y) * progress;

        if self.step >= STEPS_PER_LEG {
            self.leg += 1;
            self.step = 0;
        } else {
            self.step += 1;
        }

        Some((x, y))
    }

    /// Total number of positions a full, unticked sequence yields.
    pub fn total_positions(&self) -> usize {
        let legs = self.points.len().saturating_sub(1);
        legs * (STEPS_PER_LEG as usize + 1)
    }
}
