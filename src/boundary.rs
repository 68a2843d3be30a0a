//! Forbidden regions of the station-time plane.

use crate::ObstacleId;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A point in the station-time plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StPoint {
    /// The station in m.
    pub s: f64,
    /// The time in s.
    pub t: f64,
}

impl StPoint {
    pub const fn new(s: f64, t: f64) -> Self {
        Self { s, t }
    }
}

/// A closed polygon in the ST plane that a speed profile must not enter.
///
/// Boundaries of static obstacles are rectangles spanning the whole planning
/// horizon. Boundaries of dynamic obstacles list the lower edge in order of
/// increasing time, then the upper edge in order of decreasing time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StGraphBoundary {
    obstacle_id: ObstacleId,
    points: Vec<StPoint>,
}

impl StGraphBoundary {
    pub fn new(obstacle_id: ObstacleId, points: Vec<StPoint>) -> Self {
        Self {
            obstacle_id,
            points,
        }
    }

    /// The obstacle this boundary was produced for.
    pub fn obstacle_id(&self) -> &ObstacleId {
        &self.obstacle_id
    }

    /// The polygon's vertices.
    pub fn points(&self) -> &[StPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_s(&self) -> f64 {
        self.points.iter().map(|p| p.s).fold(f64::INFINITY, f64::min)
    }

    pub fn max_s(&self) -> f64 {
        self.points.iter().map(|p| p.s).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_t(&self) -> f64 {
        self.points.iter().map(|p| p.t).fold(f64::INFINITY, f64::min)
    }

    pub fn max_t(&self) -> f64 {
        self.points.iter().map(|p| p.t).fold(f64::NEG_INFINITY, f64::max)
    }

    /// The lower (time ascending) and upper (time descending) edges of the polygon.
    pub fn edges(&self) -> (&[StPoint], &[StPoint]) {
        self.points.split_at(self.points.len() / 2)
    }

    /// Whether the lower edge runs forward in time and the upper edge runs back.
    pub fn is_well_ordered(&self) -> bool {
        let (lower, upper) = self.edges();
        lower.iter().tuple_windows().all(|(a, b)| a.t <= b.t)
            && upper.iter().tuple_windows().all(|(a, b)| a.t >= b.t)
    }
}
