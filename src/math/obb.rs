//! Oriented rectangles and the separating axis overlap test.

use super::{heading_vector, rot90, Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;

/// A rectangle with an arbitrary rotation, used to approximate the
/// footprint of the ego vehicle or an obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox {
    /// The centre of the box in world space.
    centre: Point2d,
    /// Unit vector along the box's length.
    dir: Vector2d,
    /// Half the extent along `dir`, in m.
    half_len: f64,
    /// Half the extent perpendicular to `dir`, in m.
    half_wid: f64,
}

impl OrientedBox {
    /// Creates a box centred at `centre`, with its length aligned to `heading`.
    pub fn new(centre: Point2d, heading: f64, length: f64, width: f64) -> Self {
        Self {
            centre,
            dir: heading_vector(heading),
            half_len: 0.5 * length,
            half_wid: 0.5 * width,
        }
    }

    /// The centre of the box.
    pub fn centre(&self) -> Point2d {
        self.centre
    }

    /// The length of the box in m.
    pub fn length(&self) -> f64 {
        2.0 * self.half_len
    }

    /// The width of the box in m.
    pub fn width(&self) -> f64 {
        2.0 * self.half_wid
    }

    /// Returns a copy of the box grown by `buffer` on every side.
    pub fn expanded(&self, buffer: f64) -> Self {
        Self {
            half_len: self.half_len + buffer,
            half_wid: self.half_wid + buffer,
            ..*self
        }
    }

    /// The four corners, counter-clockwise starting from the rear right.
    pub fn corners(&self) -> [Point2d; 4] {
        let long = self.dir * self.half_len;
        let lat = rot90(self.dir) * self.half_wid;
        [
            self.centre - long - lat,
            self.centre + long - lat,
            self.centre + long + lat,
            self.centre - long + lat,
        ]
    }

    /// Whether the two boxes intersect. Boxes that merely touch are considered overlapping.
    pub fn has_overlap(&self, other: &Self) -> bool {
        let axes = [self.dir, rot90(self.dir), other.dir, rot90(other.dir)];
        let (ours, theirs) = (self.corners(), other.corners());
        axes.into_iter().all(|axis| {
            let a = project_onto(&ours, axis);
            let b = project_onto(&theirs, axis);
            a.max >= b.min && b.max >= a.min
        })
    }
}

/// Projects the corners onto an axis, returning the covered extent.
fn project_onto(corners: &[Point2d; 4], axis: Vector2d) -> Interval<f64> {
    corners
        .iter()
        .map(|c| c.to_vec().dot(axis))
        .fold(Interval::new(f64::INFINITY, f64::NEG_INFINITY), |acc, d| {
            Interval::new(f64::min(acc.min, d), f64::max(acc.max, d))
        })
}

/// Tests the vehicle box against an obstacle box, after inflating the
/// vehicle box by `buffer` along both of its local axes.
pub fn overlaps(vehicle: &OrientedBox, obstacle: &OrientedBox, buffer: f64) -> bool {
    vehicle.expanded(buffer).has_overlap(obstacle)
}
