//! The discretized ego path that obstacles are projected onto.

use crate::error::{MapperError, Result};
use crate::math::{
    heading_vector, subdivided_samples_along_curve, vector_heading, OrientedBox,
    ParametricCurve2d, Point2d,
};
use crate::VehicleFootprint;
use cgmath::prelude::*;
use serde::{Deserialize, Serialize};

/// A position and heading in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// The world space coordinates.
    pub pos: Point2d,
    /// The heading in radians, counter-clockwise from the positive x-axis.
    pub heading: f64,
}

impl Pose {
    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            pos: Point2d::new(x, y),
            heading,
        }
    }
}

/// A single point on the ego path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    /// The station (arc length from the start of the path) in m.
    pub s: f64,
    /// The pose of the path at this station.
    pub pose: Pose,
}

impl PathSample {
    /// The footprint the ego vehicle occupies when positioned at this sample.
    pub fn vehicle_box(&self, vehicle: &VehicleFootprint) -> OrientedBox {
        let shift = heading_vector(self.pose.heading) * vehicle.centre_offset();
        OrientedBox::new(
            self.pose.pos + shift,
            self.pose.heading,
            vehicle.length,
            vehicle.width,
        )
    }
}

/// An ordered sequence of path samples with non-decreasing stations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    samples: Vec<PathSample>,
}

impl Path {
    /// Creates a path from samples, checking that every station is
    /// non-negative and that stations never decrease.
    pub fn new(samples: Vec<PathSample>) -> Result<Self> {
        if let Some(bad) = samples.iter().find(|p| !p.s.is_finite() || p.s < 0.0) {
            return Err(MapperError::invalid_input(format!(
                "path station {} is not a non-negative number",
                bad.s
            )));
        }
        if let Some(idx) = samples.windows(2).position(|w| w[1].s < w[0].s) {
            return Err(MapperError::invalid_input(format!(
                "path station decreases at sample {}",
                idx + 1
            )));
        }
        Ok(Self { samples })
    }

    /// Creates a path through the given poses, assigning each
    /// one the cumulative straight-line distance as its station.
    pub fn from_poses(poses: impl IntoIterator<Item = Pose>) -> Self {
        let mut s = 0.0;
        let mut last: Option<Point2d> = None;
        let samples = poses
            .into_iter()
            .map(|pose| {
                if let Some(prev) = last {
                    s += prev.distance(pose.pos);
                }
                last = Some(pose.pos);
                PathSample { s, pose }
            })
            .collect();
        Self { samples }
    }

    /// Samples a curve so that consecutive samples are at most `step` m apart.
    /// Headings follow the curve's tangent.
    pub fn from_curve(curve: &impl ParametricCurve2d, step: f64) -> Self {
        let poses = subdivided_samples_along_curve(curve, step).map(|(t, pos)| Pose {
            pos,
            heading: vector_heading(curve.sample_dt(t)).unwrap_or(0.0),
        });
        Self::from_poses(poses)
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the path has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples, in order of increasing station.
    pub fn samples(&self) -> &[PathSample] {
        &self.samples
    }

    /// The station of the final sample, or zero for an empty path.
    pub fn length(&self) -> f64 {
        self.samples.last().map_or(0.0, |p| p.s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{LineSegment2d, QuadraticBezier2d};
    use assert_approx_eq::assert_approx_eq;

    fn sample(s: f64) -> PathSample {
        PathSample {
            s,
            pose: Pose::new(s, 0.0, 0.0),
        }
    }

    #[test]
    fn rejects_decreasing_stations() {
        let err = Path::new(vec![sample(0.0), sample(5.0), sample(4.0)]).unwrap_err();
        assert!(matches!(err, MapperError::InvalidInput(_)));
        assert!(Path::new(vec![sample(-1.0), sample(1.0)]).is_err());
        assert!(Path::new(vec![sample(0.0), sample(f64::NAN)]).is_err());
    }

    #[test]
    fn accepts_repeated_stations() {
        let path = Path::new(vec![sample(0.0), sample(3.0), sample(3.0)]).unwrap();
        assert_eq!(path.len(), 3);
        assert_approx_eq!(path.length(), 3.0);
    }

    #[test]
    fn stations_from_poses() {
        let path = Path::from_poses([
            Pose::new(0.0, 0.0, 0.0),
            Pose::new(3.0, 4.0, 0.0),
            Pose::new(3.0, 10.0, 0.0),
        ]);
        let s = path.samples().iter().map(|p| p.s).collect::<Vec<_>>();
        assert_eq!(s, vec![0.0, 5.0, 11.0]);
    }

    #[test]
    fn straight_curve_has_constant_heading() {
        let line = LineSegment2d::from_ends(Point2d::new(0.0, 0.0), Point2d::new(0.0, 10.0));
        let path = Path::from_curve(&line, 1.0);
        assert!(path.len() >= 11);
        assert_approx_eq!(path.length(), 10.0);
        for p in path.samples() {
            assert_approx_eq!(p.pose.heading, std::f64::consts::FRAC_PI_2);
        }
    }

    #[test]
    fn curved_path_is_monotonic() {
        let curve = QuadraticBezier2d::new(&[
            Point2d::new(0.0, 0.0),
            Point2d::new(30.0, 0.0),
            Point2d::new(30.0, 30.0),
        ]);
        let path = Path::from_curve(&curve, 0.5);
        assert!(Path::new(path.samples().to_vec()).is_ok());
        assert!(path.length() > 42.0);
    }

    #[test]
    fn vehicle_box_follows_reference_point() {
        let vehicle = VehicleFootprint {
            length: 4.0,
            width: 2.0,
            front_edge_to_center: 3.0,
            back_edge_to_center: 1.0,
        };
        let b = sample(10.0).vehicle_box(&vehicle);
        assert_approx_eq!(b.centre().x, 11.0);
        assert_approx_eq!(b.centre().y, 0.0);
    }
}
