use crate::math::OrientedBox;
use crate::path::Pose;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique ID of an [Obstacle], as assigned by perception.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObstacleId(pub String);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObstacleId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<u32> for ObstacleId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// A perceived object the ego vehicle must not collide with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// The obstacle's ID.
    pub id: ObstacleId,
    /// The obstacle length in m.
    pub length: f64,
    /// The obstacle width in m.
    pub width: f64,
    /// How the obstacle is expected to move.
    pub motion: Motion,
}

/// The motion model of an [Obstacle].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// The obstacle stays where it is for the whole planning horizon.
    Static(Pose),
    /// The obstacle follows one of several predicted trajectories.
    Dynamic(Vec<PredictedTrajectory>),
}

/// One hypothesis of an obstacle's future motion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedTrajectory {
    /// The predicted samples, in order of increasing time.
    pub samples: Vec<TrajectorySample>,
}

/// A timestamped pose.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Time since the start of the planning cycle, in s.
    pub relative_time: f64,
    /// The pose at that time.
    pub pose: Pose,
}

impl Obstacle {
    /// Creates an obstacle that does not move.
    pub fn new_static(id: impl Into<ObstacleId>, length: f64, width: f64, pose: Pose) -> Self {
        Self {
            id: id.into(),
            length,
            width,
            motion: Motion::Static(pose),
        }
    }

    /// Creates an obstacle with predicted trajectories.
    pub fn new_dynamic(
        id: impl Into<ObstacleId>,
        length: f64,
        width: f64,
        trajectories: Vec<PredictedTrajectory>,
    ) -> Self {
        Self {
            id: id.into(),
            length,
            width,
            motion: Motion::Dynamic(trajectories),
        }
    }

    /// Whether the obstacle is expected to move.
    pub fn is_dynamic(&self) -> bool {
        matches!(self.motion, Motion::Dynamic(_))
    }

    /// The footprint the obstacle would occupy at the given pose.
    pub fn box_at(&self, pose: &Pose) -> OrientedBox {
        OrientedBox::new(pose.pos, pose.heading, self.length, self.width)
    }
}

impl PredictedTrajectory {
    pub fn new(samples: Vec<TrajectorySample>) -> Self {
        Self { samples }
    }
}

/// The obstacles relevant to one planning cycle, split by motion kind.
/// Entries may be `None` where an obstacle has been withdrawn upstream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecisionData {
    static_obstacles: Vec<Option<Obstacle>>,
    dynamic_obstacles: Vec<Option<Obstacle>>,
}

impl DecisionData {
    pub fn new(
        static_obstacles: Vec<Option<Obstacle>>,
        dynamic_obstacles: Vec<Option<Obstacle>>,
    ) -> Self {
        Self {
            static_obstacles,
            dynamic_obstacles,
        }
    }

    /// Sorts obstacles into the static and dynamic lists, preserving their order.
    pub fn from_obstacles(obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        let (dynamic, stationary): (Vec<_>, Vec<_>) =
            obstacles.into_iter().partition(Obstacle::is_dynamic);
        Self {
            static_obstacles: stationary.into_iter().map(Some).collect(),
            dynamic_obstacles: dynamic.into_iter().map(Some).collect(),
        }
    }

    pub fn static_obstacles(&self) -> &[Option<Obstacle>] {
        &self.static_obstacles
    }

    pub fn dynamic_obstacles(&self) -> &[Option<Obstacle>] {
        &self.dynamic_obstacles
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partition_preserves_order() {
        let data = DecisionData::from_obstacles([
            Obstacle::new_static("a", 1.0, 1.0, Pose::new(0.0, 0.0, 0.0)),
            Obstacle::new_dynamic("b", 1.0, 1.0, vec![PredictedTrajectory::default()]),
            Obstacle::new_static("c", 1.0, 1.0, Pose::new(5.0, 0.0, 0.0)),
        ]);
        let ids = |list: &[Option<Obstacle>]| {
            list.iter()
                .flatten()
                .map(|o| o.id.to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(data.static_obstacles()), ["a", "c"]);
        assert_eq!(ids(data.dynamic_obstacles()), ["b"]);
    }

    #[test]
    fn obstacle_box_uses_dimensions() {
        let obs = Obstacle::new_static(7u32, 6.0, 2.5, Pose::new(1.0, 2.0, 0.0));
        let b = obs.box_at(&Pose::new(1.0, 2.0, 0.0));
        assert_eq!(b.length(), 6.0);
        assert_eq!(b.width(), 2.5);
        assert_eq!(obs.id.to_string(), "7");
    }
}
