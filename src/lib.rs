//! Maps static and moving obstacles onto the station-time (ST) graph of a
//! planned path. The resulting boundaries are the regions a DP speed search
//! must keep its speed profile out of.

pub use boundary::{StGraphBoundary, StPoint};
pub use cgmath;
pub use config::{StBoundaryConfig, VehicleFootprint};
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::{MapperError, Result};
pub use mapper::StBoundaryMapper;
pub use obstacle::{
    DecisionData, Motion, Obstacle, ObstacleId, PredictedTrajectory, TrajectorySample,
};
pub use path::{Path, PathSample, Pose};
pub use util::Interval;

mod boundary;
mod config;
mod debug;
mod error;
mod mapper;
pub mod math;
mod obstacle;
mod path;
mod util;
