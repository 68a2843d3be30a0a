use self::builder::{map_static, map_trajectory, MappingContext};
use crate::boundary::StGraphBoundary;
use crate::config::StBoundaryConfig;
use crate::debug::debug_boundary;
use crate::error::{MapperError, Result};
use crate::obstacle::{DecisionData, Motion, Obstacle, TrajectorySample};
use crate::path::Path;
use log::{debug, error};
use smallvec::SmallVec;

mod builder;
mod search;

/// The boundaries produced for one obstacle. Static obstacles and most
/// dynamic ones produce at most a single boundary.
type ObstacleBoundaries = SmallVec<[StGraphBoundary; 1]>;

/// Maps obstacles onto the station-time graph of the ego path,
/// producing the regions a DP speed search must avoid.
#[derive(Clone, Debug)]
pub struct StBoundaryMapper {
    config: StBoundaryConfig,
}

impl StBoundaryMapper {
    /// Creates a mapper, checking the configuration first.
    pub fn new(config: StBoundaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The mapper's configuration.
    pub fn config(&self) -> &StBoundaryConfig {
        &self.config
    }

    /// Computes the ST boundaries of every obstacle for one planning cycle.
    ///
    /// Static obstacles are mapped first, then dynamic ones, each in list order.
    /// Absent entries are skipped. If any obstacle fails to map, no boundaries
    /// are returned at all.
    ///
    /// # Parameters
    /// * `initial_point` - The ego state the plan starts from
    /// * `decision_data` - The obstacles to map
    /// * `path` - The ego path, with at least two samples
    /// * `reference_line` - The lane reference line the path was generated from
    /// * `planning_distance` - The maximum station the plan may reach, in m
    /// * `planning_time` - The planning horizon, in s
    pub fn map(
        &self,
        initial_point: &TrajectorySample,
        decision_data: &DecisionData,
        path: &Path,
        reference_line: &Path,
        planning_distance: f64,
        planning_time: f64,
    ) -> Result<Vec<StGraphBoundary>> {
        if planning_time.is_nan() || planning_time < 0.0 {
            let msg = format!("planning time must be non-negative, got {planning_time}");
            error!("{msg}");
            return Err(MapperError::invalid_input(msg));
        }
        if !planning_distance.is_finite() {
            let msg = format!("planning distance must be finite, got {planning_distance}");
            error!("{msg}");
            return Err(MapperError::invalid_input(msg));
        }
        if path.len() < 2 {
            let msg = format!("path has {} points, at least 2 are required", path.len());
            error!("{msg}");
            return Err(MapperError::invalid_input(msg));
        }

        debug!(
            "mapping ST boundaries from s = {:.2} at t = {:.2} over {:.1} m / {:.1} s \
             (path {} samples, reference line {} samples)",
            path.samples()[0].s,
            initial_point.relative_time,
            planning_distance,
            planning_time,
            path.len(),
            reference_line.len()
        );

        let ctx = MappingContext {
            path,
            vehicle: &self.config.vehicle,
            buffer: self.config.boundary_buffer,
            planning_distance,
            planning_time,
        };

        let obstacles = decision_data
            .static_obstacles()
            .iter()
            .chain(decision_data.dynamic_obstacles())
            .flatten();

        let mut boundaries = Vec::new();
        for obstacle in obstacles {
            let mapped = map_obstacle(obstacle, &ctx).map_err(|e| {
                error!("failed to map obstacle {}: {e}", obstacle.id);
                MapperError::mapping_failure(obstacle.id.clone(), e)
            })?;
            debug!("obstacle {} produced {} boundaries", obstacle.id, mapped.len());
            boundaries.extend(mapped);
        }

        boundaries.iter().for_each(debug_boundary);
        debug!("mapped {} ST boundaries", boundaries.len());
        Ok(boundaries)
    }
}

/// Maps one obstacle, producing a boundary per predicted trajectory
/// for dynamic obstacles and at most one for static obstacles.
fn map_obstacle(obstacle: &Obstacle, ctx: &MappingContext<'_>) -> Result<ObstacleBoundaries> {
    match &obstacle.motion {
        Motion::Static(pose) => Ok(map_static(obstacle, pose, ctx)?.into_iter().collect()),
        Motion::Dynamic(trajectories) => {
            let mut out = ObstacleBoundaries::new();
            for trajectory in trajectories {
                out.extend(map_trajectory(obstacle, trajectory, ctx)?);
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::obstacle::PredictedTrajectory;
    use crate::path::Pose;
    use crate::VehicleFootprint;

    fn mapper() -> StBoundaryMapper {
        StBoundaryMapper::new(StBoundaryConfig {
            boundary_buffer: 0.5,
            vehicle: VehicleFootprint::new(4.0, 2.0),
        })
        .unwrap()
    }

    fn start() -> TrajectorySample {
        TrajectorySample {
            relative_time: 0.0,
            pose: Pose::new(0.0, 0.0, 0.0),
        }
    }

    fn straight_path() -> Path {
        Path::from_poses((0..5).map(|i| Pose::new(10.0 * i as f64, 0.0, 0.0)))
    }

    #[test]
    fn rejects_invalid_config() {
        let config = StBoundaryConfig {
            boundary_buffer: f64::NAN,
            ..Default::default()
        };
        assert!(StBoundaryMapper::new(config).is_err());
    }

    #[test]
    fn rejects_nan_planning_time() {
        let path = straight_path();
        let err = mapper()
            .map(&start(), &DecisionData::default(), &path, &path, 50.0, f64::NAN)
            .unwrap_err();
        assert!(matches!(err, MapperError::InvalidInput(_)));
    }

    #[test]
    fn rejects_unbounded_planning_distance() {
        let path = straight_path();
        let obs = Obstacle::new_static("cone", 14.0, 2.0, Pose::new(25.0, 0.0, 0.0));
        let data = DecisionData::from_obstacles([obs]);
        for distance in [f64::NAN, f64::INFINITY] {
            let err = mapper()
                .map(&start(), &data, &path, &path, distance, 8.0)
                .unwrap_err();
            assert!(matches!(err, MapperError::InvalidInput(_)));
        }
    }

    #[test]
    fn one_boundary_per_trajectory() {
        let path = straight_path();
        let traj = |y: f64| {
            PredictedTrajectory::new(vec![
                TrajectorySample {
                    relative_time: 0.0,
                    pose: Pose::new(25.0, y, 0.0),
                },
                TrajectorySample {
                    relative_time: 1.0,
                    pose: Pose::new(25.0, y, 0.0),
                },
            ])
        };
        // The second hypothesis stays well clear of the path.
        let obs = Obstacle::new_dynamic("car", 14.0, 2.0, vec![traj(0.0), traj(20.0), traj(0.5)]);
        let data = DecisionData::from_obstacles([obs]);
        let boundaries = mapper().map(&start(), &data, &path, &path, 50.0, 8.0).unwrap();
        assert_eq!(boundaries.len(), 2);
        for b in &boundaries {
            assert_eq!(b.len(), 4);
            assert_eq!(b.obstacle_id().to_string(), "car");
        }
    }

    #[test]
    fn obstacle_in_wrong_list_is_mapped_by_its_motion() {
        let path = straight_path();
        let obs = Obstacle::new_static("cone", 14.0, 2.0, Pose::new(25.0, 0.0, 0.0));
        let data = DecisionData::new(vec![], vec![Some(obs)]);
        let boundaries = mapper().map(&start(), &data, &path, &path, 50.0, 8.0).unwrap();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].len(), 4);
    }
}
