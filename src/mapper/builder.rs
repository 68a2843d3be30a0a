use super::search::find_station_interval;
use crate::boundary::{StGraphBoundary, StPoint};
use crate::error::{MapperError, Result};
use crate::obstacle::{Obstacle, PredictedTrajectory};
use crate::path::{Path, Pose};
use crate::VehicleFootprint;
use log::trace;

/// The values shared by every obstacle mapped in one call.
#[derive(Clone, Copy)]
pub(crate) struct MappingContext<'a> {
    pub path: &'a Path,
    pub vehicle: &'a VehicleFootprint,
    pub buffer: f64,
    pub planning_distance: f64,
    pub planning_time: f64,
}

/// Maps an obstacle that holds its pose for the whole horizon.
/// The resulting boundary blocks its station band from time zero until `planning_time`.
pub(crate) fn map_static(
    obstacle: &Obstacle,
    pose: &Pose,
    ctx: &MappingContext<'_>,
) -> Result<Option<StGraphBoundary>> {
    if ctx.path.is_empty() {
        return Err(MapperError::empty_path(obstacle.id.clone()));
    }

    let interval = find_station_interval(
        ctx.path.samples(),
        ctx.vehicle,
        &obstacle.box_at(pose),
        ctx.buffer,
        ctx.planning_distance,
    );

    Ok(interval.filter(|s| s.is_proper()).map(|s| {
        let t = ctx.planning_time;
        StGraphBoundary::new(
            obstacle.id.clone(),
            vec![
                StPoint::new(s.min, 0.0),
                StPoint::new(s.min, t),
                StPoint::new(s.max, t),
                StPoint::new(s.max, 0.0),
            ],
        )
    }))
}

/// Maps a single predicted trajectory of a moving obstacle.
///
/// Every sample whose footprint meets the path contributes one point to the
/// lower and upper edges; samples that miss the path are skipped. Returns
/// `None` if no sample meets the path.
pub(crate) fn map_trajectory(
    obstacle: &Obstacle,
    trajectory: &PredictedTrajectory,
    ctx: &MappingContext<'_>,
) -> Result<Option<StGraphBoundary>> {
    if ctx.path.is_empty() {
        return Err(MapperError::empty_path(obstacle.id.clone()));
    }

    let mut lower = Vec::new();
    let mut upper = Vec::new();
    for sample in &trajectory.samples {
        let interval = find_station_interval(
            ctx.path.samples(),
            ctx.vehicle,
            &obstacle.box_at(&sample.pose),
            ctx.buffer,
            ctx.planning_distance,
        );
        let Some(s) = interval.filter(|s| s.is_proper()) else {
            continue;
        };
        trace!(
            "obstacle {} occupies s = [{:.2}, {:.2}] at t = {:.2}",
            obstacle.id,
            s.min,
            s.max,
            sample.relative_time
        );
        lower.push(StPoint::new(s.min, sample.relative_time));
        upper.push(StPoint::new(s.max, sample.relative_time));
    }

    if lower.is_empty() {
        return Ok(None);
    }
    lower.extend(upper.into_iter().rev());
    Ok(Some(StGraphBoundary::new(obstacle.id.clone(), lower)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::obstacle::TrajectorySample;
    use assert_approx_eq::assert_approx_eq;

    fn straight_path() -> Path {
        Path::from_poses((0..=40).map(|i| Pose::new(i as f64, 0.0, 0.0)))
    }

    fn ctx<'a>(path: &'a Path, vehicle: &'a VehicleFootprint) -> MappingContext<'a> {
        MappingContext {
            path,
            vehicle,
            buffer: 0.0,
            planning_distance: 100.0,
            planning_time: 8.0,
        }
    }

    #[test]
    fn static_rectangle() {
        let path = straight_path();
        let vehicle = VehicleFootprint::new(2.0, 2.0);
        let obs = Obstacle::new_static("parked", 4.0, 2.0, Pose::new(20.0, 0.0, 0.0));
        let pose = Pose::new(20.0, 0.0, 0.0);
        let b = map_static(&obs, &pose, &ctx(&path, &vehicle)).unwrap().unwrap();
        let pts = b.points();
        assert_eq!(pts.len(), 4);
        assert_approx_eq!(pts[0].s, 17.0);
        assert_approx_eq!(pts[2].s, 23.0);
        assert_eq!([pts[0].t, pts[1].t, pts[2].t, pts[3].t], [0.0, 8.0, 8.0, 0.0]);
    }

    #[test]
    fn crossing_obstacle_polygon() {
        let path = straight_path();
        let vehicle = VehicleFootprint::new(2.0, 2.0);
        // Crosses the path heading north, only on the path at t = 1 and t = 2.
        let samples = [(0.0, -10.0), (1.0, 0.0), (2.0, 0.5), (3.0, 10.0)]
            .into_iter()
            .map(|(t, y)| TrajectorySample {
                relative_time: t,
                pose: Pose::new(10.0, y, std::f64::consts::FRAC_PI_2),
            })
            .collect();
        let traj = PredictedTrajectory::new(samples);
        let obs = Obstacle::new_dynamic("ped", 1.0, 1.0, vec![traj.clone()]);
        let b = map_trajectory(&obs, &traj, &ctx(&path, &vehicle)).unwrap().unwrap();
        let ts = b.points().iter().map(|p| p.t).collect::<Vec<_>>();
        assert_eq!(ts, vec![1.0, 2.0, 2.0, 1.0]);
        assert!(b.is_well_ordered());
        for (lo, hi) in b.edges().0.iter().zip(b.edges().1.iter().rev()) {
            assert!(lo.s < hi.s);
        }
    }

    #[test]
    fn empty_path_is_an_error() {
        let path = Path::default();
        let vehicle = VehicleFootprint::new(2.0, 2.0);
        let obs = Obstacle::new_static("parked", 4.0, 2.0, Pose::new(20.0, 0.0, 0.0));
        let pose = Pose::new(20.0, 0.0, 0.0);
        let err = map_static(&obs, &pose, &ctx(&path, &vehicle)).unwrap_err();
        assert!(matches!(err, MapperError::EmptyPath { .. }));
        let err = map_trajectory(&obs, &PredictedTrajectory::default(), &ctx(&path, &vehicle))
            .unwrap_err();
        assert!(matches!(err, MapperError::EmptyPath { .. }));
    }
}
