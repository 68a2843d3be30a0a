use crate::math::{overlaps, OrientedBox};
use crate::path::PathSample;
use crate::util::Interval;
use crate::VehicleFootprint;

/// Finds the station interval over which the ego vehicle's footprint
/// overlaps `obstacle`, with both ends clipped to `planning_distance`.
///
/// Two cursors converge from either end of the path, each stopping at the
/// first overlapping sample it meets. Only the outermost overlapping
/// samples are found, so the conflict zone is assumed to be one contiguous
/// run of samples.
pub(crate) fn find_station_interval(
    path: &[PathSample],
    vehicle: &VehicleFootprint,
    obstacle: &OrientedBox,
    buffer: f64,
    planning_distance: f64,
) -> Option<Interval<f64>> {
    let hits = |sample: &PathSample| overlaps(&sample.vehicle_box(vehicle), obstacle, buffer);

    let mut low = 0;
    let mut high = path.len().checked_sub(1)?;
    let mut found_low = false;
    let mut found_high = false;

    while low <= high && !(found_low && found_high) {
        if !found_low {
            if hits(&path[low]) {
                found_low = true;
            } else {
                low += 1;
            }
        }
        if !found_high {
            if hits(&path[high]) {
                found_high = true;
            } else if high == 0 {
                break;
            } else {
                high -= 1;
            }
        }
    }

    (found_low && found_high)
        .then(|| Interval::new(path[low].s, path[high].s).clip_max(planning_distance))
}
