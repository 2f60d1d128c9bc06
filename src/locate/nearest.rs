//! Brute-force nearest-line scan and the shared nearest-part primitive.

use geo::{Distance, Euclidean, LineString, Point};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{is_usable_part, RoadGeometry};

/// Association between a query point and the winning road part.
///
/// Indices refer back into the road collection the query ran against, so
/// the matched part is referenced rather than copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Index of the matched road in the input collection.
    pub road: usize,
    /// Index of the matched part within that road's geometry.
    pub part: usize,
    /// Planar distance from the point to the matched part, in metres.
    pub distance: f64,
}

/// Select the part of one road nearest to `point`.
///
/// Equidistant parts resolve to the lowest part index — the same rule the
/// locator applies across roads. The orientation estimator reuses this
/// primitive, so a separately invoked match and orientation always agree
/// on the selected part. Malformed parts are skipped.
pub fn nearest_part<'a>(
    point: &Point<f64>,
    road: &'a RoadGeometry,
) -> Option<(usize, &'a LineString<f64>, f64)> {
    let mut best: Option<(usize, &LineString<f64>, f64)> = None;
    for (idx, part) in road.parts().enumerate() {
        if !is_usable_part(part) {
            debug!(part = idx, "skipping malformed line part");
            continue;
        }
        let distance = Euclidean.distance(point, part);
        if best.map_or(true, |(_, _, d)| distance < d) {
            best = Some((idx, part, distance));
        }
    }
    best
}

/// Find the road part nearest to `point` by scanning every candidate.
///
/// The minimum planar distance wins; ties break by stable input order, so
/// repeated runs over the same dataset ordering return the same part. This
/// is the reference path — [`RoadSpatialIndex`](super::RoadSpatialIndex)
/// answers the same contract with envelope pruning.
pub fn locate_nearest(point: &Point<f64>, roads: &[RoadGeometry]) -> Result<MatchResult> {
    if !(point.x().is_finite() && point.y().is_finite()) {
        return Err(Error::MalformedGeometry);
    }

    let mut best: Option<MatchResult> = None;
    for (road_idx, road) in roads.iter().enumerate() {
        if let Some((part_idx, _, distance)) = nearest_part(point, road) {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(MatchResult {
                    road: road_idx,
                    part: part_idx,
                    distance,
                });
            }
        }
    }

    best.ok_or(Error::EmptyInput)
}
