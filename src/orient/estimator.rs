//! Local tangent estimation and bearing derivation.
//!
//! The bearing convention is fixed crate-wide: degrees clockwise from
//! North = 0, so East = 90. The same convention drives the compass sector
//! table in [`CompassLabel::from_bearing`].

use geo::{Euclidean, Length, LineInterpolatePoint, LineLocatePoint, LineString, Point};

use crate::error::{Error, Result};
use crate::locate::nearest_part;
use crate::models::{is_usable_part, CompassLabel, RoadGeometry};

/// Arc-length step used to sample the local tangent, in metres.
pub const TANGENT_STEP_M: f64 = 1.0;

/// A derived orientation: normalized bearing plus its compass bucket.
///
/// The two fields are always consistent — `label` is the canonical sector
/// for `bearing_deg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Degrees clockwise from North, in `[0, 360)`.
    pub bearing_deg: f64,
    /// Compass sector containing the bearing.
    pub label: CompassLabel,
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_bearing(degrees: f64) -> f64 {
    let b = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative can round up to exactly 360.0.
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}

/// Bearing of a displacement vector, degrees clockwise from North.
fn bearing_of(dx: f64, dy: f64) -> f64 {
    normalize_bearing(dx.atan2(dy).to_degrees())
}

/// Estimate the orientation of the road's local direction at the point's
/// projection.
///
/// Multi-part geometries resolve to the part nearest the point with the
/// locator's own selection rule, so a separately obtained match and this
/// estimate always agree on the part.
pub fn estimate_orientation(point: &Point<f64>, road: &RoadGeometry) -> Result<Orientation> {
    match nearest_part(point, road) {
        Some((_, part, _)) => estimate_orientation_on_part(point, part),
        None if road.part_count() == 0 => Err(Error::EmptyInput),
        None => Err(Error::MalformedGeometry),
    }
}

/// Estimate the orientation against one already-selected line part.
///
/// Projects the point onto the part, samples a second position
/// [`TANGENT_STEP_M`] further along the arc (stepping backward when the
/// projection sits at the line's end, so sampling never leaves the line's
/// domain), and converts the displacement into a bearing. The sampled pair
/// is ordered so the tangent always points along increasing arc length.
pub fn estimate_orientation_on_part(
    point: &Point<f64>,
    part: &LineString<f64>,
) -> Result<Orientation> {
    if !(point.x().is_finite() && point.y().is_finite()) {
        return Err(Error::MalformedGeometry);
    }
    if !is_usable_part(part) {
        return Err(Error::MalformedGeometry);
    }

    let total = Euclidean.length(part);
    if total <= 0.0 {
        // Coincident vertices: distance to the part is well-defined but a
        // direction is not.
        return Err(Error::OrientationUndefined);
    }

    let fraction = part
        .line_locate_point(point)
        .ok_or(Error::OrientationUndefined)?;
    let arc = fraction * total;

    let ahead = (arc + TANGENT_STEP_M).min(total);
    let (from, to) = if ahead > arc {
        (arc, ahead)
    } else {
        ((arc - TANGENT_STEP_M).max(0.0), arc)
    };

    let origin = point_at(part, from, total)?;
    let sample = point_at(part, to, total)?;

    let dx = sample.x() - origin.x();
    let dy = sample.y() - origin.y();
    if dx == 0.0 && dy == 0.0 {
        return Err(Error::OrientationUndefined);
    }

    let bearing_deg = bearing_of(dx, dy);
    Ok(Orientation {
        bearing_deg,
        label: CompassLabel::from_bearing(bearing_deg),
    })
}

/// Point at an arc-length position along the part.
fn point_at(part: &LineString<f64>, arc: f64, total: f64) -> Result<Point<f64>> {
    part.line_interpolate_point((arc / total).clamp(0.0, 1.0))
        .ok_or(Error::OrientationUndefined)
}
