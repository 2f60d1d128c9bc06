//! Input geometry models: property points and road polylines.
//!
//! All coordinates are planar (x, y) pairs in a single shared metric
//! projected CRS (metres, EPSG:7856-class). Reprojection happens upstream.

use geo::{LineString, MultiLineString, Point};

/// A property location with its address identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPoint {
    /// Address identifier carried through to the output record.
    pub address: String,
    /// Planar location in the shared projected CRS.
    pub location: Point<f64>,
}

impl PropertyPoint {
    pub fn new(address: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            address: address.into(),
            location: Point::new(x, y),
        }
    }
}

/// Road geometry: a single polyline, or several disjoint polylines grouped
/// under one road identity.
///
/// Owned by the road dataset and treated as read-only by the matching core.
#[derive(Debug, Clone, PartialEq)]
pub enum RoadGeometry {
    Line(LineString<f64>),
    MultiLine(MultiLineString<f64>),
}

impl RoadGeometry {
    /// Iterate the line parts in stored order.
    pub fn parts(&self) -> std::slice::Iter<'_, LineString<f64>> {
        match self {
            RoadGeometry::Line(line) => std::slice::from_ref(line).iter(),
            RoadGeometry::MultiLine(multi) => multi.0.iter(),
        }
    }

    /// Get a part by index.
    pub fn part(&self, idx: usize) -> Option<&LineString<f64>> {
        match self {
            RoadGeometry::Line(line) => (idx == 0).then_some(line),
            RoadGeometry::MultiLine(multi) => multi.0.get(idx),
        }
    }

    pub fn part_count(&self) -> usize {
        match self {
            RoadGeometry::Line(_) => 1,
            RoadGeometry::MultiLine(multi) => multi.0.len(),
        }
    }
}

impl From<LineString<f64>> for RoadGeometry {
    fn from(line: LineString<f64>) -> Self {
        RoadGeometry::Line(line)
    }
}

impl From<MultiLineString<f64>> for RoadGeometry {
    fn from(multi: MultiLineString<f64>) -> Self {
        RoadGeometry::MultiLine(multi)
    }
}

/// Whether a line part can participate in matching: at least two vertices,
/// all coordinates finite. Degenerate parts are skipped, never fatal.
pub fn is_usable_part(line: &LineString<f64>) -> bool {
    line.0.len() >= 2 && line.0.iter().all(|c| c.x.is_finite() && c.y.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn test_single_line_parts() {
        let road = RoadGeometry::from(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)]);
        assert_eq!(road.part_count(), 1);
        assert_eq!(road.parts().count(), 1);
        assert!(road.part(0).is_some());
        assert!(road.part(1).is_none());
    }

    #[test]
    fn test_multi_line_parts() {
        let multi = MultiLineString::new(vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)],
            line_string![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0)],
        ]);
        let road = RoadGeometry::from(multi);
        assert_eq!(road.part_count(), 2);
        assert_eq!(road.part(1).unwrap().0[0].x, 5.0);
    }

    #[test]
    fn test_usable_part_rejects_degenerate() {
        let single: LineString<f64> = line_string![(x: 1.0, y: 1.0)];
        assert!(!is_usable_part(&single));

        let nan = line_string![(x: 0.0, y: 0.0), (x: f64::NAN, y: 1.0)];
        assert!(!is_usable_part(&nan));

        let ok = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)];
        assert!(is_usable_part(&ok));
    }
}
