//! Frontage service: per-property locate + orient over a shared index.
//!
//! Each record is evaluated as an independent pure function against a
//! read-only spatial index, so batches can run sequentially or fan out
//! across rayon workers with no shared mutable state.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Error;
use crate::locate::RoadSpatialIndex;
use crate::models::{round_2dp, MatchStatus, OrientationRecord, PropertyPoint, RoadGeometry};
use crate::orient::estimate_orientation_on_part;

/// Matches property points to their nearest road and derives frontage
/// orientations.
pub struct FrontageService {
    index: RoadSpatialIndex,
}

impl FrontageService {
    /// Build the service, constructing the spatial index once up front.
    pub fn new(roads: Vec<RoadGeometry>) -> Self {
        Self {
            index: RoadSpatialIndex::build(roads),
        }
    }

    /// Get the spatial index (for stats/debugging).
    pub fn index(&self) -> &RoadSpatialIndex {
        &self.index
    }

    /// Evaluate one property record.
    ///
    /// Failures degrade to null output fields with an explicit status;
    /// a degenerate tangent still reports the matched distance.
    pub fn orient_point(&self, property: &PropertyPoint) -> OrientationRecord {
        let point = property.location;

        let m = match self.index.nearest(&point) {
            Ok(m) => m,
            Err(err) => {
                debug!(address = %property.address, %err, "no road match for property");
                return Self::failed(property, Self::status_of(err), None);
            }
        };

        let distance_m = Some(round_2dp(m.distance));
        let part = match self.index.part_of(&m) {
            Some(part) => part,
            None => return Self::failed(property, MatchStatus::MalformedGeometry, distance_m),
        };

        match estimate_orientation_on_part(&point, part) {
            Ok(o) => OrientationRecord {
                address: property.address.clone(),
                orientation: Some(o.label),
                bearing_deg: Some(round_2dp(o.bearing_deg)),
                distance_m,
                status: MatchStatus::Oriented,
            },
            Err(err) => {
                debug!(address = %property.address, %err, "orientation undefined for property");
                Self::failed(property, Self::status_of(err), distance_m)
            }
        }
    }

    /// Evaluate a batch of property records in input order.
    pub fn orient_table(&self, properties: &[PropertyPoint]) -> Vec<OrientationRecord> {
        properties.iter().map(|p| self.orient_point(p)).collect()
    }

    /// Parallel batch evaluation. Output order still matches input order;
    /// workers share the index read-only.
    pub fn par_orient_table(&self, properties: &[PropertyPoint]) -> Vec<OrientationRecord> {
        properties
            .par_iter()
            .map(|p| self.orient_point(p))
            .collect()
    }

    fn status_of(err: Error) -> MatchStatus {
        match err {
            Error::EmptyInput => MatchStatus::NoUsableRoad,
            Error::MalformedGeometry => MatchStatus::MalformedGeometry,
            Error::OrientationUndefined => MatchStatus::DegenerateTangent,
        }
    }

    fn failed(
        property: &PropertyPoint,
        status: MatchStatus,
        distance_m: Option<f64>,
    ) -> OrientationRecord {
        OrientationRecord {
            address: property.address.clone(),
            orientation: None,
            bearing_deg: None,
            distance_m,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompassLabel;
    use geo::line_string;

    fn service_with_sample_roads() -> FrontageService {
        FrontageService::new(vec![
            RoadGeometry::from(line_string![(x: 10.0, y: 0.0), (x: 20.0, y: 0.0)]),
            RoadGeometry::from(line_string![(x: 100.0, y: 0.0), (x: 100.0, y: 10.0)]),
        ])
    }

    #[test]
    fn test_worked_examples() {
        let service = service_with_sample_roads();

        // Horizontal road east of the point: clamped projection, East, 10 m.
        let east = service.orient_point(&PropertyPoint::new("1 Example St", 0.0, 0.0));
        assert_eq!(east.orientation, Some(CompassLabel::East));
        assert_eq!(east.bearing_deg, Some(90.0));
        assert_eq!(east.distance_m, Some(10.0));
        assert_eq!(east.status, MatchStatus::Oriented);

        // Vertical road: perpendicular projection, North, 5 m.
        let north = service.orient_point(&PropertyPoint::new("2 Example St", 105.0, 5.0));
        assert_eq!(north.orientation, Some(CompassLabel::North));
        assert_eq!(north.bearing_deg, Some(0.0));
        assert_eq!(north.distance_m, Some(5.0));
    }

    #[test]
    fn test_batch_preserves_input_order_and_parallel_agrees() {
        let service = service_with_sample_roads();
        let properties = vec![
            PropertyPoint::new("a", 0.0, 0.0),
            PropertyPoint::new("b", 105.0, 5.0),
            PropertyPoint::new("c", 15.0, 2.0),
        ];

        let table = service.orient_table(&properties);
        let addresses: Vec<_> = table.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["a", "b", "c"]);

        let parallel = service.par_orient_table(&properties);
        assert_eq!(parallel, table);

        // Determinism across repeated runs.
        assert_eq!(service.orient_table(&properties), table);
    }

    #[test]
    fn test_no_roads_degrades_to_null_record() {
        let service = FrontageService::new(vec![]);
        let record = service.orient_point(&PropertyPoint::new("nowhere", 0.0, 0.0));
        assert_eq!(record.status, MatchStatus::NoUsableRoad);
        assert_eq!(record.orientation, None);
        assert_eq!(record.distance_m, None);
    }

    #[test]
    fn test_degenerate_tangent_still_reports_distance() {
        // A collapsed two-vertex part is matchable but has no direction.
        let service = FrontageService::new(vec![RoadGeometry::from(line_string![
            (x: 3.0, y: 0.0),
            (x: 3.0, y: 0.0)
        ])]);
        let record = service.orient_point(&PropertyPoint::new("collapsed", 0.0, 0.0));
        assert_eq!(record.status, MatchStatus::DegenerateTangent);
        assert_eq!(record.orientation, None);
        assert_eq!(record.distance_m, Some(3.0));
    }

    #[test]
    fn test_non_finite_point_is_flagged_not_guessed() {
        let service = service_with_sample_roads();
        let record = service.orient_point(&PropertyPoint::new("bad", f64::NAN, 0.0));
        assert_eq!(record.status, MatchStatus::MalformedGeometry);
        assert_eq!(record.orientation, None);
    }

    #[test]
    fn test_record_serializes_with_explicit_nulls() {
        let service = FrontageService::new(vec![]);
        let record = service.orient_point(&PropertyPoint::new("nowhere", 0.0, 0.0));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["orientation"], serde_json::Value::Null);
        assert_eq!(json["distance_m"], serde_json::Value::Null);
        assert_eq!(json["status"], "no_usable_road");

        let oriented = service_with_sample_roads()
            .orient_point(&PropertyPoint::new("1 Example St", 0.0, 0.0));
        let json = serde_json::to_value(&oriented).unwrap();
        assert_eq!(json["orientation"], "East");
        assert_eq!(json["distance_m"], 10.0);
        assert_eq!(json["status"], "oriented");
    }
}
