//! Core data models for nearest-road matching and orientation.

pub mod geometry;
pub mod record;

pub use geometry::{is_usable_part, PropertyPoint, RoadGeometry};
pub use record::{round_2dp, CompassLabel, MatchStatus, OrientationRecord};
