//! Frontage - nearest-road matching and property orientation
//!
//! Given property points and a road network in a shared planar metric CRS,
//! this library resolves each point's nearest road line part and derives a
//! compass orientation from the road's local direction at the point's
//! projection.

pub mod error;
pub mod locate;
pub mod models;
pub mod orient;
pub mod service;

pub use error::{Error, Result};
pub use locate::{locate_nearest, MatchResult, RoadSpatialIndex};
pub use models::{CompassLabel, MatchStatus, OrientationRecord, PropertyPoint, RoadGeometry};
pub use orient::{estimate_orientation, Orientation};
pub use service::FrontageService;
