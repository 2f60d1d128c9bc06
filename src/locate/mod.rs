//! Nearest-line locator.
//!
//! Resolves the single closest road line part for a query point, either by
//! brute-force scan or through an R-tree spatial index. Both paths answer
//! the same contract: minimum planar distance, ties broken by stable input
//! order.

mod index;
mod nearest;

pub use index::RoadSpatialIndex;
pub use nearest::{locate_nearest, nearest_part, MatchResult};
