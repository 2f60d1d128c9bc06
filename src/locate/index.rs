//! R-tree spatial index over road line parts.

use std::sync::Arc;

use geo::{BoundingRect, Distance, Euclidean, LineString, Point};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::RTree;
use tracing::{info, warn};

use super::nearest::MatchResult;
use crate::error::{Error, Result};
use crate::models::{is_usable_part, RoadGeometry};

/// `(road index, part index)` identity of one line part in the collection.
type PartId = (usize, usize);

type PartEnvelope = GeomWithData<Rectangle<[f64; 2]>, PartId>;

/// Spatial index over the bounding boxes of every usable road part.
///
/// The tree prunes candidates by envelope distance; exact planar distance
/// decides the winner, so queries answer the same contract as the
/// brute-force scan: minimum distance, ties to the first part in input
/// order. Built once, read-only afterwards.
pub struct RoadSpatialIndex {
    tree: RTree<PartEnvelope>,
    roads: Vec<Arc<RoadGeometry>>,
    skipped_parts: usize,
}

impl RoadSpatialIndex {
    /// Build the index from a road collection.
    ///
    /// Malformed parts (fewer than two vertices, non-finite coordinates)
    /// are skipped and counted, never fatal.
    pub fn build(roads: Vec<RoadGeometry>) -> Self {
        let roads: Vec<Arc<RoadGeometry>> = roads.into_iter().map(Arc::new).collect();

        let mut entries = Vec::new();
        let mut skipped_parts = 0usize;
        for (road_idx, road) in roads.iter().enumerate() {
            for (part_idx, part) in road.parts().enumerate() {
                if !is_usable_part(part) {
                    warn!(
                        road = road_idx,
                        part = part_idx,
                        "skipping malformed line part"
                    );
                    skipped_parts += 1;
                    continue;
                }
                if let Some(rect) = part.bounding_rect() {
                    let envelope = Rectangle::from_corners(
                        [rect.min().x, rect.min().y],
                        [rect.max().x, rect.max().y],
                    );
                    entries.push(GeomWithData::new(envelope, (road_idx, part_idx)));
                }
            }
        }

        let tree = RTree::bulk_load(entries);
        info!(
            "Spatial index built with {} parts ({} skipped) from {} roads",
            tree.size(),
            skipped_parts,
            roads.len()
        );

        Self {
            tree,
            roads,
            skipped_parts,
        }
    }

    /// Find the road part nearest to `point`.
    ///
    /// Walks envelope candidates in increasing lower-bound distance and
    /// refines each with exact distance, stopping once no remaining
    /// candidate can beat or tie the current best.
    pub fn nearest(&self, point: &Point<f64>) -> Result<MatchResult> {
        if !(point.x().is_finite() && point.y().is_finite()) {
            return Err(Error::MalformedGeometry);
        }

        let query = [point.x(), point.y()];
        let mut best: Option<MatchResult> = None;

        for (entry, envelope_d2) in self.tree.nearest_neighbor_iter_with_distance_2(&query) {
            if let Some(b) = best {
                // The envelope distance lower-bounds the exact distance, so
                // once it exceeds the best exact distance no later candidate
                // can win or tie.
                if envelope_d2 > b.distance * b.distance {
                    break;
                }
            }

            let (road_idx, part_idx) = entry.data;
            let part = match self.roads[road_idx].part(part_idx) {
                Some(part) => part,
                None => continue,
            };
            let distance = Euclidean.distance(point, part);

            let better = match best {
                None => true,
                Some(b) => {
                    distance < b.distance
                        || (distance == b.distance && (road_idx, part_idx) < (b.road, b.part))
                }
            };
            if better {
                best = Some(MatchResult {
                    road: road_idx,
                    part: part_idx,
                    distance,
                });
            }
        }

        best.ok_or(Error::EmptyInput)
    }

    /// Get an indexed road by its input-order index.
    pub fn road(&self, idx: usize) -> Option<&Arc<RoadGeometry>> {
        self.roads.get(idx)
    }

    /// Resolve the line part a match refers to.
    pub fn part_of(&self, m: &MatchResult) -> Option<&LineString<f64>> {
        self.roads.get(m.road)?.part(m.part)
    }

    /// Number of indexed parts.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Parts dropped at build time for being malformed.
    pub fn skipped_parts(&self) -> usize {
        self.skipped_parts
    }
}
