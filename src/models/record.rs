//! Output models: compass labels and the flat per-property record.

use serde::{Deserialize, Serialize};

/// Eight-way compass direction derived from a bearing.
///
/// Serialized with the hyphenated spelling used in the output table
/// ("North-East" etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassLabel {
    North,
    #[serde(rename = "North-East")]
    NorthEast,
    East,
    #[serde(rename = "South-East")]
    SouthEast,
    South,
    #[serde(rename = "South-West")]
    SouthWest,
    West,
    #[serde(rename = "North-West")]
    NorthWest,
}

impl CompassLabel {
    /// All labels in clockwise order starting from North.
    pub fn all() -> &'static [CompassLabel; 8] {
        &[
            CompassLabel::North,
            CompassLabel::NorthEast,
            CompassLabel::East,
            CompassLabel::SouthEast,
            CompassLabel::South,
            CompassLabel::SouthWest,
            CompassLabel::West,
            CompassLabel::NorthWest,
        ]
    }

    /// Classify a bearing into its compass sector.
    ///
    /// Bearings are degrees clockwise from North in `[0, 360)`. The circle is
    /// split into eight 45-degree sectors centred on the cardinal and
    /// intercardinal directions, so North covers `[337.5, 360) ∪ [0, 22.5)`.
    /// Sectors are half-open: a bearing of exactly 22.5 classifies as
    /// North-East.
    pub fn from_bearing(bearing: f64) -> Self {
        let idx = (((bearing + 22.5) / 45.0).floor() as usize) % 8;
        Self::all()[idx]
    }

    /// Bearing at the centre of this label's sector, degrees clockwise from
    /// North.
    pub fn center_bearing(&self) -> f64 {
        let idx = Self::all().iter().position(|l| l == self).unwrap_or(0);
        idx as f64 * 45.0
    }
}

impl std::fmt::Display for CompassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CompassLabel::North => "North",
            CompassLabel::NorthEast => "North-East",
            CompassLabel::East => "East",
            CompassLabel::SouthEast => "South-East",
            CompassLabel::South => "South",
            CompassLabel::SouthWest => "South-West",
            CompassLabel::West => "West",
            CompassLabel::NorthWest => "North-West",
        };
        write!(f, "{}", name)
    }
}

/// Outcome discriminant for a per-property record.
///
/// Distinguishes "no road nearby" from "geometry error" from "undefined
/// tangent" instead of collapsing all three into a bare null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Match and orientation both succeeded.
    Oriented,
    /// No usable road geometry was available for this point.
    NoUsableRoad,
    /// The point or the matched geometry had non-finite or degenerate data.
    MalformedGeometry,
    /// The matched road was found but its local tangent has zero length.
    DegenerateTangent,
}

/// One row of the output table.
///
/// Row order matches input point order. Options serialize as explicit
/// nulls so the table keeps its columns for failed records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientationRecord {
    pub address: String,
    /// Compass orientation of the nearest road's local direction, or null
    /// when the status is not `Oriented`.
    pub orientation: Option<CompassLabel>,
    /// Bearing behind the label, degrees clockwise from North, rounded to
    /// two decimals.
    pub bearing_deg: Option<f64>,
    /// Planar distance to the matched road part in metres, rounded to two
    /// decimals. Reported even when the orientation is undefined.
    pub distance_m: Option<f64>,
    pub status: MatchStatus,
}

/// Round to two decimal places for the output table.
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
