//! Error taxonomy for the matching and orientation core.

use thiserror::Error;

/// Errors produced while matching points to roads or deriving orientations.
///
/// Per-point failures are isolated by the batch layer: a failed record
/// degrades to null output fields with an explicit status, it never aborts
/// the batch and never decays into a plausible-looking default direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The road collection was empty or contained no usable line part.
    #[error("no usable road geometry supplied")]
    EmptyInput,

    /// A geometry had fewer than two vertices or non-finite coordinates.
    #[error("malformed geometry: fewer than two vertices or non-finite coordinates")]
    MalformedGeometry,

    /// The local tangent at the projected position has zero length, so no
    /// direction can be derived.
    #[error("orientation undefined: degenerate tangent at projected position")]
    OrientationUndefined,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
