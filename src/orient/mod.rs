//! Orientation estimator.
//!
//! Derives the local tangent direction of a matched road at a point's
//! projection and classifies the bearing into an 8-way compass label.

mod estimator;

pub use estimator::{
    estimate_orientation, estimate_orientation_on_part, normalize_bearing, Orientation,
    TANGENT_STEP_M,
};
