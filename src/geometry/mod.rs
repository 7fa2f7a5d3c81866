//! Geometry module
//!
//! Line layout, affine line transforms and the static pose of each state.

mod layout;
mod pose;
mod transform;

pub use layout::{Layout, Line, LineId};
pub use pose::{compute_static_transform, ARROW_SCALE};
pub use transform::{nearest_angle, LineTransform, TransformParts, TRANSFORM_EPSILON};
