//! Animation host
//!
//! The seam between the transform engine and whatever actually draws the
//! lines. The engine only ever hands over finished transforms and
//! declarative keyframe lists; interpolating them over wall-clock time is
//! the host's job.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Style;
use crate::geometry::{Line, LineId, LineTransform};

use super::keyframe::KeyframeAnimation;

/// Identifies one scheduled animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationHandle(Uuid);

impl AnimationHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnimationHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendering and animation runtime for the three lines
pub trait LayerHost {
    /// Recreate the drawables after a style change. Lines arrive in their
    /// rest pose; the widget applies the current pose right after.
    fn install_lines(&mut self, _lines: &[Line; 3], _style: &Style) {}

    /// Show `transform` on `line` immediately
    fn apply_transform(&mut self, line: LineId, transform: LineTransform);

    /// Start playing `animation` on `line`
    ///
    /// Fire and forget: once playback ends the final keyframe transform stays
    /// applied. Scheduling replaces any animation already running on the line.
    fn schedule_animation(&mut self, line: LineId, animation: KeyframeAnimation) -> AnimationHandle;

    /// Stop `handle` if it is still running on `line`. Stale handles are ignored.
    fn cancel_animation(&mut self, line: LineId, handle: AnimationHandle);
}
