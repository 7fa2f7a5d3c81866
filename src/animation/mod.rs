//! Animation module
//!
//! Keyframe recipes for the animated transitions, the host runtime seam and
//! a reference runtime.

mod host;
mod keyframe;
mod synthesizer;
mod timeline;

pub use host::{AnimationHandle, LayerHost};
pub use keyframe::{Keyframe, KeyframeAnimation, KeyframeError, KeyframeSequence};
pub use synthesizer::{animate, LineAnimation, LineTracks, ReverseRule, Transition, TransitionPlan};
pub use timeline::Timeline;
