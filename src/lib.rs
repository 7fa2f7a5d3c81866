//! Hamburger Morph
//!
//! Transform engine for an animated hamburger icon. Three parallel lines
//! morph between menu, arrow, cross, plus and minus through keyframed
//! affine transforms that a host animation runtime plays back.

pub mod animation;
pub mod app;
pub mod config;
pub mod geometry;
pub mod render;
pub mod utils;

pub use animation::{AnimationHandle, KeyframeAnimation, LayerHost, Timeline, TransitionPlan};
pub use app::{AnimatedButton, AnimatedState, TransitionOutcome};
pub use config::{AnimationTiming, ButtonConfig, LineCap, Style};
pub use geometry::{compute_static_transform, LineId, LineTransform};
