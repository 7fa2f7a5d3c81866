//! ButtonConfig data structure
//!
//! JSON description of one icon button: line style, starting state,
//! background and the animation timing shared by every transition.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::app::state::AnimatedState;
use crate::render::bezier::CubicBezier;
use crate::utils::LineColor;

use super::style::Style;

/// Frames per second the transition recipes are authored for
pub const ANIMATION_FRAME_RATE: f32 = 30.0;

/// Length of every transition in frames
pub const ANIMATION_FRAMES: f32 = 10.0;

/// Easing control points (p1x, p1y, p2x, p2y) used by every transition
pub const ANIMATION_EASING: [f32; 4] = [0.60, 0.00, 0.40, 1.00];

/// Animation timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTiming {
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
    #[serde(default = "default_frames")]
    pub frames: f32,
    #[serde(default = "default_easing")]
    pub easing: [f32; 4],
}

fn default_frame_rate() -> f32 {
    ANIMATION_FRAME_RATE
}

fn default_frames() -> f32 {
    ANIMATION_FRAMES
}

fn default_easing() -> [f32; 4] {
    ANIMATION_EASING
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            frames: default_frames(),
            easing: default_easing(),
        }
    }
}

impl AnimationTiming {
    /// Transition duration in seconds
    pub fn duration_secs(&self) -> f32 {
        self.frames / self.frame_rate
    }

    pub fn easing_curve(&self) -> CubicBezier {
        let [p1x, p1y, p2x, p2y] = self.easing;
        CubicBezier::new(p1x, p1y, p2x, p2y)
    }
}

/// Full button configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ButtonConfig {
    #[serde(default)]
    pub style: Style,

    #[serde(default)]
    pub initial_state: AnimatedState,

    /// Fill behind the lines, only used by the preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<LineColor>,

    #[serde(default)]
    pub timing: AnimationTiming,
}

impl ButtonConfig {
    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading button config {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> Result<Self> {
        let config: ButtonConfig = serde_json::from_str(content)?;
        config.style.validate()?;
        if !(config.timing.frame_rate > 0.0 && config.timing.frames > 0.0) {
            anyhow::bail!(
                "animation timing must be positive, got {} frames at {} fps",
                config.timing.frames,
                config.timing.frame_rate
            );
        }
        Ok(config)
    }
}
