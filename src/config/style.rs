//! Line style
//!
//! The appearance parameters of the three icon lines. Changing any of them
//! invalidates the derived line layout and every cached static pose.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::LineColor;

/// How the ends of a stroked line are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat end exactly at the path end point
    #[default]
    Butt,
    /// Half-disc beyond the end point
    Round,
    /// Half-square beyond the end point
    Square,
}

impl LineCap {
    pub fn display_name(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Style validation failure
#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

/// Line appearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Length of each line
    #[serde(default = "default_line_length")]
    pub line_length: f32,

    /// Stroke width of each line
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f32,

    /// Gap between two neighbouring strokes
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f32,

    #[serde(default)]
    pub line_color: LineColor,

    #[serde(default)]
    pub line_cap: LineCap,
}

fn default_line_length() -> f32 {
    30.0
}

fn default_line_thickness() -> f32 {
    2.0
}

fn default_line_spacing() -> f32 {
    8.0
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_length: default_line_length(),
            line_thickness: default_line_thickness(),
            line_spacing: default_line_spacing(),
            line_color: LineColor::default(),
            line_cap: LineCap::default(),
        }
    }
}

impl Style {
    pub fn with_color(mut self, color: LineColor) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    /// Vertical distance between the anchors of two neighbouring lines
    pub fn line_step(&self) -> f32 {
        self.line_thickness + self.line_spacing
    }

    /// Check that every length is usable
    ///
    /// The widget itself never calls this: non-positive lengths are a caller
    /// bug. It exists for code that builds a style from untrusted input.
    pub fn validate(&self) -> Result<(), StyleError> {
        let fields = [
            ("line_length", self.line_length),
            ("line_thickness", self.line_thickness),
            ("line_spacing", self.line_spacing),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(StyleError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}
