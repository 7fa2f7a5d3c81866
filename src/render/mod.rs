//! Render module
//!
//! Timing curves and egui line painting.

pub mod bezier;
mod line_painter;

pub use bezier::{cubic_bezier, CubicBezier, ICON_EASING};
pub use line_painter::LinePainter;
