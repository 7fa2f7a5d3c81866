//! Utility module
//!
//! Small helpers shared by config loading and painting.

pub mod color;

pub use color::LineColor;
