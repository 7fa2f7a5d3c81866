//! Configuration module
//!
//! Contains the line style and the JSON button configuration.

mod button_config;
mod style;

pub use button_config::*;
pub use style::*;
