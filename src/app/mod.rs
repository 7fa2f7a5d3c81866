//! Application module
//!
//! Contains the icon button widget, its states and the egui preview.

mod button;
mod preview_app;
pub mod state;

pub use button::{AnimatedButton, TransitionOutcome};
pub use preview_app::PreviewApp;
pub use state::*;
