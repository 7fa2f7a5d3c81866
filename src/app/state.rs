//! Icon states
//!
//! The five poses the button can show.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target pose of the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AnimatedState {
    /// Three horizontal lines
    #[default]
    Menu = 0,
    /// Left-pointing arrow
    Arrow = 1,
    /// Diagonal cross
    Cross = 2,
    /// Plus sign
    Plus = 3,
    /// Single horizontal line
    Minus = 4,
}

/// Unknown state name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown icon state {0:?} (expected menu, arrow, cross, plus or minus)")]
pub struct ParseStateError(pub String);

impl AnimatedState {
    pub const COUNT: usize = 5;

    pub const ALL: [AnimatedState; Self::COUNT] = [
        AnimatedState::Menu,
        AnimatedState::Arrow,
        AnimatedState::Cross,
        AnimatedState::Plus,
        AnimatedState::Minus,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Get display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            AnimatedState::Menu => "menu",
            AnimatedState::Arrow => "arrow",
            AnimatedState::Cross => "cross",
            AnimatedState::Plus => "plus",
            AnimatedState::Minus => "minus",
        }
    }

    /// Create AnimatedState from u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }
}

impl fmt::Display for AnimatedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AnimatedState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseStateError(s.to_string()))
    }
}
