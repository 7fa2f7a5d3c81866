//! Static poses
//!
//! The resting transform of every line in every state. Each pose is built
//! from the same few moves: align an outer line onto the middle one, rotate
//! it, collapse it, or shrink and shift it into an arrow head.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

use glam::Vec2;

use crate::app::state::AnimatedState;
use crate::config::{LineCap, Style};

use super::layout::{Layout, LineId};
use super::transform::LineTransform;

/// Horizontal scale of the outer lines in the arrow pose
pub const ARROW_SCALE: f32 = 0.7;

type PoseFn = fn(&Layout, LineId) -> LineTransform;

/// Indexed by `AnimatedState::index`
const POSES: [PoseFn; AnimatedState::COUNT] = [menu_pose, arrow_pose, cross_pose, plus_pose, minus_pose];

impl Layout {
    /// Resting transform of `line` in `state`
    pub fn static_transform(&self, line: LineId, state: AnimatedState) -> LineTransform {
        POSES[state.index()](self, line)
    }

    /// Resting transforms of all three lines in `state`
    pub fn static_pose(&self, state: AnimatedState) -> [LineTransform; 3] {
        LineId::ALL.map(|line| self.static_transform(line, state))
    }

    /// Move an outer line vertically onto the middle line
    pub fn aligned_to_middle(&self, line: LineId) -> LineTransform {
        LineTransform::translation(0.0, self.offset_to_middle(line))
    }

    /// Shortened middle line of the arrow, shifted right to sit inside the head
    pub fn arrow_middle(&self) -> LineTransform {
        let ratio = self.style.line_thickness / self.style.line_length;
        LineTransform::scale(1.0 - ratio, 1.0).translated(self.style.line_length * ratio / 2.0, 0.0)
    }

    /// Outer line of the arrow head
    ///
    /// Shrinks the line to `ARROW_SCALE`, shifts it left and, when `rotated`,
    /// tilts it 45 degrees about its left end. Butt caps get an extra vertical
    /// nudge so the two tilted strokes meet without a notch.
    pub fn arrow_outer(&self, line: LineId, rotated: bool) -> LineTransform {
        let sign = line.sign();
        let length = self.style.line_length;
        let y_shift = match self.style.line_cap {
            LineCap::Butt => SQRT_2 * self.style.line_thickness / 4.0,
            LineCap::Round | LineCap::Square => 0.0,
        };
        let line_shift = length * (1.0 - ARROW_SCALE) / 2.0;

        let mut transform = LineTransform::translation(-line_shift, self.offset_to_middle(line) + y_shift * sign);
        if rotated {
            let pivot = Vec2::new(-(length / 2.0 - line_shift), 0.0);
            transform = transform.rotated_about(pivot, -FRAC_PI_4 * sign);
        }
        transform.scaled(ARROW_SCALE, 1.0)
    }
}

/// Resting transform of `line` in `state` for a style
pub fn compute_static_transform(line: LineId, state: AnimatedState, style: &Style) -> LineTransform {
    Layout::new(*style).static_transform(line, state)
}

fn menu_pose(_layout: &Layout, _line: LineId) -> LineTransform {
    LineTransform::IDENTITY
}

fn arrow_pose(layout: &Layout, line: LineId) -> LineTransform {
    match line {
        LineId::Middle => layout.arrow_middle(),
        LineId::Top | LineId::Bottom => layout.arrow_outer(line, true),
    }
}

fn cross_pose(layout: &Layout, line: LineId) -> LineTransform {
    match line {
        LineId::Middle => LineTransform::collapsed(),
        LineId::Top | LineId::Bottom => layout.aligned_to_middle(line).rotated(FRAC_PI_4 * line.sign()),
    }
}

fn plus_pose(layout: &Layout, line: LineId) -> LineTransform {
    match line {
        LineId::Top => layout.aligned_to_middle(line),
        LineId::Middle => LineTransform::collapsed(),
        LineId::Bottom => layout.aligned_to_middle(line).rotated(-FRAC_PI_2),
    }
}

fn minus_pose(layout: &Layout, line: LineId) -> LineTransform {
    match line {
        LineId::Top => layout.aligned_to_middle(line),
        LineId::Middle | LineId::Bottom => LineTransform::collapsed(),
    }
}
