//! Line layout
//!
//! The three parallel lines of the icon, positioned around the widget centre.
//! Layouts are rebuilt from scratch whenever the style changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{LineCap, Style};

use super::transform::LineTransform;

/// Which of the three lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LineId {
    Top = 0,
    Middle = 1,
    Bottom = 2,
}

impl LineId {
    pub const ALL: [LineId; 3] = [LineId::Top, LineId::Middle, LineId::Bottom];

    pub fn index(self) -> usize {
        self as usize
    }

    /// +1 for the top line, -1 for the bottom one. Mirrors rotations and
    /// offsets of the outer lines.
    pub fn sign(self) -> f32 {
        match self {
            LineId::Top => 1.0,
            LineId::Middle => 0.0,
            LineId::Bottom => -1.0,
        }
    }
}

/// One drawable line
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: LineId,
    /// Anchor relative to the widget centre, y grows downward
    pub position: Vec2,
    /// Model transform, persisted after animations finish
    pub transform: LineTransform,
    pub length: f32,
    pub thickness: f32,
    pub cap: LineCap,
}

impl Line {
    /// Stroke end points in the line's local space
    pub fn local_endpoints(&self) -> [Vec2; 2] {
        let half = self.length / 2.0;
        [Vec2::new(-half, 0.0), Vec2::new(half, 0.0)]
    }

    /// Stroke end points relative to the widget centre under `transform`
    pub fn endpoints_with(&self, transform: &LineTransform) -> [Vec2; 2] {
        self.local_endpoints()
            .map(|point| self.position + transform.apply(point))
    }
}

/// Anchors of the three lines for a given style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub style: Style,
    positions: [Vec2; 3],
}

impl Layout {
    pub fn new(style: Style) -> Self {
        let step = style.line_step();
        Self {
            style,
            positions: [Vec2::new(0.0, -step), Vec2::ZERO, Vec2::new(0.0, step)],
        }
    }

    pub fn position(&self, line: LineId) -> Vec2 {
        self.positions[line.index()]
    }

    /// Vertical move that puts `line` onto the middle line
    pub fn offset_to_middle(&self, line: LineId) -> f32 {
        self.position(LineId::Middle).y - self.position(line).y
    }

    /// Fresh lines in their rest pose
    pub fn build_lines(&self) -> [Line; 3] {
        LineId::ALL.map(|id| Line {
            id,
            position: self.position(id),
            transform: LineTransform::IDENTITY,
            length: self.style.line_length,
            thickness: self.style.line_thickness,
            cap: self.style.line_cap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_positions() {
        let layout = Layout::new(Style::default());
        assert_eq!(layout.position(LineId::Top), Vec2::new(0.0, -10.0));
        assert_eq!(layout.position(LineId::Middle), Vec2::ZERO);
        assert_eq!(layout.position(LineId::Bottom), Vec2::new(0.0, 10.0));
        assert_eq!(layout.offset_to_middle(LineId::Top), 10.0);
        assert_eq!(layout.offset_to_middle(LineId::Bottom), -10.0);
        assert_eq!(layout.offset_to_middle(LineId::Middle), 0.0);
    }

    #[test]
    fn test_build_lines() {
        let style = Style {
            line_length: 40.0,
            line_thickness: 3.0,
            line_spacing: 5.0,
            ..Style::default()
        };
        let lines = Layout::new(style).build_lines();
        let ids: Vec<LineId> = lines.iter().map(|line| line.id).collect();
        assert_eq!(ids, LineId::ALL);
        assert_eq!(lines[2].position.y, 8.0);
        assert!(lines.iter().all(|line| line.transform.is_identity()));
        assert_eq!(
            lines[0].endpoints_with(&LineTransform::IDENTITY),
            [Vec2::new(-20.0, -8.0), Vec2::new(20.0, -8.0)]
        );
    }
}
