//! Line painter
//!
//! Strokes the three icon lines with egui, honouring the cap style.

use egui::{Color32, Painter, Pos2, Stroke};
use glam::Vec2;

use crate::config::{LineCap, Style};
use crate::geometry::{Line, LineTransform};

/// Paints icon lines centred on a point of the screen
pub struct LinePainter {
    origin: Pos2,
    zoom: f32,
}

impl LinePainter {
    /// `zoom` scales widget units to screen points
    pub fn new(origin: Pos2, zoom: f32) -> Self {
        Self { origin, zoom }
    }

    /// Screen position of a point given relative to the widget centre
    pub fn to_screen(&self, point: Vec2) -> Pos2 {
        Pos2::new(self.origin.x + point.x * self.zoom, self.origin.y + point.y * self.zoom)
    }

    /// Stroke `line` under `transform`. Collapsed lines draw nothing.
    pub fn paint(&self, painter: &Painter, line: &Line, transform: &LineTransform, style: &Style) {
        if transform.is_collapsed() {
            return;
        }

        let [start, end] = line.endpoints_with(transform);
        let direction = (end - start).normalize_or_zero();
        // the stroke is thickened by the transform's y scale like a layer would be
        let width = line.thickness * transform.decompose().scale.y.abs() * self.zoom;
        if width <= 0.0 {
            return;
        }
        let color = Color32::from(style.line_color);
        let half = line.thickness / 2.0;

        match line.cap {
            LineCap::Butt => {
                painter.line_segment([self.to_screen(start), self.to_screen(end)], Stroke::new(width, color));
            }
            LineCap::Square => {
                let start = start - direction * half;
                let end = end + direction * half;
                painter.line_segment([self.to_screen(start), self.to_screen(end)], Stroke::new(width, color));
            }
            LineCap::Round => {
                painter.line_segment([self.to_screen(start), self.to_screen(end)], Stroke::new(width, color));
                painter.circle_filled(self.to_screen(start), width / 2.0, color);
                painter.circle_filled(self.to_screen(end), width / 2.0, color);
            }
        }
    }
}
