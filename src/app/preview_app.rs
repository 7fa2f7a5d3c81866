//! Preview application
//!
//! Implements the egui App trait: four icon buttons on coloured tiles, each
//! toggling between two states when clicked.

use std::time::Instant;

use egui::{Color32, RichText, Sense, Vec2};
use tracing::info;

use crate::animation::Timeline;
use crate::config::{AnimationTiming, ButtonConfig, LineCap, Style};
use crate::render::LinePainter;
use crate::utils::LineColor;

use super::button::{AnimatedButton, TransitionOutcome};
use super::state::AnimatedState;

/// Tile edge in screen points
const TILE_SIZE: f32 = 160.0;

/// Widget units to screen points
const ICON_ZOOM: f32 = 2.0;

/// One clickable icon
struct PreviewTile {
    label: &'static str,
    background: Color32,
    /// The two states a click alternates between; the first one is the
    /// "home" state checked on every click
    toggle: (AnimatedState, AnimatedState),
    button: AnimatedButton,
    timeline: Timeline,
}

impl PreviewTile {
    fn new(
        label: &'static str,
        background: Color32,
        start: AnimatedState,
        toggle: (AnimatedState, AnimatedState),
        style: Style,
        timing: AnimationTiming,
    ) -> Self {
        let mut timeline = Timeline::new();
        let mut button = AnimatedButton::new(style, start, &mut timeline);
        button.set_timing(timing);
        Self {
            label,
            background,
            toggle,
            button,
            timeline,
        }
    }

    fn next_state(&self) -> AnimatedState {
        let (home, away) = self.toggle;
        if self.button.state() == home {
            away
        } else {
            home
        }
    }

    fn click(&mut self) {
        let to = self.next_state();
        match self.button.request_transition(to, &mut self.timeline) {
            TransitionOutcome::Animated(plan) => {
                info!("{}: animating {} -> {}", self.label, plan.from, plan.to);
            }
            TransitionOutcome::Jumped { from, to, .. } => {
                info!("{}: jumped {} -> {}", self.label, from, to);
            }
            TransitionOutcome::Unchanged { .. } => {}
        }
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(TILE_SIZE), Sense::click());
        if response.clicked() {
            self.click();
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 8.0, self.background);

        let Some(installed) = self.timeline.lines() else {
            return;
        };
        let lines = LinePainter::new(rect.center(), ICON_ZOOM);
        for line in installed {
            lines.paint(&painter, line, &self.timeline.presentation(line.id), self.timeline.style());
        }
    }
}

/// Main preview application
pub struct PreviewApp {
    tiles: Vec<PreviewTile>,
    style: Style,
    /// Last frame time for timeline stepping
    last_frame_time: Instant,
}

impl PreviewApp {
    /// Create new preview application
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Option<ButtonConfig>) -> Self {
        let (style, timing, background) = match config {
            Some(config) => (config.style, config.timing, config.background_color),
            None => (
                Style::default().with_color(LineColor::WHITE),
                AnimationTiming::default(),
                None,
            ),
        };
        let tint = |hex: u32| Color32::from(background.unwrap_or(LineColor::from_u32(hex)));

        use AnimatedState::*;
        let tiles = vec![
            PreviewTile::new("menu / arrow", tint(0xFC2125), Menu, (Menu, Arrow), style, timing),
            PreviewTile::new("menu / cross", tint(0x68C4C9), Cross, (Menu, Cross), style, timing),
            PreviewTile::new("plus / minus", tint(0x1E1E22), Plus, (Plus, Minus), style, timing),
            PreviewTile::new("plus / cross", tint(0x0F4359), Plus, (Plus, Cross), style, timing),
        ];

        info!(
            "Preview initialized: line {}x{} spacing {} ({} cap), {:.3}s transitions",
            style.line_length,
            style.line_thickness,
            style.line_spacing,
            style.line_cap.display_name(),
            timing.duration_secs()
        );

        Self {
            tiles,
            style,
            last_frame_time: Instant::now(),
        }
    }

    fn apply_style(&mut self) {
        for tile in &mut self.tiles {
            tile.button.set_style(self.style, &mut tile.timeline);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        for tile in &mut self.tiles {
            tile.timeline.advance(elapsed);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new("Hamburger Morph").color(Color32::LIGHT_GRAY));
            ui.separator();

            for row in self.tiles.chunks_mut(2) {
                ui.horizontal(|ui| {
                    for tile in row {
                        tile.show(ui);
                    }
                });
            }

            ui.separator();

            // Style controls
            let mut changed = false;
            ui.horizontal(|ui| {
                ui.label("Line cap:");
                egui::ComboBox::from_id_salt("line_cap")
                    .selected_text(self.style.line_cap.display_name())
                    .show_ui(ui, |ui| {
                        for cap in [LineCap::Butt, LineCap::Round, LineCap::Square] {
                            changed |= ui
                                .selectable_value(&mut self.style.line_cap, cap, cap.display_name())
                                .changed();
                        }
                    });

                ui.label("Spacing:");
                changed |= ui
                    .add(egui::Slider::new(&mut self.style.line_spacing, 1.0..=16.0))
                    .changed();
            });
            if changed {
                self.apply_style();
            }

            ui.separator();
            let status = self
                .tiles
                .iter()
                .map(|tile| format!("{}: {}", tile.label, tile.button.state()))
                .collect::<Vec<_>>()
                .join(" | ");
            ui.label(RichText::new(status).color(Color32::GRAY).small());
        });

        if self.tiles.iter().any(|tile| tile.timeline.is_animating()) {
            ctx.request_repaint();
        }
    }
}
