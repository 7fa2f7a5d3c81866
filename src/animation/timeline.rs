//! Animation timeline
//!
//! A small in-process animation runtime implementing `LayerHost`. It keeps a
//! model transform per line plus at most one running keyframe animation, and
//! is stepped by the caller's frame clock.

use std::time::Duration;

use tracing::debug;

use crate::config::Style;
use crate::geometry::{Line, LineId, LineTransform};

use super::host::{AnimationHandle, LayerHost};
use super::keyframe::KeyframeAnimation;

#[derive(Debug, Clone)]
struct RunningAnimation {
    handle: AnimationHandle,
    animation: KeyframeAnimation,
    /// Seconds since the animation was scheduled
    elapsed: f32,
}

#[derive(Debug, Clone, Default)]
struct LayerSlot {
    model: LineTransform,
    running: Option<RunningAnimation>,
}

/// Timeline driving the three line layers
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    layers: [LayerSlot; 3],
    lines: Option<[Line; 3]>,
    style: Style,
}

impl Timeline {
    /// Create an idle timeline with every line at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Step every running animation forward by `dt`
    ///
    /// Finished animations are dropped and their final keyframe becomes the
    /// line's model transform.
    pub fn advance(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        for (line, slot) in LineId::ALL.into_iter().zip(self.layers.iter_mut()) {
            let Some(running) = slot.running.as_mut() else {
                continue;
            };
            running.elapsed += dt;
            if running.animation.is_finished_at(running.elapsed) {
                slot.model = running.animation.final_transform();
                slot.running = None;
                debug!("Animation on {:?} line finished", line);
            }
        }
    }

    /// The transform visible right now
    pub fn presentation(&self, line: LineId) -> LineTransform {
        let slot = &self.layers[line.index()];
        match &slot.running {
            Some(running) => running.animation.sample_at(running.elapsed),
            None => slot.model,
        }
    }

    /// The transform that stays once nothing is animating
    pub fn model(&self, line: LineId) -> LineTransform {
        self.layers[line.index()].model
    }

    pub fn running_handle(&self, line: LineId) -> Option<AnimationHandle> {
        self.layers[line.index()]
            .running
            .as_ref()
            .map(|running| running.handle)
    }

    pub fn is_animating(&self) -> bool {
        self.layers.iter().any(|slot| slot.running.is_some())
    }

    /// Lines installed by the last style change
    pub fn lines(&self) -> Option<&[Line; 3]> {
        self.lines.as_ref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

impl LayerHost for Timeline {
    fn install_lines(&mut self, lines: &[Line; 3], style: &Style) {
        self.lines = Some(lines.clone());
        self.style = *style;
        for (slot, line) in self.layers.iter_mut().zip(lines.iter()) {
            slot.model = line.transform;
            slot.running = None;
        }
    }

    fn apply_transform(&mut self, line: LineId, transform: LineTransform) {
        self.layers[line.index()].model = transform;
    }

    fn schedule_animation(&mut self, line: LineId, animation: KeyframeAnimation) -> AnimationHandle {
        let handle = AnimationHandle::new();
        self.layers[line.index()].running = Some(RunningAnimation {
            handle,
            animation,
            elapsed: 0.0,
        });
        handle
    }

    fn cancel_animation(&mut self, line: LineId, handle: AnimationHandle) {
        let slot = &mut self.layers[line.index()];
        if slot.running.as_ref().is_some_and(|running| running.handle == handle) {
            slot.running = None;
        }
    }
}
