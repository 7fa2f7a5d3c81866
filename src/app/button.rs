//! Animated icon button
//!
//! Owns the three lines, the current state and the handles of the
//! animations it has started. All geometry is pushed to a `LayerHost`;
//! nothing here waits on time.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::animation::{animate, AnimationHandle, LayerHost, TransitionPlan};
use crate::config::{AnimationTiming, ButtonConfig, Style};
use crate::geometry::{Layout, Line, LineId, LineTransform};

use super::state::AnimatedState;

/// What a transition request did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransitionOutcome {
    /// Already in the requested state
    Unchanged { state: AnimatedState },
    /// Keyframe animations were scheduled on the host
    Animated(TransitionPlan),
    /// No recipe for this pair; the target pose was applied at once
    Jumped {
        from: AnimatedState,
        to: AnimatedState,
        pose: [LineTransform; 3],
    },
}

/// The hamburger icon widget
#[derive(Debug, Clone)]
pub struct AnimatedButton {
    layout: Layout,
    lines: [Line; 3],
    state: AnimatedState,
    timing: AnimationTiming,
    /// Static poses by `AnimatedState::index`, dropped on style change
    pose_cache: [Option<[LineTransform; 3]>; AnimatedState::COUNT],
    running: [Option<AnimationHandle>; 3],
}

impl AnimatedButton {
    /// Create the lines for `style` and show `state` on `host`
    pub fn new(style: Style, state: AnimatedState, host: &mut impl LayerHost) -> Self {
        let layout = Layout::new(style);
        let mut button = Self {
            layout,
            lines: layout.build_lines(),
            state,
            timing: AnimationTiming::default(),
            pose_cache: Default::default(),
            running: [None; 3],
        };
        host.install_lines(&button.lines, &style);
        button.apply_pose(state, host);
        button
    }

    pub fn from_config(config: &ButtonConfig, host: &mut impl LayerHost) -> Self {
        let mut button = Self::new(config.style, config.initial_state, host);
        button.timing = config.timing;
        button
    }

    pub fn state(&self) -> AnimatedState {
        self.state
    }

    pub fn style(&self) -> &Style {
        &self.layout.style
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn lines(&self) -> &[Line; 3] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    pub fn set_timing(&mut self, timing: AnimationTiming) {
        self.timing = timing;
    }

    /// Handle of the animation this button last started on `line`
    pub fn running_animation(&self, line: LineId) -> Option<AnimationHandle> {
        self.running[line.index()]
    }

    /// Rebuild the lines for a new style and re-apply the current pose
    pub fn set_style(&mut self, style: Style, host: &mut impl LayerHost) {
        self.cancel_running(host);
        self.layout = Layout::new(style);
        self.lines = self.layout.build_lines();
        self.pose_cache = Default::default();
        host.install_lines(&self.lines, &style);
        self.apply_pose(self.state, host);
        debug!("Style changed, lines rebuilt in {} pose", self.state);
    }

    /// Jump to `state` without animating
    pub fn set_state(&mut self, state: AnimatedState, host: &mut impl LayerHost) {
        self.cancel_running(host);
        self.apply_pose(state, host);
    }

    /// Move to `to`, animating when a recipe exists for the pair
    pub fn request_transition(&mut self, to: AnimatedState, host: &mut impl LayerHost) -> TransitionOutcome {
        let from = self.state;
        if from == to {
            return TransitionOutcome::Unchanged { state: from };
        }

        self.cancel_running(host);

        match animate(from, to, &self.layout, &self.timing) {
            Some(plan) => {
                for entry in &plan.animations {
                    let index = entry.line.index();
                    self.lines[index].transform = entry.animation.final_transform();
                    self.running[index] = Some(host.schedule_animation(entry.line, entry.animation.clone()));
                }
                self.state = to;
                TransitionOutcome::Animated(plan)
            }
            None => {
                warn!("No animated transition from {} to {}, applying pose directly", from, to);
                let pose = self.apply_pose(to, host);
                TransitionOutcome::Jumped { from, to, pose }
            }
        }
    }

    /// Static transforms of all three lines in `state`
    pub fn static_pose(&mut self, state: AnimatedState) -> [LineTransform; 3] {
        let layout = &self.layout;
        *self.pose_cache[state.index()].get_or_insert_with(|| layout.static_pose(state))
    }

    fn apply_pose(&mut self, state: AnimatedState, host: &mut impl LayerHost) -> [LineTransform; 3] {
        let pose = self.static_pose(state);
        for (line, transform) in self.lines.iter_mut().zip(pose) {
            line.transform = transform;
            host.apply_transform(line.id, transform);
        }
        self.state = state;
        pose
    }

    /// Stop every animation this button started and put the lines back on
    /// their model transforms
    fn cancel_running(&mut self, host: &mut impl LayerHost) {
        for line in LineId::ALL {
            if let Some(handle) = self.running[line.index()].take() {
                host.cancel_animation(line, handle);
                host.apply_transform(line, self.lines[line.index()].transform);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{KeyframeAnimation, Timeline};
    use crate::config::LineCap;
    use std::time::Duration;

    /// Host that records every call
    #[derive(Default)]
    struct RecordingHost {
        installs: usize,
        applied: Vec<(LineId, LineTransform)>,
        scheduled: Vec<(LineId, KeyframeAnimation, AnimationHandle)>,
        cancelled: Vec<(LineId, AnimationHandle)>,
    }

    impl LayerHost for RecordingHost {
        fn install_lines(&mut self, _lines: &[Line; 3], _style: &Style) {
            self.installs += 1;
        }

        fn apply_transform(&mut self, line: LineId, transform: LineTransform) {
            self.applied.push((line, transform));
        }

        fn schedule_animation(&mut self, line: LineId, animation: KeyframeAnimation) -> AnimationHandle {
            let handle = AnimationHandle::new();
            self.scheduled.push((line, animation, handle));
            handle
        }

        fn cancel_animation(&mut self, line: LineId, handle: AnimationHandle) {
            self.cancelled.push((line, handle));
        }
    }

    fn settle(timeline: &mut Timeline) {
        for _ in 0..20 {
            timeline.advance(Duration::from_secs_f32(1.0 / 30.0));
        }
        assert!(!timeline.is_animating());
    }

    fn scenario_style() -> Style {
        Style {
            line_length: 30.0,
            line_thickness: 2.0,
            line_spacing: 8.0,
            ..Style::default()
        }
    }

    #[test]
    fn test_construction_applies_initial_pose() {
        let mut host = RecordingHost::default();
        let button = AnimatedButton::new(Style::default(), AnimatedState::Cross, &mut host);
        assert_eq!(host.installs, 1);
        assert_eq!(host.applied.len(), 3);
        assert!(host.applied[1].1.is_collapsed());
        assert_eq!(button.state(), AnimatedState::Cross);
        assert!(button.line(LineId::Middle).transform.is_collapsed());
    }

    #[test]
    fn test_same_state_is_noop() {
        let mut host = RecordingHost::default();
        let mut button = AnimatedButton::new(Style::default(), AnimatedState::Plus, &mut host);
        let applied = host.applied.len();

        let outcome = button.request_transition(AnimatedState::Plus, &mut host);
        assert_eq!(outcome, TransitionOutcome::Unchanged { state: AnimatedState::Plus });
        assert_eq!(button.state(), AnimatedState::Plus);
        assert!(host.scheduled.is_empty());
        assert_eq!(host.applied.len(), applied);
    }

    #[test]
    fn test_animated_request_schedules_and_updates_state() {
        let mut host = RecordingHost::default();
        let mut button = AnimatedButton::new(Style::default(), AnimatedState::Menu, &mut host);

        let outcome = button.request_transition(AnimatedState::Arrow, &mut host);
        let TransitionOutcome::Animated(plan) = outcome else {
            panic!("menu -> arrow should animate");
        };
        assert_eq!(plan.animations.len(), 3);
        assert_eq!(host.scheduled.len(), 3);
        assert_eq!(button.state(), AnimatedState::Arrow);

        let arrow = button.static_pose(AnimatedState::Arrow);
        for line in LineId::ALL {
            assert!(button.line(line).transform.approx_eq(&arrow[line.index()]));
            assert!(button.running_animation(line).is_some());
        }
    }

    #[test]
    fn test_undefined_pair_jumps() {
        let mut host = RecordingHost::default();
        let mut button = AnimatedButton::new(Style::default(), AnimatedState::Arrow, &mut host);
        host.applied.clear();

        let outcome = button.request_transition(AnimatedState::Plus, &mut host);
        let plus = button.static_pose(AnimatedState::Plus);
        assert_eq!(
            outcome,
            TransitionOutcome::Jumped {
                from: AnimatedState::Arrow,
                to: AnimatedState::Plus,
                pose: plus,
            }
        );
        assert_eq!(button.state(), AnimatedState::Plus);
        assert!(host.scheduled.is_empty());
        assert_eq!(host.applied.len(), 3);
        for (line, transform) in &host.applied {
            assert!(transform.approx_eq(&plus[line.index()]));
        }
    }

    #[test]
    fn test_new_request_cancels_previous_animation() {
        let mut host = RecordingHost::default();
        let mut button = AnimatedButton::new(Style::default(), AnimatedState::Menu, &mut host);

        button.request_transition(AnimatedState::Cross, &mut host);
        let first: Vec<_> = host.scheduled.iter().map(|(line, _, handle)| (*line, *handle)).collect();
        assert_eq!(first.len(), 3);

        // cross -> plus leaves the middle line alone, yet its menu -> cross
        // animation must still be cancelled and its model pose re-applied
        host.applied.clear();
        button.request_transition(AnimatedState::Plus, &mut host);
        assert_eq!(host.cancelled, first);
        assert_eq!(host.applied.len(), 3);
        assert!(host.applied[1].1.is_collapsed());
        assert!(button.running_animation(LineId::Middle).is_none());
        assert!(button.running_animation(LineId::Top).is_some());
    }

    #[test]
    fn test_set_state_cancels_and_applies() {
        let mut host = RecordingHost::default();
        let mut button = AnimatedButton::new(Style::default(), AnimatedState::Plus, &mut host);
        button.request_transition(AnimatedState::Minus, &mut host);
        assert_eq!(host.scheduled.len(), 2);

        button.set_state(AnimatedState::Menu, &mut host);
        assert_eq!(host.cancelled.len(), 2);
        assert_eq!(button.state(), AnimatedState::Menu);
        assert!(button.lines().iter().all(|line| line.transform.is_identity()));
    }

    #[test]
    fn test_set_style_rebuilds_lines_and_pose() {
        let mut host = RecordingHost::default();
        let mut button = AnimatedButton::new(Style::default(), AnimatedState::Arrow, &mut host);
        let butt_arrow = button.static_pose(AnimatedState::Arrow);

        let round = Style::default().with_cap(LineCap::Round);
        button.set_style(round, &mut host);
        assert_eq!(host.installs, 2);
        assert_eq!(button.style().line_cap, LineCap::Round);
        assert_eq!(button.state(), AnimatedState::Arrow);

        let round_arrow = button.static_pose(AnimatedState::Arrow);
        assert!(!round_arrow[0].approx_eq(&butt_arrow[0]));
        assert!(button.line(LineId::Top).transform.approx_eq(&round_arrow[0]));

        let wider = Style {
            line_spacing: 12.0,
            ..round
        };
        button.set_style(wider, &mut host);
        assert_eq!(button.line(LineId::Bottom).position.y, 14.0);
    }

    #[test]
    fn test_menu_cross_menu_round_trip() {
        let mut timeline = Timeline::new();
        let mut button = AnimatedButton::new(scenario_style(), AnimatedState::Menu, &mut timeline);

        button.request_transition(AnimatedState::Cross, &mut timeline);
        settle(&mut timeline);
        assert!(timeline.presentation(LineId::Middle).is_collapsed());
        let cross = button.static_pose(AnimatedState::Cross);
        assert!(timeline.presentation(LineId::Top).approx_eq(&cross[0]));

        button.request_transition(AnimatedState::Menu, &mut timeline);
        settle(&mut timeline);
        for line in LineId::ALL {
            assert!(timeline.presentation(line).is_identity());
            assert!(button.line(line).transform.is_identity());
        }
        assert_eq!(button.state(), AnimatedState::Menu);
    }

    #[test]
    fn test_interrupted_transition_keeps_host_consistent() {
        let mut timeline = Timeline::new();
        let mut button = AnimatedButton::new(scenario_style(), AnimatedState::Menu, &mut timeline);

        button.request_transition(AnimatedState::Cross, &mut timeline);
        timeline.advance(Duration::from_secs_f32(0.1));
        button.request_transition(AnimatedState::Plus, &mut timeline);
        settle(&mut timeline);

        let plus = button.static_pose(AnimatedState::Plus);
        for line in LineId::ALL {
            assert!(timeline.model(line).approx_eq(&plus[line.index()]));
        }
    }

    #[test]
    fn test_full_cycle_through_every_recipe() {
        let mut timeline = Timeline::new();
        let mut button = AnimatedButton::new(scenario_style(), AnimatedState::Menu, &mut timeline);

        use AnimatedState::*;
        for to in [Arrow, Menu, Cross, Plus, Minus, Plus, Cross, Menu] {
            let outcome = button.request_transition(to, &mut timeline);
            assert!(matches!(outcome, TransitionOutcome::Animated(_)), "{to} should animate");
            settle(&mut timeline);
            let pose = button.static_pose(to);
            for line in LineId::ALL {
                assert!(timeline.model(line).approx_eq(&pose[line.index()]), "{to} {line:?}");
            }
        }
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let mut host = RecordingHost::default();
        let mut button = AnimatedButton::new(Style::default(), AnimatedState::Minus, &mut host);
        let outcome = button.request_transition(AnimatedState::Arrow, &mut host);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "jumped");
        assert_eq!(json["to"], "arrow");
    }
}
