//! Transition synthesizer
//!
//! Builds the keyframe lists for the four animated transitions:
//! menu <-> arrow, menu <-> cross, cross <-> plus and plus <-> minus.
//! Any other pair of states has no animation and jumps straight to the
//! target pose.
//!
//! Every recipe starts on the static pose of its source state and ends on
//! the static pose of its target state, line by line.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::state::AnimatedState;
use crate::config::AnimationTiming;
use crate::geometry::{Layout, LineId, LineTransform};

use super::keyframe::{KeyframeAnimation, KeyframeSequence};

/// Forward keyframes per line, indexed by `LineId::index`. `None` leaves
/// the line untouched.
pub type LineTracks = [Option<KeyframeSequence>; 3];

/// How a recipe is played backwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseRule {
    /// Reverse the value list, keep the key times
    SameTimes,
    /// Reverse the keyframes and mirror their times (t -> 1 - t)
    MirroredTimes,
}

/// A defined forward transition and how to build it
pub struct TransitionRecipe {
    pub from: AnimatedState,
    pub to: AnimatedState,
    pub reverse: ReverseRule,
    build: fn(&Layout) -> LineTracks,
}

static RECIPES: [TransitionRecipe; 4] = [
    TransitionRecipe {
        from: AnimatedState::Menu,
        to: AnimatedState::Arrow,
        reverse: ReverseRule::SameTimes,
        build: menu_to_arrow,
    },
    TransitionRecipe {
        from: AnimatedState::Menu,
        to: AnimatedState::Cross,
        reverse: ReverseRule::SameTimes,
        build: menu_to_cross,
    },
    TransitionRecipe {
        from: AnimatedState::Cross,
        to: AnimatedState::Plus,
        reverse: ReverseRule::MirroredTimes,
        build: cross_to_plus,
    },
    TransitionRecipe {
        from: AnimatedState::Plus,
        to: AnimatedState::Minus,
        reverse: ReverseRule::MirroredTimes,
        build: plus_to_minus,
    },
];

/// A transition with a keyframe recipe
#[derive(Clone, Copy)]
pub struct Transition {
    recipe: &'static TransitionRecipe,
    reversed: bool,
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from())
            .field("to", &self.to())
            .field("reversed", &self.reversed)
            .finish()
    }
}

impl Transition {
    /// Look up the animated transition from `from` to `to`
    pub fn find(from: AnimatedState, to: AnimatedState) -> Option<Transition> {
        RECIPES.iter().find_map(|recipe| {
            if recipe.from == from && recipe.to == to {
                Some(Transition { recipe, reversed: false })
            } else if recipe.from == to && recipe.to == from {
                Some(Transition { recipe, reversed: true })
            } else {
                None
            }
        })
    }

    /// All eight animated transitions, each recipe forward then reversed
    pub fn all() -> impl Iterator<Item = Transition> {
        RECIPES.iter().flat_map(|recipe| {
            [false, true].map(|reversed| Transition { recipe, reversed })
        })
    }

    pub fn from(&self) -> AnimatedState {
        if self.reversed {
            self.recipe.to
        } else {
            self.recipe.from
        }
    }

    pub fn to(&self) -> AnimatedState {
        if self.reversed {
            self.recipe.from
        } else {
            self.recipe.to
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Keyframes of each line in playback order
    pub fn tracks(&self, layout: &Layout) -> LineTracks {
        let forward = (self.recipe.build)(layout);
        if !self.reversed {
            return forward;
        }
        forward.map(|track| {
            track.map(|sequence| match self.recipe.reverse {
                ReverseRule::SameTimes => sequence.reversed_values(),
                ReverseRule::MirroredTimes => sequence.reversed_in_time(),
            })
        })
    }

    /// Keyframe animations for every animated line
    pub fn plan(&self, layout: &Layout, timing: &AnimationTiming) -> TransitionPlan {
        let duration = timing.duration_secs();
        let easing = timing.easing_curve();
        let animations = LineId::ALL
            .into_iter()
            .zip(self.tracks(layout))
            .filter_map(|(line, track)| {
                track.map(|keyframes| LineAnimation {
                    line,
                    animation: KeyframeAnimation {
                        keyframes,
                        duration,
                        easing,
                    },
                })
            })
            .collect::<Vec<_>>();

        debug!(
            "Planned {} -> {} transition for {} lines",
            self.from(),
            self.to(),
            animations.len()
        );

        TransitionPlan {
            from: self.from(),
            to: self.to(),
            animations,
        }
    }
}

/// Keyframe animation for one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAnimation {
    pub line: LineId,
    pub animation: KeyframeAnimation,
}

/// Everything the animation runtime needs to play one transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionPlan {
    pub from: AnimatedState,
    pub to: AnimatedState,
    pub animations: Vec<LineAnimation>,
}

impl TransitionPlan {
    pub fn animation_for(&self, line: LineId) -> Option<&KeyframeAnimation> {
        self.animations
            .iter()
            .find(|entry| entry.line == line)
            .map(|entry| &entry.animation)
    }
}

/// Plan the animated transition, or `None` when the pair has no recipe
pub fn animate(
    from: AnimatedState,
    to: AnimatedState,
    layout: &Layout,
    timing: &AnimationTiming,
) -> Option<TransitionPlan> {
    Transition::find(from, to).map(|transition| transition.plan(layout, timing))
}

fn outer_lines() -> [LineId; 2] {
    [LineId::Top, LineId::Bottom]
}

fn tracks_from(entries: impl IntoIterator<Item = (LineId, KeyframeSequence)>) -> LineTracks {
    let mut tracks: LineTracks = [None, None, None];
    for (line, sequence) in entries {
        tracks[line.index()] = Some(sequence);
    }
    tracks
}

/// Outer lines fold onto the middle, shrink, then tilt into the arrow
/// head. The shaft shortens early so it never shows past the head.
fn menu_to_arrow(layout: &Layout) -> LineTracks {
    let identity = LineTransform::IDENTITY;
    let shaft = layout.static_transform(LineId::Middle, AnimatedState::Arrow);

    let outer = outer_lines().map(|line| {
        let values = [
            identity,
            layout.aligned_to_middle(line),
            layout.arrow_outer(line, false),
            layout.static_transform(line, AnimatedState::Arrow),
        ];
        (line, KeyframeSequence::new(&[0.0, 0.5, 0.5, 1.0], &values))
    });
    let middle = KeyframeSequence::new(&[0.0, 0.4, 0.4, 1.0], &[identity, identity, shaft, shaft]);

    tracks_from(outer.into_iter().chain([(LineId::Middle, middle)]))
}

/// Outer lines fold onto the middle and then rotate apart; the middle
/// line vanishes halfway.
fn menu_to_cross(layout: &Layout) -> LineTracks {
    let identity = LineTransform::IDENTITY;
    let hidden = layout.static_transform(LineId::Middle, AnimatedState::Cross);

    let outer = outer_lines().map(|line| {
        let values = [
            identity,
            layout.aligned_to_middle(line),
            layout.static_transform(line, AnimatedState::Cross),
        ];
        (line, KeyframeSequence::new(&[0.0, 0.5, 1.0], &values))
    });
    let middle = KeyframeSequence::new(&[0.0, 0.5, 0.5, 1.0], &[identity, identity, hidden, hidden]);

    tracks_from(outer.into_iter().chain([(LineId::Middle, middle)]))
}

/// Both diagonals keep turning another 135 degrees until they are upright
/// and flat. The final snap swaps the half-turned line for its plus pose,
/// which covers the same pixels.
fn cross_to_plus(layout: &Layout) -> LineTracks {
    let sweep = FRAC_PI_2 + FRAC_PI_4;
    let outer = outer_lines().map(|line| {
        let start = layout.static_transform(line, AnimatedState::Cross);
        let values = [
            start,
            start.rotated(sweep),
            layout.static_transform(line, AnimatedState::Plus),
        ];
        (line, KeyframeSequence::new(&[0.0, 1.0, 1.0], &values).swept(1, sweep))
    });

    tracks_from(outer)
}

/// Both lines turn clockwise: the flat one half a circle in place, the
/// upright one a quarter onto it. The doubled line then hides.
fn plus_to_minus(layout: &Layout) -> LineTracks {
    let sweeps = [(LineId::Top, -PI), (LineId::Bottom, -FRAC_PI_2)];
    let outer = sweeps.map(|(line, sweep)| {
        let start = layout.static_transform(line, AnimatedState::Plus);
        let values = [
            start,
            start.rotated(sweep),
            layout.static_transform(line, AnimatedState::Minus),
        ];
        (line, KeyframeSequence::new(&[0.0, 1.0, 1.0], &values).swept(1, sweep))
    });

    tracks_from(outer)
}
