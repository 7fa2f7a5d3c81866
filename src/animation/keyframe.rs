//! Keyframes
//!
//! Declarative keyframe animations handed to the animation runtime: an
//! ordered list of (time fraction, transform) pairs plus a duration and a
//! timing curve. Two keyframes sharing a time make an instant snap.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{nearest_angle, LineTransform};
use crate::render::bezier::CubicBezier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Fraction of the animation duration, in 0..=1
    pub time: f32,
    pub transform: LineTransform,
    /// Z rotation of `transform`, unwrapped so that the difference to the
    /// previous keyframe is the turn actually played
    pub rotation: f32,
}

/// Rejected keyframe lists
#[derive(Debug, Error, PartialEq)]
pub enum KeyframeError {
    #[error("keyframe sequence needs at least one keyframe")]
    Empty,

    #[error("key time {0} is outside 0..=1")]
    OutOfRange(f32),

    #[error("key time {time} comes after {previous}")]
    OutOfOrder { previous: f32, time: f32 },
}

fn validate(keyframes: &[Keyframe]) -> Result<(), KeyframeError> {
    if keyframes.is_empty() {
        return Err(KeyframeError::Empty);
    }
    if let Some(keyframe) = keyframes.iter().find(|keyframe| !(0.0..=1.0).contains(&keyframe.time)) {
        return Err(KeyframeError::OutOfRange(keyframe.time));
    }
    match keyframes.windows(2).find(|pair| pair[1].time < pair[0].time) {
        Some(pair) => Err(KeyframeError::OutOfOrder {
            previous: pair[0].time,
            time: pair[1].time,
        }),
        None => Ok(()),
    }
}

/// Keyframes of one line, non-empty and non-decreasing in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct KeyframeSequence(Vec<Keyframe>);

impl TryFrom<Vec<Keyframe>> for KeyframeSequence {
    type Error = KeyframeError;

    fn try_from(keyframes: Vec<Keyframe>) -> Result<Self, Self::Error> {
        validate(&keyframes)?;
        Ok(Self(keyframes))
    }
}

impl From<KeyframeSequence> for Vec<Keyframe> {
    fn from(sequence: KeyframeSequence) -> Self {
        sequence.0
    }
}

impl KeyframeSequence {
    /// Pair key times with values
    ///
    /// Recipes are fixed tables, so a malformed list is a programming error
    /// and only checked in debug builds. Each keyframe turns the short way
    /// from the one before it; see `swept` for longer turns.
    pub fn new(times: &[f32], values: &[LineTransform]) -> Self {
        debug_assert_eq!(times.len(), values.len(), "key times and values differ in length");

        let mut sequence = Self(
            times
                .iter()
                .zip(values)
                .map(|(&time, &transform)| Keyframe {
                    time,
                    transform,
                    rotation: transform.decompose().rotation,
                })
                .collect(),
        );
        debug_assert_eq!(validate(&sequence.0), Ok(()), "bad key times {times:?}");
        sequence.unwrap_rotations(1);
        sequence
    }

    /// Reach the keyframe at `index` by turning `sweep` radians from the
    /// keyframe before it, instead of the short way
    pub fn swept(mut self, index: usize, sweep: f32) -> Self {
        debug_assert!(index > 0 && index < self.0.len(), "no keyframe before {index}");
        if let Some(previous) = index.checked_sub(1).and_then(|i| self.0.get(i)).map(|k| k.rotation) {
            if let Some(keyframe) = self.0.get_mut(index) {
                keyframe.rotation = previous + sweep;
            }
            self.unwrap_rotations(index + 1);
        }
        self
    }

    fn unwrap_rotations(&mut self, from: usize) {
        for index in from.max(1)..self.0.len() {
            let previous = self.0[index - 1].rotation;
            let keyframe = &mut self.0[index];
            keyframe.rotation = nearest_angle(keyframe.rotation, previous);
        }
    }

    /// Play the same values backwards over the same key times
    pub fn reversed_values(&self) -> Self {
        Self(
            self.0
                .iter()
                .zip(self.0.iter().rev())
                .map(|(slot, value)| Keyframe {
                    time: slot.time,
                    ..*value
                })
                .collect(),
        )
    }

    /// Play the whole sequence backwards in time: order reversed and
    /// every time t becomes 1 - t
    pub fn reversed_in_time(&self) -> Self {
        Self(
            self.0
                .iter()
                .rev()
                .map(|keyframe| Keyframe {
                    time: 1.0 - keyframe.time,
                    ..*keyframe
                })
                .collect(),
        )
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.0
    }

    pub fn times(&self) -> Vec<f32> {
        self.0.iter().map(|keyframe| keyframe.time).collect()
    }

    pub fn values(&self) -> Vec<LineTransform> {
        self.0.iter().map(|keyframe| keyframe.transform).collect()
    }

    pub fn rotations(&self) -> Vec<f32> {
        self.0.iter().map(|keyframe| keyframe.rotation).collect()
    }

    pub fn first_transform(&self) -> LineTransform {
        self.0[0].transform
    }

    pub fn last_transform(&self) -> LineTransform {
        self.0[self.0.len() - 1].transform
    }

    /// Transform at an (already eased) time fraction
    pub fn sample(&self, time: f32) -> LineTransform {
        let Some(index) = self.0.iter().rposition(|keyframe| keyframe.time <= time) else {
            return self.first_transform();
        };
        let Some(next) = self.0.get(index + 1) else {
            return self.last_transform();
        };

        let current = &self.0[index];
        let span = next.time - current.time;
        let fraction = ((time - current.time) / span).clamp(0.0, 1.0);

        let mut from = current.transform.decompose();
        from.rotation = current.rotation;
        let mut to = next.transform.decompose();
        to.rotation = next.rotation;
        from.lerp(&to, fraction).compose()
    }
}

/// A scheduled keyframe animation for one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyframeAnimation {
    pub keyframes: KeyframeSequence,
    /// Seconds
    pub duration: f32,
    pub easing: CubicBezier,
}

impl KeyframeAnimation {
    /// The transform that stays applied once playback ends
    pub fn final_transform(&self) -> LineTransform {
        self.keyframes.last_transform()
    }

    /// Transform `elapsed` seconds after the start
    pub fn sample_at(&self, elapsed: f32) -> LineTransform {
        let progress = if self.duration > 0.0 {
            (elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.keyframes.sample(self.easing.evaluate(progress))
    }

    pub fn is_finished_at(&self, elapsed: f32) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::bezier::ICON_EASING;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn a() -> LineTransform {
        LineTransform::IDENTITY
    }

    fn b() -> LineTransform {
        LineTransform::translation(0.0, 10.0)
    }

    fn c() -> LineTransform {
        LineTransform::translation(0.0, 10.0).rotated(FRAC_PI_2)
    }

    #[test]
    fn test_reversed_values_keeps_times() {
        let sequence = KeyframeSequence::new(&[0.0, 0.4, 0.4, 1.0], &[a(), a(), b(), b()]);
        let reversed = sequence.reversed_values();
        assert_eq!(reversed.times(), vec![0.0, 0.4, 0.4, 1.0]);
        assert_eq!(reversed.values(), vec![b(), b(), a(), a()]);
    }

    #[test]
    fn test_reversed_in_time_mirrors() {
        let sequence = KeyframeSequence::new(&[0.0, 1.0, 1.0], &[a(), b(), c()]);
        let reversed = sequence.reversed_in_time();
        assert_eq!(reversed.times(), vec![0.0, 0.0, 1.0]);
        assert_eq!(reversed.values(), vec![c(), b(), a()]);
    }

    #[test]
    fn test_sample_interpolates_and_snaps() {
        let sequence = KeyframeSequence::new(&[0.0, 0.5, 0.5, 1.0], &[a(), b(), c(), c()]);
        assert!(sequence.sample(0.0).approx_eq(&a()));
        assert!(sequence
            .sample(0.25)
            .approx_eq(&LineTransform::translation(0.0, 5.0)));
        // at the shared time the later keyframe wins
        assert!(sequence.sample(0.5).approx_eq(&c()));
        assert!(sequence.sample(1.0).approx_eq(&c()));
    }

    #[test]
    fn test_snap_at_start() {
        let sequence = KeyframeSequence::new(&[0.0, 0.0, 1.0], &[c(), b(), a()]);
        assert!(sequence.sample(0.0).approx_eq(&b()));
        assert!(sequence.sample(1.0).approx_eq(&a()));
    }

    #[test]
    fn test_swept_turn_direction() {
        let flat = LineTransform::translation(0.0, 10.0);
        let half_turn = flat.rotated(-PI);
        let short = KeyframeSequence::new(&[0.0, 1.0], &[flat, half_turn]);
        let swept = short.clone().swept(1, -PI);
        assert_eq!(swept.rotations(), vec![0.0, -PI]);
        assert_eq!(swept.values(), short.values());

        let quarter = swept.sample(0.5).decompose().rotation;
        assert!((quarter + FRAC_PI_2).abs() < 1e-4);
        assert!(swept.sample(0.25).decompose().rotation < 0.0);

        // playing it backwards turns back the same way it came
        let back = swept.reversed_in_time();
        assert_eq!(back.rotations(), vec![-PI, 0.0]);
        assert!(back.sample(0.75).decompose().rotation < 0.0);
    }

    #[test]
    fn test_swept_rewraps_later_keyframes() {
        let sequence = KeyframeSequence::new(&[0.0, 0.5, 1.0], &[a(), a().rotated(PI), c()]).swept(1, -PI);
        assert_eq!(sequence.rotations()[1], -PI);
        // the next quarter turn continues from -180 to -270
        assert!((sequence.rotations()[2] + 3.0 * FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn test_deserialize_validates() {
        let sequence = KeyframeSequence::new(&[0.0, 0.5, 1.0], &[a(), b(), c()]);
        let json = serde_json::to_string(&sequence).unwrap();
        let parsed: KeyframeSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sequence);

        assert!(serde_json::from_str::<KeyframeSequence>("[]").is_err());

        let mut keyframes = sequence.keyframes().to_vec();
        keyframes.swap(0, 2);
        let unordered = serde_json::to_string(&keyframes).unwrap();
        let err = serde_json::from_str::<KeyframeSequence>(&unordered).unwrap_err();
        assert!(err.to_string().contains("comes after"));

        keyframes[0].time = 1.5;
        assert_eq!(
            KeyframeSequence::try_from(keyframes),
            Err(KeyframeError::OutOfRange(1.5))
        );
        assert_eq!(KeyframeSequence::try_from(Vec::new()), Err(KeyframeError::Empty));
    }

    #[test]
    fn test_animation_sampling() {
        let animation = KeyframeAnimation {
            keyframes: KeyframeSequence::new(&[0.0, 1.0], &[a(), b()]),
            duration: 1.0 / 3.0,
            easing: ICON_EASING,
        };
        assert!(animation.sample_at(0.0).approx_eq(&a()));
        assert!(animation.sample_at(10.0).approx_eq(&b()));
        // eased midpoint of a symmetric curve is the plain midpoint
        let halfway = animation.sample_at(1.0 / 6.0).decompose().translation.y;
        assert!((halfway - 5.0).abs() < 0.1);
        // slow start
        assert!(animation.sample_at(1.0 / 30.0).decompose().translation.y < 1.0);
        assert!(animation.is_finished_at(0.34));
        assert!(!animation.is_finished_at(0.2));
        assert_eq!(animation.final_transform(), b());
    }
}
