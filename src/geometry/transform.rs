//! Line transforms
//!
//! A `LineTransform` is a 3D affine matrix applied to one line about its
//! anchor. Composition follows the layer-transform convention: each builder
//! method appends an operation in the line's local space, so
//! `LineTransform::translation(0.0, dy).rotated(a)` rotates first and then
//! moves the rotated line by `dy`.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Tolerance used when comparing transforms built through different
/// composition paths
pub const TRANSFORM_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineTransform(Mat4);

impl Default for LineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LineTransform {
    pub const IDENTITY: LineTransform = LineTransform(Mat4::IDENTITY);

    pub fn translation(x: f32, y: f32) -> Self {
        Self(Mat4::from_translation(Vec3::new(x, y, 0.0)))
    }

    /// Rotation about the z axis. Positive angles turn +x toward +y.
    pub fn rotation(angle: f32) -> Self {
        Self(Mat4::from_rotation_z(angle))
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self(Mat4::from_scale(Vec3::new(sx, sy, 1.0)))
    }

    /// Scale to nothing on every axis; the line disappears
    pub fn collapsed() -> Self {
        Self(Mat4::from_scale(Vec3::ZERO))
    }

    pub fn translated(self, x: f32, y: f32) -> Self {
        Self(self.0 * Mat4::from_translation(Vec3::new(x, y, 0.0)))
    }

    pub fn rotated(self, angle: f32) -> Self {
        Self(self.0 * Mat4::from_rotation_z(angle))
    }

    pub fn scaled(self, sx: f32, sy: f32) -> Self {
        Self(self.0 * Mat4::from_scale(Vec3::new(sx, sy, 1.0)))
    }

    /// Rotate about a pivot given in the line's local space
    pub fn rotated_about(self, pivot: Vec2, angle: f32) -> Self {
        self.translated(pivot.x, pivot.y)
            .rotated(angle)
            .translated(-pivot.x, -pivot.y)
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::IDENTITY)
    }

    /// True when the transform squashes the line to a point
    pub fn is_collapsed(&self) -> bool {
        let linear = self.linear_2d();
        linear[0].length() < TRANSFORM_EPSILON && linear[1].length() < TRANSFORM_EPSILON
    }

    pub fn approx_eq(&self, other: &LineTransform) -> bool {
        self.0.abs_diff_eq(other.0, TRANSFORM_EPSILON)
    }

    /// Map a point from the line's local space (anchor at the origin)
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.0.transform_point3(point.extend(0.0)).truncate()
    }

    fn linear_2d(&self) -> [Vec2; 2] {
        [self.0.x_axis.truncate().truncate(), self.0.y_axis.truncate().truncate()]
    }

    /// Split into translation, z rotation and axis scale
    ///
    /// Every transform built by this crate is of the form T * R * S, so the
    /// split is exact. A collapsed transform reports zero rotation.
    pub fn decompose(&self) -> TransformParts {
        let [x_axis, y_axis] = self.linear_2d();
        let translation = self.0.w_axis.truncate().truncate();

        let mut scale = Vec2::new(x_axis.length(), y_axis.length());
        if x_axis.perp_dot(y_axis) < 0.0 {
            scale.y = -scale.y;
        }

        let rotation = if scale.x > TRANSFORM_EPSILON {
            x_axis.y.atan2(x_axis.x)
        } else if scale.y.abs() > TRANSFORM_EPSILON {
            let y_axis = y_axis * scale.y.signum();
            (-y_axis.x).atan2(y_axis.y)
        } else {
            0.0
        };

        TransformParts {
            translation,
            rotation,
            scale,
        }
    }
}

/// Translation, rotation and scale of a decomposed transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParts {
    pub translation: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl TransformParts {
    pub fn compose(&self) -> LineTransform {
        LineTransform::translation(self.translation.x, self.translation.y)
            .rotated(self.rotation)
            .scaled(self.scale.x, self.scale.y)
    }

    /// Interpolate every part linearly toward `other`
    ///
    /// Rotations are used as given, so a turn from 0 to -PI goes clockwise
    /// even though PI names the same orientation. Unwrap decomposed angles
    /// with `nearest_angle` first when no direction was authored.
    pub fn lerp(&self, other: &TransformParts, t: f32) -> TransformParts {
        TransformParts {
            translation: self.translation.lerp(other.translation, t),
            rotation: self.rotation + (other.rotation - self.rotation) * t,
            scale: self.scale.lerp(other.scale, t),
        }
    }
}

/// The angle equivalent to `angle` that lies within half a turn of `reference`
pub fn nearest_angle(angle: f32, reference: f32) -> f32 {
    let mut delta = (angle - reference).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    reference + delta
}
