//! Bezier curve calculations
//!
//! Cubic bezier timing curves with implicit end points (0,0) and (1,1),
//! the same model as a CSS `cubic-bezier()` timing function.

use serde::{Deserialize, Serialize};

/// Calculate cubic bezier curve value
///
/// Control points: P0=(0,0), P1=(p1x,p1y), P2=(p2x,p2y), P3=(1,1)
///
/// Uses Newton-Raphson iteration to solve for s given x = t,
/// then evaluates y(s).
pub fn cubic_bezier(t: f32, p1x: f32, p1y: f32, p2x: f32, p2y: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut s = t;

    for _ in 0..8 {
        let x = bezier_component(s, p1x, p2x);
        let dx = bezier_slope(s, p1x, p2x);

        if dx.abs() < 1e-6 {
            break;
        }

        s = (s - (x - t) / dx).clamp(0.0, 1.0);
    }

    bezier_component(s, p1y, p2y).clamp(0.0, 1.0)
}

fn bezier_component(s: f32, c1: f32, c2: f32) -> f32 {
    let one_minus_s = 1.0 - s;
    3.0 * one_minus_s * one_minus_s * s * c1 + 3.0 * one_minus_s * s * s * c2 + s * s * s
}

fn bezier_slope(s: f32, c1: f32, c2: f32) -> f32 {
    let one_minus_s = 1.0 - s;
    3.0 * one_minus_s * one_minus_s * c1 + 6.0 * one_minus_s * s * (c2 - c1) + 3.0 * s * s * (1.0 - c2)
}

/// A timing curve handed to the animation runtime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p1x: f32,
    pub p1y: f32,
    pub p2x: f32,
    pub p2y: f32,
}

impl CubicBezier {
    pub const fn new(p1x: f32, p1y: f32, p2x: f32, p2y: f32) -> Self {
        Self { p1x, p1y, p2x, p2y }
    }

    /// Map linear progress in 0..=1 to eased progress
    pub fn evaluate(&self, t: f32) -> f32 {
        cubic_bezier(t, self.p1x, self.p1y, self.p2x, self.p2y)
    }
}

/// Slow start, fast middle, slow end. Used by every icon transition.
pub const ICON_EASING: CubicBezier = CubicBezier::new(0.60, 0.00, 0.40, 1.00);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_bezier_boundaries() {
        assert!((cubic_bezier(0.0, 0.6, 0.0, 0.4, 1.0) - 0.0).abs() < 0.001);
        assert!((cubic_bezier(1.0, 0.6, 0.0, 0.4, 1.0) - 1.0).abs() < 0.001);
        assert_eq!(ICON_EASING.evaluate(-0.5), 0.0);
        assert_eq!(ICON_EASING.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_icon_easing_shape() {
        // symmetric curve: crosses the diagonal at the midpoint
        assert!((ICON_EASING.evaluate(0.5) - 0.5).abs() < 0.01);
        // slow start, slow end
        assert!(ICON_EASING.evaluate(0.2) < 0.2);
        assert!(ICON_EASING.evaluate(0.8) > 0.8);
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let value = ICON_EASING.evaluate(i as f32 / 100.0);
            assert!(value + 1e-4 >= last);
            last = value;
        }
    }

    #[test]
    fn test_linear_curve() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        assert!((linear.evaluate(0.25) - 0.25).abs() < 0.01);
    }
}
