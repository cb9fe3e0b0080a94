//! Cubic bezier easing for the highlight transition.
//!
//! The highlight uses a spring-like curve with control points
//! (0.34, 1.2, 0.64, 1.0): the y1 control point above 1.0 makes the
//! highlight overshoot its target slightly before settling.

/// A cubic bezier easing curve anchored at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// The overshoot-and-settle curve used for highlight transitions.
pub const SPRING: CubicBezier = CubicBezier::new(0.34, 1.2, 0.64, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// One-dimensional bezier with implicit endpoints 0 and 1.
    fn coord(a: f64, b: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    }

    /// Evaluates the curve at progress `x` in `[0, 1]`.
    ///
    /// Inverts x(t) by bisection (x(t) is monotonic for x control points
    /// inside `[0, 1]`), then samples y at the recovered parameter. The
    /// result may exceed 1.0 when the curve overshoots.
    pub fn eval(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut t = x;
        for _ in 0..48 {
            let cx = Self::coord(self.x1, self.x2, t);
            if (cx - x).abs() < 1e-7 {
                break;
            }
            if cx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        Self::coord(self.y1, self.y2, t)
    }
}
