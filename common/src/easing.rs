//! Easing curves for keyframe interpolation.
//!
//! A [`CubicBezier`] is defined by two control points `(x1, y1)` and
//! `(x2, y2)`; the end points are fixed at `(0, 0)` and `(1, 1)`. To ease a
//! time fraction `x`, the curve parameter `t` with `bx(t) = x` is solved
//! numerically and `by(t)` is returned.
//!
//! The x control points must stay in `[0, 1]` so that `bx` is monotonic. The
//! y control points may go outside that range, which makes the eased value
//! overshoot or dip below the segment end points.

/// Newton-Raphson iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;

/// Solver tolerance on the x axis.
const EPSILON: f32 = 1e-6;

/// Bisection iteration cap (each step halves the interval).
const BISECTION_ITERATIONS: usize = 32;

/// Cubic bezier easing with end points `(0, 0)` and `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Create an easing curve from its two inner control points.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self { Self { x1, y1, x2, y2 } }

    /// Ease a time fraction.
    ///
    /// Fractions at or outside the `[0, 1]` bounds are returned unchanged, so
    /// a keyframe segment always starts and ends exactly on its values.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 || fraction >= 1.0 {
            return fraction;
        }
        let t = self.solve_t(fraction);
        sample(self.y1, self.y2, t)
    }

    /// Find the curve parameter whose x coordinate equals `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = sample(self.x1, self.x2, t) - x;
            if error > -EPSILON && error < EPSILON {
                return t;
            }
            let slope = sample_derivative(self.x1, self.x2, t);
            if slope > -EPSILON && slope < EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Newton stalled on a flat spot; bisect on [0, 1] instead
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(self.x1, self.x2, t);
            let error = value - x;
            if error > -EPSILON && error < EPSILON {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}

/// Evaluate one axis of the bezier at parameter `t`.
///
/// With `p0 = 0` and `p3 = 1` the polynomial is `((a t + b) t + c) t`.
#[inline]
fn sample(p1: f32, p2: f32, t: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

/// Derivative of [`sample`] with respect to `t`.
#[inline]
fn sample_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Easing applied to one keyframe segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Identity.
    Linear,
    /// Cubic bezier curve.
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Standard decelerate curve: starts at full speed, settles gently.
    pub const LINEAR_OUT_SLOW_IN: Self = Self::CubicBezier(CubicBezier::new(0.0, 0.0, 0.2, 1.0));

    /// Shorthand for a cubic bezier easing.
    pub const fn cubic(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier(CubicBezier::new(x1, y1, x2, y2))
    }

    /// Ease a time fraction.
    #[inline]
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Self::Linear => fraction,
            Self::CubicBezier(curve) => curve.transform(fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, tolerance: f32) -> bool {
        let diff = a - b;
        diff < tolerance && diff > -tolerance
    }

    #[test]
    fn test_end_points_are_exact() {
        let curve = CubicBezier::new(0.2, -2.0, 0.0, 1.0);
        assert_eq!(curve.transform(0.0), 0.0);
        assert_eq!(curve.transform(1.0), 1.0);
    }

    #[test]
    fn test_out_of_range_fraction_passes_through() {
        let curve = CubicBezier::new(0.0, 1.5, 0.8, 1.0);
        assert_eq!(curve.transform(-0.5), -0.5);
        assert_eq!(curve.transform(1.5), 1.5);
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 1..20 {
            let x = i as f32 / 20.0;
            assert!(close(curve.transform(x), x, 1e-4), "x={x} gave {}", curve.transform(x));
        }
    }

    #[test]
    fn test_solver_inverts_x_axis() {
        let curve = CubicBezier::new(0.2, -1.5, 0.0, 1.0);
        for i in 1..50 {
            let x = i as f32 / 50.0;
            let t = curve.solve_t(x);
            assert!(close(sample(0.2, 0.0, t), x, 1e-4), "x={x} solved to t={t}");
        }
    }

    #[test]
    fn test_positive_y_control_overshoots() {
        let curve = CubicBezier::new(0.0, 1.5, 0.8, 1.0);
        let peak = (1..100).map(|i| curve.transform(i as f32 / 100.0)).fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "Expected overshoot above 1.0, got {peak}");
    }

    #[test]
    fn test_negative_y_control_dips() {
        let curve = CubicBezier::new(0.2, -2.0, 0.0, 1.0);
        let low = (1..100).map(|i| curve.transform(i as f32 / 100.0)).fold(f32::MAX, f32::min);
        assert!(low < 0.0, "Expected dip below 0.0, got {low}");
    }

    #[test]
    fn test_linear_out_slow_in_decelerates() {
        let easing = Easing::LINEAR_OUT_SLOW_IN;
        let early = easing.transform(0.1);
        let late_step = easing.transform(1.0) - easing.transform(0.9);
        assert!(early > 0.1, "Decelerate curve leads linear early on");
        assert!(late_step < 0.1, "Decelerate curve slows near the end");
    }

    #[test]
    fn test_linear_easing() {
        assert_eq!(Easing::Linear.transform(0.37), 0.37);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let easing = Easing::cubic(0.2, -1.2, 0.0, 1.0);
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            assert_eq!(easing.transform(x).to_bits(), easing.transform(x).to_bits());
        }
    }
}
