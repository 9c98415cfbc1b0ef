//! Cubic-bezier easing curves.

use std::fmt;

/// A monotonic progress-shaping curve from (0, 0) to (1, 1).
///
/// The curve is the CSS-style cubic bezier with control points `(x1, y1)` and
/// `(x2, y2)`. Both x coordinates are kept inside `[0, 1]`, so for every time
/// fraction there is exactly one point on the curve and evaluation is a stable
/// numeric solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingCurve {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl EasingCurve {
    /// Identity curve.
    pub const LINEAR: EasingCurve = EasingCurve::from_raw(0.0, 0.0, 1.0, 1.0);
    pub const EASE_OUT: EasingCurve = EasingCurve::from_raw(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: EasingCurve = EasingCurve::from_raw(0.42, 0.0, 0.58, 1.0);
    /// Curve used for inertial pans unless configured otherwise.
    pub const DEFAULT_PAN: EasingCurve = EasingCurve::from_raw(0.0, 0.0, 0.3, 1.0);

    const fn from_raw(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a curve, clamping both x control coordinates into `[0, 1]`.
    ///
    /// Non-finite x coordinates fall back to the linear curve's values.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let clamp_x = |value: f32, fallback: f32| {
            if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                fallback
            }
        };
        Self {
            x1: clamp_x(x1, 0.0),
            y1: if y1.is_finite() { y1 } else { 0.0 },
            x2: clamp_x(x2, 1.0),
            y2: if y2.is_finite() { y2 } else { 1.0 },
        }
    }

    /// Creates a curve, rejecting control points that would not describe a
    /// function of time.
    pub fn try_new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, EasingError> {
        for (name, value) in [("x1", x1), ("x2", x2)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EasingError::ControlPointOutOfRange { name, value });
            }
        }
        for (name, value) in [("y1", y1), ("y2", y2)] {
            if !value.is_finite() {
                return Err(EasingError::ControlPointOutOfRange { name, value });
            }
        }
        Ok(Self::from_raw(x1, y1, x2, y2))
    }

    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Maps a time fraction to a progress fraction.
    ///
    /// Input outside `[0, 1]` (including NaN) is clamped.
    pub fn evaluate(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let cx = 3.0 * self.x1;
        let bx = 3.0 * (self.x2 - self.x1) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * self.y1;
        let by = 3.0 * (self.y2 - self.y1) - cy;
        let ay = 1.0 - cy - by;

        fn sample_curve(a: f32, b: f32, c: f32, s: f32) -> f32 {
            ((a * s + b) * s + c) * s
        }

        fn sample_derivative(a: f32, b: f32, c: f32, s: f32) -> f32 {
            (3.0 * a * s + 2.0 * b) * s + c
        }

        // Newton-Raphson on the x polynomial, staying inside [0, 1].
        let mut s = t;
        let mut converged = false;
        for _ in 0..8 {
            let x = sample_curve(ax, bx, cx, s) - t;
            if x.abs() < 1e-6 {
                converged = true;
                break;
            }
            let dx = sample_derivative(ax, bx, cx, s);
            if dx.abs() < 1e-6 {
                break;
            }
            s = (s - x / dx).clamp(0.0, 1.0);
        }

        if !converged {
            // x(s) is non-decreasing on [0, 1] for valid control points, so
            // bisection always makes progress.
            let mut lo = 0.0;
            let mut hi = 1.0;
            s = t;
            for _ in 0..24 {
                let delta = sample_curve(ax, bx, cx, s) - t;
                if delta.abs() < 1e-6 {
                    break;
                }
                if delta > 0.0 {
                    hi = s;
                } else {
                    lo = s;
                }
                s = 0.5 * (lo + hi);
            }
        }

        sample_curve(ay, by, cy, s).clamp(0.0, 1.0)
    }
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::DEFAULT_PAN
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EasingError {
    ControlPointOutOfRange { name: &'static str, value: f32 },
}

impl fmt::Display for EasingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EasingError::ControlPointOutOfRange { name, value } => {
                write!(f, "easing control point {name} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for EasingError {}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
