//! Inertial pan physics.
//!
//! A released drag continues at its release velocity and decelerates at a
//! constant rate until it comes to rest. The total travel is the area under
//! that linear velocity ramp.

use std::fmt;

use mapgesture_graphics::Vector;
use web_time::Duration;

use crate::EasingCurve;

/// Default release-velocity scale factor.
pub const DEFAULT_LINEARITY: f32 = 0.0;
/// Default cap on release speed, in units per second.
pub const DEFAULT_MAX_SPEED: f32 = 1400.0;
/// Default deceleration, in units per second squared.
pub const DEFAULT_DECELERATION: f32 = 2500.0;

/// Tuning for the momentum that follows a released drag.
///
/// Passed to `enable` and treated as an immutable value afterwards; enabling
/// again replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaOptions {
    /// Release velocity is scaled by `1 + linearity`.
    pub linearity: f32,
    /// Easing applied to the inertial pan.
    pub easing: EasingCurve,
    /// Maximum release speed in units per second.
    pub max_speed: f32,
    /// Deceleration in units per second squared.
    pub deceleration: f32,
}

impl InertiaOptions {
    pub fn builder() -> InertiaOptionsBuilder {
        InertiaOptionsBuilder {
            options: Self::default(),
        }
    }

    pub fn with_linearity(mut self, linearity: f32) -> Self {
        self.linearity = linearity;
        self
    }

    pub fn with_easing(mut self, easing: EasingCurve) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_deceleration(mut self, deceleration: f32) -> Self {
        self.deceleration = deceleration;
        self
    }

    /// Checks the documented ranges.
    ///
    /// Gesture handlers accept unvalidated options too; out-of-range physics
    /// simply produce no inertia.
    pub fn validate(&self) -> Result<(), InertiaOptionsError> {
        for (field, value) in [
            ("linearity", self.linearity),
            ("max_speed", self.max_speed),
            ("deceleration", self.deceleration),
        ] {
            if !value.is_finite() {
                return Err(InertiaOptionsError::NonFinite { field });
            }
        }
        if self.linearity < 0.0 {
            return Err(InertiaOptionsError::NegativeLinearity(self.linearity));
        }
        if self.max_speed <= 0.0 {
            return Err(InertiaOptionsError::NonPositiveMaxSpeed(self.max_speed));
        }
        if self.deceleration <= 0.0 {
            return Err(InertiaOptionsError::NonPositiveDeceleration(
                self.deceleration,
            ));
        }
        Ok(())
    }

    /// Projects a release velocity into an inertial pan.
    ///
    /// Returns `None` when the gesture should simply stop where it was
    /// released: zero or non-finite velocity, or degenerate physics.
    pub fn project(&self, velocity: Vector) -> Option<InertialPan> {
        if !(self.max_speed > 0.0 && self.max_speed.is_finite()) {
            return None;
        }
        if !(self.deceleration > 0.0 && self.deceleration.is_finite()) {
            return None;
        }
        if !velocity.is_finite() {
            return None;
        }

        let scale = 1.0 + self.linearity.max(0.0);
        let scaled = velocity * scale;
        let direction = scaled.normalized()?;
        let speed = scaled.length().min(self.max_speed);
        if speed <= 0.0 {
            return None;
        }

        let duration_secs = speed / self.deceleration;
        let distance = speed * duration_secs / 2.0;
        if !(duration_secs.is_finite() && distance.is_finite()) {
            return None;
        }
        Some(InertialPan {
            displacement: direction * distance,
            duration_secs,
            easing: self.easing,
        })
    }
}

impl Default for InertiaOptions {
    fn default() -> Self {
        Self {
            linearity: DEFAULT_LINEARITY,
            easing: EasingCurve::DEFAULT_PAN,
            max_speed: DEFAULT_MAX_SPEED,
            deceleration: DEFAULT_DECELERATION,
        }
    }
}

/// Validating builder for [`InertiaOptions`].
#[derive(Debug, Clone, Copy)]
pub struct InertiaOptionsBuilder {
    options: InertiaOptions,
}

impl InertiaOptionsBuilder {
    pub fn linearity(mut self, linearity: f32) -> Self {
        self.options.linearity = linearity;
        self
    }

    pub fn easing(mut self, easing: EasingCurve) -> Self {
        self.options.easing = easing;
        self
    }

    pub fn max_speed(mut self, max_speed: f32) -> Self {
        self.options.max_speed = max_speed;
        self
    }

    pub fn deceleration(mut self, deceleration: f32) -> Self {
        self.options.deceleration = deceleration;
        self
    }

    pub fn build(self) -> Result<InertiaOptions, InertiaOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InertiaOptionsError {
    NegativeLinearity(f32),
    NonPositiveMaxSpeed(f32),
    NonPositiveDeceleration(f32),
    NonFinite { field: &'static str },
}

impl fmt::Display for InertiaOptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InertiaOptionsError::NegativeLinearity(value) => {
                write!(f, "linearity must be >= 0, got {value}")
            }
            InertiaOptionsError::NonPositiveMaxSpeed(value) => {
                write!(f, "max_speed must be > 0, got {value}")
            }
            InertiaOptionsError::NonPositiveDeceleration(value) => {
                write!(f, "deceleration must be > 0, got {value}")
            }
            InertiaOptionsError::NonFinite { field } => write!(f, "{field} must be finite"),
        }
    }
}

impl std::error::Error for InertiaOptionsError {}

/// Parameters of the eased pan that continues a released drag.
///
/// The camera animates `start + displacement * easing.evaluate(t / duration)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertialPan {
    pub displacement: Vector,
    pub duration_secs: f32,
    pub easing: EasingCurve,
}

impl InertialPan {
    /// Offset from the release position after `elapsed` time.
    pub fn offset_at(&self, elapsed: Duration) -> Vector {
        if self.duration_secs <= 0.0 {
            return self.displacement;
        }
        let fraction = elapsed.as_secs_f32() / self.duration_secs;
        self.displacement * self.easing.evaluate(fraction)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed.as_secs_f32() >= self.duration_secs
    }
}

#[cfg(test)]
#[path = "tests/inertia_tests.rs"]
mod tests;
