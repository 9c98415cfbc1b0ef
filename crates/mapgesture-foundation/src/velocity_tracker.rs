//! Release velocity estimation for inertial panning.
//!
//! Motion samples recorded during a drag go into a fixed ring buffer, so
//! recording never allocates. Age-based eviction happens lazily, right before
//! each estimate.

use mapgesture_animation::{InertiaOptions, InertialPan};
use mapgesture_graphics::{Point, Vector};
use web_time::{Duration, Instant};

use crate::gesture_constants::{INERTIA_HORIZON, MIN_INERTIA_SAMPLE_SPAN, MOTION_HISTORY_SIZE};

/// A position observed at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub position: Point,
    pub timestamp: Instant,
}

impl MotionSample {
    pub fn new(position: Point, timestamp: Instant) -> Self {
        Self {
            position,
            timestamp,
        }
    }
}

/// Trailing window of motion samples for a single drag.
///
/// # Usage
/// ```ignore
/// let mut projector = InertiaProjector::new();
/// projector.record_sample(MotionSample::new(position, timestamp));
/// // ... more samples ...
/// let pan = projector.project_release(&options);
/// ```
#[derive(Clone, Debug)]
pub struct InertiaProjector {
    /// Ring buffer of samples.
    samples: [Option<MotionSample>; MOTION_HISTORY_SIZE],
    /// Slot holding the most recently recorded sample.
    index: usize,
    horizon: Duration,
}

impl Default for InertiaProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl InertiaProjector {
    pub fn new() -> Self {
        Self::with_horizon(INERTIA_HORIZON)
    }

    pub fn with_horizon(horizon: Duration) -> Self {
        Self {
            samples: [None; MOTION_HISTORY_SIZE],
            index: 0,
            horizon,
        }
    }

    /// Appends a sample, overwriting the oldest slot once the ring is full.
    pub fn record_sample(&mut self, sample: MotionSample) {
        self.index = (self.index + 1) % MOTION_HISTORY_SIZE;
        self.samples[self.index] = Some(sample);
    }

    /// Number of samples currently held, including ones not yet evicted.
    pub fn len(&self) -> usize {
        self.samples.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.iter().all(Option::is_none)
    }

    /// Timestamp of the newest sample.
    pub fn latest_timestamp(&self) -> Option<Instant> {
        self.samples.iter().flatten().map(|s| s.timestamp).max()
    }

    /// Drops samples older than the horizon, measured from the newest sample.
    fn evict_expired(&mut self) {
        let Some(newest) = self.latest_timestamp() else {
            return;
        };
        let horizon = self.horizon;
        for slot in self.samples.iter_mut() {
            if slot.is_some_and(|s| newest.saturating_duration_since(s.timestamp) > horizon) {
                *slot = None;
            }
        }
    }

    /// Oldest and newest retained samples by timestamp.
    ///
    /// Walks the ring in recording order so that among equal timestamps the
    /// first recorded is oldest and the last recorded is newest.
    fn extremes(&self) -> Option<(MotionSample, MotionSample)> {
        let mut oldest: Option<MotionSample> = None;
        let mut newest: Option<MotionSample> = None;
        for offset in 1..=MOTION_HISTORY_SIZE {
            let Some(sample) = self.samples[(self.index + offset) % MOTION_HISTORY_SIZE] else {
                continue;
            };
            if oldest.map_or(true, |o| sample.timestamp < o.timestamp) {
                oldest = Some(sample);
            }
            if newest.map_or(true, |n| sample.timestamp >= n.timestamp) {
                newest = Some(sample);
            }
        }
        oldest.zip(newest)
    }

    /// Estimates the release velocity in units per second.
    ///
    /// Returns `None` with fewer than two samples in the window or when they
    /// span less than [`MIN_INERTIA_SAMPLE_SPAN`].
    pub fn release_velocity(&mut self) -> Option<Vector> {
        self.evict_expired();
        let (oldest, newest) = self.extremes()?;
        let span = newest.timestamp.saturating_duration_since(oldest.timestamp);
        if span < MIN_INERTIA_SAMPLE_SPAN {
            return None;
        }
        let velocity = (newest.position - oldest.position) / span.as_secs_f32();
        velocity.is_finite().then_some(velocity)
    }

    /// Computes the inertial pan that should follow a release.
    pub fn project_release(&mut self, options: &InertiaOptions) -> Option<InertialPan> {
        let velocity = self.release_velocity()?;
        let pan = options.project(velocity);
        if let Some(pan) = &pan {
            log::debug!(
                "inertia: velocity=({:.1}, {:.1}) displacement=({:.1}, {:.1}) duration={:.3}s",
                velocity.x,
                velocity.y,
                pan.displacement.x,
                pan.displacement.y,
                pan.duration_secs
            );
        }
        pan
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        self.samples = [None; MOTION_HISTORY_SIZE];
        self.index = 0;
    }
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
