//! Shared gesture constants for the drag-pan handlers.
//!
//! Durations are measured between event timestamps, never against the wall
//! clock, so replayed input behaves the same as live input.

use web_time::Duration;

/// Trailing window of motion samples used to estimate release velocity.
///
/// Samples older than this, relative to the newest sample, are discarded
/// before each estimate.
pub const INERTIA_HORIZON: Duration = Duration::from_millis(150);

/// Shortest span between oldest and newest sample that yields a velocity.
///
/// Anything shorter is treated as a release with no motion.
pub const MIN_INERTIA_SAMPLE_SPAN: Duration = Duration::from_millis(1);

/// If the pointer rested this long before release, it has stopped and the
/// release carries no momentum.
pub const ASSUME_STOPPED: Duration = Duration::from_millis(40);

/// Capacity of the motion sample ring buffer.
///
/// At a 120 Hz input rate this covers the whole horizon; faster sources
/// overwrite their oldest samples first.
pub const MOTION_HISTORY_SIZE: usize = 20;
