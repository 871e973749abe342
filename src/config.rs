//! Application configuration constants.
//!
//! Grid geometry lives in [`crate::grid`]; this module holds the timing and
//! stability tunables shared across the crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The demo loop sleeps if a frame completes
/// early; the refresh rate is loop-bound, not event-bound.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Minimum change in a sensor reading required to recompute its color.
/// Readings that drift less than this keep the cached color, suppressing
/// flicker from sensor jitter.
pub const STABILITY_EPSILON: f32 = 0.1;
