//! Synthetic sensor backend for the simulator binary and integration tests.
//!
//! Generates deterministic sinusoidal readings, one frequency per channel
//! for visual variety, and replays stick events injected by the host loop.
//! No hardware, no randomness: the same frame count always produces the
//! same picture.

use heapless::Deque;

use crate::input::StickEvent;
use crate::sensors::{ImuConfig, Orientation, ScalarKind, SensorSource};

/// Signal time advance per frame.
const TIME_STEP: f32 = 0.05;

/// Pending stick events. Sixteen is far beyond what a human produces in
/// one 20 ms frame; overflow drops the newest event.
const EVENT_QUEUE_DEPTH: usize = 16;

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// # Parameters
/// - `t`: Time parameter (advances each frame)
/// - `min`: Minimum output value
/// - `max`: Maximum output value
/// - `freq`: Oscillation frequency (higher = faster cycles)
fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Simulated hat: synthetic readings plus an injected stick event queue.
pub struct DemoSensors {
    t: f32,
    imu: ImuConfig,
    events: Deque<StickEvent, EVENT_QUEUE_DEPTH>,
}

impl DemoSensors {
    pub const fn new() -> Self {
        Self {
            t: 0.0,
            imu: ImuConfig::new(true, true, true),
            events: Deque::new(),
        }
    }

    /// Advance signal time by one frame.
    pub fn advance(&mut self) {
        self.t += TIME_STEP;
    }

    /// Queue a stick event for the next drain.
    pub fn inject(&mut self, event: StickEvent) {
        if self.events.push_back(event).is_err() {
            tracing::warn!(?event, "demo stick queue full, dropping event");
        }
    }

    /// Last applied fusion configuration.
    pub const fn imu_config(&self) -> ImuConfig {
        self.imu
    }
}

impl Default for DemoSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for DemoSensors {
    fn scalar(&mut self, kind: ScalarKind) -> Option<f32> {
        Some(match kind {
            ScalarKind::Temperature => fake_signal(self.t, -5.0, 45.0, 0.08),
            ScalarKind::Pressure => fake_signal(self.t, 960.0, 1040.0, 0.10),
            ScalarKind::Humidity => fake_signal(self.t, 20.0, 80.0, 0.07),
        })
    }

    fn orientation(&mut self) -> Orientation {
        Orientation {
            roll: fake_signal(self.t, 0.0, 360.0, 0.05),
            pitch: fake_signal(self.t, 0.0, 360.0, 0.04),
            yaw: fake_signal(self.t, 0.0, 360.0, 0.06),
        }
    }

    fn configure_imu(&mut self, config: ImuConfig) {
        self.imu = config;
    }

    fn poll_event(&mut self) -> Option<StickEvent> {
        self.events.pop_front()
    }
}
