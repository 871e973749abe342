//! Sensor capability surface.
//!
//! The core never talks to hardware directly; it pulls readings through
//! [`SensorSource`] and pushes pixels through any
//! `DrawTarget<Color = Rgb888>`. The demo backend ([`crate::demo`]) and the
//! test fakes implement this trait; a board driver for the real hat would
//! implement it the same way.

use crate::input::StickEvent;

/// Named scalar readings the hat exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    /// Degrees Celsius.
    Temperature,
    /// Millibars.
    Pressure,
    /// Relative humidity, percent.
    Humidity,
}

impl ScalarKind {
    /// Stable name used in errors and log events.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::Humidity => "humidity",
        }
    }
}

/// Three-axis orientation reading, degrees. Axes a backend cannot measure
/// read as `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

/// Which IMU fusion subsystems are active. Unused subsystems can be powered
/// down by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImuConfig {
    pub compass: bool,
    pub gyro: bool,
    pub accel: bool,
}

impl ImuConfig {
    pub const fn new(compass: bool, gyro: bool, accel: bool) -> Self {
        Self { compass, gyro, accel }
    }
}

impl Default for ImuConfig {
    /// All fusion subsystems enabled, the power-on state of the hat.
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// The sensor side of the hardware capability surface.
///
/// All methods take `&mut self`: reading the hat advances its internal
/// state, and the handle is exclusively owned by the single loop thread.
pub trait SensorSource {
    /// Read a named scalar. `None` when this backend does not expose the
    /// reading; full-screen views turn that into
    /// [`RenderError::UnknownProperty`](crate::error::RenderError).
    fn scalar(&mut self, kind: ScalarKind) -> Option<f32>;

    /// Read the fused three-axis orientation.
    fn orientation(&mut self) -> Orientation;

    /// Enable exactly the configured fusion subsystems, disabling the rest.
    fn configure_imu(&mut self, config: ImuConfig);

    /// Pop the oldest pending stick event, non-blocking. Returns `None`
    /// immediately when nothing is pending.
    fn poll_event(&mut self) -> Option<StickEvent>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scalar_names_are_stable() {
        assert_eq!(ScalarKind::Temperature.name(), "temperature");
        assert_eq!(ScalarKind::Pressure.name(), "pressure");
        assert_eq!(ScalarKind::Humidity.name(), "humidity");
    }

    #[test]
    fn test_orientation_axes_default_to_zero() {
        assert_eq!(Orientation::default(), Orientation { roll: 0.0, pitch: 0.0, yaw: 0.0 });
    }

    #[test]
    fn test_imu_default_enables_everything() {
        assert_eq!(ImuConfig::default(), ImuConfig::new(true, true, true));
    }
}
