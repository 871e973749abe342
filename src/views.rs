//! Dashboard views.
//!
//! A view owns the mapping from current sensor state to pixels in the main
//! region. Two layouts exist:
//!
//! - [`FullScreenView`] — one scalar reading, one color across all 48 main
//!   cells.
//! - [`AxisView`] — roll / pitch / yaw, one 16-cell horizontal band each.
//!
//! Views never touch the status rows; those belong to the
//! [`ViewCycler`](crate::cycler::ViewCycler).
//!
//! # Activation
//!
//! `setup` runs once per activation cycle, before the first `draw` of that
//! cycle. Full-screen views need nothing beyond the default sensor
//! configuration; the axis view reconfigures which IMU fusion subsystems
//! are powered.

use core::ops::Range;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb888;

use crate::color::ColorCalculator;
use crate::error::RenderError;
use crate::grid::{BAND_COUNT, MAIN_CELLS, band_cells, cell_point};
use crate::sensors::{ImuConfig, ScalarKind, SensorSource};

/// Capability to render current sensor state onto the main region.
pub trait View<S: SensorSource, D: DrawTarget<Color = Rgb888>>
where
    D::Error: core::fmt::Debug,
{
    /// Reconfigure the sensor subsystem on activation. Default: no-op.
    fn setup(&mut self, sensors: &mut S) {
        let _ = sensors;
    }

    /// Render one frame from fresh sensor readings.
    fn draw(&mut self, sensors: &mut S, display: &mut D) -> Result<(), RenderError<D::Error>>;
}

/// Paint a run of cells in one color.
fn fill_cells<D>(display: &mut D, cells: Range<usize>, color: Rgb888) -> Result<(), RenderError<D::Error>>
where
    D: DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    display
        .draw_iter(cells.map(|index| Pixel(cell_point(index), color)))
        .map_err(RenderError::Display)
}

// =============================================================================
// Full-screen view
// =============================================================================

/// One scalar sensor across the whole main region.
pub struct FullScreenView {
    kind: ScalarKind,
    calculator: ColorCalculator,
}

impl FullScreenView {
    pub const fn new(kind: ScalarKind, calculator: ColorCalculator) -> Self {
        Self { kind, calculator }
    }
}

impl<S, D> View<S, D> for FullScreenView
where
    S: SensorSource,
    D: DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    fn draw(&mut self, sensors: &mut S, display: &mut D) -> Result<(), RenderError<D::Error>> {
        let value = sensors
            .scalar(self.kind)
            .ok_or(RenderError::UnknownProperty(self.kind.name()))?;
        let color = self.calculator.compute(value);
        fill_cells(display, 0..MAIN_CELLS, color)
    }
}

// =============================================================================
// Axis view
// =============================================================================

/// Roll, pitch, and yaw as three horizontal bands.
///
/// Each axis owns an independent calculator so the stability anchors of
/// logically distinct signals never interfere.
pub struct AxisView {
    imu: ImuConfig,
    calculators: [ColorCalculator; BAND_COUNT],
}

impl AxisView {
    /// Calculators in band order: roll (top), pitch (middle), yaw (bottom).
    pub const fn new(imu: ImuConfig, calculators: [ColorCalculator; BAND_COUNT]) -> Self {
        Self { imu, calculators }
    }
}

impl<S, D> View<S, D> for AxisView
where
    S: SensorSource,
    D: DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    fn setup(&mut self, sensors: &mut S) {
        sensors.configure_imu(self.imu);
    }

    fn draw(&mut self, sensors: &mut S, display: &mut D) -> Result<(), RenderError<D::Error>> {
        let orientation = sensors.orientation();
        let axes = [orientation.roll, orientation.pitch, orientation.yaw];
        for (band, (value, calculator)) in axes.into_iter().zip(&mut self.calculators).enumerate() {
            let color = calculator.compute(value);
            fill_cells(display, band_cells(band), color)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb888;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::color::BLACK;
    use crate::frame::MatrixFrame;
    use crate::grid::{GRID_CELLS, STATUS_ORIGIN};
    use crate::input::StickEvent;
    use crate::sensors::Orientation;

    /// Scripted backend: fixed readings, records the last IMU configuration.
    struct FakeSensors {
        temperature: Option<f32>,
        orientation: Orientation,
        imu: Option<ImuConfig>,
    }

    impl FakeSensors {
        fn new() -> Self {
            Self {
                temperature: Some(40.0),
                orientation: Orientation::default(),
                imu: None,
            }
        }
    }

    impl SensorSource for FakeSensors {
        fn scalar(&mut self, kind: ScalarKind) -> Option<f32> {
            match kind {
                ScalarKind::Temperature => self.temperature,
                ScalarKind::Pressure | ScalarKind::Humidity => None,
            }
        }

        fn orientation(&mut self) -> Orientation {
            self.orientation
        }

        fn configure_imu(&mut self, config: ImuConfig) {
            self.imu = Some(config);
        }

        fn poll_event(&mut self) -> Option<StickEvent> {
            None
        }
    }

    fn calculator(min: f32, max: f32) -> ColorCalculator {
        ColorCalculator::new(min, max, false).expect("valid test range")
    }

    #[test]
    fn test_full_screen_paints_main_region_only() {
        let mut sensors = FakeSensors::new();
        let mut frame = MatrixFrame::new();
        let mut view = FullScreenView::new(ScalarKind::Temperature, calculator(-40.0, 40.0));

        view.draw(&mut sensors, &mut frame).unwrap();

        let expected = Rgb888::new(255, 0, 0); // 40.0 is the range ceiling
        for index in 0..STATUS_ORIGIN {
            assert_eq!(frame.cell(index), expected, "main cell {index}");
        }
        for index in STATUS_ORIGIN..GRID_CELLS {
            assert_eq!(frame.cell(index), BLACK, "status cell {index} must stay untouched");
        }
    }

    #[test]
    fn test_full_screen_unknown_reading_aborts_frame() {
        let mut sensors = FakeSensors::new();
        sensors.temperature = None;
        let mut frame = MatrixFrame::new();
        let mut view = FullScreenView::new(ScalarKind::Temperature, calculator(-40.0, 40.0));

        let result = view.draw(&mut sensors, &mut frame);
        assert_eq!(result, Err(RenderError::UnknownProperty("temperature")));
        assert_eq!(frame, MatrixFrame::new(), "no cell painted before the read");
    }

    #[test]
    fn test_full_screen_setup_is_a_no_op() {
        let mut sensors = FakeSensors::new();
        let mut view = FullScreenView::new(ScalarKind::Temperature, calculator(-40.0, 40.0));
        View::<FakeSensors, MatrixFrame>::setup(&mut view, &mut sensors);
        assert_eq!(sensors.imu, None);
    }

    #[test]
    fn test_axis_view_paints_three_independent_bands() {
        let mut sensors = FakeSensors::new();
        sensors.orientation = Orientation { roll: 360.0, pitch: 180.0, yaw: 0.0 };
        let mut frame = MatrixFrame::new();
        let mut view = AxisView::new(
            ImuConfig::default(),
            [calculator(0.0, 360.0), calculator(0.0, 360.0), calculator(0.0, 360.0)],
        );

        view.draw(&mut sensors, &mut frame).unwrap();

        let bands = [
            Rgb888::new(255, 0, 0), // roll at ceiling
            Rgb888::new(0, 0, 0),   // pitch at midpoint
            Rgb888::new(0, 0, 255), // yaw at floor
        ];
        for (band, expected) in bands.into_iter().enumerate() {
            for index in band_cells(band) {
                assert_eq!(frame.cell(index), expected, "band {band}, cell {index}");
            }
        }
        for index in STATUS_ORIGIN..GRID_CELLS {
            assert_eq!(frame.cell(index), BLACK, "status cell {index} must stay untouched");
        }
    }

    #[test]
    fn test_axis_setup_applies_stored_imu_config() {
        // Gyro-only activation powers down compass and accelerometer fusion.
        let mut sensors = FakeSensors::new();
        let gyro_only = ImuConfig::new(false, true, false);
        let mut view = AxisView::new(
            gyro_only,
            [calculator(0.0, 360.0), calculator(0.0, 360.0), calculator(0.0, 360.0)],
        );

        View::<FakeSensors, MatrixFrame>::setup(&mut view, &mut sensors);
        assert_eq!(sensors.imu, Some(gyro_only));
    }
}
