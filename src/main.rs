//! Simulator binary for the 8x8 environmental matrix dashboard.
//!
//! Runs the view cycler against an SDL window with synthetic sensor
//! signals. The window shows the matrix scaled up with gaps between
//! pixels for an LED-panel look.
//!
//! # Controls
//!
//! | Key | Stick equivalent | Action |
//! |-----|------------------|--------|
//! | ←   | left press       | previous view |
//! | →   | right press      | next view |
//! | ↑ ↓ | up/down press    | (no-op for the cycler) |
//! | ⏎   | stick click      | (no-op for the cycler) |
//!
//! Closing the window terminates the loop; that is the only exit path.
//!
//! # Views (in cycle order)
//!
//! 1. Temperature, full screen, −40..40 °C
//! 2. Pressure, full screen, 950..1050 mbar
//! 3. Humidity, full screen, 0..100 %, reversed polarity (humid air
//!    should not glow alarm-red)
//! 4. Orientation, three bands (roll/pitch/yaw, 0..360°), gyro and
//!    accelerometer fusion only

use std::thread;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use enviro_matrix_dashboard::config::FRAME_TIME;
use enviro_matrix_dashboard::grid::GRID_WIDTH;
use enviro_matrix_dashboard::{
    AxisView,
    ColorCalculator,
    ConfigError,
    DemoSensors,
    FullScreenView,
    ImuConfig,
    ScalarKind,
    StickAction,
    StickDirection,
    StickEvent,
    View,
    ViewCycler,
};

type DemoView = Box<dyn View<DemoSensors, SimulatorDisplay<Rgb888>>>;

/// Concrete views with concrete ranges. The only place wiring lives.
fn build_views() -> Result<Vec<DemoView>, ConfigError> {
    Ok(vec![
        Box::new(FullScreenView::new(
            ScalarKind::Temperature,
            ColorCalculator::new(-40.0, 40.0, false)?,
        )),
        Box::new(FullScreenView::new(
            ScalarKind::Pressure,
            ColorCalculator::new(950.0, 1050.0, false)?,
        )),
        Box::new(FullScreenView::new(
            ScalarKind::Humidity,
            ColorCalculator::new(0.0, 100.0, true)?,
        )),
        Box::new(AxisView::new(
            ImuConfig::new(false, true, true),
            [
                ColorCalculator::new(0.0, 360.0, false)?,
                ColorCalculator::new(0.0, 360.0, false)?,
                ColorCalculator::new(0.0, 360.0, false)?,
            ],
        )),
    ])
}

/// Map an arrow/enter key to a stick direction.
fn stick_direction(keycode: Keycode) -> Option<StickDirection> {
    match keycode {
        Keycode::Left => Some(StickDirection::Left),
        Keycode::Right => Some(StickDirection::Right),
        Keycode::Up => Some(StickDirection::Up),
        Keycode::Down => Some(StickDirection::Down),
        Keycode::Return => Some(StickDirection::Enter),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut cycler = ViewCycler::new(build_views()?)?;
    let mut sensors = DemoSensors::new();

    let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(GRID_WIDTH as u32, GRID_WIDTH as u32));
    let output_settings = OutputSettingsBuilder::new().scale(40).pixel_spacing(6).build();
    let mut window = Window::new("Enviro Matrix Dashboard", &output_settings);

    cycler.run(&mut sensors, &mut display, |sensors, display| {
        window.update(display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return false,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // OS key repeat maps to a held stick, not repeated presses.
                    let action = if repeat { StickAction::Held } else { StickAction::Pressed };
                    if let Some(direction) = stick_direction(keycode) {
                        sensors.inject(StickEvent::new(action, direction));
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(direction) = stick_direction(keycode) {
                        sensors.inject(StickEvent::new(StickAction::Released, direction));
                    }
                }
                _ => {}
            }
        }

        sensors.advance();
        thread::sleep(FRAME_TIME);
        true
    })?;

    Ok(())
}
