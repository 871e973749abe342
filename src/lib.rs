// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->u8 casts after rounding in color math
#![allow(clippy::cast_possible_wrap)] // usize->i32 for pixel coordinates on an 8x8 grid

//! Environmental sensor dashboard for an 8x8 RGB LED matrix.
//!
//! The dashboard samples environmental sensors (temperature, pressure,
//! humidity, orientation), maps each reading onto a red/blue color ramp, and
//! paints it onto the matrix. A four-way stick cycles between views:
//!
//! - Full-screen views: one sensor, one color across the whole main region
//! - Axis view: roll / pitch / yaw as three independent horizontal bands
//!
//! The bottom status row marks the active view with a single white pixel.
//!
//! # Screen Layout
//!
//! ```text
//! ┌─────────────────┐
//! │                 │
//! │   MAIN REGION   │  6 rows (48 cells) — painted by the active view
//! │                 │
//! ├─────────────────┤
//! │   STATUS ROWS   │  2 rows (16 cells) — view indicator, never painted
//! └─────────────────┘       by views
//! ```
//!
//! # Architecture
//!
//! The core is hardware-agnostic: the display side is any
//! [`embedded_graphics::draw_target::DrawTarget`] with `Rgb888` color, the
//! sensor side is the [`sensors::SensorSource`] capability trait. The
//! [`cycler::ViewCycler`] owns the views and drives the loop:
//! drain stick events, apply transitions, render one frame.
//!
//! The `simulator` feature adds a demo binary that runs the cycler against
//! an SDL window with synthetic sensor signals (arrow keys act as the
//! stick).

pub mod color;
pub mod config;
pub mod cycler;
pub mod demo;
pub mod error;
pub mod frame;
pub mod grid;
pub mod input;
pub mod sensors;
pub mod views;

pub use color::{BLACK, ColorCalculator, WHITE};
pub use cycler::ViewCycler;
pub use demo::DemoSensors;
pub use error::{ConfigError, RenderError};
pub use frame::MatrixFrame;
pub use input::{StickAction, StickDirection, StickEvent};
pub use sensors::{ImuConfig, Orientation, ScalarKind, SensorSource};
pub use views::{AxisView, FullScreenView, View};
