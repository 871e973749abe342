//! View cycling state machine and loop driver.
//!
//! The [`ViewCycler`] owns an ordered, fixed list of views and the index of
//! the active one. Stick presses to the left or right move the index
//! circularly; the bottom status row mirrors it with a single white cell at
//! `STATUS_ORIGIN + index`.
//!
//! # Loop Shape
//!
//! Each iteration is strictly sequential, on one thread:
//!
//! 1. drain all pending stick events, in arrival order
//! 2. apply each transition synchronously (status repaint + `setup`)
//! 3. render exactly one frame via the active view
//!
//! The event poll never blocks, so the display refreshes every iteration
//! whether or not anything was pressed.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::{Drawable, Pixel};

use crate::color::{BLACK, WHITE};
use crate::error::{ConfigError, RenderError};
use crate::grid::{STATUS_CELLS, STATUS_ORIGIN, cell_point};
use crate::input::{StickAction, StickDirection, StickEvent};
use crate::sensors::SensorSource;
use crate::views::View;

/// Owns the views and drives input handling and rendering.
pub struct ViewCycler<S, D>
where
    S: SensorSource,
    D: DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    views: Vec<Box<dyn View<S, D>>>,
    current: usize,
}

impl<S, D> ViewCycler<S, D>
where
    S: SensorSource,
    D: DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    /// Take ownership of the view list. The list is fixed from here on.
    ///
    /// Fails when the list is empty or holds more views than the status
    /// region has indicator cells.
    pub fn new(views: Vec<Box<dyn View<S, D>>>) -> Result<Self, ConfigError> {
        if views.is_empty() {
            return Err(ConfigError::NoViews);
        }
        if views.len() > STATUS_CELLS {
            return Err(ConfigError::TooManyViews { count: views.len() });
        }
        Ok(Self { views, current: 0 })
    }

    /// Index of the active view.
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        // The constructor rejects empty lists; kept for the len/is_empty pair.
        self.views.is_empty()
    }

    /// Activate view 0: clear the grid, run its `setup`, light its status
    /// cell. Everything else is black by convention of the cleared display.
    pub fn start(&mut self, sensors: &mut S, display: &mut D) -> Result<(), RenderError<D::Error>> {
        display.clear(BLACK).map_err(RenderError::Display)?;
        self.current = 0;
        self.views[0].setup(sensors);
        self.paint_status(display, 0, WHITE)?;
        tracing::info!(views = self.views.len(), "view cycler started");
        Ok(())
    }

    /// Apply one stick event to the state machine.
    ///
    /// Only `Pressed` + `Left`/`Right` transitions; anything else is a
    /// no-op. A transition repaints the two affected status cells and runs
    /// `setup` on the newly active view before its first draw. A self-wrap
    /// (single registered view) changes nothing and repaints nothing.
    pub fn handle_event(
        &mut self,
        event: StickEvent,
        sensors: &mut S,
        display: &mut D,
    ) -> Result<(), RenderError<D::Error>> {
        if event.action != StickAction::Pressed {
            return Ok(());
        }
        let step = match event.direction {
            StickDirection::Left => self.views.len() - 1,
            StickDirection::Right => 1,
            StickDirection::Up | StickDirection::Down | StickDirection::Enter => return Ok(()),
        };

        let next = (self.current + step) % self.views.len();
        if next == self.current {
            return Ok(());
        }

        self.paint_status(display, self.current, BLACK)?;
        self.paint_status(display, next, WHITE)?;
        tracing::debug!(from = self.current, to = next, "view switch");
        self.current = next;
        self.views[self.current].setup(sensors);
        Ok(())
    }

    /// One loop iteration: drain pending events in arrival order, then
    /// render one frame via the active view.
    pub fn tick(&mut self, sensors: &mut S, display: &mut D) -> Result<(), RenderError<D::Error>> {
        while let Some(event) = sensors.poll_event() {
            self.handle_event(event, sensors, display)?;
        }
        self.views[self.current].draw(sensors, display)
    }

    /// Start, then tick until `after_frame` reports the host is done (the
    /// simulator window closed, for instance). Render errors propagate out
    /// unchanged; there is no retry path.
    pub fn run<F>(&mut self, sensors: &mut S, display: &mut D, mut after_frame: F) -> Result<(), RenderError<D::Error>>
    where
        F: FnMut(&mut S, &mut D) -> bool,
    {
        self.start(sensors, display)?;
        loop {
            self.tick(sensors, display)?;
            if !after_frame(sensors, display) {
                return Ok(());
            }
        }
    }

    /// Status indicator cell for a view index.
    fn paint_status(&self, display: &mut D, index: usize, color: Rgb888) -> Result<(), RenderError<D::Error>> {
        Pixel(cell_point(STATUS_ORIGIN + index), color)
            .draw(display)
            .map_err(RenderError::Display)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
