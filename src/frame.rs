//! In-memory 8x8 frame buffer.
//!
//! A plain [`DrawTarget`] over a flat 64-cell array. Render tests assert on
//! its cells, and headless callers can use it where the simulator window or
//! a hardware driver would otherwise sit.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb888;

use crate::color::BLACK;
use crate::grid::{GRID_CELLS, GRID_WIDTH};

/// 8x8 frame of [`Rgb888`] cells, row-major, all black at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixFrame {
    cells: [Rgb888; GRID_CELLS],
}

impl MatrixFrame {
    pub const fn new() -> Self {
        Self { cells: [BLACK; GRID_CELLS] }
    }

    /// Color of the cell at a linear index. Panics past the 64-cell grid.
    pub const fn cell(&self, index: usize) -> Rgb888 {
        self.cells[index]
    }

    /// Color of the cell at grid coordinates. Panics outside the grid.
    pub const fn pixel(&self, x: usize, y: usize) -> Rgb888 {
        assert!(x < GRID_WIDTH && y < GRID_WIDTH);
        self.cells[y * GRID_WIDTH + x]
    }
}

impl Default for MatrixFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for MatrixFrame {
    fn size(&self) -> Size {
        Size::new(GRID_WIDTH as u32, GRID_WIDTH as u32)
    }
}

impl DrawTarget for MatrixFrame {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Out-of-bounds pixels are ignored, per the DrawTarget contract.
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
                && x < GRID_WIDTH
                && y < GRID_WIDTH
            {
                self.cells[y * GRID_WIDTH + x] = color;
            }
        }
        Ok(())
    }
}
