//! Cell addressing on the 8x8 matrix.
//!
//! Cells are numbered 0..64 row-major from the top-left corner. The first
//! six rows form the main region painted by views; the last two rows are
//! reserved for the status indicator.

use core::ops::Range;

use embedded_graphics::prelude::Point;

/// Matrix width and height in pixels.
pub const GRID_WIDTH: usize = 8;

/// Total cell count.
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_WIDTH;

/// Cells available to views (six full rows).
pub const MAIN_CELLS: usize = 48;

/// First cell of the reserved status region.
pub const STATUS_ORIGIN: usize = MAIN_CELLS;

/// Size of the reserved status region (two full rows).
pub const STATUS_CELLS: usize = GRID_CELLS - MAIN_CELLS;

/// Cells per horizontal band in the axis view (two rows each).
pub const BAND_CELLS: usize = 16;

/// Number of axis bands in the main region.
pub const BAND_COUNT: usize = MAIN_CELLS / BAND_CELLS;

/// Map a linear cell index to grid coordinates.
///
/// Total for any index; callers keep indices within [`GRID_CELLS`].
pub const fn cell_point(index: usize) -> Point {
    Point::new((index % GRID_WIDTH) as i32, (index / GRID_WIDTH) as i32)
}

/// Cell range covered by one axis band: `[0,16)`, `[16,32)`, `[32,48)`.
pub const fn band_cells(band: usize) -> Range<usize> {
    band * BAND_CELLS..(band + 1) * BAND_CELLS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cell_point_first_row() {
        assert_eq!(cell_point(0), Point::new(0, 0));
        assert_eq!(cell_point(7), Point::new(7, 0));
    }

    #[test]
    fn test_cell_point_wraps_to_next_row() {
        assert_eq!(cell_point(8), Point::new(0, 1));
        assert_eq!(cell_point(63), Point::new(7, 7));
    }

    #[test]
    fn test_status_region_starts_on_row_six() {
        assert_eq!(cell_point(STATUS_ORIGIN), Point::new(0, 6));
        assert_eq!(STATUS_CELLS, 16, "status region should span two rows");
    }

    #[test]
    fn test_band_ranges_tile_the_main_region() {
        assert_eq!(band_cells(0), 0..16);
        assert_eq!(band_cells(1), 16..32);
        assert_eq!(band_cells(2), 32..48);
        assert_eq!(band_cells(BAND_COUNT - 1).end, MAIN_CELLS);
    }
}
