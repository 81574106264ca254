//! Grid measurements.
//!
//! # Examples
//!
//! ```
//! use glyphgrid_core::{Grid, metrics};
//!
//! let grid = Grid::from([[0, 1], [2, 0]]);
//! assert_eq!(metrics::blocks_in_grid(&grid), 2);
//! assert_eq!(metrics::area_in_grid(&grid), 4);
//! ```

use crate::{Cell, Grid};

/// Counts the occupied cells over every row of `grid`.
#[must_use]
pub fn blocks_in_grid<T: Cell>(grid: &Grid<T>) -> usize {
    grid.cells().filter(|cell| cell.is_occupied()).count()
}

/// Returns the area of the grid's bounding rectangle.
///
/// This is the row count times the length of the first row. Only the first
/// row's width is used, so a ragged grid reports the area it would have if
/// every row matched the first.
#[must_use]
pub fn area_in_grid<T>(grid: &Grid<T>) -> usize {
    grid.height() * grid.width()
}

impl<T: Cell> Grid<T> {
    /// Returns the number of occupied cells.
    ///
    /// See [`blocks_in_grid`].
    #[must_use]
    pub fn block_count(&self) -> usize {
        blocks_in_grid(self)
    }
}

impl<T> Grid<T> {
    /// Returns the bounding area, `height * width`.
    ///
    /// See [`area_in_grid`].
    #[must_use]
    pub fn area(&self) -> usize {
        area_in_grid(self)
    }
}
