//! Row-major grid container.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use serde::{Deserialize, Serialize};

/// A two-dimensional grid of cells, stored as a list of rows.
///
/// `Grid` is used both for board regions and for glyph shapes. Rows are
/// expected to share one length, but this is not validated: operations that
/// need a width (such as [`width`] and the rotation primitives) take it from
/// the first row.
///
/// Equality, ordering and hashing are structural, so two grids compare equal
/// exactly when they have the same rows with the same cells.
///
/// Serializes as a plain nested array, e.g. `[[0,1],[1,1]]`.
///
/// [`width`]: Grid::width
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Grid;
///
/// let grid = Grid::from([[0, 1, 0], [1, 1, 1]]);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.get(1, 2), Some(&1));
/// assert_eq!(grid.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// Creates a grid with no rows.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a grid from its rows, top to bottom.
    ///
    /// The rows are taken as-is; no rectangularity check is performed.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// Returns the rows of the grid, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Consumes the grid and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of the first row, or `0` if the grid has no rows.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if every row has the same length as the first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphgrid_core::Grid;
    ///
    /// assert!(Grid::from([[1, 0], [0, 1]]).is_rectangular());
    /// assert!(!Grid::from_rows(vec![vec![1, 0], vec![1]]).is_rectangular());
    /// assert!(Grid::<u8>::new().is_rectangular());
    /// ```
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Returns the cell at row `y`, column `x`, if present.
    #[must_use]
    pub fn get(&self, y: usize, x: usize) -> Option<&T> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Returns an iterator over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flatten()
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    fn index(&self, y: usize) -> &Self::Output {
        &self.rows[y]
    }
}

impl<T> From<Vec<Vec<T>>> for Grid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T, const W: usize, const H: usize> From<[[T; W]; H]> for Grid<T> {
    fn from(rows: [[T; W]; H]) -> Self {
        rows.into_iter().map(Vec::from).collect()
    }
}

impl<T> FromIterator<Vec<T>> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

impl<T: Display> Display for Grid<T> {
    /// Formats one row per line with cells separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                Display::fmt(cell, f)?;
            }
        }
        Ok(())
    }
}
