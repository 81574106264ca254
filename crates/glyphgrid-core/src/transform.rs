//! Rotate and mirror primitives.
//!
//! Every transform builds a new [`Grid`]; the input is never modified.
//!
//! A single clockwise quarter turn maps an `H×W` grid to a `W×H` grid with
//! `new[x][H - 1 - y] = old[y][x]`. Rotating by [`Rotation::R0`] returns a
//! copy of the input.
//!
//! Input grids are assumed rectangular, and the coordinate mapping above
//! only holds for rectangular input. For ragged input, a quarter turn takes
//! its width from the first row and drops cells past that width. Cells
//! missing from shorter rows leave no hole: the remaining cells of each
//! output row close up, so they no longer sit at `new[x][H - 1 - y]` and the
//! result may itself be ragged. An empty grid, or one whose first row is
//! empty, rotates to an empty grid.
//!
//! # Examples
//!
//! ```
//! use glyphgrid_core::{Grid, Rotation, transform};
//!
//! let grid = Grid::from([[1, 2, 3], [4, 5, 6]]);
//!
//! assert_eq!(
//!     transform::rotate(&grid, Rotation::R90),
//!     Grid::from([[4, 1], [5, 2], [6, 3]])
//! );
//! assert_eq!(
//!     transform::flip_horizontal(&grid),
//!     Grid::from([[3, 2, 1], [6, 5, 4]])
//! );
//! ```

use crate::{Grid, Orientation, Rotation};

/// Rotates `grid` clockwise by `rotation`.
#[must_use]
pub fn rotate<T: Clone>(grid: &Grid<T>, rotation: Rotation) -> Grid<T> {
    (0..rotation.quarter_turns()).fold(grid.clone(), |acc, _| rotate_quarter(&acc))
}

/// Rotates `grid` clockwise by a single quarter turn.
#[must_use]
pub fn rotate_quarter<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let rows = grid.rows();
    (0..grid.width())
        .map(|x| {
            rows.iter()
                .rev()
                .filter_map(|row| row.get(x).cloned())
                .collect()
        })
        .collect()
}

/// Mirrors `grid` left to right by reversing every row.
#[must_use]
pub fn flip_horizontal<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    grid.rows()
        .iter()
        .map(|row| row.iter().rev().cloned().collect())
        .collect()
}

impl<T: Clone> Grid<T> {
    /// Returns a copy rotated clockwise by `rotation`.
    ///
    /// See [`transform::rotate`](rotate).
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        rotate(self, rotation)
    }

    /// Returns a copy rotated clockwise by one quarter turn.
    #[must_use]
    pub fn rotated_quarter(&self) -> Self {
        rotate_quarter(self)
    }

    /// Returns a copy mirrored left to right.
    #[must_use]
    pub fn flipped_horizontal(&self) -> Self {
        flip_horizontal(self)
    }

    /// Returns a copy transformed by `orientation`.
    ///
    /// See [`Orientation::apply`].
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        orientation.apply(self)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn rectangular_grid() -> impl Strategy<Value = Grid<u8>> {
        (1_usize..6, 0_usize..6)
            .prop_flat_map(|(width, height)| {
                prop::collection::vec(prop::collection::vec(0_u8..4, width), height)
            })
            .prop_map(Grid::from_rows)
    }

    #[test]
    fn test_rotate_zero_is_copy() {
        let grid = Grid::from([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(rotate(&grid, Rotation::R0), grid);
    }

    #[test]
    fn test_rotate_clockwise() {
        // 1 2 3      4 1
        // 4 5 6  ->  5 2
        //            6 3
        let grid = Grid::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(
            rotate(&grid, Rotation::R90),
            Grid::from([[4, 1], [5, 2], [6, 3]])
        );
        assert_eq!(rotate(&grid, Rotation::R180), Grid::from([[6, 5, 4], [3, 2, 1]]));
        assert_eq!(
            rotate(&grid, Rotation::R270),
            Grid::from([[3, 6], [2, 5], [1, 4]])
        );
    }

    #[test]
    fn test_rotate_follows_coordinate_mapping() {
        let grid = Grid::from([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]]);
        let height = grid.height();
        let rotated = grid.rotated_quarter();
        assert_eq!(rotated.height(), grid.width());
        assert_eq!(rotated.width(), height);
        for y in 0..height {
            for x in 0..grid.width() {
                assert_eq!(rotated[x][height - 1 - y], grid[y][x]);
            }
        }
    }

    #[test]
    fn test_flip_horizontal() {
        let grid = Grid::from([[1, 0, 0], [1, 1, 0]]);
        assert_eq!(grid.flipped_horizontal(), Grid::from([[0, 0, 1], [0, 1, 1]]));
    }

    #[test]
    fn test_empty_grids_stay_empty() {
        let empty = Grid::<u8>::new();
        for rotation in Rotation::ALL {
            assert_eq!(empty.rotated(rotation), empty);
        }
        assert_eq!(empty.flipped_horizontal(), empty);

        let no_columns = Grid::<u8>::from_rows(vec![vec![], vec![]]);
        assert_eq!(no_columns.rotated(Rotation::R90), empty);
        assert_eq!(no_columns.flipped_horizontal(), no_columns);
    }

    #[test]
    fn test_ragged_rows_use_first_row_width() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3], vec![4, 5, 6]]);
        let rotated = grid.rotated_quarter();
        assert_eq!(rotated, Grid::from_rows(vec![vec![4, 3, 1], vec![5, 2]]));

        // The missing cell of row 1 closes up, so `2` lands at [1][1]
        // instead of [1][2].
        assert_eq!(rotated.get(1, 1), Some(&2));
        assert_eq!(rotated.get(1, 2), None);
    }

    #[test]
    fn test_input_is_not_modified() {
        let grid = Grid::from([[1, 2], [3, 4]]);
        let before = grid.clone();
        let _ = grid.rotated(Rotation::R270);
        let _ = grid.flipped_horizontal();
        assert_eq!(grid, before);
    }

    proptest! {
        #[test]
        fn test_four_quarter_turns_is_identity(grid in rectangular_grid()) {
            let turned = (0..4).fold(grid.clone(), |acc, _| acc.rotated_quarter());
            prop_assert_eq!(turned, grid);
        }

        #[test]
        fn test_two_half_turns_is_identity(grid in rectangular_grid()) {
            let turned = grid.rotated(Rotation::R180).rotated(Rotation::R180);
            prop_assert_eq!(turned, grid);
        }

        #[test]
        fn test_rotations_compose(grid in rectangular_grid(), a in 0_u8..4, b in 0_u8..4) {
            let a = Rotation::from_quarter_turns(a);
            let b = Rotation::from_quarter_turns(b);
            prop_assert_eq!(grid.rotated(a).rotated(b), grid.rotated(a.then(b)));
        }

        #[test]
        fn test_flip_twice_is_identity(grid in rectangular_grid()) {
            prop_assert_eq!(grid.flipped_horizontal().flipped_horizontal(), grid);
        }

        #[test]
        fn test_rotation_swaps_dimensions(grid in rectangular_grid()) {
            prop_assume!(!grid.is_empty());
            let rotated = grid.rotated_quarter();
            prop_assert_eq!(rotated.height(), grid.width());
            prop_assert_eq!(rotated.width(), grid.height());
        }
    }
}
