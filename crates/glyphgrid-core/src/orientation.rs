//! Rotations combined with an optional mirror.
//!
//! The eight orientations form the symmetry group of the square. They are
//! enumerated rotation-major, with each mirrored orientation directly after
//! its plain rotation, which is the order glyph variants are generated in.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Grid, Rotation};

/// A clockwise rotation, optionally followed by a horizontal mirror.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::{Grid, Orientation, Rotation};
///
/// let grid = Grid::from([[1, 2], [3, 4]]);
///
/// let orientation = Orientation::new(Rotation::R90, true);
/// // rotate:  3 1    then mirror:  1 3
/// //          4 2                  2 4
/// assert_eq!(orientation.apply(&grid), Grid::from([[1, 3], [2, 4]]));
///
/// let all: Vec<_> = Orientation::all(true).collect();
/// assert_eq!(all.len(), 8);
/// assert_eq!(all[1], Orientation::new(Rotation::R0, true));
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Orientation {
    /// Rotation applied first.
    pub rotation: Rotation,
    /// Whether the rotated grid is mirrored left to right.
    pub mirrored: bool,
}

impl Orientation {
    /// The orientation that leaves a grid unchanged.
    pub const IDENTITY: Self = Self::new(Rotation::R0, false);

    /// Creates an orientation.
    #[must_use]
    pub const fn new(rotation: Rotation, mirrored: bool) -> Self {
        Self { rotation, mirrored }
    }

    /// Returns the orientations in generation order.
    ///
    /// Yields `R0, R90, R180, R270`; when `include_mirrors` is set, each
    /// rotation is immediately followed by its mirrored counterpart.
    pub fn all(include_mirrors: bool) -> impl Iterator<Item = Self> + Clone {
        Rotation::ALL.into_iter().flat_map(move |rotation| {
            let mirrored = include_mirrors.then_some(Self::new(rotation, true));
            std::iter::once(Self::new(rotation, false)).chain(mirrored)
        })
    }

    /// Applies this orientation to `grid`, producing a new grid.
    #[must_use]
    pub fn apply<T: Clone>(self, grid: &Grid<T>) -> Grid<T> {
        let rotated = grid.rotated(self.rotation);
        if self.mirrored {
            rotated.flipped_horizontal()
        } else {
            rotated
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.rotation, f)?;
        if self.mirrored {
            f.write_str(" mirrored")?;
        }
        Ok(())
    }
}
