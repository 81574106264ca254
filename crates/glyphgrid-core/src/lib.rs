//! Core grid geometry for glyph puzzle games.
//!
//! This crate provides the data structures and pure transforms shared by the
//! glyph and command-line crates: a row-major [`Grid`] container, the
//! [`Rotation`] and [`Orientation`] symmetry types, and simple grid metrics.
//!
//! # Overview
//!
//! 1. **Containers**
//!    - [`grid`]: [`Grid`], a generic row-major container. Rows are expected to
//!      have equal length, but this is assumed rather than enforced.
//!    - [`cell`]: the [`Cell`] trait deciding whether a cell value is occupied.
//!
//! 2. **Symmetry**
//!    - [`rotation`]: quarter-turn rotations (0°, 90°, 180°, 270° clockwise).
//!    - [`orientation`]: a rotation optionally followed by a horizontal mirror.
//!    - [`transform`]: the rotate and flip primitives all of the above build on.
//!
//! 3. **Measurement and parsing**
//!    - [`metrics`]: occupied cell count and bounding area.
//!    - [`text`]: a compact text notation for grids (`#` occupied, `.` empty).
//!
//! # Examples
//!
//! ```
//! use glyphgrid_core::{Grid, Rotation, metrics};
//!
//! let l_piece: Grid<u8> = "
//!     #.
//!     #.
//!     ###
//! "
//! .parse()?;
//!
//! let turned = l_piece.rotated(Rotation::R90);
//! assert_eq!(turned, Grid::from([[1, 1, 1], [1, 0, 0]]));
//!
//! assert_eq!(metrics::blocks_in_grid(&turned), 4);
//! assert_eq!(metrics::area_in_grid(&turned), 6);
//! # Ok::<(), glyphgrid_core::ParseGridError>(())
//! ```

pub mod cell;
pub mod grid;
pub mod metrics;
pub mod orientation;
pub mod rotation;
pub mod text;
pub mod transform;

// Re-export commonly used types
pub use self::{
    cell::Cell, grid::Grid, orientation::Orientation, rotation::Rotation, text::ParseGridError,
};
