//! Rotation and mirror variants of shapes.
//!
//! Two expansions are provided:
//!
//! - [`any_rotations`] flattens every variant of every shape into one list
//!   and drops repeats, answering "which shapes can appear on the board?"
//! - [`all_rotations`] keeps the shapes together, producing one group per
//!   orientation with the shapes in input order, so a multi-shape glyph turns
//!   as a unit.

use std::{hash::Hash, iter};

use glyphgrid_core::{Grid, Orientation, Rotation};

use crate::unique::{first_occurrences, retain_marked};

/// Returns every distinct rotation (and optionally mirror) of `matrices`.
///
/// Variants are generated shape by shape: rotations `0°, 90°, 180°, 270°`,
/// each directly followed by its mirror when `include_mirrors` is set.
/// Repeated variants are dropped, keeping the first.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Grid;
/// use glyphgrid_glyph::any_rotations;
///
/// let t = Grid::from([[1, 1, 1], [0, 1, 0]]);
/// assert_eq!(any_rotations(&[t.clone()], false).len(), 4);
/// // T is its own mirror image.
/// assert_eq!(any_rotations(&[t], true).len(), 4);
///
/// let square = Grid::from([[1, 1], [1, 1]]);
/// assert_eq!(any_rotations(&[square.clone()], true), [square]);
/// ```
#[must_use]
pub fn any_rotations<T>(matrices: &[Grid<T>], include_mirrors: bool) -> Vec<Grid<T>>
where
    T: Clone + Eq + Hash,
{
    let variants: Vec<Grid<T>> = matrices
        .iter()
        .flat_map(|matrix| {
            Rotation::ALL.into_iter().flat_map(move |rotation| {
                let rotated = matrix.rotated(rotation);
                let mirrored = include_mirrors.then(|| rotated.flipped_horizontal());
                iter::once(rotated).chain(mirrored)
            })
        })
        .collect();
    let keep = first_occurrences(&variants);
    let generated = variants.len();
    let unique = retain_marked(variants, &keep);
    log::debug!(
        "expanded {} shape(s) into {} distinct variant(s) ({generated} generated)",
        matrices.len(),
        unique.len(),
    );
    unique
}

/// Returns one group per orientation, each holding every shape of
/// `matrices` in that orientation.
///
/// Groups come in rotation order `0°, 90°, 180°, 270°`. With
/// `include_mirrors`, each rotation group is directly followed by a group of
/// its mirrors, giving eight groups instead of four. Every group is aligned
/// with `matrices`. Nothing is deduplicated.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Grid;
/// use glyphgrid_glyph::all_rotations;
///
/// let a = Grid::from([[1, 2]]);
/// let b = Grid::from([[3, 4]]);
///
/// let groups = all_rotations(&[a, b], true);
/// assert_eq!(groups.len(), 8);
/// assert_eq!(groups[2], [Grid::from([[1], [2]]), Grid::from([[3], [4]])]);
/// assert_eq!(groups[1], [Grid::from([[2, 1]]), Grid::from([[4, 3]])]);
/// ```
#[must_use]
pub fn all_rotations<T: Clone>(matrices: &[Grid<T>], include_mirrors: bool) -> Vec<Vec<Grid<T>>> {
    orientation_groups(matrices, include_mirrors)
        .into_iter()
        .map(|(_, group)| group)
        .collect()
}

/// Like [`all_rotations`], with each group tagged by its [`Orientation`].
///
/// # Examples
///
/// ```
/// use glyphgrid_core::{Grid, Orientation, Rotation};
/// use glyphgrid_glyph::orientation_groups;
///
/// let groups = orientation_groups(&[Grid::from([[1, 2], [3, 4]])], true);
/// assert_eq!(groups[3].0, Orientation::new(Rotation::R90, true));
/// assert_eq!(groups[3].1, [Grid::from([[1, 3], [2, 4]])]);
/// ```
#[must_use]
pub fn orientation_groups<T: Clone>(
    matrices: &[Grid<T>],
    include_mirrors: bool,
) -> Vec<(Orientation, Vec<Grid<T>>)> {
    let mut groups = Vec::with_capacity(if include_mirrors { 8 } else { 4 });
    for rotation in Rotation::ALL {
        let rotated: Vec<Grid<T>> = matrices.iter().map(|m| m.rotated(rotation)).collect();
        let mirrored: Option<Vec<Grid<T>>> =
            include_mirrors.then(|| rotated.iter().map(Grid::flipped_horizontal).collect());
        groups.push((Orientation::new(rotation, false), rotated));
        if let Some(mirrored) = mirrored {
            groups.push((Orientation::new(rotation, true), mirrored));
        }
    }
    groups
}
