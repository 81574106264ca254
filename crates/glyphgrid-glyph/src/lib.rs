//! Glyph sets and their orientation variants.
//!
//! A glyph is a named puzzle piece made of one or more shapes. Each glyph
//! carries a list of *alternatives*: the ways the piece may appear on the
//! board, each alternative being the piece's shapes in one orientation.
//!
//! This crate provides:
//!
//! - [`GlyphData`] and its order-independent [`CanonicalKey`]
//! - [`remove_duplicate_glyphs`] and [`dedup_glyphs`] to drop glyphs whose
//!   alternatives coincide with an earlier glyph's
//! - [`any_rotations`] and [`all_rotations`] to expand shapes into their
//!   rotated and mirrored variants
//!
//! # Examples
//!
//! ```
//! use glyphgrid_core::Grid;
//! use glyphgrid_glyph::{GlyphData, remove_duplicate_glyphs};
//!
//! let l = Grid::from([[1, 0], [1, 0], [1, 1]]);
//! let j = l.flipped_horizontal();
//!
//! let glyphs = [
//!     GlyphData::with_orientations("L", &[l.clone()], true),
//!     GlyphData::with_orientations("J", &[j], true),
//!     GlyphData::with_orientations("L (rigid)", &[l], false),
//! ];
//!
//! // With mirrors allowed, L and J cover the same eight placements.
//! let unique = remove_duplicate_glyphs(&glyphs);
//! let names: Vec<_> = unique.iter().map(|g| g.name.as_str()).collect();
//! assert_eq!(names, ["L", "L (rigid)"]);
//! ```

pub mod canonical;
pub mod dedup;
pub mod glyph;
pub mod orientations;
mod unique;

pub use self::{
    canonical::CanonicalKey,
    dedup::{dedup_glyphs, remove_duplicate_glyphs},
    glyph::{Alternative, GlyphData},
    orientations::{all_rotations, any_rotations, orientation_groups},
};
