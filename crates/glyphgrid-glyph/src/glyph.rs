//! Glyph data.

use glyphgrid_core::Grid;
use serde::{Deserialize, Serialize};

use crate::{CanonicalKey, all_rotations};

/// One way a glyph may appear: its shapes, each in a fixed orientation.
pub type Alternative<T> = Vec<Grid<T>>;

/// A named puzzle piece and its alternative orientations.
///
/// The name is carried for the caller and plays no part in deduplication.
///
/// Serializes as `{"name": "...", "glyphs": [[[[0, 1], ...], ...], ...]}`.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Grid;
/// use glyphgrid_glyph::GlyphData;
///
/// let bar = Grid::from([[1, 1, 1]]);
/// let glyph = GlyphData::with_orientations("bar", &[bar], false);
///
/// assert_eq!(glyph.glyphs.len(), 4);
/// assert_eq!(glyph.glyphs[1], vec![Grid::from([[1], [1], [1]])]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphData<T = i32> {
    /// Identifier of the glyph.
    pub name: String,
    /// Alternative orientations, each a list of shapes.
    pub glyphs: Vec<Alternative<T>>,
}

impl<T> GlyphData<T> {
    /// Creates a glyph from its name and alternatives.
    #[must_use]
    pub fn new(name: impl Into<String>, glyphs: Vec<Alternative<T>>) -> Self {
        Self {
            name: name.into(),
            glyphs,
        }
    }

    /// Returns the key identifying this glyph's alternatives regardless of
    /// their order.
    #[must_use]
    pub fn canonical_key(&self) -> CanonicalKey<'_, T>
    where
        T: Ord,
    {
        CanonicalKey::new(&self.glyphs)
    }
}

impl<T: Clone> GlyphData<T> {
    /// Creates a glyph whose alternatives are every rotation of `shapes`.
    ///
    /// The alternatives are the groups produced by [`all_rotations`], so a
    /// glyph with `include_mirrors` has eight alternatives and four without.
    #[must_use]
    pub fn with_orientations(
        name: impl Into<String>,
        shapes: &[Grid<T>],
        include_mirrors: bool,
    ) -> Self {
        Self::new(name, all_rotations(shapes, include_mirrors))
    }
}
