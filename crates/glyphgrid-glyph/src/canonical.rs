//! Order-independent glyph keys.

use glyphgrid_core::Grid;

/// A glyph's alternatives in sorted order, borrowed from the glyph.
///
/// Two glyphs have equal keys exactly when their alternative lists hold the
/// same alternatives the same number of times, in any order. Alternatives
/// are compared structurally, shape by shape.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Grid;
/// use glyphgrid_glyph::CanonicalKey;
///
/// let a = vec![Grid::from([[1, 1]])];
/// let b = vec![Grid::from([[1], [1]])];
///
/// let forward = [a.clone(), b.clone()];
/// let backward = [b, a];
/// assert_eq!(CanonicalKey::new(&forward), CanonicalKey::new(&backward));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey<'a, T> {
    alternatives: Vec<&'a [Grid<T>]>,
}

impl<'a, T: Ord> CanonicalKey<'a, T> {
    /// Builds the key for a list of alternatives.
    #[must_use]
    pub fn new(alternatives: &'a [Vec<Grid<T>>]) -> Self {
        let mut alternatives: Vec<&'a [Grid<T>]> =
            alternatives.iter().map(Vec::as_slice).collect();
        alternatives.sort_unstable();
        Self { alternatives }
    }
}

impl<'a, T> CanonicalKey<'a, T> {
    /// Returns the alternatives in canonical order.
    #[must_use]
    pub fn alternatives(&self) -> &[&'a [Grid<T>]] {
        &self.alternatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt(rows: &[&[i32]]) -> Vec<Grid<i32>> {
        vec![rows.iter().map(|row| row.to_vec()).collect()]
    }

    #[test]
    fn test_key_ignores_alternative_order() {
        let a = alt(&[&[1, 0], &[1, 1]]);
        let b = alt(&[&[1, 1], &[0, 1]]);
        let c = alt(&[&[0, 1], &[1, 1]]);

        let first = [a.clone(), b.clone(), c.clone()];
        let second = [c, a, b];
        assert_eq!(CanonicalKey::new(&first), CanonicalKey::new(&second));
    }

    #[test]
    fn test_key_is_sorted() {
        let a = alt(&[&[0]]);
        let b = alt(&[&[1]]);
        let alternatives = [b.clone(), a.clone()];
        let key = CanonicalKey::new(&alternatives);
        assert_eq!(key.alternatives(), &[a.as_slice(), b.as_slice()]);
    }

    #[test]
    fn test_key_counts_repeated_alternatives() {
        let a = alt(&[&[1]]);
        let b = alt(&[&[2]]);
        let once = [a.clone(), b.clone()];
        let twice = [a.clone(), a, b];
        assert_ne!(CanonicalKey::new(&once), CanonicalKey::new(&twice));
    }

    #[test]
    fn test_shape_order_within_alternative_matters() {
        let x = Grid::from([[1]]);
        let y = Grid::from([[2]]);
        let first = [vec![x.clone(), y.clone()]];
        let second = [vec![y, x]];
        assert_ne!(CanonicalKey::new(&first), CanonicalKey::new(&second));
    }

    #[test]
    fn test_empty_alternatives() {
        let none: [Vec<Grid<i32>>; 0] = [];
        let empty_alternative = [Vec::new()];
        assert_ne!(
            CanonicalKey::new(&none),
            CanonicalKey::new(&empty_alternative)
        );
        assert!(CanonicalKey::new(&none).alternatives().is_empty());
    }
}
