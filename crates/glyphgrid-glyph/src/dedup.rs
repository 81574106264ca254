//! Glyph deduplication.
//!
//! Two glyphs are duplicates when their [`CanonicalKey`]s are equal, that is
//! when their alternatives match up to reordering. Only the first glyph of
//! each key is kept and the survivors stay in input order.
//!
//! [`CanonicalKey`]: crate::CanonicalKey

use std::hash::Hash;

use crate::{
    GlyphData,
    unique::{first_occurrences, retain_marked},
};

/// Returns the first glyph of every distinct alternative set, in input order.
///
/// The kept glyphs are cloned; use [`dedup_glyphs`] to avoid the copies when
/// the input is no longer needed.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Grid;
/// use glyphgrid_glyph::{GlyphData, remove_duplicate_glyphs};
///
/// let a = vec![Grid::from([[1, 1]])];
/// let b = vec![Grid::from([[1], [1]])];
///
/// let glyphs = [
///     GlyphData::new("first", vec![a.clone(), b.clone()]),
///     GlyphData::new("second", vec![b, a]),
/// ];
///
/// let unique = remove_duplicate_glyphs(&glyphs);
/// assert_eq!(unique, [glyphs[0].clone()]);
/// ```
#[must_use]
pub fn remove_duplicate_glyphs<T>(glyphs: &[GlyphData<T>]) -> Vec<GlyphData<T>>
where
    T: Clone + Ord + Hash,
{
    let keep = first_occurrences(glyphs.iter().map(GlyphData::canonical_key));
    let unique: Vec<_> = glyphs
        .iter()
        .zip(&keep)
        .filter_map(|(glyph, &first)| first.then(|| glyph.clone()))
        .collect();
    log_removed(glyphs.len(), unique.len());
    unique
}

/// Removes duplicate glyphs from an owned list, keeping first occurrences.
///
/// Behaves like [`remove_duplicate_glyphs`] without cloning.
#[must_use]
pub fn dedup_glyphs<T>(glyphs: Vec<GlyphData<T>>) -> Vec<GlyphData<T>>
where
    T: Ord + Hash,
{
    let keep = first_occurrences(glyphs.iter().map(GlyphData::canonical_key));
    let total = glyphs.len();
    let unique = retain_marked(glyphs, &keep);
    log_removed(total, unique.len());
    unique
}

fn log_removed(total: usize, kept: usize) {
    log::debug!(
        "glyph dedup: kept {kept} of {total}, removed {}",
        total - kept
    );
}

#[cfg(test)]
mod tests {
    use glyphgrid_core::Grid;
    use proptest::prelude::*;

    use super::*;
    use crate::CanonicalKey;

    fn shape(id: i32) -> Vec<Grid<i32>> {
        vec![Grid::from([[id]])]
    }

    fn names<T>(glyphs: &[GlyphData<T>]) -> Vec<&str> {
        glyphs.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn test_reversed_alternatives_are_duplicates() {
        let glyphs = [
            GlyphData::new("ab", vec![shape(1), shape(2)]),
            GlyphData::new("ba", vec![shape(2), shape(1)]),
        ];
        assert_eq!(names(&remove_duplicate_glyphs(&glyphs)), ["ab"]);
    }

    #[test]
    fn test_keeps_first_occurrence_order() {
        let glyphs = vec![
            GlyphData::new("x", vec![shape(1)]),
            GlyphData::new("y", vec![shape(2)]),
            GlyphData::new("x again", vec![shape(1)]),
            GlyphData::new("z", vec![shape(3), shape(1)]),
            GlyphData::new("y again", vec![shape(2)]),
            GlyphData::new("z again", vec![shape(1), shape(3)]),
        ];
        assert_eq!(names(&remove_duplicate_glyphs(&glyphs)), ["x", "y", "z"]);
        assert_eq!(names(&dedup_glyphs(glyphs)), ["x", "y", "z"]);
    }

    #[test]
    fn test_name_is_ignored() {
        let glyphs = [
            GlyphData::new("same", vec![shape(1)]),
            GlyphData::new("same", vec![shape(2)]),
        ];
        assert_eq!(remove_duplicate_glyphs(&glyphs).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(remove_duplicate_glyphs::<i32>(&[]).is_empty());
        assert!(dedup_glyphs::<i32>(Vec::new()).is_empty());
    }

    #[test]
    fn test_rotated_shape_glyphs_are_duplicates() {
        let s = Grid::from([[0, 1, 1], [1, 1, 0]]);
        let glyphs = [
            GlyphData::with_orientations("S", &[s.clone()], false),
            GlyphData::with_orientations("S turned", &[s.rotated_quarter()], false),
            GlyphData::with_orientations("Z", &[s.flipped_horizontal()], false),
        ];
        assert_eq!(names(&remove_duplicate_glyphs(&glyphs)), ["S", "Z"]);
    }

    fn glyph_set() -> impl Strategy<Value = Vec<GlyphData<u8>>> {
        let alternative = prop::collection::vec(
            prop::collection::vec(prop::collection::vec(0_u8..2, 1..3), 1..3)
                .prop_map(Grid::from_rows),
            1..3,
        );
        prop::collection::vec(prop::collection::vec(alternative, 0..4), 0..8).prop_map(
            |sets| {
                sets.into_iter()
                    .enumerate()
                    .map(|(i, glyphs)| GlyphData::new(format!("g{i}"), glyphs))
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn test_one_representative_per_key(glyphs in glyph_set()) {
            let unique = remove_duplicate_glyphs(&glyphs);
            prop_assert!(unique.len() <= glyphs.len());

            let input_keys: std::collections::HashSet<_> =
                glyphs.iter().map(GlyphData::canonical_key).collect();
            let output_keys: Vec<CanonicalKey<'_, u8>> =
                unique.iter().map(GlyphData::canonical_key).collect();
            prop_assert_eq!(output_keys.len(), input_keys.len());
            for key in &output_keys {
                prop_assert!(input_keys.contains(key));
            }
        }

        #[test]
        fn test_owned_and_borrowed_agree(glyphs in glyph_set()) {
            prop_assert_eq!(remove_duplicate_glyphs(&glyphs), dedup_glyphs(glyphs.clone()));
        }

        #[test]
        fn test_shuffled_alternatives_are_removed(glyphs in glyph_set()) {
            let mut doubled = glyphs.clone();
            doubled.extend(glyphs.iter().map(|glyph| {
                let mut reversed = glyph.clone();
                reversed.glyphs.reverse();
                reversed
            }));
            prop_assert_eq!(
                remove_duplicate_glyphs(&doubled),
                remove_duplicate_glyphs(&glyphs)
            );
        }
    }
}
