use std::{collections::HashSet, hash::Hash};

/// Marks each key that has not been seen earlier in the sequence.
pub(crate) fn first_occurrences<K, I>(keys: I) -> Vec<bool>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    keys.into_iter().map(|key| seen.insert(key)).collect()
}

/// Keeps the items whose mask entry is `true`, preserving order.
pub(crate) fn retain_marked<T>(items: Vec<T>, mask: &[bool]) -> Vec<T> {
    debug_assert_eq!(items.len(), mask.len());
    items
        .into_iter()
        .zip(mask)
        .filter_map(|(item, &keep)| keep.then_some(item))
        .collect()
}
