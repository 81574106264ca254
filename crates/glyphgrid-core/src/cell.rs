//! Cell occupancy.

/// A grid cell value that is either empty or occupied.
///
/// Integers treat `0` as empty and any other value as occupied, so marker
/// values such as glyph colors still count as blocks.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Cell;
///
/// assert!(!0_i32.is_occupied());
/// assert!(7_u8.is_occupied());
/// assert!((-1_i64).is_occupied());
/// assert!(true.is_occupied());
/// assert!(!None::<u8>.is_occupied());
/// ```
pub trait Cell {
    /// Returns `true` if the cell holds a block.
    fn is_occupied(&self) -> bool;
}

macro_rules! impl_cell_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cell for $ty {
                #[inline]
                fn is_occupied(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_cell_for_integers!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

impl Cell for bool {
    #[inline]
    fn is_occupied(&self) -> bool {
        *self
    }
}

impl<T> Cell for Option<T> {
    #[inline]
    fn is_occupied(&self) -> bool {
        self.is_some()
    }
}
