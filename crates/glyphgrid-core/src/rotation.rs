//! Quarter-turn rotations.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A clockwise rotation by a whole number of quarter turns.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Rotation;
///
/// assert_eq!(Rotation::R90.quarter_turns(), 1);
/// assert_eq!(Rotation::from_quarter_turns(5), Rotation::R90);
/// assert_eq!(Rotation::R90.then(Rotation::R270), Rotation::R0);
/// assert_eq!(Rotation::R90.inverse(), Rotation::R270);
/// assert_eq!(Rotation::R180.to_string(), "180°");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Rotation {
    /// No rotation.
    #[default]
    R0 = 0,
    /// One quarter turn clockwise.
    R90 = 1,
    /// Half turn.
    R180 = 2,
    /// Three quarter turns clockwise (one counter-clockwise).
    R270 = 3,
}

impl Rotation {
    /// All rotations in increasing order of quarter turns.
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Creates a rotation from a number of clockwise quarter turns.
    ///
    /// Any count is accepted and reduced modulo 4.
    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    /// Returns the number of clockwise quarter turns (0-3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// Returns the rotation angle in degrees (0, 90, 180 or 270).
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self as u16 * 90
    }

    /// Returns the rotation equivalent to applying `self` and then `next`.
    #[must_use]
    pub const fn then(self, next: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + next.quarter_turns())
    }

    /// Returns the rotation that undoes `self`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
