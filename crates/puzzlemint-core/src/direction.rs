//! Cardinal directions and the 4-bit connection mask.
//!
//! Topology puzzles describe each cell by the subset of its four sides that
//! carry a connection. The mask is stored clockwise from north so that the
//! player-facing "rotate cell" operation is a cyclic shift of the four bits.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// The four cardinal directions, in clockwise order starting at north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward the previous row.
    North,
    /// Toward the next column.
    East,
    /// Toward the next row.
    South,
    /// Toward the previous column.
    West,
}

impl Direction {
    /// All directions in clockwise order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns the `(row, column)` offset of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    /// Returns the connection-mask bit for this direction.
    #[must_use]
    pub const fn mask(self) -> ConnectionMask {
        match self {
            Self::North => ConnectionMask::NORTH,
            Self::East => ConnectionMask::EAST,
            Self::South => ConnectionMask::SOUTH,
            Self::West => ConnectionMask::WEST,
        }
    }
}

bitflags! {
    /// Which of a cell's four sides carry a connection.
    ///
    /// Bits are laid out clockwise (north, east, south, west) so that a
    /// clockwise rotation of the cell is a cyclic shift of the low four bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConnectionMask: u8 {
        /// Connection toward the previous row.
        const NORTH = 1;
        /// Connection toward the next column.
        const EAST = 2;
        /// Connection toward the next row.
        const SOUTH = 4;
        /// Connection toward the previous column.
        const WEST = 8;
    }
}

impl ConnectionMask {
    /// Returns this mask rotated clockwise by `steps` quarter turns.
    ///
    /// Steps are taken modulo 4; an empty mask rotates to itself, and four
    /// rotations always return the original mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlemint_core::ConnectionMask;
    ///
    /// let elbow = ConnectionMask::NORTH | ConnectionMask::EAST;
    /// assert_eq!(elbow.rotated(1), ConnectionMask::EAST | ConnectionMask::SOUTH);
    /// assert_eq!(elbow.rotated(4), elbow);
    /// ```
    #[must_use]
    pub const fn rotated(self, steps: u32) -> Self {
        let steps = steps % 4;
        let bits = self.bits();
        Self::from_bits_truncate(((bits << steps) | (bits >> (4 - steps))) & 0xF)
    }

    /// Returns `true` if the mask connects toward `dir`.
    #[must_use]
    pub const fn connects(self, dir: Direction) -> bool {
        self.bits() & dir.mask().bits() != 0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_opposites_pair_up() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_rotation_steps_wrap() {
        let mask = ConnectionMask::NORTH | ConnectionMask::SOUTH;
        assert_eq!(mask.rotated(0), mask);
        assert_eq!(mask.rotated(1), ConnectionMask::EAST | ConnectionMask::WEST);
        assert_eq!(mask.rotated(2), mask);
        assert_eq!(mask.rotated(5), mask.rotated(1));
    }

    #[test]
    fn test_empty_mask_rotates_to_itself() {
        for steps in 0..8 {
            assert_eq!(ConnectionMask::empty().rotated(steps), ConnectionMask::empty());
        }
    }

    #[test]
    fn test_rotation_follows_clockwise_order() {
        assert_eq!(ConnectionMask::NORTH.rotated(1), ConnectionMask::EAST);
        assert_eq!(ConnectionMask::EAST.rotated(1), ConnectionMask::SOUTH);
        assert_eq!(ConnectionMask::SOUTH.rotated(1), ConnectionMask::WEST);
        assert_eq!(ConnectionMask::WEST.rotated(1), ConnectionMask::NORTH);
    }

    proptest! {
        #[test]
        fn prop_four_rotations_are_identity(bits in 0u8..16) {
            let mask = ConnectionMask::from_bits_truncate(bits);
            prop_assert_eq!(mask.rotated(4), mask);
        }

        #[test]
        fn prop_rotation_preserves_connection_count(bits in 0u8..16, steps in 0u32..16) {
            let mask = ConnectionMask::from_bits_truncate(bits);
            prop_assert_eq!(mask.rotated(steps).bits().count_ones(), bits.count_ones());
        }
    }
}
