//! The closed clue type revealed to players.
//!
//! Clues are modeled as a tagged union rather than loosely-typed records so
//! that the validator and the clue-text renderer can match exhaustively.
//! A clue is immutable once accepted into a puzzle.

use serde::{Deserialize, Serialize};

/// A player-visible fact about a solved puzzle.
///
/// Identity clues index categories by their position among the puzzle's
/// non-identity categories and values by their position in that category's
/// value list; rows are indices into the identity category's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Clue {
    /// A path position carries a specific sequential waypoint number.
    #[serde(rename_all = "camelCase")]
    PositionValue {
        /// Flat cell index of the numbered cell.
        cell: usize,
        /// The waypoint number shown on the cell.
        value: u32,
    },
    /// An identity row maps to a category value.
    #[serde(rename_all = "camelCase")]
    IdentityEquals {
        /// Identity row index.
        row: usize,
        /// Non-identity category index.
        category: usize,
        /// Value index within the category.
        value: usize,
    },
    /// An identity row does not map to a category value.
    #[serde(rename_all = "camelCase")]
    IdentityNotEquals {
        /// Identity row index.
        row: usize,
        /// Non-identity category index.
        category: usize,
        /// Value index within the category.
        value: usize,
    },
    /// Two category values co-occur on the same identity row.
    #[serde(rename_all = "camelCase")]
    CrossCategoryLink {
        /// First non-identity category index.
        category_a: usize,
        /// Value index within the first category.
        value_a: usize,
        /// Second non-identity category index.
        category_b: usize,
        /// Value index within the second category.
        value_b: usize,
    },
}

impl Clue {
    /// Returns `true` for the identity-puzzle clue kinds.
    #[must_use]
    pub const fn is_identity_clue(self) -> bool {
        matches!(
            self,
            Self::IdentityEquals { .. }
                | Self::IdentityNotEquals { .. }
                | Self::CrossCategoryLink { .. }
        )
    }
}
