//! Uniqueness validation for puzzlemint puzzles.
//!
//! The solver answers one question for a partially-revealed puzzle: does it
//! have zero, exactly one, or more than one solution? Counting always stops
//! at two, so callers only ever see the three-way [`SolutionCount`]
//! classification.
//!
//! Two enumeration strategies cover the puzzle families that carry clues:
//!
//! - [`count_path_solutions`] runs an exhaustive grid-fill search for
//!   numbered-path puzzles, with an iteration budget that is treated
//!   conservatively: an exhausted budget reports [`SolutionCount::Many`]
//!   rather than risking a false uniqueness claim.
//! - [`count_identity_solutions`] enumerates the full Cartesian product of
//!   category permutations for identity-matching puzzles, tractable because
//!   puzzle sizes stay at 4 or below.

pub use self::{
    identity_count::count_identity_solutions, path_count::count_path_solutions,
    solution_count::SolutionCount,
};

mod identity_count;
mod path_count;
mod solution_count;
