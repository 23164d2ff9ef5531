//! Permutation-enumeration counting for identity-matching puzzles.
//!
//! With k non-identity categories of `size` values each, the full assignment
//! space is the Cartesian product of all value permutations per category,
//! `(size!)^k` in total. Sizes stay at 4 or below, so the whole space is
//! enumerated directly and counting stops at the cap of two.

use itertools::Itertools as _;

use puzzlemint_core::Clue;

use crate::solution_count::SolutionCount;

/// Counts full identity assignments satisfying every clue, up to two.
///
/// Clue category indices address the non-identity categories `0..category_count`;
/// rows and values are indices below `size`.
#[must_use]
pub fn count_identity_solutions(
    size: usize,
    category_count: usize,
    clues: &[Clue],
) -> SolutionCount {
    debug_assert!((1..=4).contains(&size), "identity size out of range");
    debug_assert!(
        (1..=3).contains(&category_count),
        "category count out of range"
    );

    let perms: Vec<Vec<usize>> = (0..size).permutations(size).collect();
    let mut count = 0_u32;
    for assignment in (0..category_count)
        .map(|_| perms.iter())
        .multi_cartesian_product()
    {
        if clues.iter().all(|clue| satisfies(&assignment, clue)) {
            count += 1;
            if count >= SolutionCount::CAP {
                return SolutionCount::Many;
            }
        }
    }
    SolutionCount::from_count(count)
}

fn satisfies(assignment: &[&Vec<usize>], clue: &Clue) -> bool {
    match *clue {
        Clue::IdentityEquals {
            row,
            category,
            value,
        } => assignment[category][row] == value,
        Clue::IdentityNotEquals {
            row,
            category,
            value,
        } => assignment[category][row] != value,
        Clue::CrossCategoryLink {
            category_a,
            value_a,
            category_b,
            value_b,
        } => {
            let size = assignment[category_a].len();
            (0..size).any(|row| {
                assignment[category_a][row] == value_a && assignment[category_b][row] == value_b
            })
        }
        // A path-family clue places no constraint on identity assignments.
        Clue::PositionValue { .. } => true,
    }
}
