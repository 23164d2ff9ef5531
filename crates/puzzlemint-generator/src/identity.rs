//! Generation of identity-matching puzzles.
//!
//! The solved structure needs no search: every non-identity category gets a
//! uniform random permutation mapping identity rows to value indices. Clue
//! selection then builds the full pool of derivable facts, shuffles it once,
//! and greedily accepts candidates — consulting the uniqueness validator
//! after each tentative addition — until exactly one assignment survives.

use std::collections::BTreeMap;

use rand::seq::SliceRandom as _;

use puzzlemint_core::{
    Clue,
    descriptor::{CategoryInfo, CategoryRole, IdentityDescriptor},
};
use puzzlemint_solver::{SolutionCount, count_identity_solutions};

use crate::{error::AttemptError, seed::Mulberry32};

/// Budget of clue-insertion attempts; sized above the largest candidate pool
/// so selection can walk the whole pool when it has to.
const MAX_CLUE_ATTEMPTS: usize = 96;

/// A named category and its value labels.
pub(crate) struct Category {
    pub(crate) name: &'static str,
    pub(crate) values: [&'static str; 4],
}

/// The anchor category whose values index the puzzle rows.
pub(crate) const IDENTITY_CATEGORY: Category = Category {
    name: "name",
    values: ["Alice", "Bruno", "Carla", "Dmitri"],
};

/// Attribute categories the generator draws from.
pub(crate) const ATTRIBUTE_CATEGORIES: [Category; 4] = [
    Category {
        name: "beverage",
        values: ["coffee", "tea", "cocoa", "juice"],
    },
    Category {
        name: "pet",
        values: ["cat", "dog", "fish", "parrot"],
    },
    Category {
        name: "color",
        values: ["red", "blue", "green", "yellow"],
    },
    Category {
        name: "hobby",
        values: ["chess", "cycling", "painting", "baking"],
    },
];

/// Parameters for the identity family, drawn once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityParams {
    /// Number of rows, and of values per category.
    pub size: usize,
    /// Number of non-identity categories.
    pub category_count: usize,
}

/// Runs one seeded generation attempt for the identity family.
///
/// # Errors
///
/// Returns [`AttemptError::UniquenessNotReached`] when the selection loop
/// exhausts its candidates or its insertion budget before the validator
/// reports a unique assignment.
///
/// # Panics
///
/// Panics unless `2 <= size <= 4` and `2 <= category_count <= 3`.
pub fn generate_identity_attempt(
    params: IdentityParams,
    rng: &mut Mulberry32,
) -> Result<IdentityDescriptor, AttemptError> {
    let size = params.size;
    let k = params.category_count;
    assert!((2..=4).contains(&size), "identity size out of range");
    assert!((2..=3).contains(&k), "category count out of range");

    let mut order: Vec<usize> = (0..ATTRIBUTE_CATEGORIES.len()).collect();
    order.shuffle(rng);
    let chosen: Vec<&Category> = order[..k].iter().map(|&i| &ATTRIBUTE_CATEGORIES[i]).collect();

    // Permutation assignment: the identity category is implicitly the
    // identity permutation; every attribute category draws its own.
    let mut solution: Vec<Vec<usize>> = Vec::with_capacity(k);
    for _ in 0..k {
        let mut perm: Vec<usize> = (0..size).collect();
        perm.shuffle(rng);
        solution.push(perm);
    }

    let mut pool = candidate_pool(size, &solution);
    pool.shuffle(rng);

    let mut accepted: Vec<Clue> = Vec::new();
    let mut attempts = 0;
    let mut unique = false;
    while let Some(clue) = pool.pop() {
        attempts += 1;
        if attempts > MAX_CLUE_ATTEMPTS {
            break;
        }
        accepted.push(clue);
        match count_identity_solutions(size, k, &accepted) {
            // The pool only holds facts true of the solution, so a zero
            // count should not happen; discard the clue and carry on.
            SolutionCount::Zero => {
                accepted.pop();
            }
            SolutionCount::One => {
                unique = true;
                break;
            }
            SolutionCount::Many => {}
        }
    }
    if !unique {
        return Err(AttemptError::UniquenessNotReached);
    }

    let clue_texts = accepted
        .iter()
        .map(|clue| clue_text(*clue, &chosen))
        .collect();

    let mut categories = vec![CategoryInfo {
        category: IDENTITY_CATEGORY.name.to_owned(),
        role: CategoryRole::Identity,
        values: labels(&IDENTITY_CATEGORY, size),
    }];
    categories.extend(chosen.iter().map(|category| CategoryInfo {
        category: category.name.to_owned(),
        role: CategoryRole::Attribute,
        values: labels(category, size),
    }));

    let mut solution_map: BTreeMap<String, Vec<usize>> =
        [(IDENTITY_CATEGORY.name.to_owned(), (0..size).collect())].into();
    for (category, perm) in chosen.iter().zip(&solution) {
        solution_map.insert(category.name.to_owned(), perm.clone());
    }

    Ok(IdentityDescriptor {
        size,
        identity_category: IDENTITY_CATEGORY.name.to_owned(),
        categories,
        solution: solution_map,
        clues: accepted,
        clue_texts,
    })
}

/// Every fact derivable from the solved assignment: all positive and
/// negative identity facts plus every cross-category co-occurrence.
fn candidate_pool(size: usize, solution: &[Vec<usize>]) -> Vec<Clue> {
    let mut pool = Vec::new();
    for (category, perm) in solution.iter().enumerate() {
        for row in 0..size {
            for value in 0..size {
                pool.push(if perm[row] == value {
                    Clue::IdentityEquals {
                        row,
                        category,
                        value,
                    }
                } else {
                    Clue::IdentityNotEquals {
                        row,
                        category,
                        value,
                    }
                });
            }
        }
    }
    for a in 0..solution.len() {
        for b in a + 1..solution.len() {
            for row in 0..size {
                pool.push(Clue::CrossCategoryLink {
                    category_a: a,
                    value_a: solution[a][row],
                    category_b: b,
                    value_b: solution[b][row],
                });
            }
        }
    }
    pool
}

fn labels(category: &Category, size: usize) -> Vec<String> {
    category.values[..size]
        .iter()
        .map(|&label| label.to_owned())
        .collect()
}

/// Renders one clue as a player-facing sentence.
pub(crate) fn clue_text(clue: Clue, categories: &[&Category]) -> String {
    match clue {
        Clue::IdentityEquals {
            row,
            category,
            value,
        } => format!(
            "{}'s {} is {}.",
            IDENTITY_CATEGORY.values[row],
            categories[category].name,
            categories[category].values[value]
        ),
        Clue::IdentityNotEquals {
            row,
            category,
            value,
        } => format!(
            "{}'s {} is not {}.",
            IDENTITY_CATEGORY.values[row],
            categories[category].name,
            categories[category].values[value]
        ),
        Clue::CrossCategoryLink {
            category_a,
            value_a,
            category_b,
            value_b,
        } => format!(
            "The {} {} goes with the {} {}.",
            categories[category_a].name,
            categories[category_a].values[value_a],
            categories[category_b].name,
            categories[category_b].values[value_b]
        ),
        Clue::PositionValue { cell, value } => {
            format!("Cell {cell} carries the number {value}.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(params: IdentityParams, seed: u32) -> IdentityDescriptor {
        let mut rng = Mulberry32::new(seed);
        generate_identity_attempt(params, &mut rng)
            .expect("identity generation reaches uniqueness within its pool")
    }

    #[test]
    fn test_three_by_three_reaches_uniqueness() {
        // The (3!)^2 = 36 assignment space must collapse to exactly one.
        let descriptor = attempt(
            IdentityParams {
                size: 3,
                category_count: 2,
            },
            41,
        );
        assert_eq!(
            count_identity_solutions(3, 2, &descriptor.clues),
            SolutionCount::One
        );
    }

    #[test]
    fn test_clues_stay_within_identity_kinds() {
        let descriptor = attempt(
            IdentityParams {
                size: 3,
                category_count: 2,
            },
            42,
        );
        assert!(!descriptor.clues.is_empty());
        assert!(descriptor.clues.iter().all(|clue| clue.is_identity_clue()));
    }

    #[test]
    fn test_solution_holds_valid_permutations() {
        let descriptor = attempt(
            IdentityParams {
                size: 4,
                category_count: 3,
            },
            43,
        );
        assert_eq!(descriptor.solution.len(), 4); // identity + 3 attributes
        for perm in descriptor.solution.values() {
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..4).collect::<Vec<_>>());
        }
        assert_eq!(descriptor.solution["name"], vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_accepted_clues_hold_for_the_solution() {
        let descriptor = attempt(
            IdentityParams {
                size: 3,
                category_count: 2,
            },
            44,
        );
        let perms: Vec<&Vec<usize>> = descriptor.categories[1..]
            .iter()
            .map(|info| &descriptor.solution[&info.category])
            .collect();
        for clue in &descriptor.clues {
            match *clue {
                Clue::IdentityEquals {
                    row,
                    category,
                    value,
                } => assert_eq!(perms[category][row], value),
                Clue::IdentityNotEquals {
                    row,
                    category,
                    value,
                } => assert_ne!(perms[category][row], value),
                Clue::CrossCategoryLink {
                    category_a,
                    value_a,
                    category_b,
                    value_b,
                } => assert!((0..descriptor.size).any(|row| {
                    perms[category_a][row] == value_a && perms[category_b][row] == value_b
                })),
                Clue::PositionValue { .. } => panic!("path clue in identity puzzle"),
            }
        }
    }

    #[test]
    fn test_clue_texts_align_with_clues() {
        let descriptor = attempt(
            IdentityParams {
                size: 3,
                category_count: 2,
            },
            45,
        );
        assert_eq!(descriptor.clues.len(), descriptor.clue_texts.len());
        assert!(descriptor.clue_texts.iter().all(|text| text.ends_with('.')));
    }

    #[test]
    fn test_categories_identity_first() {
        let descriptor = attempt(
            IdentityParams {
                size: 3,
                category_count: 3,
            },
            46,
        );
        assert_eq!(descriptor.categories.len(), 4);
        assert_eq!(descriptor.categories[0].role, CategoryRole::Identity);
        assert_eq!(descriptor.categories[0].category, "name");
        for info in &descriptor.categories[1..] {
            assert_eq!(info.role, CategoryRole::Attribute);
            assert_eq!(info.values.len(), 3);
        }
    }

    #[test]
    fn test_attempt_is_deterministic() {
        let params = IdentityParams {
            size: 3,
            category_count: 2,
        };
        let mut a = Mulberry32::new(47);
        let mut b = Mulberry32::new(47);
        assert_eq!(
            generate_identity_attempt(params, &mut a),
            generate_identity_attempt(params, &mut b)
        );
    }
}
