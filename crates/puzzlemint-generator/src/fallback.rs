//! Hardcoded fallback puzzles.
//!
//! When the assembler exhausts its attempt budget it substitutes one of
//! these small, pre-verified puzzles instead of failing the request.
//! Availability beats freshness in that rare pathological case. Each
//! fallback is trivially solvable and, where the family carries clues,
//! pinned to a single solution.

use std::collections::BTreeMap;

use puzzlemint_core::{
    Clue, Direction,
    descriptor::{
        CategoryInfo, CategoryRole, EntryPoint, EntryRole, FlowDescriptor, FlowPair,
        IdentityDescriptor, PathDescriptor, TopologyCell, TopologyDescriptor,
    },
};

use crate::identity::{ATTRIBUTE_CATEGORIES, IDENTITY_CATEGORY, clue_text};

/// A 3x3 serpentine with every traversal cell numbered; the numbering forces
/// the one solution step by step.
pub(crate) fn path_puzzle() -> PathDescriptor {
    let order = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 1),
        (1, 0),
        (2, 0),
        (2, 1),
        (2, 2),
    ];
    let numbers: BTreeMap<String, u32> = order
        .iter()
        .zip(1_u32..)
        .map(|(&(row, col), number)| (format!("{col},{row}"), number))
        .collect();
    PathDescriptor {
        width: 3,
        height: 3,
        numbers,
        walls: Vec::new(),
    }
}

/// A 3x3 board with a single straight run down the middle column.
pub(crate) fn topology_puzzle() -> TopologyDescriptor {
    let solution_cells = (0..3)
        .flat_map(|r| {
            (0..3).map(move |c| {
                let active = c == 1;
                TopologyCell {
                    r,
                    c,
                    connections: if active { 0b101 } else { 0 },
                    is_prefill: false,
                    is_blocked: false,
                    is_active: active,
                }
            })
        })
        .collect();
    TopologyDescriptor {
        width: 3,
        height: 3,
        entry_points: vec![
            EntryPoint {
                r: 0,
                c: 1,
                dir: Direction::North,
                role: EntryRole::Source,
            },
            EntryPoint {
                r: 2,
                c: 1,
                dir: Direction::South,
                role: EntryRole::Sink,
            },
        ],
        solution_cells,
    }
}

/// A 2x2 board split into two vertical dominoes.
pub(crate) fn flow_puzzle() -> FlowDescriptor {
    FlowDescriptor {
        width: 2,
        height: 2,
        pairs: vec![
            FlowPair {
                id: 1,
                ends: ["0,0".to_owned(), "0,1".to_owned()],
                cells: vec!["0,0".to_owned(), "0,1".to_owned()],
            },
            FlowPair {
                id: 2,
                ends: ["1,0".to_owned(), "1,1".to_owned()],
                cells: vec!["1,0".to_owned(), "1,1".to_owned()],
            },
        ],
    }
}

/// A size-3 identity puzzle with two attribute categories; pinning the first
/// two rows of each category forces the third, so four clues suffice.
pub(crate) fn identity_puzzle() -> IdentityDescriptor {
    let size = 3;
    let chosen = [&ATTRIBUTE_CATEGORIES[0], &ATTRIBUTE_CATEGORIES[1]];
    let clues = vec![
        Clue::IdentityEquals {
            row: 0,
            category: 0,
            value: 0,
        },
        Clue::IdentityEquals {
            row: 1,
            category: 0,
            value: 1,
        },
        Clue::IdentityEquals {
            row: 0,
            category: 1,
            value: 0,
        },
        Clue::IdentityEquals {
            row: 1,
            category: 1,
            value: 1,
        },
    ];
    let clue_texts = clues.iter().map(|clue| clue_text(*clue, &chosen)).collect();

    let categories = vec![
        CategoryInfo {
            category: IDENTITY_CATEGORY.name.to_owned(),
            role: CategoryRole::Identity,
            values: IDENTITY_CATEGORY.values[..size]
                .iter()
                .map(|&v| v.to_owned())
                .collect(),
        },
        CategoryInfo {
            category: chosen[0].name.to_owned(),
            role: CategoryRole::Attribute,
            values: chosen[0].values[..size].iter().map(|&v| v.to_owned()).collect(),
        },
        CategoryInfo {
            category: chosen[1].name.to_owned(),
            role: CategoryRole::Attribute,
            values: chosen[1].values[..size].iter().map(|&v| v.to_owned()).collect(),
        },
    ];
    let solution: BTreeMap<String, Vec<usize>> = [
        (IDENTITY_CATEGORY.name.to_owned(), vec![0, 1, 2]),
        (chosen[0].name.to_owned(), vec![0, 1, 2]),
        (chosen[1].name.to_owned(), vec![0, 1, 2]),
    ]
    .into();

    IdentityDescriptor {
        size,
        identity_category: IDENTITY_CATEGORY.name.to_owned(),
        categories,
        solution,
        clues,
        clue_texts,
    }
}

#[cfg(test)]
mod tests {
    use puzzlemint_core::{Grid, Pos, WallSet};
    use puzzlemint_solver::{SolutionCount, count_identity_solutions, count_path_solutions};

    use super::*;

    #[test]
    fn test_path_fallback_is_uniquely_solvable() {
        let descriptor = path_puzzle();
        let grid = Grid::new(descriptor.width, descriptor.height);
        let walls = WallSet::new(descriptor.width, descriptor.height);
        let mut numbers = vec![None; grid.len()];
        for (key, &number) in &descriptor.numbers {
            let (x, y) = key.split_once(',').unwrap();
            let pos = Pos::new(y.parse().unwrap(), x.parse().unwrap());
            numbers[grid.index(pos)] = Some(number);
        }
        assert_eq!(
            count_path_solutions(&grid, &walls, &numbers),
            SolutionCount::One
        );
    }

    #[test]
    fn test_identity_fallback_is_uniquely_solvable() {
        let descriptor = identity_puzzle();
        assert_eq!(
            count_identity_solutions(descriptor.size, 2, &descriptor.clues),
            SolutionCount::One
        );
        assert_eq!(descriptor.clues.len(), descriptor.clue_texts.len());
    }

    #[test]
    fn test_topology_fallback_masks_are_consistent() {
        let descriptor = topology_puzzle();
        assert_eq!(descriptor.solution_cells.len(), 9);
        for cell in &descriptor.solution_cells {
            if cell.is_active {
                assert_eq!(cell.connections, 0b101);
            } else {
                assert_eq!(cell.connections, 0);
            }
        }
        assert_eq!(descriptor.entry_points.len(), 2);
    }

    #[test]
    fn test_flow_fallback_covers_grid() {
        let descriptor = flow_puzzle();
        let total: usize = descriptor.pairs.iter().map(|p| p.cells.len()).sum();
        assert_eq!(total, descriptor.width * descriptor.height);
    }
}
