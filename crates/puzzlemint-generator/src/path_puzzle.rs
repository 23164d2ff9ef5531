//! Generation of numbered-path puzzles.
//!
//! One attempt: place walls, search for a Hamiltonian traversal, reveal a
//! structural set of waypoint numbers along it, and verify once that the
//! revealed numbers pin the traversal uniquely.

use std::collections::BTreeMap;

use rand::seq::SliceRandom as _;

use puzzlemint_core::{Grid, Path, descriptor::PathDescriptor};
use puzzlemint_solver::count_path_solutions;

use crate::{error::AttemptError, hamiltonian, seed::Mulberry32};

/// Parameters for the path family, drawn once per request and held stable
/// across attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParams {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// How many random walls to drop before the traversal search.
    pub wall_count: usize,
    /// How many waypoint numbers to reveal, endpoints included.
    pub clue_count: usize,
}

/// Runs one seeded generation attempt for the path family.
///
/// # Errors
///
/// Returns [`AttemptError::SearchExhausted`] when no traversal was found for
/// this wall/seed combination and [`AttemptError::UniquenessNotReached`] when
/// the revealed waypoints admit more than one traversal. Both are recovered
/// by the assembler's retry loop.
pub fn generate_path_attempt(
    params: PathParams,
    rng: &mut Mulberry32,
) -> Result<PathDescriptor, AttemptError> {
    let grid = Grid::new(params.width, params.height);
    let walls = hamiltonian::place_walls(&grid, params.wall_count, rng);
    let path = hamiltonian::find_traversal(&grid, &walls, rng)
        .ok_or(AttemptError::SearchExhausted)?;
    let waypoints = place_waypoints(&path, params.clue_count, rng);

    let mut numbers = vec![None; grid.len()];
    for &(cell, number) in &waypoints {
        numbers[cell] = Some(number);
    }
    if !count_path_solutions(&grid, &walls, &numbers).is_unique() {
        return Err(AttemptError::UniquenessNotReached);
    }

    let numbers: BTreeMap<String, u32> = waypoints
        .iter()
        .map(|&(cell, number)| (grid.pos(cell).to_string(), number))
        .collect();
    Ok(PathDescriptor {
        width: params.width,
        height: params.height,
        numbers,
        walls: walls.edge_ids(),
    })
}

/// Reveals `clue_count` waypoint numbers along the traversal: 1 on the first
/// cell, `clue_count` on the last, and the numbers between on a shuffled
/// choice of interior path positions, in path order.
///
/// Returns `(cell, number)` pairs ordered by path position.
///
/// # Panics
///
/// Panics unless `2 <= clue_count <= path.len()`.
#[expect(clippy::cast_possible_truncation)]
pub(crate) fn place_waypoints(
    path: &Path,
    clue_count: usize,
    rng: &mut Mulberry32,
) -> Vec<(usize, u32)> {
    assert!(
        clue_count >= 2 && clue_count <= path.len(),
        "clue count {clue_count} out of range for a {}-cell path",
        path.len()
    );
    let cells = path.cells();

    let mut interior: Vec<usize> = (1..cells.len() - 1).collect();
    interior.shuffle(rng);
    let mut chosen: Vec<usize> = interior.into_iter().take(clue_count - 2).collect();
    chosen.sort_unstable();

    let mut waypoints = vec![(cells[0], 1)];
    for (number, &position) in (2_u32..).zip(&chosen) {
        waypoints.push((cells[position], number));
    }
    waypoints.push((cells[cells.len() - 1], clue_count as u32));
    waypoints
}

#[cfg(test)]
mod tests {
    use puzzlemint_core::{Pos, Wall, WallSet};

    use super::*;
    use crate::seed::derive_seed;

    fn traversal(width: usize, height: usize, seed: u32) -> Path {
        let grid = Grid::new(width, height);
        let walls = WallSet::new(width, height);
        (0..32)
            .find_map(|offset| {
                let mut rng = Mulberry32::new(seed.wrapping_add(offset));
                hamiltonian::find_traversal(&grid, &walls, &mut rng)
            })
            .expect("open grid yields a traversal")
    }

    #[test]
    fn test_new_year_seed_waypoint_layout() {
        // 5x5 grid, clue count 4: waypoint 1 on the first path cell,
        // waypoint 4 on the last, exactly two interior waypoints between.
        let seed = derive_seed("2024-01-01");
        let path = traversal(5, 5, seed);
        let mut rng = Mulberry32::new(seed);
        let waypoints = place_waypoints(&path, 4, &mut rng);

        assert_eq!(waypoints.len(), 4);
        assert_eq!(waypoints[0], (path.first().unwrap(), 1));
        assert_eq!(waypoints[3], (path.last().unwrap(), 4));

        let cells = path.cells();
        let position = |cell: usize| cells.iter().position(|&c| c == cell).unwrap();
        let second = position(waypoints[1].0);
        let third = position(waypoints[2].0);
        assert_eq!(waypoints[1].1, 2);
        assert_eq!(waypoints[2].1, 3);
        assert!(0 < second && second < third && third < cells.len() - 1);
    }

    #[test]
    fn test_waypoint_numbers_increase_along_path() {
        let path = traversal(4, 4, 99);
        let mut rng = Mulberry32::new(99);
        let waypoints = place_waypoints(&path, 6, &mut rng);

        let cells = path.cells();
        let mut last_position = None;
        for (expected, &(cell, number)) in (1_u32..).zip(&waypoints) {
            assert_eq!(number, expected);
            let position = cells.iter().position(|&c| c == cell).unwrap();
            assert!(last_position < Some(position) || last_position.is_none());
            last_position = Some(position);
        }
    }

    #[test]
    fn test_full_reveal_pins_every_cell() {
        let path = traversal(3, 3, 7);
        let mut rng = Mulberry32::new(7);
        let waypoints = place_waypoints(&path, path.len(), &mut rng);
        assert_eq!(waypoints.len(), path.len());
        for (i, &(cell, number)) in waypoints.iter().enumerate() {
            assert_eq!(cell, path.cells()[i]);
            assert_eq!(number, u32::try_from(i).unwrap() + 1);
        }
    }

    #[test]
    fn test_accepted_attempt_is_unique_and_covering() {
        let params = PathParams {
            width: 4,
            height: 4,
            wall_count: 2,
            clue_count: 6,
        };
        let descriptor = (0..64)
            .find_map(|attempt| {
                let mut rng = Mulberry32::new(1000 + attempt);
                generate_path_attempt(params, &mut rng).ok()
            })
            .expect("an accepted attempt within the test seed range");

        assert_eq!(descriptor.numbers.len(), params.clue_count);
        assert!(descriptor.numbers.values().any(|&n| n == 1));
        let max = u32::try_from(params.clue_count).unwrap();
        assert!(descriptor.numbers.values().any(|&n| n == max));

        // Re-running the validator against the accepted clue set must still
        // report exactly one solution.
        let grid = Grid::new(params.width, params.height);
        let parse = |s: &str| {
            let (x, y) = s.split_once(',').unwrap();
            Pos::new(y.parse().unwrap(), x.parse().unwrap())
        };
        let mut walls = WallSet::new(params.width, params.height);
        for edge in &descriptor.walls {
            let (a, b) = edge.split_once('-').unwrap();
            walls.insert(Wall::new(parse(a), parse(b)));
        }
        let mut numbers = vec![None; grid.len()];
        for (key, &number) in &descriptor.numbers {
            numbers[grid.index(parse(key))] = Some(number);
        }
        assert!(count_path_solutions(&grid, &walls, &numbers).is_unique());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_rejects_single_clue() {
        let path = Path::from_cells(vec![0, 1, 2]);
        let mut rng = Mulberry32::new(1);
        let _ = place_waypoints(&path, 1, &mut rng);
    }
}
