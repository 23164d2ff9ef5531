//! Exhaustive solution counting for numbered-path puzzles.
//!
//! A solution is a Hamiltonian traversal of the grid's open cells that
//! respects the walls and visits the revealed waypoint numbers in order:
//! the traversal starts on waypoint 1, a numbered cell may only be entered
//! when it carries the exact next expected number, and the traversal must
//! terminate on the maximum waypoint.
//!
//! The search uses an explicit stack of `(cell, neighbor cursor)` frames
//! rather than call recursion, so stack depth is independent of grid size.

use log::debug;
use tinyvec::ArrayVec;

use puzzlemint_core::{Grid, WallSet};

use crate::solution_count::SolutionCount;

/// Step budget for one counting call. Exhausting it is reported as
/// [`SolutionCount::Many`] so an incomplete search can never claim
/// uniqueness; the bound doubles as the worst-case latency contract.
const MAX_COUNT_STEPS: usize = 250_000;

/// One backtracking frame: a path cell and a cursor over its neighbors.
#[derive(Debug)]
struct Frame {
    cell: usize,
    neighbors: ArrayVec<[usize; 4]>,
    cursor: usize,
}

impl Frame {
    fn new(grid: &Grid, cell: usize) -> Self {
        Self {
            cell,
            neighbors: grid.neighbors(cell),
            cursor: 0,
        }
    }
}

/// Counts Hamiltonian traversals satisfying the revealed numbers, up to two.
///
/// `numbers` is indexed by flat cell index and must be `grid.len()` long;
/// `None` marks an unnumbered cell.
///
/// # Panics
///
/// Panics if `numbers` is not sized for the grid.
#[must_use]
pub fn count_path_solutions(
    grid: &Grid,
    walls: &WallSet,
    numbers: &[Option<u32>],
) -> SolutionCount {
    count_with_budget(grid, walls, numbers, MAX_COUNT_STEPS)
}

fn count_with_budget(
    grid: &Grid,
    walls: &WallSet,
    numbers: &[Option<u32>],
    max_steps: usize,
) -> SolutionCount {
    assert_eq!(numbers.len(), grid.len(), "numbers not sized for grid");

    let open = grid.open_cells();
    if open == 0 {
        return SolutionCount::Zero;
    }
    let max_number = numbers.iter().flatten().copied().max();

    let mut solutions = 0_u32;
    let mut steps = 0_usize;
    let mut visited = vec![false; grid.len()];

    // Start cells in row-major order; with waypoints revealed the traversal
    // must begin on the cell numbered 1.
    for start in 0..grid.len() {
        if grid.is_blocked(start) {
            continue;
        }
        if max_number.is_some() && numbers[start] != Some(1) {
            continue;
        }

        for (cell, flag) in visited.iter_mut().enumerate() {
            *flag = grid.is_blocked(cell);
        }
        let mut expected = 1_u32;

        visited[start] = true;
        if numbers[start].is_some() {
            expected += 1;
        }
        let mut stack = vec![Frame::new(grid, start)];

        loop {
            steps += 1;
            if steps > max_steps {
                debug!("path count budget exhausted after {steps} steps; reporting many");
                return SolutionCount::Many;
            }

            if stack.len() == open {
                if let Some(frame) = stack.pop() {
                    let complete = match max_number {
                        Some(max) => expected == max + 1 && numbers[frame.cell] == Some(max),
                        None => true,
                    };
                    if complete {
                        solutions += 1;
                        if solutions >= SolutionCount::CAP {
                            return SolutionCount::Many;
                        }
                    }
                    visited[frame.cell] = false;
                    if numbers[frame.cell].is_some() {
                        expected -= 1;
                    }
                }
                if stack.is_empty() {
                    break;
                }
                continue;
            }

            let Some(frame) = stack.last_mut() else {
                break;
            };
            let mut chosen = None;
            while frame.cursor < frame.neighbors.len() {
                let cand = frame.neighbors[frame.cursor];
                frame.cursor += 1;
                if visited[cand] {
                    continue;
                }
                if walls.separates(grid.pos(frame.cell), grid.pos(cand)) {
                    continue;
                }
                if let Some(number) = numbers[cand]
                    && number != expected
                {
                    continue;
                }
                chosen = Some(cand);
                break;
            }

            match chosen {
                Some(cand) => {
                    visited[cand] = true;
                    if numbers[cand].is_some() {
                        expected += 1;
                    }
                    stack.push(Frame::new(grid, cand));
                }
                None => {
                    if let Some(frame) = stack.pop() {
                        visited[frame.cell] = false;
                        if numbers[frame.cell].is_some() {
                            expected -= 1;
                        }
                    }
                    if stack.is_empty() {
                        break;
                    }
                }
            }
        }
    }

    SolutionCount::from_count(solutions)
}

#[cfg(test)]
mod tests {
    use puzzlemint_core::{Pos, Wall};

    use super::*;

    fn numbers(grid: &Grid, placed: &[(usize, u32)]) -> Vec<Option<u32>> {
        let mut out = vec![None; grid.len()];
        for &(cell, number) in placed {
            out[cell] = Some(number);
        }
        out
    }

    #[test]
    fn test_fully_numbered_serpentine_is_unique() {
        let grid = Grid::new(3, 3);
        let walls = WallSet::new(3, 3);
        let order = [0, 1, 2, 5, 4, 3, 6, 7, 8];
        let placed: Vec<(usize, u32)> = order
            .iter()
            .enumerate()
            .map(|(i, &cell)| (cell, u32::try_from(i).unwrap() + 1))
            .collect();
        let numbers = numbers(&grid, &placed);
        assert_eq!(
            count_path_solutions(&grid, &walls, &numbers),
            SolutionCount::One
        );
    }

    #[test]
    fn test_unnumbered_grid_has_many_traversals() {
        let grid = Grid::new(2, 2);
        let walls = WallSet::new(2, 2);
        let numbers = vec![None; grid.len()];
        assert_eq!(
            count_path_solutions(&grid, &walls, &numbers),
            SolutionCount::Many
        );
    }

    #[test]
    fn test_parity_blocked_corners_give_zero() {
        // No 4-cell traversal of a 2x2 grid can join diagonal corners.
        let grid = Grid::new(2, 2);
        let walls = WallSet::new(2, 2);
        let numbers = numbers(&grid, &[(0, 1), (3, 2)]);
        assert_eq!(
            count_path_solutions(&grid, &walls, &numbers),
            SolutionCount::Zero
        );
    }

    #[test]
    fn test_two_waypoints_pin_a_single_traversal() {
        // 3x2 grid, waypoint 1 top-left and waypoint 2 bottom-right: only
        // 0,3,4,1,2,5 covers all six cells and ends on the maximum.
        let grid = Grid::new(3, 2);
        let walls = WallSet::new(3, 2);
        let numbers = numbers(&grid, &[(0, 1), (5, 2)]);
        assert_eq!(
            count_path_solutions(&grid, &walls, &numbers),
            SolutionCount::One
        );
    }

    #[test]
    fn test_duplicate_number_is_contradictory() {
        let grid = Grid::new(2, 2);
        let walls = WallSet::new(2, 2);
        let numbers = numbers(&grid, &[(0, 1), (1, 2), (2, 2)]);
        assert_eq!(
            count_path_solutions(&grid, &walls, &numbers),
            SolutionCount::Zero
        );
    }

    #[test]
    fn test_walls_respected() {
        // The unique traversal of the 3x2 case runs through the 0-3 edge;
        // walling it off leaves no solution.
        let grid = Grid::new(3, 2);
        let mut walls = WallSet::new(3, 2);
        walls.insert(Wall::new(Pos::new(0, 0), Pos::new(1, 0)));
        let numbers = numbers(&grid, &[(0, 1), (5, 2)]);
        assert_eq!(
            count_path_solutions(&grid, &walls, &numbers),
            SolutionCount::Zero
        );
    }

    #[test]
    fn test_blocked_cells_are_skipped() {
        // Blocking the center of a 3x3 grid leaves a ring; a traversal of
        // the 8 remaining cells numbered end-to-end is unique.
        let mut grid = Grid::new(3, 3);
        grid.block(4);
        let walls = WallSet::new(3, 3);
        let ring = [0, 1, 2, 5, 8, 7, 6, 3];
        let placed: Vec<(usize, u32)> = ring
            .iter()
            .enumerate()
            .map(|(i, &cell)| (cell, u32::try_from(i).unwrap() + 1))
            .collect();
        let numbers = numbers(&grid, &placed);
        assert_eq!(
            count_path_solutions(&grid, &walls, &numbers),
            SolutionCount::One
        );
    }

    #[test]
    fn test_budget_exhaustion_reports_many() {
        let grid = Grid::new(3, 3);
        let walls = WallSet::new(3, 3);
        let numbers = vec![None; grid.len()];
        assert_eq!(
            count_with_budget(&grid, &walls, &numbers, 1),
            SolutionCount::Many
        );
    }
}
