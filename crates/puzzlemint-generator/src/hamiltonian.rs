//! Randomized Hamiltonian traversal search.
//!
//! The path family's structure constructor: drop a handful of random walls
//! on the grid, then run a randomized depth-first search for a traversal
//! visiting every open cell exactly once. The search keeps an explicit stack
//! of frames instead of recursing, so its depth is bounded by the cell count
//! and never by the call stack.

use log::debug;
use rand::Rng as _;
use rand::seq::{IndexedRandom as _, SliceRandom as _};
use tinyvec::ArrayVec;

use puzzlemint_core::{Direction, Grid, Path, Wall, WallSet};

use crate::seed::Mulberry32;

/// Step budget for one traversal search. Pathological wall layouts make the
/// search exhaust this bound instead of proving non-existence; the caller
/// treats that as "no path for this wall/seed combination" and retries.
const MAX_TRAVERSAL_STEPS: usize = 60_000;

/// One search frame: a path cell and a cursor over its shuffled neighbors.
#[derive(Debug)]
struct Frame {
    cell: usize,
    neighbors: ArrayVec<[usize; 4]>,
    cursor: usize,
}

impl Frame {
    fn open(grid: &Grid, walls: &WallSet, cell: usize, rng: &mut Mulberry32) -> Self {
        let mut neighbors: ArrayVec<[usize; 4]> = grid
            .neighbors(cell)
            .into_iter()
            .filter(|&cand| {
                !grid.is_blocked(cand) && !walls.separates(grid.pos(cell), grid.pos(cand))
            })
            .collect();
        neighbors.shuffle(rng);
        Self {
            cell,
            neighbors,
            cursor: 0,
        }
    }
}

/// Places up to `count` distinct random walls between open adjacent cells.
///
/// Placement attempts are bounded; crowded or small grids may end up with
/// fewer walls than requested.
pub(crate) fn place_walls(grid: &Grid, count: usize, rng: &mut Mulberry32) -> WallSet {
    let mut walls = WallSet::new(grid.width(), grid.height());
    let mut budget = count * 8;
    while walls.len() < count && budget > 0 {
        budget -= 1;
        let cell = rng.random_range(0..grid.len());
        if grid.is_blocked(cell) {
            continue;
        }
        let Some(&dir) = Direction::ALL.choose(rng) else {
            break;
        };
        let Some(other) = grid.neighbor(cell, dir) else {
            continue;
        };
        if grid.is_blocked(other) {
            continue;
        }
        walls.insert(Wall::new(grid.pos(cell), grid.pos(other)));
    }
    walls
}

/// Searches for a random Hamiltonian traversal of the grid's open cells.
///
/// Returns `None` when the step budget runs out or the search space is
/// exhausted without a full traversal; both cases mean "retry with the next
/// structure seed".
pub(crate) fn find_traversal(grid: &Grid, walls: &WallSet, rng: &mut Mulberry32) -> Option<Path> {
    let open: Vec<usize> = (0..grid.len()).filter(|&c| !grid.is_blocked(c)).collect();
    let target = open.len();
    let &start = open.choose(rng)?;

    let mut visited = vec![false; grid.len()];
    visited[start] = true;
    let mut stack = vec![Frame::open(grid, walls, start, rng)];
    let mut steps = 0_usize;

    loop {
        if stack.len() == target {
            return Some(Path::from_cells(stack.iter().map(|f| f.cell).collect()));
        }
        steps += 1;
        if steps > MAX_TRAVERSAL_STEPS {
            debug!("traversal search gave up after {steps} steps");
            return None;
        }

        let frame = stack.last_mut()?;
        let mut chosen = None;
        while frame.cursor < frame.neighbors.len() {
            let cand = frame.neighbors[frame.cursor];
            frame.cursor += 1;
            if !visited[cand] {
                chosen = Some(cand);
                break;
            }
        }

        match chosen {
            Some(cand) => {
                visited[cand] = true;
                stack.push(Frame::open(grid, walls, cand, rng));
            }
            None => {
                let frame = stack.pop()?;
                visited[frame.cell] = false;
                if stack.is_empty() {
                    return None;
                }
            }
        }
    }
}
