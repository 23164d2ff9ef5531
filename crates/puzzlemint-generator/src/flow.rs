//! Generation of flow-pair puzzles.
//!
//! One attempt picks K disjoint endpoint pairs, connects each through a
//! randomized BFS over unoccupied cells, then absorbs the remaining empty
//! cells: a cell adjacent to some path's end extends that path, and an
//! isolated pocket spawns a synthetic pair of its own. The attempt fails if
//! the fill loop stalls or exhausts its pass budget before the grid is full.

use rand::seq::{IndexedRandom as _, SliceRandom as _};

use puzzlemint_core::{
    Grid,
    descriptor::{FlowDescriptor, FlowPair},
};

use crate::{error::AttemptError, route::bfs_route, seed::Mulberry32};

/// Budget of fill passes over the leftover cells.
const MAX_FILL_PASSES: usize = 64;

/// Parameters for the flow family, drawn once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowParams {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// How many primary endpoint pairs to route.
    pub pair_count: usize,
}

/// Runs one seeded generation attempt for the flow family.
///
/// # Errors
///
/// Returns [`AttemptError::SearchExhausted`] when a primary pair could not
/// be routed and [`AttemptError::FillIncomplete`] when the fill loop could
/// not absorb every cell within its budget.
pub fn generate_flow_attempt(
    params: FlowParams,
    rng: &mut Mulberry32,
) -> Result<FlowDescriptor, AttemptError> {
    let grid = Grid::new(params.width, params.height);
    let mut occupancy: Vec<Option<u32>> = vec![None; grid.len()];
    let mut paths: Vec<Vec<usize>> = Vec::new();

    for _ in 0..params.pair_count {
        let mut free: Vec<usize> = (0..grid.len())
            .filter(|&cell| occupancy[cell].is_none())
            .collect();
        if free.len() < 2 {
            return Err(AttemptError::SearchExhausted);
        }
        free.shuffle(rng);
        let (from, to) = (free[0], free[1]);
        let route = bfs_route(&grid, from, to, |cell| occupancy[cell].is_none(), rng)
            .ok_or(AttemptError::SearchExhausted)?;
        claim(&mut occupancy, &route, next_id(&paths));
        paths.push(route);
    }

    let mut passes = 0;
    loop {
        let mut empties: Vec<usize> = (0..grid.len())
            .filter(|&cell| occupancy[cell].is_none())
            .collect();
        if empties.is_empty() {
            break;
        }
        passes += 1;
        if passes > MAX_FILL_PASSES {
            return Err(AttemptError::FillIncomplete);
        }
        empties.shuffle(rng);

        let mut progress = false;
        for cell in empties {
            if occupancy[cell].is_some() {
                continue;
            }
            if extend_adjacent_path(&grid, cell, &mut occupancy, &mut paths) {
                progress = true;
                continue;
            }
            // No path end nearby: spawn a synthetic pair into the pocket.
            let open: Vec<usize> = grid
                .neighbors(cell)
                .into_iter()
                .filter(|&cand| occupancy[cand].is_none())
                .collect();
            if let Some(&mate) = open.choose(rng) {
                let id = next_id(&paths);
                occupancy[cell] = Some(id);
                occupancy[mate] = Some(id);
                paths.push(vec![cell, mate]);
                progress = true;
            }
        }
        if !progress {
            return Err(AttemptError::FillIncomplete);
        }
    }

    let pairs = paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let encode = |cell: usize| grid.pos(cell).to_string();
            FlowPair {
                id: u32::try_from(index + 1).unwrap_or(u32::MAX),
                ends: [encode(path[0]), encode(path[path.len() - 1])],
                cells: path.iter().copied().map(encode).collect(),
            }
        })
        .collect();
    Ok(FlowDescriptor {
        width: params.width,
        height: params.height,
        pairs,
    })
}

fn next_id(paths: &[Vec<usize>]) -> u32 {
    u32::try_from(paths.len() + 1).unwrap_or(u32::MAX)
}

fn claim(occupancy: &mut [Option<u32>], route: &[usize], id: u32) {
    for &cell in route {
        occupancy[cell] = Some(id);
    }
}

/// Attaches `cell` to the first path whose head or tail it touches.
fn extend_adjacent_path(
    grid: &Grid,
    cell: usize,
    occupancy: &mut [Option<u32>],
    paths: &mut [Vec<usize>],
) -> bool {
    let neighbors = grid.neighbors(cell);
    for (index, path) in paths.iter_mut().enumerate() {
        let id = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let head = path[0];
        let tail = path[path.len() - 1];
        if neighbors.contains(&head) {
            path.insert(0, cell);
            occupancy[cell] = Some(id);
            return true;
        }
        if neighbors.contains(&tail) {
            path.push(cell);
            occupancy[cell] = Some(id);
            return true;
        }
    }
    false
}
