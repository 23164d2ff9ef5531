//! Generation of circuit-topology puzzles.
//!
//! One attempt routes a primary flow between boundary entry and exit cells
//! with a randomized BFS, then grows short random branches from the claimed
//! cells until a target share of the open area carries connections. Cells
//! the growth never reaches stay inactive. The solved connection masks are
//! derived from consecutive-segment adjacency; the player-facing start state
//! is produced separately by [`scramble_connections`].

use rand::Rng as _;
use rand::seq::IndexedRandom as _;

use puzzlemint_core::{
    ConnectionMask, Direction, Grid,
    descriptor::{EntryPoint, EntryRole, TopologyCell, TopologyDescriptor},
};

use crate::{error::AttemptError, route::bfs_route, seed::Mulberry32};

/// Budget of branch-growth attempts per generation attempt.
const MAX_BRANCH_ATTEMPTS: usize = 240;

/// Parameters for the topology family, drawn once per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopologyParams {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// How many entry/exit pairs to route.
    pub pair_count: usize,
    /// How many interior cells to block.
    pub blocked_count: usize,
    /// Share of the open area the connected structure must reach.
    pub coverage: f64,
    /// Probability that an active cell is shown solved from the start.
    pub prefill_ratio: f64,
}

/// Runs one seeded generation attempt for the topology family.
///
/// # Errors
///
/// Returns [`AttemptError::SearchExhausted`] when an entry/exit pair could
/// not be placed or routed, and [`AttemptError::CoverageNotReached`] when
/// branch growth missed the coverage target within its budget.
#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn generate_topology_attempt(
    params: TopologyParams,
    rng: &mut Mulberry32,
) -> Result<TopologyDescriptor, AttemptError> {
    let mut grid = Grid::new(params.width, params.height);
    block_interior_cells(&mut grid, params.blocked_count, rng);

    let open = grid.open_cells();
    let mut masks = vec![ConnectionMask::empty(); grid.len()];
    let mut claimed = vec![false; grid.len()];
    let mut claimed_list: Vec<usize> = Vec::new();
    let mut entry_points = Vec::new();

    // Entry and exit sit on opposite edges; the axis is rolled per puzzle.
    let (entry_side, exit_side) = if rng.next_unit() < 0.5 {
        (Direction::North, Direction::South)
    } else {
        (Direction::West, Direction::East)
    };

    for _ in 0..params.pair_count {
        let pick = |side: Direction, claimed: &[bool], rng: &mut Mulberry32| {
            let choices: Vec<usize> = grid
                .edge_cells(side)
                .into_iter()
                .filter(|&cell| !grid.is_blocked(cell) && !claimed[cell])
                .collect();
            choices.choose(rng).copied()
        };
        let entry = pick(entry_side, &claimed, rng).ok_or(AttemptError::SearchExhausted)?;
        let exit = pick(exit_side, &claimed, rng).ok_or(AttemptError::SearchExhausted)?;

        let route = bfs_route(&grid, entry, exit, |cell| !claimed[cell], rng)
            .ok_or(AttemptError::SearchExhausted)?;
        for pair in route.windows(2) {
            let dir = grid.direction_between(pair[0], pair[1]);
            masks[pair[0]] |= dir.mask();
            masks[pair[1]] |= dir.opposite().mask();
        }
        for &cell in &route {
            if !claimed[cell] {
                claimed[cell] = true;
                claimed_list.push(cell);
            }
        }
        // The boundary cells additionally connect off-grid.
        masks[entry] |= entry_side.mask();
        masks[exit] |= exit_side.mask();

        let entry_pos = grid.pos(entry);
        let exit_pos = grid.pos(exit);
        entry_points.push(EntryPoint {
            r: entry_pos.row(),
            c: entry_pos.col(),
            dir: entry_side,
            role: EntryRole::Source,
        });
        entry_points.push(EntryPoint {
            r: exit_pos.row(),
            c: exit_pos.col(),
            dir: exit_side,
            role: EntryRole::Sink,
        });
    }

    let target = (open as f64 * params.coverage).ceil() as usize;
    let mut branch_attempts = 0;
    while claimed_list.len() < target && branch_attempts < MAX_BRANCH_ATTEMPTS {
        branch_attempts += 1;
        let Some(&anchor) = claimed_list.choose(rng) else {
            break;
        };
        let length = rng.random_range(2..=4_usize);
        let mut cursor = anchor;
        for _ in 0..length {
            let options: Vec<usize> = grid
                .neighbors(cursor)
                .into_iter()
                .filter(|&cand| !grid.is_blocked(cand) && !claimed[cand])
                .collect();
            let Some(&next) = options.choose(rng) else {
                break;
            };
            let dir = grid.direction_between(cursor, next);
            masks[cursor] |= dir.mask();
            masks[next] |= dir.opposite().mask();
            claimed[next] = true;
            claimed_list.push(next);
            cursor = next;
        }
    }
    if claimed_list.len() < target {
        return Err(AttemptError::CoverageNotReached);
    }

    let solution_cells = (0..grid.len())
        .map(|cell| {
            let pos = grid.pos(cell);
            let active = claimed[cell];
            TopologyCell {
                r: pos.row(),
                c: pos.col(),
                connections: masks[cell].bits(),
                is_prefill: active && rng.next_unit() < params.prefill_ratio,
                is_blocked: grid.is_blocked(cell),
                is_active: active,
            }
        })
        .collect();

    Ok(TopologyDescriptor {
        width: params.width,
        height: params.height,
        entry_points,
        solution_cells,
    })
}

/// Produces the player-facing start state: every active, non-prefill cell's
/// mask rotated by a random number of quarter turns, in row-major cell order.
#[must_use]
pub fn scramble_connections(descriptor: &TopologyDescriptor, rng: &mut Mulberry32) -> Vec<u8> {
    descriptor
        .solution_cells
        .iter()
        .map(|cell| {
            if cell.is_active && !cell.is_prefill {
                let steps = rng.random_range(0..4_u32);
                ConnectionMask::from_bits_truncate(cell.connections)
                    .rotated(steps)
                    .bits()
            } else {
                cell.connections
            }
        })
        .collect()
}

/// Blocks up to `count` random interior cells; the boundary stays open so
/// entry and exit placement always has candidates.
fn block_interior_cells(grid: &mut Grid, count: usize, rng: &mut Mulberry32) {
    let mut placed = 0;
    let mut budget = count * 8;
    while placed < count && budget > 0 {
        budget -= 1;
        let cell = rng.random_range(0..grid.len());
        let pos = grid.pos(cell);
        let boundary = pos.row() == 0
            || pos.row() == grid.height() - 1
            || pos.col() == 0
            || pos.col() == grid.width() - 1;
        if boundary || grid.is_blocked(cell) {
            continue;
        }
        grid.block(cell);
        placed += 1;
    }
}
