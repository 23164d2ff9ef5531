//! Randomized breadth-first routing shared by the topology and flow
//! constructors.

use std::collections::VecDeque;

use rand::seq::SliceRandom as _;

use puzzlemint_core::Grid;

use crate::seed::Mulberry32;

/// Finds a route from `from` to `to` by BFS, shuffling the neighbor order at
/// every expansion so repeated calls explore different routes.
///
/// Intermediate cells must be non-blocked and satisfy `passable`; the target
/// endpoint is exempt from `passable` so routes may end on a cell another
/// structure already owns. Returns the cells from `from` to `to` inclusive,
/// or `None` when the target is unreachable.
pub(crate) fn bfs_route(
    grid: &Grid,
    from: usize,
    to: usize,
    passable: impl Fn(usize) -> bool,
    rng: &mut Mulberry32,
) -> Option<Vec<usize>> {
    let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    seen[from] = true;
    queue.push_back(from);

    while let Some(cell) = queue.pop_front() {
        if cell == to {
            let mut route = vec![to];
            let mut cursor = to;
            while let Some(prev) = parent[cursor] {
                route.push(prev);
                cursor = prev;
            }
            route.reverse();
            return Some(route);
        }
        let mut neighbors = grid.neighbors(cell);
        neighbors.shuffle(rng);
        for cand in neighbors {
            if seen[cand] || grid.is_blocked(cand) {
                continue;
            }
            if cand != to && !passable(cand) {
                continue;
            }
            seen[cand] = true;
            parent[cand] = Some(cell);
            queue.push_back(cand);
        }
    }
    None
}
