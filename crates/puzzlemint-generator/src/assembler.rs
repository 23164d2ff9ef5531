//! The puzzle assembler: parameter selection, retries, and the fallback.
//!
//! One generation request walks a fixed state machine: derive the seed, draw
//! the family's parameters once from the parameter stream, then repeatedly
//! run the structure constructor and clue selection with per-attempt
//! structure streams until the validator accepts a puzzle. Parameters stay
//! stable across attempts; only the structure stream re-seeds, so total work
//! is bounded by the attempt budget times the per-attempt step budgets. When
//! the budget runs out the family's hardcoded fallback is substituted —
//! never an error.

use log::{debug, warn};

use puzzlemint_core::PuzzleDescriptor;

use crate::{
    error::AttemptError,
    fallback,
    flow::{FlowParams, generate_flow_attempt},
    identity::{IdentityParams, generate_identity_attempt},
    path_puzzle::{PathParams, generate_path_attempt},
    seed::{Mulberry32, derive_seed},
    topology::{TopologyParams, generate_topology_attempt},
};

/// Puzzle families served by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    /// Numbered Hamiltonian-path puzzles.
    Path,
    /// Rotate-to-connect circuit puzzles.
    Topology,
    /// Connect-the-pairs flow puzzles.
    Flow,
    /// Identity-matching grid puzzles.
    Identity,
}

/// Total attempts before the fallback puzzle is substituted.
const MAX_ATTEMPTS: u32 = 24;
/// Offset separating the structure streams from the parameter stream.
const STRUCTURE_STREAM_OFFSET: u32 = 0x9E37_79B9;
/// Stride between consecutive attempts' structure seeds.
const ATTEMPT_SEED_STRIDE: u32 = 7919;

/// Generates the puzzle for an opaque identifier.
///
/// The identifier (a `YYYY-MM-DD` date in practice) is never interpreted
/// beyond hashing it into a seed. The same kind and identifier always yield
/// a byte-identical descriptor, and the call never fails: generation
/// degrades to a hardcoded fallback puzzle when its attempt budget runs out.
#[must_use]
pub fn generate(kind: PuzzleKind, puzzle_id: &str) -> PuzzleDescriptor {
    generate_with_budget(kind, puzzle_id, MAX_ATTEMPTS)
}

/// Same as [`generate`] with an explicit attempt budget.
///
/// A budget of zero skips straight to the family's fallback puzzle.
#[must_use]
pub fn generate_with_budget(kind: PuzzleKind, puzzle_id: &str, attempts: u32) -> PuzzleDescriptor {
    let seed = derive_seed(puzzle_id);
    let mut params_rng = Mulberry32::new(seed);
    match kind {
        PuzzleKind::Path => {
            let params = draw_path_params(&mut params_rng);
            run_attempts("path", puzzle_id, seed, attempts, PuzzleDescriptor::Path, fallback::path_puzzle, |rng| {
                generate_path_attempt(params, rng)
            })
        }
        PuzzleKind::Topology => {
            let params = draw_topology_params(&mut params_rng);
            run_attempts(
                "topology",
                puzzle_id,
                seed,
                attempts,
                PuzzleDescriptor::Topology,
                fallback::topology_puzzle,
                |rng| generate_topology_attempt(params, rng),
            )
        }
        PuzzleKind::Flow => {
            let params = draw_flow_params(&mut params_rng);
            run_attempts("flow", puzzle_id, seed, attempts, PuzzleDescriptor::Flow, fallback::flow_puzzle, |rng| {
                generate_flow_attempt(params, rng)
            })
        }
        PuzzleKind::Identity => {
            let params = draw_identity_params(&mut params_rng);
            run_attempts(
                "identity",
                puzzle_id,
                seed,
                attempts,
                PuzzleDescriptor::Identity,
                fallback::identity_puzzle,
                |rng| generate_identity_attempt(params, rng),
            )
        }
    }
}

/// Runs the retry loop: a fresh structure stream per attempt, the fallback
/// after the budget is spent.
fn run_attempts<D>(
    family: &str,
    puzzle_id: &str,
    seed: u32,
    attempts: u32,
    wrap: impl Fn(D) -> PuzzleDescriptor,
    fallback: impl FnOnce() -> D,
    mut attempt: impl FnMut(&mut Mulberry32) -> Result<D, AttemptError>,
) -> PuzzleDescriptor {
    for index in 0..attempts {
        let mut rng = structure_stream(seed, index);
        match attempt(&mut rng) {
            Ok(descriptor) => return wrap(descriptor),
            Err(err) => debug!("{family} attempt {index} for {puzzle_id:?} failed: {err}"),
        }
    }
    warn!("{family} generation exhausted {attempts} attempts for {puzzle_id:?}; using fallback");
    wrap(fallback())
}

/// The structure stream for one attempt: offset away from the parameter
/// stream, with a distinct seed per attempt index.
fn structure_stream(seed: u32, attempt: u32) -> Mulberry32 {
    Mulberry32::new(
        seed.wrapping_add(STRUCTURE_STREAM_OFFSET)
            .wrapping_add(attempt.wrapping_mul(ATTEMPT_SEED_STRIDE)),
    )
}

/// Rolls an index below `choices` from the parameter stream.
#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn roll(rng: &mut Mulberry32, choices: usize) -> usize {
    (rng.next_unit() * choices as f64) as usize
}

fn draw_path_params(rng: &mut Mulberry32) -> PathParams {
    let size = 5 + roll(rng, 2);
    PathParams {
        width: size,
        height: size,
        wall_count: roll(rng, 5),
        clue_count: 6 + roll(rng, 3),
    }
}

fn draw_topology_params(rng: &mut Mulberry32) -> TopologyParams {
    let size = 5 + roll(rng, 3);
    TopologyParams {
        width: size,
        height: size,
        pair_count: 1 + roll(rng, 2),
        blocked_count: roll(rng, 3),
        coverage: 0.5 + rng.next_unit() * 0.15,
        prefill_ratio: 0.1 + rng.next_unit() * 0.15,
    }
}

fn draw_flow_params(rng: &mut Mulberry32) -> FlowParams {
    let size = 5 + roll(rng, 2);
    FlowParams {
        width: size,
        height: size,
        pair_count: 4 + roll(rng, 3),
    }
}

fn draw_identity_params(rng: &mut Mulberry32) -> IdentityParams {
    IdentityParams {
        size: 3 + roll(rng, 2),
        category_count: 2 + roll(rng, 2),
    }
}
