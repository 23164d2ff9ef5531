//! Deterministic puzzle generation for the puzzlemint daily puzzles.
//!
//! The entry point is [`generate`]: given a puzzle family and an opaque
//! identifier string (a calendar date in practice), it derives a 32-bit seed,
//! draws stable parameters, and repeatedly runs the family's seeded structure
//! constructor and clue selection until the uniqueness validator accepts a
//! puzzle. Every search carries an explicit step or attempt budget, and when
//! the overall attempt budget runs out a hardcoded fallback puzzle is
//! substituted — generation never fails.
//!
//! # Determinism
//!
//! The same identifier always produces a byte-identical
//! [`PuzzleDescriptor`](puzzlemint_core::PuzzleDescriptor). All randomness
//! flows through [`Mulberry32`] streams seeded from
//! [`derive_seed`]; parameter selection and structure construction draw from
//! separately-offset streams so varying one cannot perturb the other.
//!
//! # Examples
//!
//! ```
//! use puzzlemint_generator::{PuzzleKind, generate};
//!
//! let today = generate(PuzzleKind::Path, "2024-01-01");
//! let again = generate(PuzzleKind::Path, "2024-01-01");
//! assert_eq!(today, again);
//! ```

pub use self::{
    assembler::{PuzzleKind, generate, generate_with_budget},
    error::AttemptError,
    flow::{FlowParams, generate_flow_attempt},
    identity::{IdentityParams, generate_identity_attempt},
    path_puzzle::{PathParams, generate_path_attempt},
    seed::{Mulberry32, derive_seed},
    topology::{TopologyParams, generate_topology_attempt, scramble_connections},
};

mod assembler;
mod error;
mod fallback;
mod flow;
mod hamiltonian;
mod identity;
mod path_puzzle;
mod route;
mod seed;
mod topology;
