//! Core data structures for the puzzlemint daily-puzzle engine.
//!
//! This crate provides the shared model consumed by the solver and generator
//! crates: the rectangular grid with its cell indexing, the four cardinal
//! directions and 4-bit connection masks used by topology puzzles, canonical
//! wall edges, traversal paths, the closed clue type, and the immutable
//! puzzle descriptors that generation emits.
//!
//! # Overview
//!
//! - [`grid`]: cell indexing (`row * width + col`), blocked cells, and
//!   bounds-checked neighbor lookup.
//! - [`direction`]: [`Direction`] and the [`ConnectionMask`] bit set with its
//!   cyclic rotation operation.
//! - [`wall`]: canonical unordered edges between adjacent cells and the flat
//!   [`WallSet`] membership structure.
//! - [`path`]: ordered cell traversals and Hamiltonian coverage checks.
//! - [`clue`]: the tagged [`Clue`] union revealed to players.
//! - [`descriptor`]: the serialized output shapes. String-keyed `"x,y"`
//!   coordinates appear only at this boundary; everything else works on
//!   integer cell indices.
//!
//! # Examples
//!
//! ```
//! use puzzlemint_core::{Direction, Grid, Pos};
//!
//! let grid = Grid::new(5, 5);
//! let center = grid.index(Pos::new(2, 2));
//!
//! assert_eq!(grid.neighbors(center).len(), 4);
//! assert_eq!(grid.neighbor(0, Direction::North), None);
//! ```

pub mod clue;
pub mod descriptor;
pub mod direction;
pub mod grid;
pub mod path;
pub mod wall;

pub use self::{
    clue::Clue,
    descriptor::PuzzleDescriptor,
    direction::{ConnectionMask, Direction},
    grid::{Grid, Pos},
    path::Path,
    wall::{Wall, WallSet},
};
