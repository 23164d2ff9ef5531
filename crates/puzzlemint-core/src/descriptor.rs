//! Immutable puzzle descriptors — the engine's only output.
//!
//! A descriptor is created once by the assembler and never mutated; caching
//! and transport collaborators rely on identical inputs producing
//! byte-identical serialized descriptors, so every container here iterates in
//! a deterministic order (`BTreeMap`, canonically sorted vectors).
//!
//! Coordinates are serialized as `"x,y"` strings (column first) and wall
//! edges as canonical `"x1,y1-x2,y2"` ids; see [`crate::grid::Pos`] and
//! [`crate::wall::Wall`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{clue::Clue, direction::Direction};

/// The final immutable output of one generation request, tagged by family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "camelCase")]
pub enum PuzzleDescriptor {
    /// A numbered Hamiltonian-path puzzle.
    Path(PathDescriptor),
    /// A rotate-to-connect circuit-topology puzzle.
    Topology(TopologyDescriptor),
    /// A connect-the-pairs flow puzzle.
    Flow(FlowDescriptor),
    /// An identity-matching grid puzzle.
    Identity(IdentityDescriptor),
}

/// A numbered-path puzzle: trace a Hamiltonian path hitting the revealed
/// waypoint numbers in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDescriptor {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// Revealed waypoint numbers, keyed by `"x,y"` cell coordinates.
    pub numbers: BTreeMap<String, u32>,
    /// Canonical wall edge ids.
    pub walls: Vec<String>,
}

/// Role of a boundary entry point in a topology puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRole {
    /// Where the flow enters the grid.
    Source,
    /// Where the flow leaves the grid.
    Sink,
}

/// A boundary cell where the topology connects off-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    /// Row of the entry cell.
    pub r: usize,
    /// Column of the entry cell.
    pub c: usize,
    /// The boundary side the connection leaves through.
    pub dir: Direction,
    /// Whether the flow enters or leaves here.
    pub role: EntryRole,
}

/// One cell of a solved topology puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyCell {
    /// Row of the cell.
    pub r: usize,
    /// Column of the cell.
    pub c: usize,
    /// Solved 4-bit connection mask (N=1, E=2, S=4, W=8).
    pub connections: u8,
    /// Whether the cell is shown solved and locked from the start.
    pub is_prefill: bool,
    /// Whether the cell is blocked.
    pub is_blocked: bool,
    /// Whether the cell takes part in the solution topology.
    pub is_active: bool,
}

/// A circuit-topology puzzle: the solved structure plus its boundary
/// entry points, in row-major cell order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyDescriptor {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// Boundary entry points in generation order.
    pub entry_points: Vec<EntryPoint>,
    /// Every grid cell, row-major.
    pub solution_cells: Vec<TopologyCell>,
}

/// One color's endpoints and solution path in a flow puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowPair {
    /// Pair id, 1-based.
    pub id: u32,
    /// The two endpoint cells, `"x,y"`-encoded.
    pub ends: [String; 2],
    /// All cells of the pair's path in traversal order, `"x,y"`-encoded.
    pub cells: Vec<String>,
}

/// A flow puzzle: connect each pair of endpoints with non-crossing paths
/// covering the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDescriptor {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// One entry per color, ordered by id.
    pub pairs: Vec<FlowPair>,
}

/// Role of a category in an identity puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryRole {
    /// The anchor category whose values index the rows.
    Identity,
    /// A category matched against the identity rows.
    Attribute,
}

/// A named category and its value labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    /// Category name.
    pub category: String,
    /// Whether this is the identity anchor or an attribute.
    pub role: CategoryRole,
    /// Value labels, in value-index order.
    pub values: Vec<String>,
}

/// An identity-matching puzzle: categories, the solved assignment, and the
/// accepted clues with their rendered texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDescriptor {
    /// Number of rows (and of values per category).
    pub size: usize,
    /// Name of the identity category.
    pub identity_category: String,
    /// All categories, identity first.
    pub categories: Vec<CategoryInfo>,
    /// Solved permutation per category name: `solution[c][row]` is the value
    /// index the row maps to. The identity category maps to itself.
    pub solution: BTreeMap<String, Vec<usize>>,
    /// The accepted clues, in acceptance order.
    pub clues: Vec<Clue>,
    /// One rendered sentence per accepted clue, index-aligned with `clues`.
    pub clue_texts: Vec<String>,
}
