//! Canonical wall edges between adjacent cells.
//!
//! A wall blocks traversal between two orthogonally adjacent cells. Walls are
//! stored canonically (lexicographically smaller position first) so that
//! membership tests are order-independent, and [`WallSet`] keeps membership in
//! a flat bit set keyed by `cell * 2 + axis` where axis 0 is the east edge and
//! axis 1 the south edge of the canonical cell.

use crate::grid::Pos;

/// An unordered pair of adjacent cells separated by a wall.
///
/// The pair is canonicalized at construction: `a()` is always the
/// lexicographically smaller position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wall {
    a: Pos,
    b: Pos,
}

impl Wall {
    /// Creates a wall between two adjacent cells, in either order.
    ///
    /// # Panics
    ///
    /// Panics if the positions are not orthogonally adjacent.
    #[must_use]
    pub fn new(first: Pos, second: Pos) -> Self {
        let dr = first.row().abs_diff(second.row());
        let dc = first.col().abs_diff(second.col());
        assert!(dr + dc == 1, "wall endpoints {first} and {second} are not adjacent");
        if first <= second {
            Self { a: first, b: second }
        } else {
            Self { a: second, b: first }
        }
    }

    /// Returns the lexicographically smaller endpoint.
    #[must_use]
    pub const fn a(self) -> Pos {
        self.a
    }

    /// Returns the lexicographically larger endpoint.
    #[must_use]
    pub const fn b(self) -> Pos {
        self.b
    }

    /// Returns the canonical edge id, `"x1,y1-x2,y2"`.
    #[must_use]
    pub fn edge_id(self) -> String {
        format!("{}-{}", self.a, self.b)
    }
}

/// A set of walls over one grid, with order-independent membership tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallSet {
    width: usize,
    height: usize,
    bits: Vec<u64>,
    len: usize,
}

impl WallSet {
    /// Creates an empty wall set for a `width` x `height` grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let slots = width * height * 2;
        Self {
            width,
            height,
            bits: vec![0; slots.div_ceil(64)],
            len: 0,
        }
    }

    /// Returns the number of walls in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no walls.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot for the wall whose canonical endpoint is `a`: axis 0 runs east,
    /// axis 1 runs south.
    fn slot(&self, wall: Wall) -> usize {
        let cell = wall.a().row() * self.width + wall.a().col();
        let axis = usize::from(wall.b().row() > wall.a().row());
        cell * 2 + axis
    }

    /// Inserts a wall; returns `true` if it was not already present.
    pub fn insert(&mut self, wall: Wall) -> bool {
        let slot = self.slot(wall);
        let (word, bit) = (slot / 64, slot % 64);
        if self.bits[word] & (1 << bit) != 0 {
            return false;
        }
        self.bits[word] |= 1 << bit;
        self.len += 1;
        true
    }

    /// Returns `true` if the set contains the given wall.
    #[must_use]
    pub fn contains(&self, wall: Wall) -> bool {
        let slot = self.slot(wall);
        self.bits[slot / 64] & (1 << (slot % 64)) != 0
    }

    /// Returns `true` if a wall separates the two cells, in either order.
    ///
    /// Non-adjacent cells are never separated by a wall.
    #[must_use]
    pub fn separates(&self, first: Pos, second: Pos) -> bool {
        let dr = first.row().abs_diff(second.row());
        let dc = first.col().abs_diff(second.col());
        if dr + dc != 1 {
            return false;
        }
        self.contains(Wall::new(first, second))
    }

    /// Iterates the walls in canonical (cell-index, then axis) order.
    pub fn iter(&self) -> impl Iterator<Item = Wall> + '_ {
        (0..self.width * self.height * 2).filter_map(move |slot| {
            if self.bits[slot / 64] & (1 << (slot % 64)) == 0 {
                return None;
            }
            let cell = slot / 2;
            let a = Pos::new(cell / self.width, cell % self.width);
            let b = if slot % 2 == 0 {
                Pos::new(a.row(), a.col() + 1)
            } else {
                Pos::new(a.row() + 1, a.col())
            };
            Some(Wall::new(a, b))
        })
    }

    /// Returns all edge ids in canonical order, ready for serialization.
    #[must_use]
    pub fn edge_ids(&self) -> Vec<String> {
        self.iter().map(Wall::edge_id).collect()
    }
}
