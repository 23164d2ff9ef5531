//! The rectangular grid and its cell indexing.
//!
//! Cells are addressed by flat index `row * width + col`. All interior
//! computation works on these integer indices; the `"x,y"` string encoding
//! exists only at the serialization boundary (see [`Pos`]'s `Display`).

use std::fmt;

use tinyvec::ArrayVec;

use crate::direction::Direction;

/// A position on the grid, addressed by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    row: usize,
    col: usize,
}

impl Pos {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl fmt::Display for Pos {
    /// Formats the position as its serialization key, `"x,y"` (column first).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

/// A `width` x `height` grid of cells, some of which may be blocked.
///
/// Blocked cells take no part in any solution structure: traversals may not
/// enter them and topology routing treats them as absent.
///
/// # Examples
///
/// ```
/// use puzzlemint_core::{Grid, Pos};
///
/// let mut grid = Grid::new(4, 3);
/// assert_eq!(grid.len(), 12);
///
/// let cell = grid.index(Pos::new(1, 2));
/// grid.block(cell);
/// assert!(grid.is_blocked(cell));
/// assert_eq!(grid.open_cells(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell open.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            blocked: vec![false; width * height],
        }
    }

    /// Returns the grid width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells, blocked or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if the grid has no cells. Always `false` for a
    /// constructed grid; present for container-API symmetry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts a position to its flat cell index.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    pub fn index(&self, pos: Pos) -> usize {
        assert!(
            pos.row() < self.height && pos.col() < self.width,
            "position {pos} outside {}x{} grid",
            self.width,
            self.height
        );
        pos.row() * self.width + pos.col()
    }

    /// Converts a flat cell index back to a position.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn pos(&self, cell: usize) -> Pos {
        assert!(cell < self.len(), "cell index {cell} out of range");
        Pos::new(cell / self.width, cell % self.width)
    }

    /// Marks a cell as blocked.
    pub fn block(&mut self, cell: usize) {
        self.blocked[cell] = true;
    }

    /// Returns `true` if the cell is blocked.
    #[must_use]
    pub fn is_blocked(&self, cell: usize) -> bool {
        self.blocked[cell]
    }

    /// Returns the number of non-blocked cells.
    #[must_use]
    pub fn open_cells(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    /// Returns the neighbor of `cell` one step toward `dir`, or `None` at the
    /// grid boundary.
    #[must_use]
    pub fn neighbor(&self, cell: usize, dir: Direction) -> Option<usize> {
        let pos = self.pos(cell);
        let (dr, dc) = dir.offset();
        let row = pos.row().checked_add_signed(dr)?;
        let col = pos.col().checked_add_signed(dc)?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Returns all in-bounds neighbors of `cell`, in N/E/S/W order.
    #[must_use]
    pub fn neighbors(&self, cell: usize) -> ArrayVec<[usize; 4]> {
        let mut out = ArrayVec::new();
        for dir in Direction::ALL {
            if let Some(next) = self.neighbor(cell, dir) {
                out.push(next);
            }
        }
        out
    }

    /// Returns the direction from `cell` to an adjacent cell `other`.
    ///
    /// # Panics
    ///
    /// Panics if the two cells are not orthogonally adjacent.
    #[must_use]
    pub fn direction_between(&self, cell: usize, other: usize) -> Direction {
        for dir in Direction::ALL {
            if self.neighbor(cell, dir) == Some(other) {
                return dir;
            }
        }
        panic!("cells {cell} and {other} are not adjacent");
    }

    /// Returns the cells along the boundary on side `dir`, in index order.
    #[must_use]
    pub fn edge_cells(&self, dir: Direction) -> Vec<usize> {
        match dir {
            Direction::North => (0..self.width).collect(),
            Direction::South => ((self.height - 1) * self.width..self.len()).collect(),
            Direction::West => (0..self.height).map(|r| r * self.width).collect(),
            Direction::East => (0..self.height)
                .map(|r| r * self.width + self.width - 1)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::new(5, 4);
        for cell in 0..grid.len() {
            assert_eq!(grid.index(grid.pos(cell)), cell);
        }
    }

    #[test]
    fn test_neighbor_bounds_checked() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbor(0, Direction::North), None);
        assert_eq!(grid.neighbor(0, Direction::West), None);
        assert_eq!(grid.neighbor(0, Direction::East), Some(1));
        assert_eq!(grid.neighbor(0, Direction::South), Some(3));
        assert_eq!(grid.neighbor(8, Direction::East), None);
        assert_eq!(grid.neighbor(8, Direction::South), None);
    }

    #[test]
    fn test_neighbors_counts() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbors(0).len(), 2); // corner
        assert_eq!(grid.neighbors(1).len(), 3); // edge
        assert_eq!(grid.neighbors(4).len(), 4); // center
    }

    #[test]
    fn test_blocked_cells_counted() {
        let mut grid = Grid::new(4, 4);
        assert_eq!(grid.open_cells(), 16);
        grid.block(5);
        grid.block(10);
        assert_eq!(grid.open_cells(), 14);
        assert!(grid.is_blocked(5));
        assert!(!grid.is_blocked(0));
    }

    #[test]
    fn test_direction_between_adjacent() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.direction_between(4, 1), Direction::North);
        assert_eq!(grid.direction_between(4, 5), Direction::East);
        assert_eq!(grid.direction_between(4, 7), Direction::South);
        assert_eq!(grid.direction_between(4, 3), Direction::West);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_direction_between_rejects_distant_cells() {
        let grid = Grid::new(3, 3);
        let _ = grid.direction_between(0, 8);
    }

    #[test]
    fn test_edge_cells() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.edge_cells(Direction::North), vec![0, 1, 2]);
        assert_eq!(grid.edge_cells(Direction::South), vec![3, 4, 5]);
        assert_eq!(grid.edge_cells(Direction::West), vec![0, 3]);
        assert_eq!(grid.edge_cells(Direction::East), vec![2, 5]);
    }

    #[test]
    fn test_pos_display_is_column_first() {
        assert_eq!(Pos::new(2, 1).to_string(), "1,2");
    }
}
