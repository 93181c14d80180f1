//! Grid coordinates and the four orthogonal step directions.

use std::fmt;

/// A `(row, col)` coordinate on a letter grid.
///
/// Axes are signed so that a step off the top or left edge is still a
/// representable value; whether a cell actually lies on a given grid is
/// decided by the grid, not by the coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, `0` at the top.
    pub row: i32,
    /// Column index, `0` at the left.
    pub col: i32,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one step away in `dir`. Never fails; the result may lie
    /// off the grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// `true` if `other` differs from `self` by exactly one row or exactly
    /// one column, but not both.
    pub fn is_orthogonal_neighbour(self, other: Cell) -> bool {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        dr + dc == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// One of the four orthogonal directions a path may extend in.
///
/// Diagonal moves are not modelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `row - 1`.
    Up,
    /// `row + 1`.
    Down,
    /// `col - 1`.
    Left,
    /// `col + 1`.
    Right,
}

impl Direction {
    /// All four directions, in fan-out order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}
