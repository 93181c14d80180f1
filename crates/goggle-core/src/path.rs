//! Search paths: the ordered cells a search task has walked so far.

use crate::cell::{Cell, Direction};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Inline capacity for [`Path`]. Covers every path on the official 4×4
/// board without touching the heap.
const INLINE_CELLS: usize = 16;

/// An ordered walk of cells from an origin to the current frontier.
///
/// A `Path` always holds at least one cell. Extending a path copies it,
/// so a parent's path is never observed changing underneath a child.
///
/// Construction does not enforce legality: [`extended`](Path::extended)
/// happily steps off the grid or back onto a visited cell. The search
/// engine relies on this so that children, not parents, discover that
/// their own frontier is illegal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    cells: SmallVec<[Cell; INLINE_CELLS]>,
}

impl Path {
    /// A single-cell path starting at `origin`.
    pub fn new(origin: Cell) -> Self {
        Self {
            cells: smallvec![origin],
        }
    }

    /// Build a path from an explicit cell list.
    ///
    /// Returns `None` if `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let cells: SmallVec<[Cell; INLINE_CELLS]> = cells.into_iter().collect();
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    /// A copy of this path with one more cell, one step from the frontier
    /// in `dir`.
    pub fn extended(&self, dir: Direction) -> Self {
        let mut cells = SmallVec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(self.frontier().step(dir));
        Self { cells }
    }

    /// The first cell of the path.
    pub fn origin(&self) -> Cell {
        self.cells[0]
    }

    /// The most recently added cell.
    pub fn frontier(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Every cell before the frontier.
    pub fn visited(&self) -> &[Cell] {
        &self.cells[..self.cells.len() - 1]
    }

    /// All cells, origin first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells (always `>= 1`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`; a path has at least its origin.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `true` if no cell appears twice.
    pub fn is_simple(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, c)| !self.cells[..i].contains(c))
    }

    /// `true` if every consecutive pair of cells is an orthogonal step.
    pub fn is_connected(&self) -> bool {
        self.cells
            .windows(2)
            .all(|w| w[0].is_orthogonal_neighbour(w[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
