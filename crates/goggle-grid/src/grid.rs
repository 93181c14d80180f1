//! The immutable letter grid.

use crate::error::GridError;
use goggle_core::{Cell, Path};

/// A fixed `rows × cols` table of single lowercase letters.
///
/// Cell `(row, col)` is on the grid iff `0 <= row < rows` and
/// `0 <= col < cols`. Letters are stored row-major. A grid never changes
/// after construction, so it can be shared freely between search
/// workers behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Maximum dimension size: cell coordinates use `i32`.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Build a grid from rows of single-letter strings.
    ///
    /// Letters are lowercased. Fails fast on an empty grid, rows of
    /// unequal length, or a cell that is not exactly one ASCII letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use goggle_grid::Grid;
    ///
    /// let grid = Grid::new([["c", "a"], ["t", "s"]]).unwrap();
    /// assert_eq!(grid.cell_count(), 4);
    /// assert!(Grid::new(Vec::<Vec<&str>>::new()).is_err());
    /// ```
    pub fn new<R, S>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut letters = Vec::new();
        let mut cols = 0usize;
        let mut row_count = 0usize;

        for (r, row) in rows.into_iter().enumerate() {
            let mut found = 0usize;
            for (c, cell) in row.into_iter().enumerate() {
                let contents = cell.as_ref();
                let mut chars = contents.chars();
                let letter = match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_alphabetic() => ch.to_ascii_lowercase(),
                    _ => {
                        return Err(GridError::InvalidCell {
                            cell: Cell::new(r as i32, c as i32),
                            contents: contents.to_string(),
                        })
                    }
                };
                letters.push(letter);
                found += 1;
            }
            if r == 0 {
                cols = found;
            } else if found != cols {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: cols,
                    found,
                });
            }
            row_count += 1;
        }

        Self::from_letters(row_count, cols, letters)
    }

    /// Build a grid from one string per row, one letter per character.
    ///
    /// ```
    /// use goggle_grid::Grid;
    ///
    /// let grid = Grid::from_strs(["ca", "ts"]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 2);
    /// ```
    pub fn from_strs<S: AsRef<str>>(rows: impl IntoIterator<Item = S>) -> Result<Self, GridError> {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().map(String::from).collect())
            .collect();
        Self::new(rows)
    }

    /// Build a grid directly from row-major letters. Used by the board
    /// generators, which already produce one letter per cell.
    pub(crate) fn from_letters(
        rows: usize,
        cols: usize,
        letters: Vec<char>,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self::from_parts(rows, cols, letters))
    }

    /// Assemble a grid whose dimensions are already known to be valid.
    pub(crate) fn from_parts(rows: usize, cols: usize, letters: Vec<char>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(letters.len(), rows * cols);
        Self {
            rows,
            cols,
            letters,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Always `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row-major index of `cell`, or `None` if it is off the grid.
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (r, c) = (cell.row as usize, cell.col as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }

    /// `true` if `cell` lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// The letter at `cell`, or `None` if it is off the grid.
    pub fn letter(&self, cell: Cell) -> Option<char> {
        self.index(cell).map(|i| self.letters[i])
    }

    /// `true` iff the path's frontier is on the grid and does not repeat
    /// any earlier cell of the path.
    ///
    /// Only the frontier is examined: a path is built one legal step at a
    /// time, so every earlier cell has already passed this check.
    pub fn is_legal(&self, path: &Path) -> bool {
        let frontier = path.frontier();
        self.contains(frontier) && !path.visited().contains(&frontier)
    }

    /// The string spelled by walking `path`, or `None` if any cell is off
    /// the grid.
    pub fn spell(&self, path: &Path) -> Option<String> {
        path.cells().iter().map(|&c| self.letter(c)).collect()
    }

    /// Every cell in row-major canonical order: `(0,0), (0,1), ...`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r as i32, c as i32)))
    }

    /// Letters of one row, left to right.
    pub fn row_letters(&self, row: usize) -> &[char] {
        &self.letters[row * self.cols..(row + 1) * self.cols]
    }
}
