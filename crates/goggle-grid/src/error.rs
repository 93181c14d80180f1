//! Error types for grid construction and generation.

use goggle_core::Cell;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Expected number of columns (length of row 0).
        expected: usize,
        /// Actual number of columns in `row`.
        found: usize,
    },
    /// A cell does not hold exactly one alphabetic character.
    InvalidCell {
        /// Position of the offending cell.
        cell: Cell,
        /// The rejected contents.
        contents: String,
    },
    /// A dimension exceeds what a signed coordinate can address.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The maximum allowed size.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::InvalidCell { cell, contents } => {
                write!(f, "cell {cell} holds {contents:?}, expected a single letter")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
