//! Text rendering of a [`Grid`].
//!
//! Small boards print one space-separated row per line inside a frame.
//! Wider boards drop the spacing, and very wide boards are not printed
//! at all.

use crate::grid::Grid;
use std::fmt;

/// Boards wider than this print a placeholder instead of their letters.
const PLACEHOLDER_ABOVE: usize = 75;
/// Boards wider than this print without spacing between letters.
const COMPACT_ABOVE: usize = 35;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cols();
        if width > PLACEHOLDER_ABOVE {
            return write!(f, "The board's really big, but trust me, it's here.");
        }

        let compact = width > COMPACT_ABOVE;
        let rule = if compact {
            "-".repeat(width + 2)
        } else {
            "-".repeat(width * 2 + 3)
        };

        writeln!(f, "{rule}")?;
        for r in 0..self.rows() {
            if compact {
                write!(f, "|")?;
                for letter in self.row_letters(r) {
                    write!(f, "{letter}")?;
                }
            } else {
                write!(f, "| ")?;
                for letter in self.row_letters(r) {
                    write!(f, "{letter} ")?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}
