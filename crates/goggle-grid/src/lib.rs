//! Letter grids for the Goggle solver.
//!
//! The [`Grid`] is the immutable board the search engine walks. The
//! engine asks it two things: whether a path's frontier is legal, and
//! which letter sits under a cell.
//!
//! # Generation
//!
//! Boards are produced by [`generate`]: the official 4×4 board rolls one
//! face of each classic die, any other size draws letters from an
//! English frequency table. Both are driven by a seeded ChaCha8 RNG so
//! that a seed always yields the same board.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod generate;
pub mod grid;
mod render;

pub use error::GridError;
pub use generate::{generic_board, official_board, random_board, OFFICIAL_SIZE};
pub use grid::Grid;
