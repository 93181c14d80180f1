//! Goggle: a concurrent word-grid solver.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Goggle sub-crates, plus the [`report`] formatting used by the
//! `goggle` binary.
//!
//! # Quick start
//!
//! ```rust
//! use goggle::prelude::*;
//!
//! let grid = Grid::new([["c", "a"], ["t", "s"]]).unwrap();
//! let dict = Dictionary::new(["cas", "cat"]).unwrap();
//! let outcome = Solver::new(SearchConfig::default().with_top_n(3))
//!     .unwrap()
//!     .solve(&grid, &dict)
//!     .unwrap();
//! assert_eq!(outcome.found_count(), 1);
//! assert_eq!(outcome.longest, ["cas", "", ""]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `goggle-core` | `Cell`, `Direction`, `Path` |
//! | [`grid`] | `goggle-grid` | The board, generators, rendering |
//! | [`dict`] | `goggle-dict` | Sorted word lists and candidate views |
//! | [`engine`] | `goggle-engine` | The concurrent solver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod report;

/// Coordinates, directions, and paths (`goggle-core`).
pub use goggle_core as types;

/// The letter board (`goggle-grid`).
///
/// [`grid::Grid`] plus the seeded generators [`grid::random_board`],
/// [`grid::official_board`], and [`grid::generic_board`].
pub use goggle_grid as grid;

/// Word lists (`goggle-dict`).
///
/// [`dict::Dictionary`] and its loaders in [`dict::load`].
pub use goggle_dict as dict;

/// The concurrent search (`goggle-engine`).
pub use goggle_engine as engine;

/// Common imports for typical Goggle usage.
///
/// ```rust
/// use goggle::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use goggle_core::{Cell, Direction, Path};

    // Board
    pub use goggle_grid::{random_board, Grid, GridError};

    // Words
    pub use goggle_dict::{Dictionary, DictionaryError};

    // Engine
    pub use goggle_engine::{
        ConfigError, EngineError, SearchConfig, SearchMetrics, SearchOutcome, Solver, TieBreak,
    };
}
