//! Concurrent search engine for the Goggle word-grid solver.
//!
//! A search is a tree of [`SearchTask`](task)s. One root task starts on
//! every grid cell; each task checks its path, narrows its candidate
//! words to the prefix it spells, reports a word on an exact match, and
//! fans out to four children, one per orthogonal direction. A task is
//! complete once all four children are complete, and the search is
//! complete once every root task is.
//!
//! Tasks run on a bounded pool of worker threads fed by a crossbeam
//! channel. Completion is counted, never awaited: each task's fan-in
//! counter is touched only by its direct children, and the child that
//! delivers the last signal forwards completion upward. The coordinating
//! thread waits on the root [`completion`] channel, then closes the word
//! stream so the [`aggregate`] thread can finish.
//!
//! ```
//! use goggle_dict::Dictionary;
//! use goggle_engine::{SearchConfig, Solver};
//! use goggle_grid::Grid;
//!
//! let grid = Grid::new([["c", "a"], ["t", "s"]]).unwrap();
//! let dict = Dictionary::new(["cas", "cat"]).unwrap();
//! let outcome = Solver::new(SearchConfig::default()).unwrap().solve(&grid, &dict).unwrap();
//! assert_eq!(outcome.found_count(), 1);
//! assert!(outcome.results.contains("cas"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod completion;
pub mod config;
pub mod error;
pub mod metrics;
pub(crate) mod pool;
pub mod solver;
pub mod task;

pub use aggregate::{deduplicate, top_n_by_length, ResultAggregator, ResultSet};
pub use config::{ConfigError, SearchConfig, TieBreak};
pub use error::EngineError;
pub use metrics::SearchMetrics;
pub use solver::{solve, SearchOutcome, Solver};
pub use task::FoundWord;
