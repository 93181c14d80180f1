//! Test utilities for Goggle development.
//!
//! - [`fixtures`]: small boards and word lists with known answers, and
//!   word lists sampled from a board's own walks.
//! - [`reference`]: a single-threaded depth-first solver used as an
//!   oracle for the concurrent engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{cats_grid, cats_words, sampled_words, SAMPLE_WORDS};
pub use reference::reference_solve;
