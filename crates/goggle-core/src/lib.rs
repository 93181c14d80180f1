//! Core types for the Goggle word-grid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types every other crate in the workspace agrees on: grid
//! [`Cell`] coordinates, the orthogonal step [`Direction`]s, and the
//! search [`Path`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod path;

pub use cell::{Cell, Direction};
pub use path::Path;
