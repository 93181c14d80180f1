//! Word lists for the Goggle solver.
//!
//! A [`Dictionary`] is an immutable, sorted, deduplicated word list. The
//! search engine never touches it directly; it works through
//! [`CandidateSet`] views, each the contiguous run of words sharing the
//! prefix spelled so far. Every step of a search narrows the parent's
//! view rather than rescanning the whole list, so the work per step
//! shrinks as paths grow.
//!
//! Words are loaded with [`load::from_path`] or [`load::from_reader`],
//! which lowercase every entry and drop anything shorter than
//! [`MIN_WORD_LEN`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidates;
pub mod dictionary;
pub mod error;
pub mod load;

pub use candidates::CandidateSet;
pub use dictionary::{Dictionary, MIN_WORD_LEN};
pub use error::DictionaryError;
