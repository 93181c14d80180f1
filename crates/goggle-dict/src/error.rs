//! Error types for dictionary construction and loading.

use std::fmt;

/// Errors arising while building or loading a [`Dictionary`](crate::Dictionary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// An entry is shorter than [`MIN_WORD_LEN`](crate::MIN_WORD_LEN).
    WordTooShort {
        /// The rejected entry.
        word: String,
    },
    /// [`Dictionary::from_sorted`](crate::Dictionary::from_sorted) was given
    /// entries out of ascending order.
    Unsorted {
        /// Index of the first out-of-order entry.
        index: usize,
        /// The entry before it.
        previous: String,
        /// The out-of-order entry.
        word: String,
    },
    /// Reading the word source failed.
    Io {
        /// Description of the failure, including the path when known.
        reason: String,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordTooShort { word } => {
                write!(f, "word {word:?} is shorter than {} letters", crate::MIN_WORD_LEN)
            }
            Self::Unsorted {
                index,
                previous,
                word,
            } => {
                write!(f, "entry {index} ({word:?}) sorts before {previous:?}")
            }
            Self::Io { reason } => write!(f, "reading word list: {reason}"),
        }
    }
}

impl std::error::Error for DictionaryError {}
