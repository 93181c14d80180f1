//! The sorted, immutable word list.

use crate::candidates::CandidateSet;
use crate::error::DictionaryError;
use std::sync::Arc;

/// Shortest word the solver will ever report.
pub const MIN_WORD_LEN: usize = 3;

/// An immutable word list in ascending lexicographic order.
///
/// Sorted order is a construction invariant, not a caller promise:
/// [`new`](Dictionary::new) sorts and deduplicates its input, and
/// [`from_sorted`](Dictionary::from_sorted) rejects out-of-order input.
/// [`CandidateSet::filter`] depends on it to locate prefix runs by binary
/// search.
///
/// Cloning is cheap; the words live behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    words: Arc<[String]>,
}

impl Dictionary {
    /// Build a dictionary from words in any order.
    ///
    /// Duplicates are removed. Every entry must have at least
    /// [`MIN_WORD_LEN`] characters; shorter entries are a configuration
    /// error, since the loader is expected to have dropped them already.
    ///
    /// ```
    /// use goggle_dict::Dictionary;
    ///
    /// let dict = Dictionary::new(["cat", "cas", "cat"]).unwrap();
    /// assert_eq!(dict.words(), &["cas".to_string(), "cat".to_string()]);
    /// assert!(Dictionary::new(["an"]).is_err());
    /// ```
    pub fn new<S: Into<String>>(
        words: impl IntoIterator<Item = S>,
    ) -> Result<Self, DictionaryError> {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        check_lengths(&words)?;
        words.sort_unstable();
        words.dedup();
        Ok(Self {
            words: words.into(),
        })
    }

    /// Build a dictionary from words that must already be in ascending
    /// order. Out-of-order input is rejected rather than silently
    /// producing incomplete searches. Adjacent duplicates are dropped.
    pub fn from_sorted<S: Into<String>>(
        words: impl IntoIterator<Item = S>,
    ) -> Result<Self, DictionaryError> {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        check_lengths(&words)?;
        if let Some(i) = words.windows(2).position(|w| w[0] > w[1]) {
            return Err(DictionaryError::Unsorted {
                index: i + 1,
                previous: words[i].clone(),
                word: words[i + 1].clone(),
            });
        }
        words.dedup();
        Ok(Self {
            words: words.into(),
        })
    }

    /// A dictionary with no words.
    pub fn empty() -> Self {
        Self {
            words: Arc::from(Vec::<String>::new()),
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, ascending.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Exact membership test over the whole list.
    pub fn contains(&self, word: &str) -> bool {
        self.candidates().contains(word)
    }

    /// A view over every word: the starting point of a search.
    pub fn candidates(&self) -> CandidateSet {
        CandidateSet::full(Arc::clone(&self.words))
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::empty()
    }
}

fn check_lengths(words: &[String]) -> Result<(), DictionaryError> {
    match words.iter().find(|w| w.chars().count() < MIN_WORD_LEN) {
        Some(short) => Err(DictionaryError::WordTooShort {
            word: short.clone(),
        }),
        None => Ok(()),
    }
}
