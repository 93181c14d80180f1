//! Prefix-narrowed views of a [`Dictionary`](crate::Dictionary).

use std::ops::Range;
use std::sync::Arc;

/// The contiguous run of dictionary words still consistent with the
/// string spelled so far.
///
/// A `CandidateSet` is an index range into the dictionary's shared,
/// immutable word table. Narrowing never mutates a set; it returns a new
/// one, so a parent's view is unaffected by what its children do with
/// theirs. Cloning copies two indices and bumps a reference count.
#[derive(Clone, Debug)]
pub struct CandidateSet {
    words: Arc<[String]>,
    range: Range<usize>,
}

impl CandidateSet {
    pub(crate) fn full(words: Arc<[String]>) -> Self {
        let range = 0..words.len();
        Self { words, range }
    }

    /// The words in this view, ascending.
    pub fn as_slice(&self) -> &[String] {
        &self.words[self.range.clone()]
    }

    /// Number of words in this view.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// `true` if no word in this view remains; nothing further down a
    /// path with this view can match.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The maximal run of words in this view that start with `prefix`.
    ///
    /// Words sharing a prefix are contiguous in sorted order and sort at
    /// or after the prefix itself, so the run is located with two binary
    /// searches over the current range. Narrowing an already-narrowed
    /// view only searches the parent's run.
    ///
    /// ```
    /// use goggle_dict::Dictionary;
    ///
    /// let dict = Dictionary::new(["cab", "cat", "cats", "dog"]).unwrap();
    /// let ca = dict.candidates().filter("ca");
    /// assert_eq!(ca.as_slice(), &["cab", "cat", "cats"]);
    /// let cat = ca.filter("cat");
    /// assert_eq!(cat.as_slice(), &["cat", "cats"]);
    /// assert!(cat.filter("catz").is_empty());
    /// ```
    pub fn filter(&self, prefix: &str) -> CandidateSet {
        let slice = self.as_slice();
        let lo = slice.partition_point(|w| w.as_str() < prefix);
        let run = slice[lo..].partition_point(|w| w.starts_with(prefix));
        let start = self.range.start + lo;
        CandidateSet {
            words: Arc::clone(&self.words),
            range: start..start + run,
        }
    }

    /// Exact membership within this view.
    pub fn contains(&self, word: &str) -> bool {
        self.as_slice()
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// Iterate the words in this view.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.as_slice().iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use crate::Dictionary;
    use proptest::prelude::*;

    fn dict() -> Dictionary {
        Dictionary::new(["abs", "cab", "cabs", "cat", "cats", "dab", "dog"]).unwrap()
    }

    #[test]
    fn filter_empty_prefix_keeps_everything() {
        let d = dict();
        assert_eq!(d.candidates().filter("").len(), d.len());
    }

    #[test]
    fn filter_narrows_to_prefix_run() {
        let d = dict();
        let c = d.candidates().filter("c");
        assert_eq!(c.as_slice(), &["cab", "cabs", "cat", "cats"]);
        let cab = c.filter("cab");
        assert_eq!(cab.as_slice(), &["cab", "cabs"]);
        assert!(cab.contains("cab"));
        assert!(!cab.contains("cat"));
    }

    #[test]
    fn filter_missing_prefix_is_empty() {
        let d = dict();
        assert!(d.candidates().filter("z").is_empty());
        assert!(d.candidates().filter("ca").filter("cad").is_empty());
        // A prefix past the end of the list.
        assert!(d.candidates().filter("zzz").is_empty());
    }

    #[test]
    fn filter_longer_than_every_word() {
        let d = dict();
        assert!(d.candidates().filter("catsup").is_empty());
    }

    #[test]
    fn filtered_view_does_not_see_outside_words() {
        let d = dict();
        let c = d.candidates().filter("ca");
        // "dab" is in the dictionary but not in this view.
        assert!(!c.contains("dab"));
        assert!(c.filter("d").is_empty());
    }

    #[test]
    fn parent_view_is_unchanged_by_narrowing() {
        let d = dict();
        let parent = d.candidates().filter("c");
        let before = parent.len();
        let _child = parent.filter("cat");
        assert_eq!(parent.len(), before);
    }

    fn arb_words() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[abc]{3,6}", 0..40)
    }

    proptest! {
        #[test]
        fn filter_matches_linear_scan(words in arb_words(), prefix in "[abc]{0,4}") {
            let d = Dictionary::new(words).unwrap();
            let view = d.candidates().filter(&prefix);
            let fast: Vec<&str> = view.iter().collect();
            let slow: Vec<&str> = d
                .words()
                .iter()
                .map(String::as_str)
                .filter(|w| w.starts_with(prefix.as_str()))
                .collect();
            prop_assert_eq!(fast, slow);
        }

        #[test]
        fn nested_filter_equals_direct_filter(
            words in arb_words(),
            a in "[abc]{0,2}",
            b in "[abc]{0,2}",
        ) {
            let d = Dictionary::new(words).unwrap();
            let ab = format!("{a}{b}");
            let nested_view = d.candidates().filter(&a).filter(&ab);
            let direct_view = d.candidates().filter(&ab);
            let nested: Vec<&str> = nested_view.iter().collect();
            let direct: Vec<&str> = direct_view.iter().collect();
            prop_assert_eq!(nested, direct);
        }

        #[test]
        fn contains_matches_membership(words in arb_words(), word in "[abc]{3,6}") {
            let d = Dictionary::new(words.clone()).unwrap();
            prop_assert_eq!(d.contains(&word), words.contains(&word));
        }
    }
}
