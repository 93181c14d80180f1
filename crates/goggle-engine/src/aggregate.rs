//! Result aggregation: deduplication and longest-word selection.
//!
//! Search workers send every match they find down a single channel; one
//! aggregator thread drains it into a [`ResultAggregator`]. The same word
//! is often found along several paths, so the aggregator keeps the first
//! path seen for each distinct word and drops the rest.

use crossbeam_channel::Receiver;
use goggle_core::Path;
use indexmap::{IndexMap, IndexSet};

use crate::config::TieBreak;
use crate::task::FoundWord;

/// Distinct values of `words`.
///
/// The order of the result is unspecified; callers must treat it as
/// arbitrary.
///
/// ```
/// use goggle_engine::deduplicate;
///
/// let mut d = deduplicate(["cat", "dog", "cat"]);
/// d.sort();
/// assert_eq!(d, ["cat", "dog"]);
/// ```
pub fn deduplicate<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Vec<String> {
    let unique: IndexSet<String> = words.into_iter().map(Into::into).collect();
    unique.into_iter().collect()
}

/// The `n` longest of `words`, longest first.
///
/// Walks `words` once with `n` slots, all initially empty. Each word
/// takes the first slot holding a strictly shorter word, pushing that
/// slot and every later one back by one and dropping the last. Equal
/// lengths never displace each other, so among ties the word seen first
/// ranks higher. With fewer than `n` words the trailing slots stay as
/// empty strings.
///
/// ```
/// use goggle_engine::top_n_by_length;
///
/// let top = top_n_by_length(["ox", "zebra", "cat", "dog"], 3);
/// assert_eq!(top, ["zebra", "cat", "dog"]);
/// assert_eq!(top_n_by_length(["cat"], 2), ["cat", ""]);
/// ```
pub fn top_n_by_length<S: AsRef<str>>(words: impl IntoIterator<Item = S>, n: usize) -> Vec<String> {
    let mut slots = vec![String::new(); n];
    let mut lengths = vec![0usize; n];
    for word in words {
        let word = word.as_ref();
        let len = word.chars().count();
        if let Some(i) = lengths.iter().position(|&l| l < len) {
            slots.pop();
            lengths.pop();
            slots.insert(i, word.to_string());
            lengths.insert(i, len);
        }
    }
    slots
}

/// Collects [`FoundWord`]s into a [`ResultSet`].
#[derive(Debug, Default)]
pub struct ResultAggregator {
    found: IndexMap<String, Path>,
    received: u64,
}

impl ResultAggregator {
    /// An empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one emission. Repeats of a known word are counted and
    /// otherwise ignored.
    pub fn record(&mut self, found: FoundWord) {
        self.received += 1;
        self.found.entry(found.word).or_insert(found.path);
    }

    /// Emissions recorded so far, duplicates included.
    pub fn received(&self) -> u64 {
        self.received
    }

    /// Record everything from `rx` until every sender is dropped.
    pub fn drain(mut self, rx: &Receiver<FoundWord>) -> ResultSet {
        for found in rx.iter() {
            self.record(found);
        }
        self.finish()
    }

    /// Close the aggregator.
    pub fn finish(self) -> ResultSet {
        ResultSet { found: self.found }
    }
}

/// The distinct words found by a search, each with one path that spells
/// it.
///
/// Iteration order follows first arrival, which depends on scheduling
/// and is not meaningful.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    found: IndexMap<String, Path>,
}

impl ResultSet {
    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.found.len()
    }

    /// `true` if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// `true` if `word` was found.
    pub fn contains(&self, word: &str) -> bool {
        self.found.contains_key(word)
    }

    /// A path that spells `word`, if it was found.
    pub fn path_of(&self, word: &str) -> Option<&Path> {
        self.found.get(word)
    }

    /// The distinct words, in arrival order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.found.keys().map(String::as_str)
    }

    /// Each distinct word with its path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> + '_ {
        self.found.iter().map(|(w, p)| (w.as_str(), p))
    }

    /// The distinct words, sorted.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words().collect();
        words.sort_unstable();
        words
    }

    /// The `n` longest words, ranked by [`top_n_by_length`] with ties
    /// ordered by `tie_break`.
    pub fn longest(&self, n: usize, tie_break: TieBreak) -> Vec<String> {
        match tie_break {
            TieBreak::Arrival => top_n_by_length(self.words(), n),
            TieBreak::Lexicographic => top_n_by_length(self.sorted_words(), n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goggle_core::Cell;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn found(word: &str, origin: (i32, i32)) -> FoundWord {
        FoundWord {
            word: word.to_string(),
            path: Path::new(Cell::from(origin)),
        }
    }

    // ── top_n_by_length ─────────────────────────────────────────

    #[test]
    fn top_n_ties_favour_earlier_word() {
        let top = top_n_by_length(["cat", "dog", "emu"], 2);
        assert_eq!(top, ["cat", "dog"]);
    }

    #[test]
    fn top_n_longer_word_shifts_others_back() {
        let top = top_n_by_length(["cat", "dog", "horse"], 2);
        assert_eq!(top, ["horse", "cat"]);
    }

    #[test]
    fn top_n_pads_with_empty_strings() {
        let top = top_n_by_length(Vec::<String>::new(), 3);
        assert_eq!(top, ["", "", ""]);
    }

    #[test]
    fn top_n_zero_is_empty() {
        assert!(top_n_by_length(["cat"], 0).is_empty());
    }

    // ── ResultAggregator ────────────────────────────────────────

    #[test]
    fn aggregator_keeps_first_path() {
        let mut agg = ResultAggregator::new();
        agg.record(found("cat", (0, 0)));
        agg.record(found("cat", (1, 1)));
        agg.record(found("dog", (2, 2)));
        assert_eq!(agg.received(), 3);
        let set = agg.finish();
        assert_eq!(set.len(), 2);
        assert_eq!(set.path_of("cat").unwrap().origin(), Cell::new(0, 0));
        assert!(set.path_of("emu").is_none());
    }

    #[test]
    fn aggregator_drains_until_senders_drop() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let tx2 = tx.clone();
        tx.send(found("cat", (0, 0))).unwrap();
        tx2.send(found("cat", (0, 1))).unwrap();
        tx2.send(found("horse", (0, 2))).unwrap();
        drop(tx);
        drop(tx2);
        let set = ResultAggregator::new().drain(&rx);
        assert_eq!(set.sorted_words(), ["cat", "horse"]);
    }

    #[test]
    fn longest_lexicographic_is_reproducible() {
        let mut a = ResultAggregator::new();
        let mut b = ResultAggregator::new();
        for w in ["dog", "cat", "emu", "horse"] {
            a.record(found(w, (0, 0)));
        }
        for w in ["horse", "emu", "cat", "dog"] {
            b.record(found(w, (0, 0)));
        }
        let (a, b) = (a.finish(), b.finish());
        assert_eq!(
            a.longest(3, TieBreak::Lexicographic),
            ["horse", "cat", "dog"]
        );
        assert_eq!(
            a.longest(3, TieBreak::Lexicographic),
            b.longest(3, TieBreak::Lexicographic)
        );
        assert_eq!(a.longest(3, TieBreak::Arrival), ["horse", "dog", "cat"]);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_words() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-e]{3,7}", 0..30)
    }

    proptest! {
        #[test]
        fn dedup_is_idempotent(words in arb_words()) {
            let once = deduplicate(words.clone());
            let twice = deduplicate(once.clone());
            prop_assert_eq!(&once, &twice);
            let as_set: BTreeSet<String> = words.into_iter().collect();
            let deduped: BTreeSet<String> = once.iter().cloned().collect();
            prop_assert_eq!(once.len(), deduped.len());
            prop_assert_eq!(deduped, as_set);
        }

        #[test]
        fn top_n_is_sorted_by_length(words in arb_words(), n in 0usize..12) {
            let distinct = deduplicate(words);
            let top = top_n_by_length(&distinct, n);
            prop_assert_eq!(top.len(), n);
            for w in top.windows(2) {
                prop_assert!(w[0].len() >= w[1].len());
            }
            for w in top.iter().filter(|w| !w.is_empty()) {
                prop_assert!(distinct.contains(w));
            }
            let filled = top.iter().filter(|w| !w.is_empty()).count();
            prop_assert_eq!(filled, n.min(distinct.len()));
        }

        #[test]
        fn top_n_holds_the_longest(words in arb_words(), n in 1usize..8) {
            let distinct = deduplicate(words);
            let top = top_n_by_length(&distinct, n);
            let shortest_kept = top.iter().map(String::len).min().unwrap_or(0);
            let kept: BTreeSet<&String> = top.iter().collect();
            for w in distinct.iter().filter(|w| !kept.contains(w)) {
                prop_assert!(w.len() <= shortest_kept);
            }
        }
    }
}
