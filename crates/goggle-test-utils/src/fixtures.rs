//! Reusable boards and word lists.
//!
//! - [`cats_grid`] / [`cats_words`]: the 2×2 board `c a / t s` with
//!   `cas` and `cat`. Only `cas` is reachable, since `a` and `t` are
//!   diagonal.
//! - [`SAMPLE_WORDS`]: common short words, enough to get hits on most
//!   random boards.
//! - [`sampled_words`]: strings spelled by random simple walks on a
//!   given board, mixed with [`SAMPLE_WORDS`]. Every walk string is
//!   reachable by construction.

use goggle_core::{Direction, Path};
use goggle_dict::{Dictionary, MIN_WORD_LEN};
use goggle_grid::Grid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

pub fn cats_grid() -> Grid {
    Grid::new([["c", "a"], ["t", "s"]]).expect("fixture grid is valid")
}

pub fn cats_words() -> Dictionary {
    Dictionary::new(["cas", "cat"]).expect("fixture words are valid")
}

pub const SAMPLE_WORDS: &[&str] = &[
    "ant", "art", "ate", "den", "dot", "ear", "eat", "era", "net", "not", "oat", "one", "ore",
    "rat", "red", "rot", "sat", "sea", "see", "set", "sit", "tan", "tea", "ten", "tie", "toe",
    "ton", "rate", "rest", "rise", "road", "rose", "seat", "side", "site", "sort", "star", "stone",
    "tone", "tree", "note", "notes", "stare", "train", "tears", "enter", "resort",
];

/// `walks` strings spelled by random simple paths on `grid`, each at
/// least [`MIN_WORD_LEN`] and at most `max_len` letters, plus
/// [`SAMPLE_WORDS`]. Deterministic for a given `seed`.
///
/// Walks that get stuck before reaching [`MIN_WORD_LEN`] letters are
/// discarded, so a board too small for any such path yields only the
/// sample words.
pub fn sampled_words(grid: &Grid, seed: u64, walks: usize, max_len: usize) -> Dictionary {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let origins: Vec<_> = grid.cells().collect();
    let mut words: Vec<String> = SAMPLE_WORDS.iter().map(|w| w.to_string()).collect();

    for _ in 0..walks {
        let origin = origins[rng.random_range(0..origins.len())];
        let target = rng.random_range(MIN_WORD_LEN..=max_len.max(MIN_WORD_LEN));
        let mut path = Path::new(origin);
        while path.len() < target {
            let legal: Vec<Path> = Direction::ALL
                .iter()
                .map(|&d| path.extended(d))
                .filter(|p| grid.is_legal(p))
                .collect();
            if legal.is_empty() {
                break;
            }
            path = legal[rng.random_range(0..legal.len())].clone();
        }
        if path.len() >= MIN_WORD_LEN {
            if let Some(word) = grid.spell(&path) {
                words.push(word);
            }
        }
    }
    Dictionary::new(words).expect("sampled words meet the minimum length")
}
