//! Benchmark profiles for the Goggle word-grid solver.
//!
//! - [`official_profile`]: the classic 4×4 board with a sampled word list
//! - [`large_profile`]: a 25×25 frequency-table board, large enough to
//!   keep a full pool busy

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use goggle_dict::Dictionary;
use goggle_grid::{random_board, Grid};
use goggle_test_utils::sampled_words;

/// A board and word list to search.
pub struct Profile {
    /// The board.
    pub grid: Grid,
    /// The word list.
    pub dict: Dictionary,
}

/// 4×4 official board, 500 sampled walks of up to 8 letters.
pub fn official_profile(seed: u64) -> Profile {
    profile(seed, 4, 500, 8)
}

/// 25×25 generic board, 5000 sampled walks of up to 10 letters.
pub fn large_profile(seed: u64) -> Profile {
    profile(seed, 25, 5_000, 10)
}

fn profile(seed: u64, side: usize, walks: usize, max_len: usize) -> Profile {
    let grid = random_board(seed, side).expect("benchmark board side is non-zero");
    let dict = sampled_words(&grid, seed, walks, max_len);
    Profile { grid, dict }
}
