//! Random board generation.
//!
//! Two generators, both deterministic for a given RNG state:
//!
//! - [`official_board`]: the classic 4×4 game. Cell `i` (row-major) rolls
//!   die `i` and shows one of its six faces.
//! - [`generic_board`]: any square size. Each cell draws a letter from a
//!   cumulative English-letter frequency table.
//!
//! [`random_board`] seeds a ChaCha8 RNG and picks between them by size.

use crate::error::GridError;
use crate::grid::Grid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Side length of the official board.
pub const OFFICIAL_SIZE: usize = 4;

/// The sixteen dice of the official board, one per cell in row-major order.
const DICE: [&str; OFFICIAL_SIZE * OFFICIAL_SIZE] = [
    "aaeegn", "elrtty", "aoottw", "abbjoo", "ehrtvw", "cimotu", "distty", "eiosst", "delrvy",
    "achops", "himnqu", "eeinsu", "eeghnw", "affkps", "hlnnrz", "deilrx",
];

/// Upper bound of each letter's slice of `[0, 1)`, ascending.
const LETTER_CDF: [(char, f32); 26] = [
    ('a', 0.062500),
    ('b', 0.083333),
    ('c', 0.104167),
    ('d', 0.135417),
    ('e', 0.250000),
    ('f', 0.270833),
    ('g', 0.291667),
    ('h', 0.343750),
    ('i', 0.406250),
    ('j', 0.416667),
    ('k', 0.427083),
    ('l', 0.468750),
    ('m', 0.489583),
    ('n', 0.552083),
    ('o', 0.625000),
    ('p', 0.645833),
    ('q', 0.656250),
    ('r', 0.708333),
    ('s', 0.770833),
    ('t', 0.864583),
    ('u', 0.895833),
    ('v', 0.916667),
    ('w', 0.947917),
    ('x', 0.958333),
    ('y', 0.989583),
    ('z', 1.000000),
];

/// Roll the official 4×4 board.
pub fn official_board<R: Rng>(rng: &mut R) -> Grid {
    let letters: Vec<char> = DICE
        .iter()
        .map(|die| {
            let faces = die.as_bytes();
            faces[rng.random_range(0..faces.len())] as char
        })
        .collect();
    Grid::from_parts(OFFICIAL_SIZE, OFFICIAL_SIZE, letters)
}

/// Draw one letter from the frequency table.
fn frequency_letter<R: Rng>(rng: &mut R) -> char {
    let x: f32 = rng.random();
    LETTER_CDF
        .iter()
        .find(|&&(_, upper)| x <= upper)
        .map_or('z', |&(letter, _)| letter)
}

/// Fill a `side × side` board from the letter frequency table.
///
/// Returns `Err(GridError::EmptyGrid)` if `side` is 0.
pub fn generic_board<R: Rng>(rng: &mut R, side: usize) -> Result<Grid, GridError> {
    if side == 0 {
        return Err(GridError::EmptyGrid);
    }
    let letters: Vec<char> = (0..side * side).map(|_| frequency_letter(rng)).collect();
    Grid::from_letters(side, side, letters)
}

/// Generate a `side × side` board from `seed`.
///
/// Side 4 rolls the official dice; any other size uses the frequency
/// table. The same seed and side always produce the same board.
///
/// ```
/// use goggle_grid::random_board;
///
/// let a = random_board(7, 4).unwrap();
/// let b = random_board(7, 4).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn random_board(seed: u64, side: usize) -> Result<Grid, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    if side == OFFICIAL_SIZE {
        Ok(official_board(&mut rng))
    } else {
        generic_board(&mut rng, side)
    }
}
