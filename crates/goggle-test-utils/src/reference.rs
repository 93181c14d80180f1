//! Sequential reference solver.
//!
//! A plain recursive depth-first search with a visited mask and a
//! binary-searched prefix check against the sorted word slice. It shares
//! no search code with the engine, which makes it a useful oracle.

use std::collections::BTreeSet;

use goggle_core::{Cell, Direction};
use goggle_dict::Dictionary;
use goggle_grid::Grid;

/// Every word of `dict` spelled by a simple orthogonal path on `grid`
/// of at most `max_depth` cells.
pub fn reference_solve(
    grid: &Grid,
    dict: &Dictionary,
    max_depth: Option<usize>,
) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut visited = vec![false; grid.cell_count()];
    let mut spelled = String::new();
    let limit = max_depth.unwrap_or(usize::MAX);
    for origin in grid.cells() {
        walk(grid, dict.words(), origin, limit, &mut visited, &mut spelled, &mut found);
    }
    found
}

fn index(grid: &Grid, cell: Cell) -> usize {
    cell.row as usize * grid.cols() + cell.col as usize
}

fn has_prefix(words: &[String], prefix: &str) -> bool {
    let i = words.partition_point(|w| w.as_str() < prefix);
    words.get(i).is_some_and(|w| w.starts_with(prefix))
}

fn walk(
    grid: &Grid,
    words: &[String],
    cell: Cell,
    remaining: usize,
    visited: &mut [bool],
    spelled: &mut String,
    found: &mut BTreeSet<String>,
) {
    let Some(letter) = grid.letter(cell) else {
        return;
    };
    let i = index(grid, cell);
    if visited[i] {
        return;
    }
    spelled.push(letter);
    if has_prefix(words, spelled) {
        if words.binary_search(spelled).is_ok() {
            found.insert(spelled.clone());
        }
        if remaining > 1 {
            visited[i] = true;
            for dir in Direction::ALL {
                walk(grid, words, cell.step(dir), remaining - 1, visited, spelled, found);
            }
            visited[i] = false;
        }
    }
    spelled.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{cats_grid, cats_words};

    #[test]
    fn cats_fixture_finds_cas() {
        let found = reference_solve(&cats_grid(), &cats_words(), None);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), ["cas"]);
    }

    #[test]
    fn depth_limit_excludes_longer_words() {
        let grid = Grid::from_strs(["cast"]).unwrap();
        let dict = Dictionary::new(["cas", "cast"]).unwrap();
        assert_eq!(reference_solve(&grid, &dict, None).len(), 2);
        assert_eq!(reference_solve(&grid, &dict, Some(3)).len(), 1);
    }

    #[test]
    fn letters_are_not_reused() {
        let grid = Grid::from_strs(["ab"]).unwrap();
        let dict = Dictionary::new(["aba", "bab"]).unwrap();
        assert!(reference_solve(&grid, &dict, None).is_empty());
    }
}
