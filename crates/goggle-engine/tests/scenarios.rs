//! End-to-end search scenarios with known answers.
//!
//! Each test builds a board and word list, runs the concurrent solver,
//! and checks the distinct-word count, the found words, and the top-N
//! list.

use std::io::Cursor;

use goggle_dict::{load, Dictionary};
use goggle_engine::{SearchConfig, Solver, TieBreak};
use goggle_grid::Grid;
use goggle_test_utils::{cats_grid, cats_words};

fn solver(workers: usize) -> Solver {
    Solver::new(SearchConfig::default().with_workers(workers)).unwrap()
}

// ── Known answers ───────────────────────────────────────────────

#[test]
fn two_by_two_finds_only_cas() {
    let outcome = solver(4).solve(&cats_grid(), &cats_words()).unwrap();
    assert_eq!(outcome.found_count(), 1);
    assert_eq!(outcome.results.sorted_words(), ["cas"]);
    assert!(!outcome.results.contains("cat"), "a and t are diagonal");
}

#[test]
fn empty_word_list_terminates_with_nothing() {
    let grid = Grid::from_strs(["abcd", "efgh", "ijkl", "mnop"]).unwrap();
    let outcome = solver(4).solve(&grid, &Dictionary::empty()).unwrap();
    assert_eq!(outcome.found_count(), 0);
    assert!(outcome.longest.iter().all(String::is_empty));
    assert_eq!(outcome.metrics.pruned_branches, 16);
    assert_eq!(outcome.metrics.tasks_executed, 16);
}

#[test]
fn short_entries_are_dropped_at_load() {
    let dict = load::from_reader(Cursor::new("a\nan\n")).unwrap();
    assert!(dict.is_empty());
    let grid = Grid::new([["a"]]).unwrap();
    let outcome = solver(2).solve(&grid, &dict).unwrap();
    assert_eq!(outcome.found_count(), 0);
}

#[test]
fn single_cell_board_never_spells_a_word() {
    let grid = Grid::new([["a"]]).unwrap();
    let dict = Dictionary::new(["aaa"]).unwrap();
    let outcome = solver(2).solve(&grid, &dict).unwrap();
    assert_eq!(outcome.found_count(), 0);
}

#[test]
fn snake_path_is_found() {
    // c a t
    // x x s
    let grid = Grid::from_strs(["cat", "xxs"]).unwrap();
    let dict = Dictionary::new(["cats", "cast", "scat"]).unwrap();
    let outcome = solver(3).solve(&grid, &dict).unwrap();
    assert_eq!(outcome.results.sorted_words(), ["cats"]);
    let path = outcome.results.path_of("cats").unwrap();
    assert!(path.is_simple());
    assert!(path.is_connected());
    assert_eq!(grid.spell(path).as_deref(), Some("cats"));
}

#[test]
fn duplicate_paths_count_once() {
    // "aba" reachable from both ends and through either middle b.
    let grid = Grid::from_strs(["ab", "ba"]).unwrap();
    let dict = Dictionary::new(["aba", "bab"]).unwrap();
    let outcome = solver(4).solve(&grid, &dict).unwrap();
    assert_eq!(outcome.found_count(), 2);
    assert!(outcome.metrics.words_emitted > 2);
}

// ── Configuration ───────────────────────────────────────────────

#[test]
fn depth_cap_limits_word_length() {
    let grid = Grid::from_strs(["cast"]).unwrap();
    let dict = Dictionary::new(["cas", "cast"]).unwrap();

    let uncapped = solver(2).solve(&grid, &dict).unwrap();
    assert_eq!(uncapped.found_count(), 2);

    let capped = Solver::new(SearchConfig::default().with_workers(2).with_max_depth(3))
        .unwrap()
        .solve(&grid, &dict)
        .unwrap();
    assert_eq!(capped.results.sorted_words(), ["cas"]);
    assert!(capped.metrics.depth_capped > 0);
}

#[test]
fn lexicographic_tie_break_is_stable_across_runs() {
    let grid = Grid::from_strs(["stone", "areat", "notes"]).unwrap();
    let dict = Dictionary::new([
        "ant", "art", "eat", "net", "not", "oat", "one", "sat", "tan", "ten", "toe", "ton",
    ])
    .unwrap();
    let solver = Solver::new(
        SearchConfig::default()
            .with_workers(8)
            .with_top_n(3)
            .with_tie_break(TieBreak::Lexicographic),
    )
    .unwrap();

    let first = solver.solve(&grid, &dict).unwrap();
    for _ in 0..10 {
        let again = solver.solve(&grid, &dict).unwrap();
        assert_eq!(again.longest, first.longest);
        assert_eq!(again.results.sorted_words(), first.results.sorted_words());
    }
    let mut expected: Vec<&str> = first.results.sorted_words();
    expected.truncate(3);
    assert_eq!(first.longest, expected);
}

#[test]
fn top_n_larger_than_results_is_padded() {
    let outcome = Solver::new(SearchConfig::default().with_workers(1).with_top_n(5))
        .unwrap()
        .solve(&cats_grid(), &cats_words())
        .unwrap();
    assert_eq!(outcome.longest, ["cas", "", "", "", ""]);
}
