//! The search coordinator.
//!
//! [`Solver::solve`] owns one search from start to finish:
//!
//! 1. Spawn the aggregator thread and the worker pool.
//! 2. Queue one root task per grid cell, each holding a clone of the root
//!    completion sender and the full candidate set.
//! 3. Wait for one completion signal per cell.
//! 4. Stop the workers. Once they have exited, the last word sender is
//!    gone and the aggregator returns the [`ResultSet`].

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::unbounded;
use goggle_dict::Dictionary;
use goggle_grid::Grid;
use tracing::{debug, warn};

use crate::aggregate::ResultSet;
use crate::completion::{RootTracker, Upstream};
use crate::config::{ConfigError, SearchConfig};
use crate::error::EngineError;
use crate::metrics::SearchMetrics;
use crate::pool::{self, SearchPool, AGGREGATOR_THREAD};
use crate::task::{SearchTask, TaskContext};

/// Everything a finished search produced.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Every distinct word found.
    pub results: ResultSet,
    /// The longest `top_n` words, padded with empty strings.
    pub longest: Vec<String>,
    /// Counters summed over all workers.
    pub metrics: SearchMetrics,
}

impl SearchOutcome {
    /// Number of distinct words found.
    pub fn found_count(&self) -> usize {
        self.results.len()
    }
}

/// Runs searches with a fixed, validated configuration.
#[derive(Clone, Debug)]
pub struct Solver {
    config: SearchConfig,
    worker_count: usize,
}

impl Solver {
    /// Validate `config` and build a solver from it.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let worker_count = config.resolved_worker_count();
        Ok(Self {
            config,
            worker_count,
        })
    }

    /// The configuration this solver was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Worker threads each search will use.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Find every word of `dict` spelled by a simple orthogonal path on
    /// `grid`.
    ///
    /// Blocks until the search is complete. An empty dictionary is not an
    /// error; every root task is pruned at once and nothing is found.
    pub fn solve(&self, grid: &Grid, dict: &Dictionary) -> Result<SearchOutcome, EngineError> {
        let start = Instant::now();
        let cells = grid.cell_count();

        let (jobs_tx, jobs_rx) = unbounded();
        let (words_tx, words_rx) = unbounded();
        let aggregator = pool::spawn_aggregator(words_rx)?;

        let ctx = Arc::new(TaskContext {
            grid: Arc::new(grid.clone()),
            jobs: jobs_tx,
            words: words_tx,
            max_depth: self.config.max_depth,
        });
        let pool = match SearchPool::start(self.worker_count, &ctx, &jobs_rx) {
            Ok(pool) => pool,
            Err(e) => {
                drop(ctx);
                // The aggregator only waits for the word senders; with
                // `ctx` gone it returns straight away.
                let _ = aggregator.join();
                return Err(e);
            }
        };
        drop(jobs_rx);
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            words = dict.len(),
            workers = pool.len(),
            "search started"
        );

        let (done_tx, mut root) = RootTracker::channel(cells);
        let candidates = dict.candidates();
        for cell in grid.cells() {
            pool.submit(SearchTask::root(
                cell,
                candidates.clone(),
                Upstream::Root(done_tx.clone()),
            ));
        }
        drop(done_tx);
        drop(ctx);

        let waited = root.wait(|| pool.is_healthy());
        if let Err(e) = &waited {
            warn!(error = %e, "search did not complete");
        }
        let stopped = pool.shutdown();
        let results = aggregator.join().map_err(|_| EngineError::ThreadPanicked {
            name: AGGREGATOR_THREAD.into(),
        });

        waited?;
        let mut metrics = stopped?;
        let results = results?;
        metrics.elapsed_us = start.elapsed().as_micros() as u64;

        let longest = results.longest(self.config.top_n, self.config.tie_break);
        debug!(
            found = results.len(),
            emitted = metrics.words_emitted,
            tasks = metrics.tasks_executed,
            elapsed_us = metrics.elapsed_us,
            "search finished"
        );
        Ok(SearchOutcome {
            results,
            longest,
            metrics,
        })
    }
}

/// Search `grid` for words of `dict` with the default configuration.
///
/// ```
/// use goggle_dict::Dictionary;
/// use goggle_grid::Grid;
///
/// let grid = Grid::new([["c", "a"], ["t", "s"]]).unwrap();
/// let outcome = goggle_engine::solve(&grid, &Dictionary::empty()).unwrap();
/// assert_eq!(outcome.found_count(), 0);
/// ```
pub fn solve(grid: &Grid, dict: &Dictionary) -> Result<SearchOutcome, EngineError> {
    Solver::new(SearchConfig::default())?.solve(grid, dict)
}
