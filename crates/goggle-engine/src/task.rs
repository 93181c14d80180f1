//! The search task: one step of path exploration.
//!
//! A [`SearchTask`] owns a path, the string spelled by every cell before
//! the path's frontier, the candidate words consistent with that string,
//! and the [`Upstream`] it must eventually report to. Running it walks a
//! fixed sequence:
//!
//! 1. **Legality**: an off-grid or revisited frontier completes at once.
//! 2. **Narrowing**: the frontier letter is appended and the candidate
//!    set narrowed to that prefix. An empty set completes at once; no
//!    word lies further down this path.
//! 3. **Emission**: an exact match is sent as a [`FoundWord`].
//! 4. **Fan-out**: four children, one per direction, are queued with the
//!    extended path and the narrowed candidates. Children check their own
//!    legality, so the parent does not filter them.
//! 5. **Fan-in**: the children share a fresh [`CompletionTracker`]
//!    seeded to four; the last of them to complete reports this task's
//!    completion upward.

use std::sync::Arc;

use crossbeam_channel::{SendError, Sender};
use goggle_core::{Cell, Direction, Path};
use goggle_dict::CandidateSet;
use goggle_grid::Grid;

use crate::completion::{CompletionTracker, Upstream};
use crate::metrics::SearchMetrics;

/// A dictionary word spelled by a legal path on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundWord {
    /// The word.
    pub word: String,
    /// The path that spelled it.
    pub path: Path,
}

/// Work item for the search pool.
pub(crate) enum Job {
    /// Run one search task.
    Explore(SearchTask),
    /// Exit the worker loop.
    Stop,
}

/// Shared, read-only state every task needs.
pub(crate) struct TaskContext {
    pub grid: Arc<Grid>,
    pub jobs: Sender<Job>,
    pub words: Sender<FoundWord>,
    pub max_depth: Option<usize>,
}

/// How a task ended its own step. Completion of its subtree may happen
/// later, on another worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    /// Frontier off the grid or already on the path.
    Illegal,
    /// No candidate word starts with the spelled prefix.
    Pruned,
    /// Depth cap reached; no children queued.
    DepthCapped,
    /// Four children queued.
    FannedOut,
}

/// One node of the search tree.
pub(crate) struct SearchTask {
    path: Path,
    /// Letters of every cell before the frontier.
    prefix: String,
    candidates: CandidateSet,
    upstream: Upstream,
}

impl SearchTask {
    /// A root task on `origin`, searching the whole candidate set.
    pub fn root(origin: Cell, candidates: CandidateSet, upstream: Upstream) -> Self {
        Self {
            path: Path::new(origin),
            prefix: String::new(),
            candidates,
            upstream,
        }
    }

    /// Report this task complete without running it.
    pub fn abandon(self) {
        self.upstream.complete();
    }

    /// Run this task's step and record it in `metrics`.
    pub fn run(self, ctx: &TaskContext, metrics: &mut SearchMetrics) -> StepOutcome {
        metrics.tasks_executed += 1;
        let outcome = self.step(ctx, metrics);
        match outcome {
            StepOutcome::Illegal => metrics.illegal_paths += 1,
            StepOutcome::Pruned => metrics.pruned_branches += 1,
            StepOutcome::DepthCapped => metrics.depth_capped += 1,
            StepOutcome::FannedOut => metrics.fan_outs += 1,
        }
        outcome
    }

    fn step(self, ctx: &TaskContext, metrics: &mut SearchMetrics) -> StepOutcome {
        let grid = &*ctx.grid;
        if !grid.is_legal(&self.path) {
            self.upstream.complete();
            return StepOutcome::Illegal;
        }
        let Some(letter) = grid.letter(self.path.frontier()) else {
            self.upstream.complete();
            return StepOutcome::Illegal;
        };

        let mut spelled = self.prefix;
        spelled.push(letter);
        let narrowed = self.candidates.filter(&spelled);
        if narrowed.is_empty() {
            self.upstream.complete();
            return StepOutcome::Pruned;
        }

        if narrowed.contains(&spelled) {
            metrics.words_emitted += 1;
            // The aggregator outlives every worker; a send failure means
            // the search is being torn down and the word is moot.
            let _ = ctx.words.send(FoundWord {
                word: spelled.clone(),
                path: self.path.clone(),
            });
        }

        if ctx.max_depth.is_some_and(|cap| self.path.len() >= cap) {
            self.upstream.complete();
            return StepOutcome::DepthCapped;
        }

        let tracker = CompletionTracker::new(Direction::ALL.len(), self.upstream);
        for dir in Direction::ALL {
            let child = SearchTask {
                path: self.path.extended(dir),
                prefix: spelled.clone(),
                candidates: narrowed.clone(),
                upstream: Upstream::Task(Arc::clone(&tracker)),
            };
            // Workers hold the receiving end for as long as they hold
            // this sender, so this only fails mid-teardown. Count the
            // child as complete to keep the tracker balanced.
            if let Err(SendError(Job::Explore(child))) = ctx.jobs.send(Job::Explore(child)) {
                child.abandon();
            }
        }
        StepOutcome::FannedOut
    }
}
