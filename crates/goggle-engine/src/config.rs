//! Search configuration and validation.
//!
//! [`SearchConfig`] is the input for constructing a [`Solver`](crate::Solver).
//! [`validate()`](SearchConfig::validate) checks it once at startup; the
//! search itself has no configuration-dependent failure paths.

use std::error::Error;
use std::fmt;

/// Upper bound applied to any worker count.
const MAX_WORKERS: usize = 64;

/// Number of longest words reported when not configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Largest accepted `top_n`. The list is allocated up front.
pub const MAX_TOP_N: usize = 10_000;

// ── TieBreak ───────────────────────────────────────────────────────

/// How words of equal length are ordered when selecting the longest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Earlier-found words win ties. Which word is found first depends
    /// on thread scheduling, so tied results vary between runs.
    #[default]
    Arrival,
    /// Distinct words are sorted before ranking, so ties go to the
    /// lexicographically smaller word and output is reproducible.
    Lexicographic,
}

// ── SearchConfig ───────────────────────────────────────────────────

/// Configuration for a [`Solver`](crate::Solver).
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Number of search worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 64]`).
    pub worker_count: Option<usize>,
    /// How many of the longest words to report, at most [`MAX_TOP_N`].
    /// Default: 10.
    pub top_n: usize,
    /// Longest path, in cells, a task may fan out from. `None` = no cap.
    pub max_depth: Option<usize>,
    /// Ordering among equal-length words in the top-N list.
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            top_n: DEFAULT_TOP_N,
            max_depth: None,
            tie_break: TieBreak::Arrival,
        }
    }
}

impl SearchConfig {
    /// Set an explicit worker count.
    pub fn with_workers(mut self, n: usize) -> Self {
        self.worker_count = Some(n);
        self
    }

    /// Set how many longest words to report.
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Cap the path length tasks may fan out from.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Choose the tie-break rule for the top-N list.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroDepth);
        }
        if self.top_n > MAX_TOP_N {
            return Err(ConfigError::TopNTooLarge {
                requested: self.top_n,
                max: MAX_TOP_N,
            });
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, MAX_WORKERS),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SearchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `worker_count` was explicitly set to zero.
    ZeroWorkers,
    /// `max_depth` was set to zero; not even root cells could be read.
    ZeroDepth,
    /// `top_n` exceeds [`MAX_TOP_N`].
    TopNTooLarge {
        /// The configured value.
        requested: usize,
        /// The largest accepted value.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker_count must be at least 1"),
            Self::ZeroDepth => write!(f, "max_depth must be at least 1"),
            Self::TopNTooLarge { requested, max } => {
                write!(f, "top_n = {requested} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {}
