//! Errors from running the search pool.
//!
//! The search itself is total: illegal paths and exhausted candidate sets
//! are ordinary terminal states. These errors only arise when the thread
//! pool underneath it fails, or when a search is started from an
//! invalid configuration.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors from [`Solver::solve`](crate::Solver::solve).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The search configuration failed validation.
    Config(ConfigError),
    /// A worker or aggregator thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
    /// Every worker exited before all root tasks reported completion.
    WorkersLost {
        /// Root completion signals received.
        completed: usize,
        /// Root completion signals expected (one per grid cell).
        expected: usize,
    },
    /// A pool thread panicked.
    ThreadPanicked {
        /// Name of the thread.
        name: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid search config: {e}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::WorkersLost {
                completed,
                expected,
            } => {
                write!(
                    f,
                    "search workers exited after {completed} of {expected} root tasks completed"
                )
            }
            Self::ThreadPanicked { name } => write!(f, "thread '{name}' panicked"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
