//! Console summary of a finished search.

use std::fmt;
use std::time::Duration;

use goggle_engine::SearchOutcome;

/// The three-line summary the `goggle` binary prints.
///
/// ```text
/// Found 2 words.
/// Longest 3 words found were: [cats cas ]
/// Solve time was: 1.2ms
/// ```
///
/// The longest-words list is printed exactly as ranked, padding included.
pub struct Report<'a> {
    outcome: &'a SearchOutcome,
}

impl<'a> Report<'a> {
    /// A report on `outcome`.
    pub fn new(outcome: &'a SearchOutcome) -> Self {
        Self { outcome }
    }

    /// Wall-clock time of the search.
    pub fn solve_time(&self) -> Duration {
        Duration::from_micros(self.outcome.metrics.elapsed_us)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let longest = &self.outcome.longest;
        writeln!(f, "Found {} words.", self.outcome.found_count())?;
        writeln!(
            f,
            "Longest {} words found were: [{}]",
            longest.len(),
            longest.join(" ")
        )?;
        write!(f, "Solve time was: {:?}", self.solve_time())
    }
}
