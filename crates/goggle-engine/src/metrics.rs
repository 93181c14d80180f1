//! Per-search counters.
//!
//! Each worker counts into its own [`SearchMetrics`] and hands it back
//! when it exits; the solver sums them. No counter is shared between
//! threads while the search runs.

/// Counts collected over one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Tasks run, across all workers. Includes illegal ones.
    pub tasks_executed: u64,
    /// Tasks whose frontier was off the grid or already visited.
    pub illegal_paths: u64,
    /// Tasks whose prefix matched no candidate word.
    pub pruned_branches: u64,
    /// Tasks stopped by the depth cap.
    pub depth_capped: u64,
    /// Tasks that queued four children.
    pub fan_outs: u64,
    /// Words sent to the aggregator, duplicates included.
    pub words_emitted: u64,
    /// Worker threads that took part.
    pub workers: usize,
    /// Wall-clock time of the whole search, pool start-up and teardown
    /// included, in microseconds.
    pub elapsed_us: u64,
}

impl SearchMetrics {
    /// Add another worker's counts into this one.
    ///
    /// `workers` and `elapsed_us` describe the whole search and are left
    /// untouched.
    pub fn absorb(&mut self, other: &SearchMetrics) {
        self.tasks_executed += other.tasks_executed;
        self.illegal_paths += other.illegal_paths;
        self.pruned_branches += other.pruned_branches;
        self.depth_capped += other.depth_capped;
        self.fan_outs += other.fan_outs;
        self.words_emitted += other.words_emitted;
    }

    /// Every executed task ends in exactly one of the four outcomes.
    pub fn is_balanced(&self) -> bool {
        self.tasks_executed
            == self.illegal_paths + self.pruned_branches + self.depth_capped + self.fan_outs
    }
}
