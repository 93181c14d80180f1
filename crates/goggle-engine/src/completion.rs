//! Fan-in completion counting.
//!
//! Every search task reports exactly one [`Done`] signal upward, and only
//! after its whole subtree has finished. Two kinds of receiver exist:
//!
//! - [`CompletionTracker`]: a task's private fan-in counter, seeded with
//!   its child count and decremented by each child. The child that
//!   brings it to zero forwards the task's own completion upward, so no
//!   worker thread ever blocks waiting for children.
//! - [`RootTracker`]: the coordinator's end of a channel carrying one
//!   `Done` per root task. It waits for exactly one signal per grid cell.
//!
//! A task finds its receiver through its [`Upstream`] handle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::error::EngineError;

/// A content-free completion signal. Only the count matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Done;

/// Where a task reports its completion.
#[derive(Debug)]
pub enum Upstream {
    /// A root task: signal the coordinator.
    Root(Sender<Done>),
    /// A child task: signal the parent's tracker.
    Task(Arc<CompletionTracker>),
}

impl Upstream {
    /// Report completion of the subtree this handle belongs to.
    ///
    /// Walks up the tree for as long as each signal is the last one its
    /// tracker was waiting for, so the cascade from a deep leaf to the
    /// root runs without recursion.
    pub fn complete(&self) {
        let mut next = self;
        loop {
            match next {
                Upstream::Root(tx) => {
                    // A closed root channel means the coordinator has
                    // already given up on this search.
                    let _ = tx.send(Done);
                    return;
                }
                Upstream::Task(tracker) => {
                    if !tracker.arrive() {
                        return;
                    }
                    next = &tracker.upstream;
                }
            }
        }
    }
}

/// A task's fan-in counter.
///
/// Shared only between the owning task's direct children (each holds an
/// `Arc`). Once the count reaches zero the tracker forwards completion to
/// its own upstream, exactly once.
#[derive(Debug)]
pub struct CompletionTracker {
    remaining: AtomicUsize,
    upstream: Upstream,
}

// Compile-time assertion: trackers cross worker threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<CompletionTracker>();
};

impl CompletionTracker {
    /// A tracker expecting `children` signals before reporting to
    /// `upstream`.
    pub fn new(children: usize, upstream: Upstream) -> Arc<Self> {
        debug_assert!(children > 0, "a tracker with no children never completes");
        Arc::new(Self {
            remaining: AtomicUsize::new(children),
            upstream,
        })
    }

    /// Record one child's completion. Returns `true` for the final signal.
    fn arrive(&self) -> bool {
        // AcqRel: the last arriver must observe every sibling's work
        // before reporting upward.
        let prev = self.remaining.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "completion signalled more times than expected");
        prev == 1
    }

    /// Signals still outstanding.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }
}

/// The coordinator's view of root-task completion.
pub struct RootTracker {
    rx: Receiver<Done>,
    expected: usize,
    received: usize,
}

/// How often the coordinator re-checks worker liveness while waiting.
const LIVENESS_POLL: Duration = Duration::from_millis(100);

impl RootTracker {
    /// A root channel expecting `expected` signals. The returned sender
    /// is cloned into each root task's [`Upstream::Root`].
    pub fn channel(expected: usize) -> (Sender<Done>, RootTracker) {
        let (tx, rx) = crossbeam_channel::bounded(expected.max(1));
        (
            tx,
            RootTracker {
                rx,
                expected,
                received: 0,
            },
        )
    }

    /// Signals received so far.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Block until every root task has reported.
    ///
    /// `workers_alive` is polled whenever no signal arrives for a while;
    /// if it returns `false`, or every sender is dropped, with signals
    /// still outstanding, the search can no longer finish and
    /// [`EngineError::WorkersLost`] is returned.
    pub fn wait(&mut self, workers_alive: impl Fn() -> bool) -> Result<(), EngineError> {
        while self.received < self.expected {
            match self.rx.recv_timeout(LIVENESS_POLL) {
                Ok(Done) => self.received += 1,
                Err(RecvTimeoutError::Timeout) => {
                    if !workers_alive() {
                        return Err(self.lost());
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return Err(self.lost()),
            }
        }
        Ok(())
    }

    fn lost(&self) -> EngineError {
        EngineError::WorkersLost {
            completed: self.received,
            expected: self.expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn root_upstream_sends_one_signal() {
        let (tx, mut root) = RootTracker::channel(1);
        Upstream::Root(tx).complete();
        root.wait(|| true).unwrap();
        assert_eq!(root.received(), 1);
    }

    #[test]
    fn tracker_forwards_only_after_last_child() {
        let (tx, root) = RootTracker::channel(1);
        let tracker = CompletionTracker::new(4, Upstream::Root(tx));
        let children: Vec<Upstream> = (0..4)
            .map(|_| Upstream::Task(Arc::clone(&tracker)))
            .collect();

        for child in &children[..3] {
            child.complete();
            assert!(root.rx.try_recv().is_err());
        }
        assert_eq!(tracker.remaining(), 1);
        children[3].complete();
        assert_eq!(root.rx.try_recv(), Ok(Done));
        assert_eq!(tracker.remaining(), 0);
    }

    #[test]
    fn cascade_through_nested_trackers() {
        // root <- a (2 children) <- b (1 child) <- leaf
        let (tx, mut root) = RootTracker::channel(1);
        let a = CompletionTracker::new(2, Upstream::Root(tx));
        let b = CompletionTracker::new(1, Upstream::Task(Arc::clone(&a)));
        let leaf = Upstream::Task(Arc::clone(&b));
        let sibling = Upstream::Task(Arc::clone(&a));

        leaf.complete();
        assert_eq!(a.remaining(), 1);
        sibling.complete();
        root.wait(|| true).unwrap();
    }

    #[test]
    fn concurrent_children_signal_exactly_once() {
        const CHILDREN: usize = 64;
        let (tx, mut root) = RootTracker::channel(1);
        let tracker = CompletionTracker::new(CHILDREN, Upstream::Root(tx));

        let handles: Vec<_> = (0..CHILDREN)
            .map(|_| {
                let up = Upstream::Task(Arc::clone(&tracker));
                thread::spawn(move || up.complete())
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        root.wait(|| true).unwrap();
        assert!(root.rx.try_recv().is_err(), "root signalled twice");
    }

    #[test]
    fn wait_reports_disconnect() {
        let (tx, mut root) = RootTracker::channel(2);
        Upstream::Root(tx.clone()).complete();
        drop(tx);
        let err = root.wait(|| true).unwrap_err();
        assert_eq!(
            err,
            EngineError::WorkersLost {
                completed: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn wait_reports_dead_workers() {
        let (_tx, mut root) = RootTracker::channel(1);
        let err = root.wait(|| false).unwrap_err();
        assert!(matches!(err, EngineError::WorkersLost { completed: 0, .. }));
    }
}
