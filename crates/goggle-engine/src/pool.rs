//! Search worker pool and result aggregator thread.
//!
//! Workers pull [`Job`]s from one shared crossbeam channel. Running tasks
//! push their children onto the same channel, so the channel cannot
//! disconnect while any worker is alive; workers exit on an explicit
//! [`Job::Stop`] instead, one per worker, sent once the search is
//! complete. Each worker returns its own [`SearchMetrics`] from its
//! thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

use crate::aggregate::{ResultAggregator, ResultSet};
use crate::error::EngineError;
use crate::metrics::SearchMetrics;
use crate::task::{FoundWord, Job, SearchTask, TaskContext};

/// Main loop for a search worker thread.
///
/// Runs tasks until a `Stop` arrives or the job channel disconnects.
pub(crate) fn worker_loop(jobs: Receiver<Job>, ctx: Arc<TaskContext>) -> SearchMetrics {
    let mut metrics = SearchMetrics::default();
    while let Ok(job) = jobs.recv() {
        match job {
            Job::Explore(task) => {
                task.run(&ctx, &mut metrics);
            }
            Job::Stop => break,
        }
    }
    metrics
}

/// A running set of search workers.
pub(crate) struct SearchPool {
    jobs: Sender<Job>,
    workers: Vec<(String, JoinHandle<SearchMetrics>)>,
}

impl SearchPool {
    /// Spawn `worker_count` workers sharing `ctx`.
    ///
    /// If any spawn fails, the workers already running are stopped and
    /// joined before the error is returned, so every clone of `ctx` they
    /// held has been dropped.
    pub fn start(
        worker_count: usize,
        ctx: &Arc<TaskContext>,
        jobs_rx: &Receiver<Job>,
    ) -> Result<Self, EngineError> {
        let mut pool = SearchPool {
            jobs: ctx.jobs.clone(),
            workers: Vec::with_capacity(worker_count),
        };
        for i in 0..worker_count {
            let name = format!("goggle-search-{i}");
            let rx = jobs_rx.clone();
            let ctx = Arc::clone(ctx);
            let spawned = thread::Builder::new()
                .name(name.clone())
                .spawn(move || worker_loop(rx, ctx));
            match spawned {
                Ok(handle) => pool.workers.push((name, handle)),
                Err(e) => {
                    // Teardown result is irrelevant next to the spawn error.
                    let _ = pool.shutdown();
                    return Err(EngineError::ThreadSpawnFailed {
                        reason: format!("{name}: {e}"),
                    });
                }
            }
        }
        debug!(workers = worker_count, "search pool started");
        Ok(pool)
    }

    /// Number of workers.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Queue a task. If no worker can receive it, it is counted as
    /// complete so the completion tree stays balanced.
    pub fn submit(&self, task: SearchTask) {
        if let Err(e) = self.jobs.send(Job::Explore(task)) {
            if let Job::Explore(task) = e.into_inner() {
                task.abandon();
            }
        }
    }

    /// `true` while every worker is still running its loop.
    ///
    /// Workers only return on `Stop`, so one that has finished before
    /// [`shutdown`](Self::shutdown) has panicked, and whatever task it
    /// held will never report completion.
    pub fn is_healthy(&self) -> bool {
        self.workers.iter().all(|(_, h)| !h.is_finished())
    }

    /// Stop and join every worker, summing their metrics.
    ///
    /// All workers are joined even if one panicked; the first panic is
    /// reported.
    pub fn shutdown(self) -> Result<SearchMetrics, EngineError> {
        for _ in 0..self.workers.len() {
            // A closed channel means every worker is already gone.
            let _ = self.jobs.send(Job::Stop);
        }
        drop(self.jobs);

        let mut total = SearchMetrics {
            workers: self.workers.len(),
            ..Default::default()
        };
        let mut first_panic = None;
        for (name, handle) in self.workers {
            match handle.join() {
                Ok(m) => total.absorb(&m),
                Err(_) if first_panic.is_none() => {
                    first_panic = Some(EngineError::ThreadPanicked { name });
                }
                Err(_) => {}
            }
        }
        debug!(workers = total.workers, tasks = total.tasks_executed, "search pool stopped");
        match first_panic {
            Some(err) => Err(err),
            None => Ok(total),
        }
    }
}

/// Spawn the thread that drains `words` into a [`ResultSet`].
///
/// The thread returns once every [`Sender`] for `words` has been dropped.
pub(crate) fn spawn_aggregator(
    words: Receiver<FoundWord>,
) -> Result<JoinHandle<ResultSet>, EngineError> {
    thread::Builder::new()
        .name(AGGREGATOR_THREAD.into())
        .spawn(move || ResultAggregator::new().drain(&words))
        .map_err(|e| EngineError::ThreadSpawnFailed {
            reason: format!("{AGGREGATOR_THREAD}: {e}"),
        })
}

/// Name of the aggregator thread.
pub(crate) const AGGREGATOR_THREAD: &str = "goggle-aggregate";
