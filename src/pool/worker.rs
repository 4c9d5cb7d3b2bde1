//! Worker logic for the thread pool

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use super::PoolShared;

pub(crate) struct WorkerHandle {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    pub(crate) fn new(id: usize, thread: thread::JoinHandle<()>) -> Self {
        Self {
            id,
            thread: Some(thread),
        }
    }

    /// Joins the underlying thread. Safe to call more than once; only the
    /// first call joins.
    pub(crate) fn join(&mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
            debug!(worker = self.id, "worker joined");
        }
    }
}

/// Worker thread main loop.
///
/// Dequeues one task at a time and runs the processor outside the queue
/// lock. Terminates when [`next_task`](crate::queue::TaskQueue::next_task)
/// reports no more work: on an empty queue after a graceful stop, or as soon
/// as the current task finishes under an immediate stop.
///
/// A panicking processor is caught at the task boundary so a bad task cannot
/// permanently shrink the pool.
pub(crate) fn worker_loop<T>(id: usize, shared: Arc<PoolShared<T>>)
where
    T: Send + 'static,
{
    debug!(worker = id, "worker started");

    while let Some(task) = shared.queue.next_task() {
        if let Some(collector) = &shared.collector {
            collector.on_task_started();
        }

        match panic::catch_unwind(AssertUnwindSafe(|| (shared.processor)(task))) {
            Ok(()) => {
                if let Some(collector) = &shared.collector {
                    collector.on_task_completed();
                }
            }
            Err(_) => {
                warn!(worker = id, "processor panicked, task dropped");
                if let Some(collector) = &shared.collector {
                    collector.on_task_failed();
                }
            }
        }
    }

    debug!(worker = id, "worker finished");
    if let Some(collector) = &shared.collector {
        collector.on_worker_stopped();
    }
}
