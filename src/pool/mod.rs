mod worker;

use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::errors::BuildError;
use crate::metrics::MetricsCollector;
use crate::queue::TaskQueue;
use worker::{worker_loop, WorkerHandle};

/// State shared between the pool façade and every worker thread.
pub(crate) struct PoolShared<T> {
    pub(crate) queue: TaskQueue<T>,
    pub(crate) processor: Box<dyn Fn(T) + Send + Sync>,
    pub(crate) collector: Option<Arc<dyn MetricsCollector>>,
}

/// A fixed-size pool of worker threads draining one shared FIFO queue.
///
/// The pool is generic over the task type `T`; it never inspects a task,
/// only stores it and moves it into the processor supplied at construction.
/// Tasks are dequeued in FIFO order, but completion order across workers is
/// unordered.
///
/// Dropping the pool stops it and joins every worker before returning. If no
/// stop mode was chosen beforehand via [`request_stop`](Self::request_stop),
/// dropping abandons any queued tasks so teardown cannot block on an
/// unbounded backlog.
pub struct ThreadPool<T: Send + 'static> {
    shared: Arc<PoolShared<T>>,
    workers: Vec<WorkerHandle>,
}

impl<T: Send + 'static> ThreadPool<T> {
    /// Creates a pool running `processor` on `workers` threads.
    ///
    /// Shorthand for the [`ThreadPoolBuilder`] with the same settings.
    pub fn new<F>(processor: F, workers: usize) -> Result<Self, BuildError>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        ThreadPoolBuilder::new().num_workers(workers).build(processor)
    }

    /// Appends a task to the queue and wakes one idle worker.
    ///
    /// Fire-and-forget: there is no confirmation and no result channel. The
    /// call never blocks beyond acquiring the queue lock. After a stop has
    /// been requested the task is silently ignored.
    pub fn enqueue(&self, task: T) {
        if self.shared.queue.push(task) {
            if let Some(collector) = &self.shared.collector {
                collector.on_task_submitted();
            }
        } else if let Some(collector) = &self.shared.collector {
            collector.on_task_rejected();
        }
    }

    /// Constructs a task in place and appends it to the queue.
    ///
    /// The closure only runs if the pool is still accepting work, so a
    /// stopped pool never pays for constructing the task. The closure runs
    /// under the queue lock and should do no more than build the value.
    pub fn enqueue_with<F>(&self, make: F)
    where
        F: FnOnce() -> T,
    {
        if self.shared.queue.push_with(make) {
            if let Some(collector) = &self.shared.collector {
                collector.on_task_submitted();
            }
        } else if let Some(collector) = &self.shared.collector {
            collector.on_task_rejected();
        }
    }

    /// Requests that the pool stop.
    ///
    /// With `abandon_pending == false` (graceful), workers keep draining the
    /// queue and terminate once it is empty; every task enqueued before this
    /// call runs exactly once. With `abandon_pending == true` (immediate),
    /// each worker finishes at most the task it currently holds and queued
    /// tasks are discarded.
    ///
    /// Idempotent and non-blocking; the first call wins and later calls
    /// cannot change the mode. Callable from any thread, including from
    /// inside the processor: processors run outside the queue lock, so this
    /// cannot deadlock.
    pub fn request_stop(&self, abandon_pending: bool) {
        if self.shared.queue.request_stop(abandon_pending) {
            debug!(abandon_pending, "stop requested");
        }
    }

    /// The number of worker threads, fixed at construction.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

impl<T: Send + 'static> Drop for ThreadPool<T> {
    fn drop(&mut self) {
        // First-call-wins keeps an explicitly chosen graceful stop intact.
        self.request_stop(true);
        for worker in &mut self.workers {
            worker.join();
        }
    }
}

/// Builder for [`ThreadPool`].
pub struct ThreadPoolBuilder {
    num_workers: usize,
    metrics_collector: Option<Arc<dyn MetricsCollector>>,
}

impl ThreadPoolBuilder {
    pub fn new() -> Self {
        Self {
            num_workers: 4,
            metrics_collector: None,
        }
    }

    /// Sets the number of worker threads. Must be at least 1;
    /// [`build`](Self::build) rejects 0.
    pub fn num_workers(mut self, n: usize) -> Self {
        self.num_workers = n;
        self
    }

    /// Attaches a metrics collector notified of pool lifecycle events.
    pub fn with_metrics_collector(mut self, collector: Arc<dyn MetricsCollector>) -> Self {
        self.metrics_collector = Some(collector);
        self
    }

    /// Starts the workers and returns the pool.
    ///
    /// The processor is shared by every worker and is invoked concurrently,
    /// each call owning one task; it must be thread-safe for any state it
    /// touches beyond its argument.
    ///
    /// Fails with [`BuildError::NoWorkers`] on a zero worker count. If a
    /// worker thread fails to spawn, the workers spawned so far are stopped
    /// and joined before the error is returned, so a failed build never
    /// leaks threads.
    pub fn build<T, F>(self, processor: F) -> Result<ThreadPool<T>, BuildError>
    where
        T: Send + 'static,
        F: Fn(T) + Send + Sync + 'static,
    {
        if self.num_workers == 0 {
            return Err(BuildError::NoWorkers);
        }

        let shared = Arc::new(PoolShared {
            queue: TaskQueue::new(),
            processor: Box::new(processor),
            collector: self.metrics_collector,
        });

        let mut workers = Vec::with_capacity(self.num_workers);
        for id in 0..self.num_workers {
            let worker_shared = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("taskpool-worker-{id}"))
                .spawn(move || worker_loop(id, worker_shared));

            match spawned {
                Ok(handle) => {
                    workers.push(WorkerHandle::new(id, handle));
                    if let Some(collector) = &shared.collector {
                        collector.on_worker_started();
                    }
                }
                Err(err) => {
                    // A partially constructed pool must not leak threads.
                    shared.queue.request_stop(true);
                    for worker in &mut workers {
                        worker.join();
                    }
                    return Err(BuildError::Spawn(err));
                }
            }
        }

        Ok(ThreadPool { shared, workers })
    }
}

impl Default for ThreadPoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}
