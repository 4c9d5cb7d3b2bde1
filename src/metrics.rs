//! Metrics collection for the worker pool.
//!
//! This module defines the `MetricsCollector` trait for observing pool
//! activity, along with a default implementation backed by atomic counters.
//! A collector is optional; the pool runs without one.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A trait for collecting metrics from the worker pool.
///
/// Implementations of this trait provide hooks to track key events in the
/// pool's lifecycle: task submission and rejection, execution outcomes, and
/// worker startup/shutdown.
pub trait MetricsCollector: Send + Sync {
    /// Called when a task is accepted into the queue.
    fn on_task_submitted(&self);
    /// Called when a task is refused because a stop was already requested.
    fn on_task_rejected(&self);
    /// Called when a worker dequeues a task and begins processing it.
    fn on_task_started(&self);
    /// Called when the processor returns normally.
    fn on_task_completed(&self);
    /// Called when the processor panics. The worker survives.
    fn on_task_failed(&self);
    /// Called when a worker thread starts.
    fn on_worker_started(&self);
    /// Called when a worker thread terminates.
    fn on_worker_stopped(&self);
}

/// Stores metrics for the worker pool using atomic counters.
///
/// The `PoolMetrics` struct tracks the following:
/// - `queued_tasks`: tasks accepted but not yet dequeued by a worker.
/// - `running_tasks`: tasks currently inside the processor.
/// - `completed_tasks`: tasks whose processor call returned normally.
/// - `failed_tasks`: tasks whose processor call panicked.
/// - `rejected_tasks`: enqueue attempts after a stop request.
/// - `active_workers`: worker threads currently alive.
///
/// After teardown has returned, `active_workers` reads zero and
/// `queued_tasks` holds the number of abandoned tasks, if any.
pub struct PoolMetrics {
    /// Tasks accepted into the queue and not yet picked up.
    pub queued_tasks: AtomicUsize,
    /// Tasks currently being processed.
    pub running_tasks: AtomicUsize,
    /// Tasks processed to normal completion.
    pub completed_tasks: AtomicUsize,
    /// Tasks whose processor panicked.
    pub failed_tasks: AtomicUsize,
    /// Enqueue attempts ignored because the pool was stopping.
    pub rejected_tasks: AtomicUsize,
    /// Worker threads currently running.
    pub active_workers: AtomicUsize,
}

impl PoolMetrics {
    /// Creates a new `PoolMetrics` instance with all counters at zero.
    pub fn new() -> Self {
        Self {
            queued_tasks: AtomicUsize::new(0),
            running_tasks: AtomicUsize::new(0),
            completed_tasks: AtomicUsize::new(0),
            failed_tasks: AtomicUsize::new(0),
            rejected_tasks: AtomicUsize::new(0),
            active_workers: AtomicUsize::new(0),
        }
    }
}

impl Default for PoolMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A default implementation of `MetricsCollector` using atomic counters.
///
/// Backed by an `Arc<PoolMetrics>` so the counters can be read from outside
/// the pool while workers update them.
pub struct AtomicMetricsCollector {
    /// Shared metrics storage.
    pub metrics: Arc<PoolMetrics>,
}

impl AtomicMetricsCollector {
    /// Creates a new `AtomicMetricsCollector` writing into `metrics`.
    pub fn new(metrics: Arc<PoolMetrics>) -> Self {
        Self { metrics }
    }
}

impl MetricsCollector for AtomicMetricsCollector {
    fn on_task_submitted(&self) {
        self.metrics.queued_tasks.fetch_add(1, Ordering::SeqCst);
    }

    fn on_task_rejected(&self) {
        self.metrics.rejected_tasks.fetch_add(1, Ordering::SeqCst);
    }

    fn on_task_started(&self) {
        self.metrics.queued_tasks.fetch_sub(1, Ordering::SeqCst);
        self.metrics.running_tasks.fetch_add(1, Ordering::SeqCst);
    }

    fn on_task_completed(&self) {
        self.metrics.running_tasks.fetch_sub(1, Ordering::SeqCst);
        self.metrics.completed_tasks.fetch_add(1, Ordering::SeqCst);
    }

    fn on_task_failed(&self) {
        self.metrics.running_tasks.fetch_sub(1, Ordering::SeqCst);
        self.metrics.failed_tasks.fetch_add(1, Ordering::SeqCst);
    }

    fn on_worker_started(&self) {
        self.metrics.active_workers.fetch_add(1, Ordering::SeqCst);
    }

    fn on_worker_stopped(&self) {
        self.metrics.active_workers.fetch_sub(1, Ordering::SeqCst);
    }
}
