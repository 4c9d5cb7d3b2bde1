//! # Macros for `taskpool`
//!
//! Convenience macros that cut boilerplate when configuring a pool or
//! dumping its metrics counters.

/// Creates a worker pool with the given configuration.
///
/// Expands to the corresponding [`ThreadPoolBuilder`](crate::ThreadPoolBuilder)
/// chain, so it returns the same `Result`.
///
/// # Examples
/// ```rust
/// use taskpool::create_worker_pool;
///
/// let pool = create_worker_pool!(workers: 2, processor: |n: u64| { let _ = n * 2; }).unwrap();
/// pool.enqueue(21);
/// pool.request_stop(false);
/// ```
#[macro_export]
macro_rules! create_worker_pool {
    (processor: $processor:expr) => {
        $crate::ThreadPoolBuilder::new().build($processor)
    };
    (workers: $n:expr, processor: $processor:expr) => {
        $crate::ThreadPoolBuilder::new().num_workers($n).build($processor)
    };
}

/// Logs the current metrics of the worker pool.
///
/// Prints the queued, running, completed, failed and rejected task counts,
/// plus the number of live workers.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use taskpool::metrics::{AtomicMetricsCollector, PoolMetrics};
/// use taskpool::{log_metrics, ThreadPoolBuilder};
///
/// let metrics = Arc::new(PoolMetrics::new());
/// let collector = Arc::new(AtomicMetricsCollector::new(metrics.clone()));
/// let pool = ThreadPoolBuilder::new()
///     .with_metrics_collector(collector)
///     .build(|_: u32| {})
///     .unwrap();
///
/// pool.enqueue(1);
/// pool.request_stop(false);
/// drop(pool);
///
/// log_metrics!(metrics);
/// ```
#[macro_export]
macro_rules! log_metrics {
    ($metrics:expr) => {
        println!(
            "Queued tasks: {}",
            $metrics
                .queued_tasks
                .load(std::sync::atomic::Ordering::SeqCst)
        );
        println!(
            "Running tasks: {}",
            $metrics
                .running_tasks
                .load(std::sync::atomic::Ordering::SeqCst)
        );
        println!(
            "Completed tasks: {}",
            $metrics
                .completed_tasks
                .load(std::sync::atomic::Ordering::SeqCst)
        );
        println!(
            "Failed tasks: {}",
            $metrics
                .failed_tasks
                .load(std::sync::atomic::Ordering::SeqCst)
        );
        println!(
            "Rejected tasks: {}",
            $metrics
                .rejected_tasks
                .load(std::sync::atomic::Ordering::SeqCst)
        );
        println!(
            "Active workers: {}",
            $metrics
                .active_workers
                .load(std::sync::atomic::Ordering::SeqCst)
        );
    };
}
