use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use taskpool::metrics::{AtomicMetricsCollector, MetricsCollector, PoolMetrics};
use taskpool::{BuildError, ThreadPoolBuilder};

fn metered() -> (Arc<PoolMetrics>, Arc<dyn MetricsCollector>) {
    let metrics = Arc::new(PoolMetrics::new());
    let collector = Arc::new(AtomicMetricsCollector::new(Arc::clone(&metrics)));
    (metrics, collector)
}

#[test]
fn zero_workers_is_rejected_before_any_thread_starts() {
    let (metrics, collector) = metered();
    let result = ThreadPoolBuilder::new()
        .num_workers(0)
        .with_metrics_collector(collector)
        .build(|_: ()| {});

    assert!(matches!(result, Err(BuildError::NoWorkers)));
    assert_eq!(metrics.active_workers.load(Ordering::SeqCst), 0);
}

#[test]
fn panicking_processor_does_not_kill_the_worker() {
    let (metrics, collector) = metered();
    let processed = Arc::new(AtomicUsize::new(0));
    let p = Arc::clone(&processed);
    let pool = ThreadPoolBuilder::new()
        .num_workers(1)
        .with_metrics_collector(collector)
        .build(move |n: i32| {
            if n < 0 {
                panic!("bad task");
            }
            p.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    pool.enqueue(-1);
    pool.enqueue(-2);
    for n in 1..=3 {
        pool.enqueue(n);
    }
    pool.request_stop(false);
    drop(pool);

    // The two poisoned tasks were dropped; the worker survived to run the rest.
    assert_eq!(processed.load(Ordering::SeqCst), 3);
    assert_eq!(metrics.failed_tasks.load(Ordering::SeqCst), 2);
    assert_eq!(metrics.completed_tasks.load(Ordering::SeqCst), 3);
}

#[test]
fn teardown_joins_every_worker() {
    let (metrics, collector) = metered();
    let pool = ThreadPoolBuilder::new()
        .num_workers(4)
        .with_metrics_collector(collector)
        .build(|_: u32| {})
        .unwrap();

    for i in 0..50 {
        pool.enqueue(i);
    }
    pool.request_stop(false);
    drop(pool); // joins all four workers before returning

    assert_eq!(metrics.active_workers.load(Ordering::SeqCst), 0);
    assert_eq!(metrics.completed_tasks.load(Ordering::SeqCst), 50);
    assert_eq!(metrics.running_tasks.load(Ordering::SeqCst), 0);
}

#[test]
fn worker_count_matches_configuration() {
    let pool = ThreadPoolBuilder::new()
        .num_workers(3)
        .build(|_: ()| {})
        .unwrap();
    assert_eq!(pool.worker_count(), 3);
    pool.request_stop(true);
}
