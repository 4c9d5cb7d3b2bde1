use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use taskpool::{create_worker_pool, BuildError, ThreadPool, ThreadPoolBuilder};

#[test]
fn processes_every_enqueued_task() {
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    let pool = ThreadPool::new(
        move |n: usize| {
            c.fetch_add(n, Ordering::SeqCst);
        },
        2,
    )
    .unwrap();

    for _ in 0..10 {
        pool.enqueue(1);
    }
    pool.request_stop(false);
    drop(pool);

    assert_eq!(counter.load(Ordering::SeqCst), 10);
}

#[test]
fn enqueue_with_builds_the_task_in_place() {
    let sum = Arc::new(AtomicUsize::new(0));
    let s = Arc::clone(&sum);
    let pool = ThreadPool::new(
        move |n: usize| {
            s.fetch_add(n, Ordering::SeqCst);
        },
        2,
    )
    .unwrap();

    for _ in 0..4 {
        pool.enqueue_with(|| 3);
    }
    pool.request_stop(false);
    drop(pool);

    assert_eq!(sum.load(Ordering::SeqCst), 12);
}

#[test]
fn builder_defaults_to_four_workers() {
    let pool = ThreadPoolBuilder::new().build(|_: ()| {}).unwrap();
    assert_eq!(pool.worker_count(), 4);
    pool.request_stop(true);
}

#[test]
fn macro_builds_a_working_pool() {
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    let pool = create_worker_pool!(workers: 2, processor: move |_: u8| {
        c.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    for _ in 0..10 {
        pool.enqueue(0);
    }
    pool.request_stop(false);
    drop(pool);

    assert_eq!(counter.load(Ordering::SeqCst), 10);
}

#[test]
fn zero_workers_reports_a_build_error() {
    let err = match ThreadPoolBuilder::new().num_workers(0).build(|_: ()| {}) {
        Err(err) => err,
        Ok(_) => panic!("zero workers must be rejected"),
    };
    assert!(matches!(err, BuildError::NoWorkers));
    assert_eq!(err.to_string(), "worker pool requires at least one worker");
}
