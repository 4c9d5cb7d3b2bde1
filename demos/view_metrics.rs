use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use taskpool::metrics::{AtomicMetricsCollector, PoolMetrics};
use taskpool::{log_metrics, ThreadPoolBuilder};

fn main() {
    tracing_subscriber::fmt().init();

    // Create metrics and collector
    let metrics = Arc::new(PoolMetrics::new());
    let collector = Arc::new(AtomicMetricsCollector::new(metrics.clone()));

    // Create a worker pool with the metrics collector
    let pool = ThreadPoolBuilder::new()
        .num_workers(4)
        .with_metrics_collector(collector)
        .build(|_: u32| {
            thread::sleep(Duration::from_millis(100)); // Simulate work
        })
        .unwrap();

    // Create a flag to stop monitoring
    let running = Arc::new(AtomicBool::new(true));

    // Spawn a monitoring thread to display live updates
    let metrics_clone = metrics.clone();
    let running_clone = running.clone();
    let monitor_handle = thread::spawn(move || {
        while running_clone.load(Ordering::Acquire) {
            let queued = metrics_clone.queued_tasks.load(Ordering::SeqCst);
            let in_flight = metrics_clone.running_tasks.load(Ordering::SeqCst);
            let completed = metrics_clone.completed_tasks.load(Ordering::SeqCst);
            let active_workers = metrics_clone.active_workers.load(Ordering::SeqCst);

            println!("\n--- Metrics ---");
            println!("Queued tasks: {}", queued);
            println!("Running tasks: {}", in_flight);
            println!("Completed tasks: {}", completed);
            println!("Active workers: {}", active_workers);

            thread::sleep(Duration::from_millis(80));
        }
    });

    for i in 0..10 {
        pool.enqueue(i);
    }

    // Drain the queue and wait for the workers
    pool.request_stop(false);
    drop(pool);

    // Stop the monitoring thread
    running.store(false, Ordering::Release);
    monitor_handle.join().unwrap();

    // Final counters after teardown
    println!("\n--- Final Metrics ---");
    log_metrics!(metrics);
}
