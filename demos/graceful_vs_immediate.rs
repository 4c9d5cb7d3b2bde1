use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use taskpool::ThreadPool;

fn run(abandon_pending: bool) -> usize {
    let done = Arc::new(AtomicUsize::new(0));
    let d = Arc::clone(&done);
    let pool = ThreadPool::new(
        move |_: u32| {
            thread::sleep(Duration::from_millis(10));
            d.fetch_add(1, Ordering::SeqCst);
        },
        2,
    )
    .unwrap();

    for i in 0..40 {
        pool.enqueue(i);
    }
    thread::sleep(Duration::from_millis(50));
    pool.request_stop(abandon_pending);
    drop(pool);

    done.load(Ordering::SeqCst)
}

fn main() {
    tracing_subscriber::fmt().init();

    println!("graceful stop processed {} of 40 tasks", run(false));
    println!("immediate stop processed {} of 40 tasks", run(true));
}
