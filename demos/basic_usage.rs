use taskpool::ThreadPool;

fn main() {
    tracing_subscriber::fmt().init();

    let pool = ThreadPool::new(|msg: String| println!("processing task: {msg}"), 4).unwrap();

    for i in 0..8 {
        pool.enqueue(format!("task #{i}"));
    }
    pool.enqueue_with(|| "built in place".to_string());

    // Drain everything, then let the drop join the workers.
    pool.request_stop(false);
}
