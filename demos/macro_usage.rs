use taskpool::create_worker_pool;

fn main() {
    tracing_subscriber::fmt().init();

    let pool = create_worker_pool!(workers: 4, processor: |n: u64| {
        println!("task payload: {n}");
    })
    .unwrap();

    for n in 0..8 {
        pool.enqueue(n);
    }
    pool.request_stop(false);
}
