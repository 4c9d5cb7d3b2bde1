//! # taskpool
//!
//! `taskpool` is a Rust library that provides a fixed-size pool of worker
//! threads draining typed tasks from one shared FIFO queue, guarded by a
//! single mutex and condition variable.
//!
//! The pool is generic over the task type: producers hand it opaque values
//! and every worker runs the same user-supplied processor on them, one task
//! at a time, outside the queue lock.
//!
//! ## Features
//! - Enqueue tasks from any number of producer threads; enqueueing never
//!   blocks beyond the queue lock.
//! - In-place task construction with [`ThreadPool::enqueue_with`], skipped
//!   entirely once the pool is stopping.
//! - Graceful shutdown (drain the queue) or immediate shutdown (abandon
//!   queued tasks); the first stop request wins.
//! - Panic isolation: a panicking processor drops that task and the worker
//!   keeps running.
//! - Configurable number of workers.
//! - Metrics collection for monitoring pool activity.
//!
//! ## Usage
//!
//! ### Basic Usage
//! ```rust
//! use taskpool::ThreadPool;
//!
//! // Four workers, each running the same processor.
//! let pool = ThreadPool::new(|msg: String| println!("processing {msg}"), 4).unwrap();
//!
//! pool.enqueue("hello".to_string());
//! pool.enqueue_with(|| "built in place".to_string());
//!
//! // Drain everything already queued, then stop. Dropping the pool joins
//! // every worker.
//! pool.request_stop(false);
//! ```
//!
//! ### Graceful vs. immediate shutdown
//! ```rust
//! use taskpool::ThreadPool;
//!
//! let pool = ThreadPool::new(|_: u64| {}, 2).unwrap();
//! for i in 0..100 {
//!     pool.enqueue(i);
//! }
//! // Graceful: everything enqueued above runs exactly once.
//! pool.request_stop(false);
//! drop(pool);
//!
//! let pool = ThreadPool::new(|_: u64| {}, 2).unwrap();
//! for i in 0..100 {
//!     pool.enqueue(i);
//! }
//! // Immediate: each worker finishes at most its in-flight task and the
//! // rest of the queue is discarded.
//! pool.request_stop(true);
//! ```
//!
//! ### Changing the Number of Workers
//! ```rust
//! use taskpool::ThreadPoolBuilder;
//!
//! let pool = ThreadPoolBuilder::new()
//!     .num_workers(8)
//!     .build(|n: u32| {
//!         let _ = n * n;
//!     })
//!     .unwrap();
//!
//! for n in 0..8 {
//!     pool.enqueue(n);
//! }
//! pool.request_stop(false);
//! ```
//!
//! ### Collecting Metrics
//! ```rust
//! use std::sync::atomic::Ordering;
//! use std::sync::Arc;
//! use taskpool::metrics::{AtomicMetricsCollector, PoolMetrics};
//! use taskpool::ThreadPoolBuilder;
//!
//! let metrics = Arc::new(PoolMetrics::new());
//! let collector = Arc::new(AtomicMetricsCollector::new(metrics.clone()));
//!
//! let pool = ThreadPoolBuilder::new()
//!     .num_workers(4)
//!     .with_metrics_collector(collector)
//!     .build(|_: u32| {})
//!     .unwrap();
//!
//! for i in 0..5 {
//!     pool.enqueue(i);
//! }
//! pool.request_stop(false);
//! drop(pool);
//!
//! assert_eq!(metrics.completed_tasks.load(Ordering::SeqCst), 5);
//! assert_eq!(metrics.active_workers.load(Ordering::SeqCst), 0);
//! ```

mod errors;
mod macros;
pub mod metrics;
pub mod pool;
mod queue;

pub use errors::BuildError;
pub use pool::{ThreadPool, ThreadPoolBuilder};
