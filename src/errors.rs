//! Error types for the worker pool.
//!
//! This module defines the errors that can be reported while constructing a
//! pool. Construction is the only fallible surface: enqueueing is
//! fire-and-forget and shutdown cannot fail.

/// Represents errors that can occur while building a worker pool.
///
/// Both variants are reported synchronously from
/// [`ThreadPoolBuilder::build`](crate::ThreadPoolBuilder::build); a pool that
/// failed to build holds no running threads.
#[derive(Debug)]
pub enum BuildError {
    /// The pool was configured with zero workers. No worker would ever drain
    /// the queue, so this is rejected up front instead of starving silently.
    NoWorkers,
    /// Spawning a worker thread failed. Workers spawned before the failure
    /// have already been stopped and joined.
    Spawn(std::io::Error),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::NoWorkers => write!(f, "worker pool requires at least one worker"),
            BuildError::Spawn(err) => write!(f, "failed to spawn worker thread: {}", err),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::NoWorkers => None,
            BuildError::Spawn(err) => Some(err),
        }
    }
}
