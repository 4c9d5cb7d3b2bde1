//! Shared FIFO queue and its synchronization state.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// Queue contents plus the two shutdown flags.
///
/// The flags live inside the same mutex as the queue: every read and write
/// of shared pool state goes through the one lock in [`TaskQueue`], so no
/// path can observe a flag without holding it.
struct QueueState<T> {
    tasks: VecDeque<T>,
    /// No new tasks are accepted once set. One-way transition.
    stop_requested: bool,
    /// Queued tasks are discarded rather than drained once set. One-way
    /// transition, only ever set together with `stop_requested`.
    abandon_pending: bool,
}

/// The pool's single task queue and its condition variable.
///
/// This is the only synchronization boundary in the crate: `push`,
/// `push_with`, `next_task` and `request_stop` are the only operations that
/// touch the lock.
pub(crate) struct TaskQueue<T> {
    state: Mutex<QueueState<T>>,
    ready: Condvar,
}

impl<T> TaskQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                tasks: VecDeque::new(),
                stop_requested: false,
                abandon_pending: false,
            }),
            ready: Condvar::new(),
        }
    }

    /// Appends a task and wakes one waiting worker.
    ///
    /// Returns `false` without queuing anything once a stop has been
    /// requested.
    pub(crate) fn push(&self, task: T) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.stop_requested {
            return false;
        }
        state.tasks.push_back(task);
        drop(state);
        self.ready.notify_one();
        true
    }

    /// Like [`push`](Self::push), but the task is only constructed if the
    /// pool is still accepting work.
    ///
    /// The closure runs under the queue lock, so it should do no more than
    /// build the value.
    pub(crate) fn push_with<F>(&self, make: F) -> bool
    where
        F: FnOnce() -> T,
    {
        let mut state = self.state.lock().unwrap();
        if state.stop_requested {
            return false;
        }
        state.tasks.push_back(make());
        drop(state);
        self.ready.notify_one();
        true
    }

    /// Blocking dequeue, used only by workers.
    ///
    /// Returns the front task once one is available. Returns `None` when the
    /// calling worker should terminate: immediately if pending tasks are
    /// being abandoned, or on an empty queue after a stop request. Note the
    /// abandon check comes first, so a worker returning here after finishing
    /// a task never claims another one under an immediate stop.
    pub(crate) fn next_task(&self) -> Option<T> {
        let mut state = self.state.lock().unwrap();
        loop {
            if state.abandon_pending {
                return None;
            }
            if let Some(task) = state.tasks.pop_front() {
                return Some(task);
            }
            if state.stop_requested {
                return None;
            }
            state = self.ready.wait(state).unwrap();
        }
    }

    /// Marks the pool as stopping and wakes every blocked worker.
    ///
    /// The first call decides `abandon_pending`; later calls change nothing.
    /// Returns whether this call was the one that initiated the stop.
    pub(crate) fn request_stop(&self, abandon_pending: bool) -> bool {
        let mut state = self.state.lock().unwrap();
        let initiated = !state.stop_requested;
        if initiated {
            state.stop_requested = true;
            state.abandon_pending = abandon_pending;
        }
        drop(state);
        self.ready.notify_all();
        initiated
    }
}
