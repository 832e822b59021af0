//! The task contract.

use parking_lot::Mutex;
use std::sync::Arc;

/// A unit of independent, CPU-bound work.
///
/// `execute` takes no input and returns nothing to the pool. A task that
/// produces results must record them into its own state; the pool never
/// inspects or mutates a task beyond calling `execute` exactly once.
pub trait Task: Send {
    /// Perform the work. Called exactly once, by exactly one worker,
    /// unless the task is dropped before dispatch by cancellation.
    fn execute(&mut self);
}

/// Shared mutable handle to a task.
///
/// Tasks must be handed to the pool through a shared handle, not by value:
/// state mutated by `execute` is only observable to the caller afterwards
/// if the caller still holds a clone of the same handle. Submitting a
/// handle built from a *copy* of the task silently loses those mutations;
/// see the ownership tests for the contract.
pub type TaskHandle = Arc<Mutex<dyn Task>>;

/// Wrap an owned task into a [`TaskHandle`].
pub fn handle<T: Task + 'static>(task: T) -> TaskHandle {
    Arc::new(Mutex::new(task))
}

/// Coerce a typed shared task into a [`TaskHandle`].
///
/// Keep the typed `Arc` around to read the task's state back after the
/// run.
pub fn share<T: Task + 'static>(task: Arc<Mutex<T>>) -> TaskHandle {
    task
}
