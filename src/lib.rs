//! parbatch - bounded parallel batch execution
//!
//! A worker pool that runs a batch of independent, CPU-bound tasks across
//! all available cores, blocking the caller until every task has run or a
//! cancellation request arrives. Built for embarrassingly-parallel batch
//! work where tasks share no state and need no ordering.
//!
//! # Quick Start
//!
//! ```
//! use parbatch::prelude::*;
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! struct Count {
//!     hits: usize,
//! }
//!
//! impl Task for Count {
//!     fn execute(&mut self) {
//!         self.hits += 1;
//!     }
//! }
//!
//! # fn main() -> parbatch::Result<()> {
//! // Keep typed handles to read results back after the run.
//! let counters: Vec<Arc<Mutex<Count>>> = (0..8)
//!     .map(|_| Arc::new(Mutex::new(Count { hits: 0 })))
//!     .collect();
//! let batch: Vec<TaskHandle> = counters.iter().map(|c| share(c.clone())).collect();
//!
//! let pool = Pool::new()?;
//! pool.run_blocking(batch)?;
//!
//! assert!(counters.iter().all(|c| c.lock().hits == 1));
//! # Ok(())
//! # }
//! ```
//!
//! # Contract
//!
//! - Tasks are handed over as shared handles ([`TaskHandle`]); handing the
//!   pool a handle built from a copy of a task silently loses the copy's
//!   mutations. Keep a clone of the same handle to observe results.
//! - Tasks are queued in input order but may complete in any order.
//! - Cancellation (a [`CancelToken`] or a configured deadline) is
//!   cooperative: tasks already queued still run, the rest are dropped and
//!   the run returns [`Error::Interrupted`].
//! - A panicking task is isolated per worker; the run completes and
//!   reports the count through [`Error::TasksPanicked`].

#![warn(missing_debug_implementations)]

pub mod cancel;
pub mod config;
pub mod error;
pub mod executor;
pub mod prelude;

pub use cancel::CancelToken;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use executor::{handle, run_blocking, share, PanicStrategy, Pool, Task, TaskHandle};
