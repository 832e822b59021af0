//! Pool orchestration.
//!
//! This module provides the core execution primitives: the task contract,
//! the producer that feeds the bounded queue, the worker loop, and the
//! blocking pool that coordinates them.

pub mod panic_handler;
pub mod pool;
pub mod producer;
pub mod task;
pub mod worker;

pub use panic_handler::{PanicHandler, PanicInfo, PanicStrategy};
pub use pool::{run_blocking, Pool};
pub use task::{handle, share, Task, TaskHandle};
