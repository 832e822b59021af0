//! Convenience re-exports.

pub use crate::cancel::CancelToken;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::executor::{handle, run_blocking, share, PanicStrategy, Pool, Task, TaskHandle};
