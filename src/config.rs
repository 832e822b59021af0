use crate::error::{Error, Result};
use crate::executor::PanicStrategy;
use std::time::Duration;

/// Pool configuration.
///
/// The defaults match the base behavior: one worker per logical core,
/// no deadline, and task panics isolated and logged.
#[derive(Debug, Clone)]
pub struct Config {
    /// Worker count override. `None` means one worker per logical core.
    pub num_threads: Option<usize>,

    /// Prefix for producer and worker thread names.
    pub thread_name_prefix: String,

    /// Stack size for worker threads, if the platform default is not enough.
    pub stack_size: Option<usize>,

    /// What to do when a task panics inside a worker.
    pub panic_strategy: PanicStrategy,

    /// Optional run deadline. Expiry is just another cancellation source:
    /// tasks already queued still finish, tasks not yet queued are dropped.
    pub deadline: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_threads: None,
            thread_name_prefix: "parbatch-worker".to_string(),
            stack_size: None,
            panic_strategy: PanicStrategy::default(),
            deadline: None,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(n) = self.num_threads {
            if n == 0 {
                return Err(Error::config("num_threads must be > 0"));
            }
            if n > 1024 {
                return Err(Error::config("num_threads too large (max 1024)"));
            }
        }

        if let Some(d) = self.deadline {
            if d.is_zero() {
                return Err(Error::config("deadline must be > 0"));
            }
        }

        Ok(())
    }

    /// Effective worker count: the configured override, or the number of
    /// logical cores the host exposes.
    pub fn worker_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get)
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn num_threads(mut self, n: usize) -> Self {
        self.config.num_threads = Some(n);
        self
    }

    pub fn thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config.thread_name_prefix = prefix.into();
        self
    }

    pub fn stack_size(mut self, size: usize) -> Self {
        self.config.stack_size = Some(size);
        self
    }

    pub fn panic_strategy(mut self, strategy: PanicStrategy) -> Self {
        self.config.panic_strategy = strategy;
        self
    }

    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.config.deadline = Some(deadline);
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
