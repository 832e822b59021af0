pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cancellation was requested before every task had been queued.
    /// Tasks already handed to the queue still ran to completion.
    #[error("run interrupted, not all tasks have been completed")]
    Interrupted,

    /// One or more tasks panicked during the run. The panics were
    /// isolated per task and the rest of the batch still executed.
    #[error("{count} task(s) panicked during the run")]
    TasksPanicked { count: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("executor error: {0}")]
    Executor(String),
}

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn executor<S: Into<String>>(msg: S) -> Self {
        Error::Executor(msg.into())
    }
}
