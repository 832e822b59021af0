use super::panic_handler::PanicHandler;
use super::producer::Producer;
use super::task::TaskHandle;
use super::worker::{RunCounters, Worker};
use crate::cancel::CancelToken;
use crate::config::Config;
use crate::error::{Error, Result};
use crossbeam_channel::{after, bounded, never, select};
use std::sync::Arc;
use std::thread;

/// Bounded worker pool for batches of independent CPU-bound tasks.
///
/// The worker count is fixed when the pool is built (one per logical core
/// unless overridden) and every run gets its own queue and signal
/// channels, so a pool can be reused for sequential runs and two pools
/// never share state.
#[derive(Debug)]
pub struct Pool {
    config: Config,
    worker_count: usize,
}

impl Pool {
    /// Pool with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let worker_count = config.worker_threads();
        Ok(Self {
            config,
            worker_count,
        })
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Run the batch to completion, blocking the calling thread.
    ///
    /// Returns `Ok(())` once every task has executed, the cancellation
    /// sentinel if the run was interrupted, or the panic count if tasks
    /// panicked. The pool never returns while a worker is still running.
    pub fn run_blocking(&self, tasks: Vec<TaskHandle>) -> Result<()> {
        self.run_blocking_with(tasks, CancelToken::new())
    }

    /// Like [`run_blocking`](Self::run_blocking), with a caller-supplied
    /// cancellation token.
    ///
    /// Cancellation is cooperative: it is observed before each task is
    /// queued. Tasks already queued still run; a task that is mid-execute
    /// is never interrupted.
    pub fn run_blocking_with(&self, tasks: Vec<TaskHandle>, cancel: CancelToken) -> Result<()> {
        let n = self.worker_count;

        // All channels are scoped to this run. Queue capacity equals the
        // worker count, as does the completion channel, so workers never
        // block on reporting.
        let (job_tx, job_rx) = bounded::<TaskHandle>(n);
        let (done_tx, done_rx) = bounded::<()>(n);
        let (interrupted_tx, interrupted_rx) = bounded::<()>(1);

        let recovery = Arc::new(PanicHandler::new(self.config.panic_strategy));
        let counters = Arc::new(RunCounters::new());

        let mut threads = Vec::with_capacity(n + 1);

        let feeder_name = format!("{}-feeder", self.config.thread_name_prefix);
        let producer = Producer::new(cancel.clone());
        let feeder = thread::Builder::new()
            .name(feeder_name)
            .spawn(move || producer.feed(tasks, job_tx, interrupted_tx))
            .map_err(|e| Error::executor(format!("spawn failed: {}", e)))?;
        threads.push(feeder);

        for id in 0..n {
            let worker = Worker::new(id, recovery.clone(), counters.clone());
            let jobs = job_rx.clone();
            let done = done_tx.clone();
            let name = format!("{}-{}", self.config.thread_name_prefix, id);

            let mut builder = thread::Builder::new().name(name);
            if let Some(stack_size) = self.config.stack_size {
                builder = builder.stack_size(stack_size);
            }

            match builder.spawn(move || worker.run(jobs, done)) {
                Ok(thread) => threads.push(thread),
                Err(e) => {
                    // Tear the run down before surfacing the error: cancel
                    // so the feeder stops at its next checkpoint, release
                    // our queue handles so a wedged send disconnects, and
                    // join everything already spawned.
                    cancel.cancel();
                    drop(job_rx);
                    drop(done_tx);
                    for thread in threads {
                        let _ = thread.join();
                    }
                    return Err(Error::executor(format!("spawn failed: {}", e)));
                }
            }
        }

        // Workers hold the only receivers that matter; keeping these
        // alive here would stop the queue from ever disconnecting.
        drop(job_rx);
        drop(done_tx);

        let mut deadline_rx = match self.config.deadline {
            Some(d) => after(d),
            None => never(),
        };
        let mut interrupted_rx = interrupted_rx;

        let mut completed = 0usize;
        let mut result = Ok(());

        // Aggregation loop: even after an interruption the loop keeps
        // draining completion signals, so no worker outlives this call.
        while completed < n {
            select! {
                recv(done_rx) -> msg => {
                    match msg {
                        Ok(()) => completed += 1,
                        // every worker dropped its sender: nothing left to wait for
                        Err(_) => completed = n,
                    }
                },
                recv(interrupted_rx) -> msg => {
                    if msg.is_ok() {
                        result = Err(Error::Interrupted);
                    }
                    // fires once at most; a disconnect just means the
                    // producer finished cleanly
                    interrupted_rx = never();
                },
                recv(deadline_rx) -> _ => {
                    cancel.cancel();
                    deadline_rx = never();
                },
            }
        }

        // The producer's signal is buffered and sent before the queue
        // closes, so it can still be unread when the last completion
        // arrives. Check once more before fixing the result.
        if result.is_ok() && interrupted_rx.try_recv().is_ok() {
            result = Err(Error::Interrupted);
        }

        for thread in threads {
            let _ = thread.join();
        }

        if cfg!(debug_assertions) {
            eprintln!(
                "[parbatch] run finished: {} executed, {} panicked",
                counters.executed(),
                counters.panicked()
            );
        }

        if result.is_ok() {
            let count = recovery.panic_count();
            if count > 0 {
                result = Err(Error::TasksPanicked { count });
            }
        }

        result
    }
}

/// Run a batch on a fresh default pool.
///
/// Convenience wrapper for one-shot use; build a [`Pool`] to reuse the
/// worker-count lookup or to configure the run.
pub fn run_blocking(tasks: Vec<TaskHandle>) -> Result<()> {
    Pool::new()?.run_blocking(tasks)
}
