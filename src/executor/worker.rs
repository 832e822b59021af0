// worker thread stuff
use super::panic_handler::PanicHandler;
use super::task::TaskHandle;
use crossbeam_channel::{Receiver, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub type WorkerId = usize;

// counters shared by all workers of one run
#[derive(Debug, Default)]
pub(crate) struct RunCounters {
    pub tasks_executed: AtomicU64,
    pub tasks_panicked: AtomicU64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn executed(&self) -> u64 {
        self.tasks_executed.load(Ordering::Relaxed)
    }

    pub fn panicked(&self) -> u64 {
        self.tasks_panicked.load(Ordering::Relaxed)
    }
}

pub(crate) struct Worker {
    pub id: WorkerId,
    recovery: Arc<PanicHandler>,
    counters: Arc<RunCounters>,
}

impl Worker {
    pub fn new(id: WorkerId, recovery: Arc<PanicHandler>, counters: Arc<RunCounters>) -> Self {
        Self {
            id,
            recovery,
            counters,
        }
    }

    // main loop: drain the queue until it is closed and empty, then
    // report completion exactly once. Workers never close the queue.
    pub fn run(&self, jobs: Receiver<TaskHandle>, done: Sender<()>) {
        let mut executed = 0u64;

        for task in jobs.iter() {
            self.execute_task(&task);
            executed += 1;
        }

        if cfg!(debug_assertions) {
            eprintln!("[parbatch] worker {} done, {} task(s)", self.id, executed);
        }

        let _ = done.send(());
    }

    fn execute_task(&self, task: &TaskHandle) {
        match self.recovery.execute(|| task.lock().execute()) {
            Ok(()) => {
                self.counters.tasks_executed.fetch_add(1, Ordering::Relaxed);
            }
            Err(_info) => {
                // already counted and reported by the recovery boundary
                self.counters.tasks_panicked.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::panic_handler::PanicStrategy;
    use crate::executor::task::{handle, Task};
    use crossbeam_channel::bounded;

    struct Flag {
        done: bool,
    }

    impl Task for Flag {
        fn execute(&mut self) {
            self.done = true;
        }
    }

    struct Bomb;

    impl Task for Bomb {
        fn execute(&mut self) {
            panic!("bomb");
        }
    }

    #[test]
    fn worker_drains_queue_then_signals_done() {
        let (job_tx, job_rx) = bounded(4);
        let (done_tx, done_rx) = bounded(1);
        let worker = Worker::new(
            0,
            Arc::new(PanicHandler::new(PanicStrategy::Isolate)),
            Arc::new(RunCounters::new()),
        );

        for _ in 0..3 {
            job_tx.send(handle(Flag { done: false })).unwrap();
        }
        drop(job_tx);

        worker.run(job_rx, done_tx);

        assert_eq!(done_rx.try_recv(), Ok(()));
        assert_eq!(worker.counters.executed(), 3);
    }

    #[test]
    fn worker_survives_task_panic() {
        let (job_tx, job_rx) = bounded(4);
        let (done_tx, done_rx) = bounded(1);
        let worker = Worker::new(
            0,
            Arc::new(PanicHandler::new(PanicStrategy::Isolate)),
            Arc::new(RunCounters::new()),
        );

        job_tx.send(handle(Bomb)).unwrap();
        job_tx.send(handle(Flag { done: false })).unwrap();
        drop(job_tx);

        worker.run(job_rx, done_tx);

        assert_eq!(done_rx.try_recv(), Ok(()));
        assert_eq!(worker.counters.executed(), 1);
        assert_eq!(worker.counters.panicked(), 1);
    }

    #[test]
    fn empty_queue_still_signals_done() {
        let (job_tx, job_rx) = bounded::<TaskHandle>(1);
        let (done_tx, done_rx) = bounded(1);
        let worker = Worker::new(
            0,
            Arc::new(PanicHandler::default()),
            Arc::new(RunCounters::new()),
        );

        drop(job_tx);
        worker.run(job_rx, done_tx);

        assert_eq!(done_rx.try_recv(), Ok(()));
    }
}
