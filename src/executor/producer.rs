use super::task::TaskHandle;
use crate::cancel::CancelToken;
use crossbeam_channel::Sender;

/// Feeds the batch into the bounded queue, in input order, one task per
/// iteration, polling the cancel token before each send.
///
/// The producer is the only owner of the queue's `Sender`, so the queue
/// is closed exactly once on every path: by dropping the sender when
/// this returns.
pub(crate) struct Producer {
    cancel: CancelToken,
}

impl Producer {
    pub fn new(cancel: CancelToken) -> Self {
        Self { cancel }
    }

    pub fn feed(self, tasks: Vec<TaskHandle>, jobs: Sender<TaskHandle>, interrupted: Sender<()>) {
        for task in tasks {
            if self.cancel.is_cancelled() {
                // Tasks already sent will still be executed; the rest of
                // the batch is dropped here.
                if cfg!(debug_assertions) {
                    eprintln!("[parbatch] producer observed cancellation");
                }
                let _ = interrupted.send(());
                return;
            }

            if jobs.send(task).is_err() {
                // every worker is gone; nothing left to feed
                return;
            }
        }
    }
}
