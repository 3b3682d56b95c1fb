use tokio::{sync::watch, task::JoinHandle};

/// Owner of a running ticker task.
///
/// Cancelling (or dropping) the handle signals the task through its `watch`
/// channel; the task exits at its next await point.
#[derive(Debug)]
pub struct TickerHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub(crate) fn new(cancel: watch::Sender<bool>, task: JoinHandle<()>) -> Self {
        Self { cancel, task }
    }

    /// Signal the ticker to stop.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Whether the ticker task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
