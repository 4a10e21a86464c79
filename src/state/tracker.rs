//! Counting join for outstanding crawl jobs
//!
//! Every unit of work is registered before it is enqueued and completed on
//! every exit path, so a pending count of zero means the queue is empty and
//! no task is still running. The top-level caller waits on that before
//! reading the stores.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Counts outstanding crawl jobs and wakes waiters when the count hits zero
#[derive(Debug, Default)]
pub struct CompletionTracker {
    pending: AtomicUsize,
    idle: Notify,
}

impl CompletionTracker {
    /// Creates a tracker with no pending work
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one unit of work
    ///
    /// Must be called before the job is enqueued, otherwise the count can
    /// momentarily read zero while work is still in the queue.
    pub fn register(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    /// Marks one unit of work as finished, waking waiters on the last one
    pub fn complete(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }

    /// Current number of registered, unfinished jobs
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Waits until every registered job has completed
    pub async fn wait_idle(&self) {
        loop {
            // Arm the notification before checking the count so a completion
            // that lands between the check and the await is not lost.
            let notified = self.idle.notified();
            if self.pending.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}
