//! Cancellable delayed automated move.
//!
//! The engine has no notion of time. This scheduler waits for the
//! configured delay and then tells the driver that the automated opponent
//! may play. Each firing carries the session generation it was scheduled
//! for; the driver drops firings whose generation is stale.

use derive_new::new;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Message sent when a scheduled automated move is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ScheduledMove {
    /// Session generation the move was scheduled for.
    pub generation: u64,
}

/// Schedules at most one pending automated move at a time.
#[derive(Debug)]
pub struct AutomatedMoveScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<ScheduledMove>,
    pending: Option<JoinHandle<()>>,
}

impl AutomatedMoveScheduler {
    /// Creates a scheduler and the receiver its firings arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ScheduledMove>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Schedules an automated move, replacing any pending one.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, generation: u64) {
        self.cancel();

        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(generation, "Automated move due");
            // Receiver gone means the driver has shut down.
            let _ = tx.send(ScheduledMove::new(generation));
        }));
    }

    /// Cancels the pending automated move, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Pending automated move cancelled");
            }
            handle.abort();
        }
    }

    /// Returns true if a move is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for AutomatedMoveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
