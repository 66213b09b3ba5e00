//! Cancellable quiet-period timer
//!
//! Holds at most one pending timer task. Scheduling a new timer aborts the
//! previous one, so at most one `PreviewDebounceElapsed` is produced per
//! quiet period. A message that was already queued before the abort is
//! rejected by the preview controller's generation check.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::actions::send;
use crate::message::Message;

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timer for `generation`, cancelling any pending one.
    pub fn schedule(&mut self, generation: u64, delay: Duration, msg_tx: mpsc::Sender<Message>) {
        self.cancel();
        trace!("Debounce generation {} scheduled in {:?}", generation, delay);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            send(&msg_tx, Message::PreviewDebounceElapsed { generation }).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_previous_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new();

        debouncer.schedule(1, Duration::from_millis(500), tx.clone());
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(2, Duration::from_millis(500), tx.clone());
        tokio::time::sleep(Duration::from_millis(600)).await;

        match rx.try_recv() {
            Ok(Message::PreviewDebounceElapsed { generation }) => assert_eq!(generation, 2),
            other => panic!("expected elapsed message, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_fires_before_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new();

        debouncer.schedule(1, Duration::from_millis(500), tx);
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_finishes_when_receiver_is_gone() {
        let (tx, rx) = mpsc::channel(8);
        drop(rx);
        let mut debouncer = Debouncer::new();

        debouncer.schedule(1, Duration::from_millis(100), tx);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        {
            let mut debouncer = Debouncer::new();
            debouncer.schedule(1, Duration::from_millis(100), tx);
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());
    }
}
