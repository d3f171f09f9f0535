//! Destinations for notifications.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;
use tracing::debug;

use super::model::Notification;

/// Receives notifications from controllers.
///
/// Implementations must not block: controllers call `push` while updating
/// their own state.
pub trait Notifier: Send + Sync {
    fn push(&self, notification: Notification);
}

/// Collects notifications in memory until the host drains them.
#[derive(Debug, Default)]
pub struct ToastQueue {
    queue: Mutex<VecDeque<Notification>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn push(&self, notification: Notification) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(notification);
    }
}

/// Forwards notifications to an async consumer.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn push(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            debug!("Notification dropped: receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_queue_drains_in_order() {
        let queue = ToastQueue::new();
        queue.push(Notification::success("Success", "first"));
        queue.push(Notification::danger("Error", "second"));
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(drained, vec!["first", "second"]);
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_channel_notifier_forwards() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.push(Notification::success("Success", "saved"));
        let received = rx.recv().await.unwrap();
        assert_eq!(received.message, "saved");
    }

    #[test]
    fn test_channel_notifier_survives_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.push(Notification::danger("Error", "lost"));
    }
}
