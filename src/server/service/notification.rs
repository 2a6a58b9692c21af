//! Background delivery of moderation events.
//!
//! Handlers enqueue events and return immediately; a single task posts them to Discord
//! in order. A failed delivery is logged and dropped, never retried and never reported
//! to the request that caused it.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::server::{model::event::BotEvent, service::discord::Notifier};

/// Cheap to clone handle for enqueueing events.
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: UnboundedSender<BotEvent>,
}

impl NotificationDispatcher {
    /// Starts the delivery task and returns a handle to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(notifier: Arc<dyn Notifier>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        tokio::spawn(deliver(notifier, receiver));

        Self { sender }
    }

    /// Creates a dispatcher whose events are collected by the returned receiver.
    #[cfg(test)]
    pub fn channel() -> (Self, UnboundedReceiver<BotEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Enqueues an event for delivery.
    pub fn dispatch(&self, event: BotEvent) {
        if let Err(e) = self.sender.send(event) {
            tracing::warn!("Notification queue is closed, dropping {:?}", e.0);
        }
    }
}

/// Delivers events until every dispatcher handle has been dropped.
pub async fn deliver(notifier: Arc<dyn Notifier>, mut receiver: UnboundedReceiver<BotEvent>) {
    while let Some(event) = receiver.recv().await {
        if let Err(e) = notifier.notify(&event.message()).await {
            tracing::warn!("Failed to deliver notification {:?}: {}", event, e);
        }
    }
}
