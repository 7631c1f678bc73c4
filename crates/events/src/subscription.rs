//! Subscriptions that live exactly as long as their owner.

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::bus::{UiEvent, UiEventBus};

/// A running listener on a [`UiEventBus`].
///
/// The handler runs on a spawned task for every event published after the
/// subscription was taken. Dropping the guard aborts the task and releases
/// the receiver, so a component that goes away can not keep reacting to
/// clicks. Must be created inside a Tokio runtime.
#[derive(Debug)]
#[must_use = "the subscription ends as soon as the guard is dropped"]
pub struct ScopedSubscription {
    handle: JoinHandle<()>,
}

impl ScopedSubscription {
    pub fn spawn<F>(bus: &UiEventBus, mut handler: F) -> Self
    where
        F: FnMut(UiEvent) + Send + 'static,
    {
        let mut rx = bus.subscribe();
        let handle = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => handler(event),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "UI event subscriber lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
        Self { handle }
    }

    /// Whether the listener task is still running.
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ScopedSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
