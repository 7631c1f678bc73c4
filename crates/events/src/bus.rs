//! In-process UI event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`UiEventBus`] replaces document-wide listeners: the rendering surface
//! publishes what happened and each mounted component subscribes for as
//! long as it lives. Share it via `Arc<UiEventBus>` or by reference.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// UiEvent
// ---------------------------------------------------------------------------

/// Something the user did outside of a specific control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum UiEvent {
    /// A click that reached the document.
    ///
    /// Controls that handle their own click (such as a row's menu trigger)
    /// do not let it through, so this is never published for them.
    DocumentClick,
}

// ---------------------------------------------------------------------------
// UiEventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Fan-out bus for [`UiEvent`]s.
///
/// ```rust
/// use catalog_events::bus::{UiEvent, UiEventBus};
///
/// let bus = UiEventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(UiEvent::DocumentClick);
/// ```
#[derive(Debug, Clone)]
pub struct UiEventBus {
    sender: broadcast::Sender<UiEvent>,
}

impl UiEventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest events are dropped and slow
    /// receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns how many subscribers will see it; zero is not an error.
    pub fn publish(&self, event: UiEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for UiEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
