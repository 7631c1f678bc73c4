//! Transient notifications.
//!
//! At most one toast is visible. Showing a toast replaces the current one
//! and schedules its own auto-clear; a timer belonging to a replaced toast
//! never clears the newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(10);

/// Lifetime of the error toast raised by a failed delete.
pub const DELETE_ERROR_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    /// Increases with every toast shown by the same [`Toaster`].
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Holder of the visible toast. Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct Toaster {
    state: Arc<watch::Sender<Option<Toast>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for Toaster {
    fn default() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            state: Arc::new(state),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Toaster {
    /// Show a toast for [`DEFAULT_TOAST_DURATION`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.show_for(message, kind, DEFAULT_TOAST_DURATION)
    }

    /// Show a toast that clears itself after `lifetime`.
    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, lifetime: Duration) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let toast = Toast {
            id,
            message: message.into(),
            kind,
        };
        tracing::debug!(id, kind = ?toast.kind, message = %toast.message, "Showing toast");
        self.state.send_replace(Some(toast));

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            state.send_if_modified(|current| {
                if current.as_ref().is_some_and(|t| t.id == id) {
                    *current = None;
                    true
                } else {
                    false
                }
            });
        });

        id
    }

    pub fn dismiss(&self) {
        self.state.send_replace(None);
    }

    pub fn current(&self) -> Option<Toast> {
        self.state.borrow().clone()
    }

    /// Watch the visible toast.
    pub fn subscribe(&self) -> watch::Receiver<Option<Toast>> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(toaster: &Toaster) -> Option<String> {
        toaster.current().map(|t| t.message)
    }

    #[tokio::test(start_paused = true)]
    async fn toast_clears_after_default_duration() {
        let toaster = Toaster::default();
        toaster.show("Producto agregado correctamente", ToastKind::Success);

        tokio::time::sleep(Duration::from_secs(9)).await;
        assert_eq!(message(&toaster).as_deref(), Some("Producto agregado correctamente"));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(toaster.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_timer_does_not_clear_newer_toast() {
        let toaster = Toaster::default();
        toaster.show("first", ToastKind::Success);

        tokio::time::sleep(Duration::from_secs(5)).await;
        toaster.show("second", ToastKind::Error);

        // The first toast's timer fires at 10s.
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(message(&toaster).as_deref(), Some("second"));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(toaster.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_lifetime_is_honoured() {
        let toaster = Toaster::default();
        toaster.show_for("boom", ToastKind::Error, DELETE_ERROR_TOAST_DURATION);

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert!(toaster.current().is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(toaster.current().is_none());
    }

    #[tokio::test]
    async fn ids_increase_and_subscribers_see_changes() {
        let toaster = Toaster::default();
        let mut rx = toaster.subscribe();

        let first = toaster.show("a", ToastKind::Success);
        let second = toaster.show("b", ToastKind::Success);
        assert!(second > first);

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().map(|t| t.id), Some(second));

        toaster.dismiss();
        assert_eq!(toaster.current(), None);
    }
}
