//! Per-record action menu.
//!
//! One menu can be open at a time. It opens below and to the left of the
//! control that triggered it and closes on any click outside of it.

use std::sync::Arc;

use catalog_core::types::ProductId;
use catalog_events::{ScopedSubscription, UiEvent, UiEventBus};
use serde::Serialize;
use tokio::sync::watch;

/// Horizontal shift applied so the menu lines up under its trigger.
pub const MENU_LEFT_SHIFT: f64 = 80.0;

/// Viewport-relative bounds of the triggering control.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorRect {
    pub left: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Document-relative position of the open menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuPosition {
    pub top: f64,
    pub left: f64,
}

impl MenuPosition {
    pub fn below_left_of(anchor: AnchorRect, scroll: ScrollOffset) -> Self {
        Self {
            top: anchor.bottom + scroll.y,
            left: anchor.left + scroll.x - MENU_LEFT_SHIFT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenMenu {
    pub id: ProductId,
    pub position: MenuPosition,
}

/// Open/closed state of the action menu. Clones share state.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    state: Arc<watch::Sender<Option<OpenMenu>>>,
}

impl Default for ContextMenu {
    fn default() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            state: Arc::new(state),
        }
    }
}

impl ContextMenu {
    /// Open the menu for `id`, or close it if it is already open for `id`.
    ///
    /// Returns whether the menu is open afterwards.
    pub fn toggle(&self, id: &str, anchor: AnchorRect, scroll: ScrollOffset) -> bool {
        let mut opened = false;
        self.state.send_modify(|current| {
            if current.as_ref().is_some_and(|open| open.id == id) {
                *current = None;
            } else {
                *current = Some(OpenMenu {
                    id: id.to_string(),
                    position: MenuPosition::below_left_of(anchor, scroll),
                });
                opened = true;
            }
        });
        opened
    }

    pub fn close(&self) {
        self.state.send_if_modified(|current| current.take().is_some());
    }

    pub fn open_id(&self) -> Option<ProductId> {
        self.state.borrow().as_ref().map(|open| open.id.clone())
    }

    pub fn position(&self) -> Option<MenuPosition> {
        self.state.borrow().as_ref().map(|open| open.position)
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<OpenMenu>> {
        self.state.subscribe()
    }

    /// Close the menu on every document click published on `bus` until the
    /// returned guard is dropped.
    pub fn dismiss_on_outside_click(&self, bus: &UiEventBus) -> ScopedSubscription {
        let menu = self.clone();
        ScopedSubscription::spawn(bus, move |event| {
            if matches!(event, UiEvent::DocumentClick) {
                menu.close();
            }
        })
    }
}
