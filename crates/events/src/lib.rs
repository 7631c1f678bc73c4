//! In-process UI events for the catalog.
//!
//! The rendering surface publishes pointer events on a [`UiEventBus`];
//! components that care about them hold a [`ScopedSubscription`] for as
//! long as they are mounted.

pub mod bus;
pub mod subscription;

pub use bus::{UiEvent, UiEventBus};
pub use subscription::ScopedSubscription;
