//! Headless product catalog application.
//!
//! - [`view_model`]: listing, search, paging, form and workflows.
//! - [`toast`]: the single transient notification.
//! - [`menu`]: the per-record action menu.
//! - [`config`]: environment configuration.

pub mod config;
pub mod menu;
pub mod toast;
pub mod view_model;

pub use config::AppConfig;
pub use view_model::CatalogViewModel;
