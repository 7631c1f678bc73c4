//! REST repository adapter for the product catalog backend.
//!
//! Provides the [`ProductRepository`] port used by the view-model, the
//! [`ProductsApi`] implementation over HTTP, the backend wire types and
//! their mapping to [`catalog_core::Product`], and typed failures that
//! carry a user-facing message.

pub mod api;
pub mod config;
pub mod error;
pub mod repository;
pub mod wire;

pub use api::ProductsApi;
pub use config::ClientConfig;
pub use error::{Operation, RepositoryError};
pub use repository::ProductRepository;
