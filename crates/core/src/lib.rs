//! Catalog domain core.
//!
//! Pure logic shared by the repository adapter and the view-model, with no
//! I/O of its own:
//!
//! - [`product`]: the `Product` record and logo fallback.
//! - [`draft`]: the create/edit form draft and its conversion to a record.
//! - [`validation`]: field rules, the draft evaluator and live feedback.
//! - [`search`]: case-insensitive substring filtering.
//! - [`pagination`]: page math for the listing.
//! - [`dates`]: calendar-date parsing, pairing and formatting.

pub mod dates;
pub mod draft;
pub mod error;
pub mod pagination;
pub mod product;
pub mod search;
pub mod types;
pub mod validation;

pub use draft::{FormMode, ProductDraft};
pub use error::CoreError;
pub use pagination::{PageInfo, Pager};
pub use product::Product;
