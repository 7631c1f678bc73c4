//! Repository port consumed by the catalog view-model.

use async_trait::async_trait;
use catalog_core::Product;

use crate::error::RepositoryError;

/// Remote persistence for catalog products.
///
/// Every call resolves exactly once, to a value or a [`RepositoryError`]
/// whose `Display` is suitable for a toast. Implementations hold no state
/// between calls and never retry.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch the full product list.
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Ask the backend whether `id` is already taken.
    async fn product_id_exists(&self, id: &str) -> Result<bool, RepositoryError>;

    /// Create a product. Returns the record as echoed by the backend.
    async fn create_product(&self, product: &Product) -> Result<Product, RepositoryError>;

    /// Replace an existing product, addressed by its id.
    async fn update_product(&self, product: &Product) -> Result<Product, RepositoryError>;

    /// Delete the product with `id`.
    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError>;
}
