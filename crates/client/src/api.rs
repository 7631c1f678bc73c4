//! REST client for the product catalog endpoints.
//!
//! Wraps the backend's HTTP API (listing, id verification, create, update,
//! delete) using [`reqwest`] and maps every failure to a
//! [`RepositoryError`] tagged with the [`Operation`] that produced it.

use async_trait::async_trait;
use catalog_core::Product;

use crate::config::ClientConfig;
use crate::error::{Operation, RepositoryError};
use crate::repository::ProductRepository;
use crate::wire::{ErrorBody, ListEnvelope, MutationEnvelope, ProductApi, ProductApiUpdate};

/// HTTP client for the product collection.
#[derive(Debug, Clone)]
pub struct ProductsApi {
    client: reqwest::Client,
    api_url: String,
}

impl ProductsApi {
    /// Create a client for the collection at `api_url`,
    /// e.g. `http://host:3002/bp/products`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Build a client from configuration, applying its request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET {api_url}`: the full product list.
    pub async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let op = Operation::List;
        let response = self
            .client
            .get(self.endpoint(op, &[])?)
            .send()
            .await
            .map_err(|e| request_error(op, e))?;

        let envelope: ListEnvelope = Self::parse_response(op, response).await?;
        tracing::debug!(count = envelope.data.len(), "Loaded products");
        Ok(envelope.data.into_iter().map(Product::from).collect())
    }

    /// `GET {api_url}/verification/{id}`: whether the id is taken.
    pub async fn product_id_exists(&self, id: &str) -> Result<bool, RepositoryError> {
        let op = Operation::VerifyId;
        let response = self
            .client
            .get(self.endpoint(op, &["verification", id])?)
            .send()
            .await
            .map_err(|e| request_error(op, e))?;

        Self::parse_response(op, response).await
    }

    /// `POST {api_url}`: create a product.
    pub async fn create_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        let op = Operation::Create;
        let response = self
            .client
            .post(self.endpoint(op, &[])?)
            .json(&ProductApi::from(product))
            .send()
            .await
            .map_err(|e| request_error(op, e))?;

        let envelope: MutationEnvelope = Self::parse_response(op, response).await?;
        tracing::info!(id = %envelope.data.id, message = ?envelope.message, "Product created");
        Ok(envelope.data.into())
    }

    /// `PUT {api_url}/{id}`: replace a product. The id is not in the body.
    pub async fn update_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        let op = Operation::Update;
        let response = self
            .client
            .put(self.endpoint(op, &[product.id.as_str()])?)
            .json(&ProductApiUpdate::from(product))
            .send()
            .await
            .map_err(|e| request_error(op, e))?;

        let envelope: MutationEnvelope = Self::parse_response(op, response).await?;
        tracing::info!(id = %product.id, message = ?envelope.message, "Product updated");

        // Some backends omit the id from the echoed record.
        let mut updated: Product = envelope.data.into();
        if updated.id.is_empty() {
            updated.id = product.id.clone();
        }
        Ok(updated)
    }

    /// `DELETE {api_url}/{id}`.
    pub async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        let op = Operation::Delete;
        let response = self
            .client
            .delete(self.endpoint(op, &[id])?)
            .send()
            .await
            .map_err(|e| request_error(op, e))?;

        Self::check_status(op, response).await?;
        tracing::info!(id, "Product deleted");
        Ok(())
    }

    // ---- private helpers ----

    /// The collection URL with `segments` appended, each percent-encoded as
    /// a single path segment.
    fn endpoint(&self, op: Operation, segments: &[&str]) -> Result<reqwest::Url, RepositoryError> {
        let invalid = || {
            tracing::warn!(operation = ?op, url = %self.api_url, "Invalid catalog API URL");
            RepositoryError::InvalidUrl {
                operation: op,
                url: self.api_url.clone(),
            }
        };

        let mut url = reqwest::Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Ensure the response has a success status code. On failure the body's
    /// `message` (when present) becomes the error message, otherwise the
    /// operation's fallback does.
    async fn ensure_success(
        op: Operation,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RepositoryError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&body)
            .unwrap_or_else(|| op.fallback_message().to_string());

        tracing::warn!(
            operation = ?op,
            status = status.as_u16(),
            message = %message,
            "Catalog API returned an error",
        );

        Err(RepositoryError::Api {
            operation: op,
            status: status.as_u16(),
            message,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        op: Operation,
        response: reqwest::Response,
    ) -> Result<T, RepositoryError> {
        let response = Self::ensure_success(op, response).await?;
        response.json::<T>().await.map_err(|e| request_error(op, e))
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(op: Operation, response: reqwest::Response) -> Result<(), RepositoryError> {
        Self::ensure_success(op, response).await?;
        Ok(())
    }
}

fn request_error(operation: Operation, source: reqwest::Error) -> RepositoryError {
    tracing::warn!(operation = ?operation, error = %source, "Catalog API request failed");
    RepositoryError::Request { operation, source }
}

#[async_trait]
impl ProductRepository for ProductsApi {
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        ProductsApi::list_products(self).await
    }

    async fn product_id_exists(&self, id: &str) -> Result<bool, RepositoryError> {
        ProductsApi::product_id_exists(self, id).await
    }

    async fn create_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        ProductsApi::create_product(self, product).await
    }

    async fn update_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        ProductsApi::update_product(self, product).await
    }

    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        ProductsApi::delete_product(self, id).await
    }
}
