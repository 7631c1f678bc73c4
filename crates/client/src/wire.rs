//! Backend wire shapes and their mapping to [`Product`].
//!
//! The backend names fields differently from the UI and exchanges dates as
//! ISO-8601 strings. Incoming dates are read as UTC calendar days and
//! rebuilt as UTC midnight, so a client in a negative offset never sees a
//! product released "the day before".

use catalog_core::dates::{parse_calendar_date, utc_midnight};
use catalog_core::types::Timestamp;
use catalog_core::Product;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A product as the backend sends and accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductApi {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub date_release: String,
    #[serde(default)]
    pub date_revision: String,
}

/// Update body: the id travels in the URL and is never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductApiUpdate {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

/// `GET /products` response.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub data: Vec<ProductApi>,
}

/// `POST` / `PUT` response.
#[derive(Debug, Deserialize)]
pub struct MutationEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub data: ProductApi,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract a non-blank `message` from a raw error body, if any.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}

impl From<&Product> for ProductApi {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            logo: product.logo_url.clone(),
            date_release: format_wire_date(&product.release_date),
            date_revision: format_wire_date(&product.revision_date),
        }
    }
}

impl From<&Product> for ProductApiUpdate {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            logo: product.logo_url.clone(),
            date_release: format_wire_date(&product.release_date),
            date_revision: format_wire_date(&product.revision_date),
        }
    }
}

impl From<ProductApi> for Product {
    fn from(api: ProductApi) -> Self {
        Self {
            release_date: parse_wire_date(&api.date_release),
            revision_date: parse_wire_date(&api.date_revision),
            id: api.id,
            name: api.name,
            description: api.description,
            logo_url: api.logo,
        }
    }
}

/// `2026-01-20T00:00:00.000Z`
pub fn format_wire_date(value: &Timestamp) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// UTC midnight of the date's UTC calendar day.
///
/// A missing date maps to the current instant. An unparsable one does too,
/// with a warning, since the record is still worth showing.
pub fn parse_wire_date(value: &str) -> Timestamp {
    if value.trim().is_empty() {
        return Utc::now();
    }
    match parse_calendar_date(value) {
        Some(day) => utc_midnight(day),
        None => {
            tracing::warn!(value = %value, "Unparsable date from backend, using now");
            Utc::now()
        }
    }
}
