//! The catalog record.

use serde::{Deserialize, Serialize};

use crate::types::{ProductId, Timestamp};

/// Image shown when a product has no logo or its logo fails to load.
pub const DEFAULT_LOGO: &str = "assets/images/defecto.png";

/// A financial product as the catalog UI sees it.
///
/// The backend uses a different field naming; the repository adapter owns
/// that translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Short code, unique across the catalog and immutable once created.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub logo_url: String,
    /// UTC midnight of the release day.
    pub release_date: Timestamp,
    /// UTC midnight of the revision day, one calendar year after release.
    pub revision_date: Timestamp,
}

impl Product {
    /// Logo to render, falling back to [`DEFAULT_LOGO`] when blank.
    pub fn logo_or_default(&self) -> &str {
        logo_or_default(&self.logo_url)
    }
}

/// Fallback for a blank logo reference.
pub fn logo_or_default(logo: &str) -> &str {
    if logo.trim().is_empty() {
        DEFAULT_LOGO
    } else {
        logo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_logo_falls_back_to_default() {
        assert_eq!(logo_or_default(""), DEFAULT_LOGO);
        assert_eq!(logo_or_default("  "), DEFAULT_LOGO);
    }

    #[test]
    fn present_logo_is_kept() {
        assert_eq!(
            logo_or_default("https://cdn.example/visa.png"),
            "https://cdn.example/visa.png"
        );
    }
}
