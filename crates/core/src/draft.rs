//! The create/edit form draft.
//!
//! A draft holds whatever the user has typed so far. Every field is
//! optional; dates are kept as the raw `YYYY-MM-DD` strings a date input
//! produces.

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::CoreError;
use crate::product::Product;
use crate::types::Timestamp;

/// Whether the open form creates a new product or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn is_editing(self) -> bool {
        matches!(self, FormMode::Edit)
    }
}

/// Candidate field values for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub release_date: Option<String>,
    pub revision_date: Option<String>,
}

impl ProductDraft {
    /// Prefill a draft from an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: Some(product.name.clone()),
            description: Some(product.description.clone()),
            logo_url: Some(product.logo_url.clone()),
            release_date: Some(dates::format_for_input(&product.release_date)),
            revision_date: Some(dates::format_for_input(&product.revision_date)),
        }
    }

    /// Quick presence check used to enable the submit control.
    ///
    /// True when id, name, description and logo are non-blank and a
    /// release date has been entered. This is not validation; see
    /// [`crate::validation::evaluator::validate_draft`].
    pub fn has_required_fields(&self) -> bool {
        fn filled(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }

        filled(&self.id)
            && filled(&self.name)
            && filled(&self.description)
            && filled(&self.logo_url)
            && self.release_date.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Convert the draft into a record.
    ///
    /// Missing text fields become empty strings and missing dates default
    /// to `now`. A date that is present but unparsable is an error.
    pub fn to_product(&self, now: Timestamp) -> Result<Product, CoreError> {
        Ok(Product {
            id: self.id.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            logo_url: self.logo_url.clone().unwrap_or_default(),
            release_date: date_or_now("release_date", self.release_date.as_deref(), now)?,
            revision_date: date_or_now("revision_date", self.revision_date.as_deref(), now)?,
        })
    }
}

fn date_or_now(
    field: &'static str,
    value: Option<&str>,
    now: Timestamp,
) -> Result<Timestamp, CoreError> {
    match value {
        None => Ok(now),
        Some(raw) if raw.trim().is_empty() => Ok(now),
        Some(raw) => dates::parse_calendar_date(raw)
            .map(dates::utc_midnight)
            .ok_or_else(|| CoreError::InvalidDate {
                field,
                value: raw.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_product() -> Product {
        Product {
            id: "trj-crd".into(),
            name: "Tarjeta de credito".into(),
            description: "Tarjeta de consumo bajo la modalidad de credito".into(),
            logo_url: "https://cdn.example/visa.png".into(),
            release_date: Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap(),
            revision_date: Utc.with_ymd_and_hms(2027, 1, 20, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn from_product_formats_dates_for_inputs() {
        let draft = ProductDraft::from_product(&sample_product());
        assert_eq!(draft.id.as_deref(), Some("trj-crd"));
        assert_eq!(draft.release_date.as_deref(), Some("2026-01-20"));
        assert_eq!(draft.revision_date.as_deref(), Some("2027-01-20"));
    }

    #[test]
    fn from_product_then_to_product_is_identity() {
        let product = sample_product();
        let draft = ProductDraft::from_product(&product);
        let back = draft.to_product(Utc::now()).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn missing_dates_default_to_now() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 15, 30, 0).unwrap();
        let draft = ProductDraft {
            id: Some("abc".into()),
            ..Default::default()
        };
        let product = draft.to_product(now).unwrap();
        assert_eq!(product.release_date, now);
        assert_eq!(product.revision_date, now);
        assert_eq!(product.name, "");
    }

    #[test]
    fn unparsable_date_is_rejected() {
        let draft = ProductDraft {
            release_date: Some("mañana".into()),
            ..Default::default()
        };
        let err = draft.to_product(Utc::now()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { field: "release_date", .. }));
    }

    #[test]
    fn dates_become_utc_midnight() {
        let draft = ProductDraft {
            release_date: Some("2026-05-01".into()),
            revision_date: Some("2027-05-01".into()),
            ..Default::default()
        };
        let product = draft.to_product(Utc::now()).unwrap();
        assert_eq!(
            product.release_date.date_naive(),
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
        );
        assert_eq!(product.release_date.format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn required_fields_check_ignores_whitespace_values() {
        let mut draft = ProductDraft::from_product(&sample_product());
        assert!(draft.has_required_fields());

        draft.logo_url = Some("   ".into());
        assert!(!draft.has_required_fields());
    }

    #[test]
    fn required_fields_check_needs_release_date() {
        let mut draft = ProductDraft::from_product(&sample_product());
        draft.release_date = None;
        assert!(!draft.has_required_fields());
    }

    #[test]
    fn default_mode_is_create() {
        assert_eq!(FormMode::default(), FormMode::Create);
        assert!(!FormMode::Create.is_editing());
        assert!(FormMode::Edit.is_editing());
    }
}
