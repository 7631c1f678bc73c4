//! Live feedback while typing.
//!
//! These checks are advisory. They write the same error slots as the full
//! evaluator but use shorter messages, and a save always re-runs
//! [`validate_draft`](super::evaluator::validate_draft).

use super::rules::{FieldError, DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, ID_ALREADY_LISTED};
use crate::draft::FormMode;
use crate::product::Product;

/// Length feedback for the description field, on the trimmed value.
///
/// An empty description is not flagged here; the evaluator reports it as
/// required on submit.
pub fn description_feedback(description: &str) -> FieldError {
    let length = description.trim().chars().count() as u64;
    if length > 0 && length < DESCRIPTION_MIN_LENGTH {
        FieldError::Invalid(format!("Mínimo {DESCRIPTION_MIN_LENGTH} caracteres"))
    } else if length > DESCRIPTION_MAX_LENGTH {
        FieldError::Invalid(format!("Máximo {DESCRIPTION_MAX_LENGTH} caracteres"))
    } else {
        FieldError::Clear
    }
}

/// Uniqueness feedback for the id field against the loaded records.
///
/// Case-insensitive on the trimmed id. Returns `None` while editing, when
/// the id slot must be left alone.
pub fn id_feedback(id: &str, records: &[Product], mode: FormMode) -> Option<FieldError> {
    if mode.is_editing() {
        return None;
    }
    let wanted = id.trim().to_lowercase();
    let taken = records.iter().any(|p| p.id.to_lowercase() == wanted);
    Some(if taken {
        FieldError::invalid(ID_ALREADY_LISTED)
    } else {
        FieldError::Clear
    })
}
