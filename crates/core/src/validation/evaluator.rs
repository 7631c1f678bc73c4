//! Draft evaluator. Pure logic, no I/O.

use chrono::NaiveDate;
use validator::ValidateLength;

use super::rules::{
    FieldError, FieldErrors, TextRule, DESCRIPTION_RULE, ID_RULE, LOGO_REQUIRED, NAME_RULE,
    RELEASE_DATE_INVALID, RELEASE_DATE_IN_PAST, RELEASE_DATE_REQUIRED, REVISION_DATE_INVALID,
    REVISION_DATE_MISMATCH, REVISION_DATE_REQUIRED,
};
use crate::dates::{one_year_after, parse_calendar_date};
use crate::draft::{FormMode, ProductDraft};

/// Evaluate every rule against a draft.
///
/// All checks run; a failing field never hides the errors of another.
/// Fields that pass are left `Untouched`. The id is not checked at all in
/// [`FormMode::Edit`] since it can not change.
///
/// `today` is the calendar day the release date is compared against.
pub fn validate_draft(draft: &ProductDraft, mode: FormMode, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if !mode.is_editing() {
        if let Some(error) = evaluate_text(&ID_RULE, draft.id.as_deref()) {
            errors.id = error;
        }
    }

    if let Some(error) = evaluate_text(&NAME_RULE, draft.name.as_deref()) {
        errors.name = error;
    }

    if let Some(error) = evaluate_text(&DESCRIPTION_RULE, draft.description.as_deref()) {
        errors.description = error;
    }

    if is_missing(draft.logo_url.as_deref()) {
        errors.logo_url = FieldError::invalid(LOGO_REQUIRED);
    }

    let release = draft.release_date.as_deref().filter(|v| !v.is_empty());
    let release_day = release.and_then(parse_calendar_date);

    match (release, release_day) {
        (None, _) => errors.release_date = FieldError::invalid(RELEASE_DATE_REQUIRED),
        (Some(_), None) => errors.release_date = FieldError::invalid(RELEASE_DATE_INVALID),
        (Some(_), Some(day)) if day < today => {
            errors.release_date = FieldError::invalid(RELEASE_DATE_IN_PAST);
        }
        _ => {}
    }

    match draft.revision_date.as_deref().filter(|v| !v.is_empty()) {
        None => errors.revision_date = FieldError::invalid(REVISION_DATE_REQUIRED),
        Some(raw) => match parse_calendar_date(raw) {
            None => errors.revision_date = FieldError::invalid(REVISION_DATE_INVALID),
            Some(revision_day) => {
                if let Some(release_day) = release_day {
                    if revision_day != one_year_after(release_day) {
                        errors.revision_date = FieldError::invalid(REVISION_DATE_MISMATCH);
                    }
                }
            }
        },
    }

    errors
}

fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

fn evaluate_text(rule: &TextRule, value: Option<&str>) -> Option<FieldError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Some(FieldError::invalid(rule.required_message)),
    };
    if value.validate_length(Some(rule.min), Some(rule.max), None) {
        None
    } else {
        Some(FieldError::invalid(rule.length_message))
    }
}
