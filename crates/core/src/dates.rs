//! Calendar-date helpers.
//!
//! Form inputs carry dates as `YYYY-MM-DD` strings while records carry UTC
//! midnight instants. Every comparison in the catalog happens on calendar
//! days, never on instants, so a time-of-day or a local offset can not flip
//! a result.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::types::Timestamp;

/// Format used by date inputs (`2026-01-20`).
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used by the listing table (`20/01/2026`).
pub const TABLE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a calendar date from either a `YYYY-MM-DD` string or a full
/// RFC 3339 timestamp. Timestamps are reduced to their UTC calendar day.
///
/// Returns `None` for blank or unparsable input.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// The UTC midnight instant of a calendar day.
pub fn utc_midnight(date: NaiveDate) -> Timestamp {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// Same month and day, one year later.
///
/// February 29th rolls over to March 1st when the following year has no
/// leap day.
pub fn one_year_after(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

/// Revision date paired with a release date input.
///
/// Blank input yields an empty string (the paired field is cleared, not
/// left untouched). Unparsable input also clears it.
pub fn paired_revision_date(release: &str) -> String {
    parse_calendar_date(release)
        .map(|date| one_year_after(date).format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Render a stored instant for a date input (`YYYY-MM-DD`, UTC).
pub fn format_for_input(value: &Timestamp) -> String {
    value.format(INPUT_DATE_FORMAT).to_string()
}

/// Render a stored instant for the listing table (`dd/MM/yyyy`, UTC).
pub fn format_for_table(value: Option<&Timestamp>) -> String {
    value
        .map(|v| v.format(TABLE_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
