//! Calendar date parsing and display labels.
//!
//! Entry dates are calendar dates. Timestamps are reduced to the date they
//! were written in, so a label never shifts across a timezone boundary.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a frontmatter date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] when none of the formats match.
pub fn parse_entry_date(value: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT) {
        return Ok(timestamp.date());
    }

    Err(CoreError::InvalidDate {
        value: value.to_string(),
    })
}

/// Abbreviated month and four-digit year in English, e.g. `"Jan 2023"`.
#[must_use]
pub fn month_year_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
