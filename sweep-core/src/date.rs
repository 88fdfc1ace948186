//! Date normalization
//!
//! The job store hands out scheduled dates in more than one shape: plain ISO
//! dates, ISO timestamps, and locale-formatted display strings. Everything is
//! converted to a `NaiveDate` at the loader boundary so the filter engine
//! only ever compares calendar dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{DomainError, Result};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%a, %b %d, %Y",
    "%A, %B %d, %Y",
    "%d %B %Y",
];

const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Parse any accepted date representation into a calendar date
///
/// # Errors
/// Returns `DomainError::InvalidDate` when no format matches.
pub fn normalize_date(raw: &str) -> Result<NaiveDate> {
    let input = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date);
        }
    }

    // Timestamps keep the calendar date as written, without shifting zones
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ts.date());
    }

    Err(DomainError::InvalidDate(raw.to_string()))
}

/// Short display form, e.g. "Jun 1, 2024"
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
