//! Date parsing and calendar rendering for exercise dates.
//!
//! All dates are handled in UTC. Inputs without an offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::config::CALENDAR_DATE_FORMAT;
use crate::domain::ScalarInput;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", CALENDAR_DATE_FORMAT, "%b %d %Y", "%B %d, %Y"];

/// Parse a date or timestamp string.
///
/// Returns `None` for anything that is not a valid calendar date.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(Utc.from_utc_datetime(&naive));
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
    {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }

    DateTime::parse_from_rfc2822(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a body date field: text, or milliseconds since the Unix epoch.
pub fn parse_date_input(input: &ScalarInput) -> Option<DateTime<Utc>> {
    match input {
        ScalarInput::Text(text) => parse_date(text),
        ScalarInput::Number(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        ScalarInput::Number(_) => None,
    }
}

/// Render a date as a calendar string without time, e.g. `Mon Jan 01 2024`.
pub fn format_calendar_date(date: &DateTime<Utc>) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}
