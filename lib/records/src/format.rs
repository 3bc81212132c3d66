//! Display formatting for record fields.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Shown when a timestamp cannot be interpreted.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a backend timestamp as a `M/D/YYYY` calendar date.
///
/// Accepts RFC 3339 timestamps (the date is taken in the timestamp's own
/// offset), naive ISO date-times, plain ISO dates and epoch milliseconds.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_date(raw.trim()).map_or_else(
        || INVALID_DATE.to_string(),
        |date| format!("{}/{}/{}", date.month(), date.day(), date.year()),
    )
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|timestamp| timestamp.date_naive())
}

/// Badge text for a group's child count.
#[must_use]
pub fn item_count_label(count: usize) -> String {
    format!("{count} items")
}
