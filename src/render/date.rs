//! Long-form localized publish dates.

use chrono::{DateTime, FixedOffset, NaiveDate};

use super::i18n::Language;

/// Shown for timestamps that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats an ISO-8601 timestamp as day, full month name and year in the
/// language's locale, e.g. `15 Ocak 2024` or `January 15, 2024`.
///
/// The calendar date is taken in the timestamp's own offset.
pub fn format_date(timestamp: &str, language: Language) -> String {
    let messages = language.messages();
    match parse_timestamp(timestamp) {
        Some(dt) => dt
            .format_localized(messages.date_format, messages.date_locale)
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Same as [`format_date`], for a timestamp the API may leave out.
pub fn format_published(published_at: Option<&str>, language: Language) -> String {
    published_at
        .map(|ts| format_date(ts, language))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt);
    }
    // Date-only form, read as midnight UTC
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
