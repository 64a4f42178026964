//! Display helpers: markup escaping, date formatting and truncation.
//!
//! None of these touch stored data; they only shape text on its way out.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Escapes the five markup-significant characters.
///
/// Each char maps independently, and no replacement contains a char that would
/// itself need escaping, so the result is stable under order of replacement.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Reads an ISO 8601 timestamp.
///
/// Accepts RFC 3339, a date-time without offset (taken as local time) and a
/// bare date (taken as UTC midnight). Anything else is `None`.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Renders an ISO 8601 timestamp as `YYYY-MM-DD HH:mm` in local time.
///
/// Unparsable input degrades to [`INVALID_DATE`].
pub fn format_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(parsed) => format_timestamp(&parsed, &Local),
        None => INVALID_DATE.to_string(),
    }
}

pub fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(tz)
        .format(DATE_FORMAT)
        .to_string()
}

/// First `max_chars` chars of `text`. No ellipsis is added.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
