use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Placeholder shown wherever an average cannot be computed.
pub const MISSING_VALUE: &str = "—";

/// Parses a `created_at` value into a UTC timestamp
/// Supports SQLite datetime ("2024-01-01 10:00:00"), ISO 8601 with or without
/// offset, minute precision, and bare dates. Naive values are taken as UTC.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Date only (e.g., "2024-01-01") - treat as midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    let (date_part, time_part) = trimmed.split_once(|c: char| c == ' ' || c == 'T')?;
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    let time_part = time_part.trim_start();

    // Explicit offset (e.g., "10:30:00Z" or "10:30:00+02:00")
    if has_offset(time_part) {
        if time_part.contains(char::is_whitespace) {
            return None;
        }
        let canonical = format!("{date_part}T{time_part}");
        return DateTime::parse_from_rfc3339(&canonical)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));
    }

    let time = NaiveTime::parse_from_str(time_part, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(time_part, "%H:%M"))
        .ok()?;
    Some(date.and_time(time).and_utc())
}

fn has_offset(time_part: &str) -> bool {
    time_part.ends_with(|c: char| c == 'Z' || c == 'z')
        || time_part.contains(|c: char| c == '+' || c == '-')
}

/// Calendar day of a timestamp, in UTC
pub fn day_of(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// Formats an optional credit average with two decimals, or the placeholder
pub fn format_credits(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => MISSING_VALUE.to_string(),
    }
}
