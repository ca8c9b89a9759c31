use chrono::{DateTime, NaiveDateTime, Utc};

// The Python backend serializes naive `datetime.isoformat()` values. Java's
// `LocalDateTime.toString()` drops the seconds when they are zero.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored timestamp into a UTC instant.
///
/// Accepts RFC 3339 (with `Z` or an explicit offset) and naive ISO-8601
/// date-times, which are taken to be UTC. Returns `None` for anything else,
/// including empty strings.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}
