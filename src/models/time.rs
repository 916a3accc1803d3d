//! UTC timestamp parsing for caller-supplied dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{Error, Result};

/// Parse a caller-supplied timestamp into UTC.
///
/// Accepts RFC 3339 (`2024-01-25T17:54:00Z`, offsets allowed), a naive
/// datetime (`2024-01-25T17:54:00`, taken as UTC), or a bare date
/// (`2024-01-25`, taken as midnight UTC).
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(Error::InvalidDate(input.to_string()))
}
