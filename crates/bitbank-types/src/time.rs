//! Millisecond timestamp helpers

use chrono::{DateTime, Utc};

/// Convert an exchange timestamp (milliseconds since the Unix epoch) to UTC
pub fn utc_datetime(timestamp_ms: u64) -> Option<DateTime<Utc>> {
    let millis = i64::try_from(timestamp_ms).ok()?;
    DateTime::from_timestamp_millis(millis)
}

/// Render an exchange timestamp as a UTC calendar date (`YYYY-MM-DD`)
pub fn utc_date(timestamp_ms: u64) -> Option<String> {
    utc_datetime(timestamp_ms).map(|dt| dt.format("%Y-%m-%d").to_string())
}
