//! Time utilities for file listings and generated file names

use chrono::{DateTime, TimeZone, Utc};

/// Format a timestamp for listings ("YYYY-MM-DD HH:MM UTC")
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use fb64::utils::time::format_timestamp;
///
/// let ts = Utc.timestamp_opt(1704067200, 0).unwrap();
/// assert_eq!(format_timestamp(&ts), "2024-01-01 00:00 UTC");
/// ```
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Convert a Unix timestamp to a UTC datetime
///
/// Returns the epoch for out-of-range timestamps.
pub fn from_unix_seconds(timestamp: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Default stem for exported files: `decoded_<unix seconds>`
pub fn decoded_file_stem(now: &DateTime<Utc>) -> String {
    format!("decoded_{}", now.timestamp())
}
