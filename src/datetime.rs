//! Date rendering for `BDAY` and `REV`.

use chrono::{DateTime, TimeZone, Utc};

/// Renders the calendar date as `YYYY-MM-DD`.
///
/// Uses the instant's own offset, so a birthday entered at local midnight
/// stays on the intended day.
///
/// # Examples
///
/// ```rust
/// use chrono::DateTime;
/// use vcard3::datetime::format_date;
///
/// let dt = DateTime::parse_from_rfc3339("1990-05-15T00:00:00+09:00").unwrap();
/// assert_eq!(format_date(&dt), "1990-05-15");
/// ```
#[must_use]
pub fn format_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.date_naive().format("%Y-%m-%d").to_string()
}

/// Renders the instant in UTC as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// # Examples
///
/// ```rust
/// use chrono::DateTime;
/// use vcard3::datetime::format_date_time;
///
/// let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00-05:00").unwrap();
/// assert_eq!(format_date_time(&dt), "2024-01-15T15:30:00Z");
/// ```
#[must_use]
pub fn format_date_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}
