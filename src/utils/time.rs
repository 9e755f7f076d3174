//! Date-time utility functions
//!
//! RFC 3339 formatting, Unix timestamp conversion and fuzzy equality on top of
//! `chrono`.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{ExtError, Result};

/// Default tolerance for [`almost_equals`], in seconds
pub const DEFAULT_ALMOST_EQUALS_THRESHOLD: f64 = 1.0;

/// Format a date-time as RFC 3339 with millisecond precision
///
/// The offset is always numeric (`+00:00` for UTC, never `Z`).
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use primitive_ext::utils::time::to_rfc3339_string;
///
/// let dt = Utc.with_ymd_and_hms(2019, 5, 4, 13, 37, 0).unwrap();
/// assert_eq!(to_rfc3339_string(&dt), "2019-05-04T13:37:00.000+00:00");
/// ```
#[must_use]
pub fn to_rfc3339_string<Tz>(date_time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date_time.to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Check whether two date-times lie strictly less than `threshold_secs` apart
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn almost_equals<Tz1, Tz2>(a: &DateTime<Tz1>, b: &DateTime<Tz2>, threshold_secs: f64) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let delta = a.clone().signed_duration_since(b.clone());
    let delta_secs = delta.num_microseconds().map_or_else(
        || delta.num_milliseconds() as f64 / 1_000.0,
        |micros| micros as f64 / 1_000_000.0,
    );
    delta_secs.abs() < threshold_secs
}

/// Seconds since 1970-01-01T00:00:00Z
#[must_use]
pub fn to_unix_time_seconds<Tz: TimeZone>(date_time: &DateTime<Tz>) -> i64 {
    date_time.timestamp()
}

/// Milliseconds since 1970-01-01T00:00:00Z
#[must_use]
pub fn to_unix_time_milliseconds<Tz: TimeZone>(date_time: &DateTime<Tz>) -> i64 {
    date_time.timestamp_millis()
}

/// Convert a Unix timestamp in seconds to a UTC date-time
///
/// # Errors
///
/// `ExtError::TimestampOutOfRange` if `chrono` cannot represent the instant
pub fn from_unix_time_seconds(timestamp: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0).ok_or(ExtError::TimestampOutOfRange(timestamp))
}

/// Convert a Unix timestamp in milliseconds to a UTC date-time
///
/// # Errors
///
/// `ExtError::TimestampOutOfRange` if `chrono` cannot represent the instant
pub fn from_unix_time_milliseconds(timestamp: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp).ok_or(ExtError::TimestampOutOfRange(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    #[test]
    fn test_rfc3339_with_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()
            + Duration::milliseconds(678);
        assert_eq!(to_rfc3339_string(&dt), "2020-01-02T03:04:05.678+02:00");
    }

    #[test]
    fn test_almost_equals() {
        let a = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        let b = a + Duration::milliseconds(500);
        assert!(almost_equals(&a, &b, DEFAULT_ALMOST_EQUALS_THRESHOLD));
        assert!(almost_equals(&b, &a, DEFAULT_ALMOST_EQUALS_THRESHOLD));

        let c = a + Duration::seconds(1);
        assert!(!almost_equals(&a, &c, DEFAULT_ALMOST_EQUALS_THRESHOLD));
        assert!(almost_equals(&a, &c, 1.5));

        // Same instant in different zones
        let shifted = a.with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());
        assert!(almost_equals(&a, &shifted, 0.001));
    }

    #[test]
    fn test_unix_round_trip() {
        let dt = Utc.with_ymd_and_hms(2019, 5, 4, 13, 37, 0).unwrap();
        assert_eq!(to_unix_time_seconds(&dt), 1_556_977_020);
        assert_eq!(to_unix_time_milliseconds(&dt), 1_556_977_020_000);
        assert_eq!(from_unix_time_seconds(1_556_977_020).unwrap(), dt);
        assert_eq!(from_unix_time_milliseconds(1_556_977_020_000).unwrap(), dt);
    }

    #[test]
    fn test_epoch_and_negative() {
        assert_eq!(
            to_rfc3339_string(&from_unix_time_seconds(0).unwrap()),
            "1970-01-01T00:00:00.000+00:00"
        );
        assert_eq!(from_unix_time_milliseconds(-1).unwrap().timestamp_millis(), -1);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            from_unix_time_seconds(i64::MAX),
            Err(ExtError::TimestampOutOfRange(i64::MAX))
        );
    }
}
