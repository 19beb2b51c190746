//! How encoders render an entry's time

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Rendering of [`Entry::time`](crate::Entry::time) in encoded records.
///
/// The `Unix*` variants become JSON numbers in the JSON encoder; everything
/// else is a string.
///
/// # Examples
///
/// ```
/// use rust_facility_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.timestamp_opt(0, 0).unwrap();
/// assert_eq!(TimestampFormat::Iso8601.format(&at), "1970-01-01T00:00:00.000Z");
/// assert_eq!(TimestampFormat::UnixMillis.format(&at), "0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// UTC with millisecond precision and a `Z` suffix
    #[default]
    Iso8601,
    /// UTC with microsecond precision and a `Z` suffix
    Iso8601Micros,
    /// chrono's RFC 3339 rendering, `+00:00` offset
    Rfc3339,
    /// Whole seconds since the epoch
    Unix,
    UnixMillis,
    UnixMicros,
    /// Any strftime pattern
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, time: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => time.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Iso8601Micros => time.to_rfc3339_opts(SecondsFormat::Micros, true),
            TimestampFormat::Rfc3339 => time.to_rfc3339(),
            TimestampFormat::Custom(pattern) => time.format(pattern).to_string(),
            numeric => numeric.to_json_value(time).to_string(),
        }
    }

    /// Numbers for the `Unix*` variants, strings for the rest.
    #[must_use]
    pub fn to_json_value(&self, time: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::Unix => time.timestamp().into(),
            TimestampFormat::UnixMillis => time.timestamp_millis().into(),
            TimestampFormat::UnixMicros => time.timestamp_micros().into(),
            textual => serde_json::Value::String(textual.format(time)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// 2024-02-29 23:59:58.007042 UTC
    fn leap_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 58).unwrap()
            + chrono::Duration::microseconds(7_042)
    }

    #[test]
    fn test_iso8601_precision() {
        let at = leap_day();
        assert_eq!(TimestampFormat::Iso8601.format(&at), "2024-02-29T23:59:58.007Z");
        assert_eq!(
            TimestampFormat::Iso8601Micros.format(&at),
            "2024-02-29T23:59:58.007042Z"
        );
        assert!(TimestampFormat::Rfc3339.format(&at).ends_with("+00:00"));
    }

    #[test]
    fn test_epoch_variants() {
        let at = leap_day();
        assert_eq!(TimestampFormat::Unix.format(&at), "1709251198");
        assert_eq!(TimestampFormat::UnixMillis.format(&at), "1709251198007");
        assert_eq!(TimestampFormat::UnixMicros.format(&at), "1709251198007042");
    }

    #[test]
    fn test_strftime_pattern() {
        let pattern = TimestampFormat::Custom("%d/%b/%Y".to_string());
        assert_eq!(pattern.format(&leap_day()), "29/Feb/2024");
    }

    #[test]
    fn test_json_types_follow_variant() {
        let at = leap_day();
        assert_eq!(TimestampFormat::Unix.to_json_value(&at), 1_709_251_198i64);
        assert!(TimestampFormat::UnixMicros.to_json_value(&at).is_i64());
        assert!(TimestampFormat::Iso8601.to_json_value(&at).is_string());
    }

    #[test]
    fn test_config_names() {
        let parsed: TimestampFormat = serde_json::from_str("\"iso8601_micros\"").unwrap();
        assert_eq!(parsed, TimestampFormat::Iso8601Micros);
    }
}
