//! `last_reported` wire timestamps.
//!
//! The backend sends naive timestamps like `2024-01-01T12:00:00`:
//! no offset, no fractional seconds. They are treated as UTC.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use tracing::warn;

/// Pattern of the `last_reported` wire field.
pub const LAST_REPORTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a `last_reported` value strictly against [`LAST_REPORTED_FORMAT`].
///
/// Returns `None` for anything else, including values carrying an offset
/// or fractional seconds.
pub fn parse_last_reported(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, LAST_REPORTED_FORMAT).ok()
}

/// Serde adapter for the `last_reported` field.
///
/// Decoding never fails on an unparseable string: the decode-time clock is
/// substituted and a warning is logged. A value that is not a string at all
/// is still a type error.
pub(crate) mod lenient {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(parse_last_reported(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "could not parse last_reported, using current time");
            Utc::now().naive_utc()
        }))
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(LAST_REPORTED_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn parses_wire_pattern() {
        let parsed = parse_last_reported("2024-01-01T12:00:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_last_reported("2024-01-01T12:00:00Z").is_none());
        assert!(parse_last_reported("2024-01-01T12:00:00+02:00").is_none());
        assert!(parse_last_reported("2024-01-01T12:00:00.123").is_none());
        assert!(parse_last_reported("2024-01-01 12:00:00").is_none());
        assert!(parse_last_reported("1704110400").is_none());
        assert!(parse_last_reported("").is_none());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_last_reported("2024-02-30T12:00:00").is_none());
        assert!(parse_last_reported("2024-01-01T25:00:00").is_none());
    }
}
