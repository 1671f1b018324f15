//! Station availability record.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::timestamp::lenient;

/// One bike-share dock and its live availability.
///
/// Field names on the wire are snake_case (`station_id`,
/// `num_regular_bikes_available`, ...). Counts are unsigned, so a negative
/// count fails the decode rather than producing a nonsensical station.
///
/// `distance` (miles from the query point) is only present on records that
/// came from a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "station_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lon")]
    pub longitude: f64,

    #[serde(rename = "num_regular_bikes_available")]
    pub regular_bikes_available: u32,

    #[serde(rename = "num_ebikes_available")]
    pub ebikes_available: u32,

    #[serde(rename = "num_docks_available")]
    pub docks_available: u32,

    pub is_renting: bool,

    pub is_returning: bool,

    /// When the dock last reported. Substituted with the decode-time clock
    /// if the wire value could not be parsed.
    #[serde(with = "lenient")]
    pub last_reported: NaiveDateTime,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Station {
    /// Regular and electric bikes together.
    ///
    /// Saturates at `u32::MAX` rather than wrapping.
    pub fn total_bikes_available(&self) -> u32 {
        self.regular_bikes_available.saturating_add(self.ebikes_available)
    }

    /// The station's name, or `Dock #{id}` for unnamed docks.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Dock #{}", self.id),
        }
    }

    /// How long ago the dock reported, relative to `now`.
    ///
    /// Uses the largest whole unit among seconds, minutes, hours and days:
    /// `"5 minutes ago"`, `"1 day ago"`. A report from the future reads
    /// `"in 2 hours"`, and less than a second either way is `"now"`.
    pub fn last_reported_relative(&self, now: NaiveDateTime) -> String {
        let delta = now.signed_duration_since(self.last_reported);
        let (elapsed, future) = if delta < Duration::zero() {
            (-delta, true)
        } else {
            (delta, false)
        };

        let (count, unit) = if elapsed < Duration::minutes(1) {
            (elapsed.num_seconds(), "second")
        } else if elapsed < Duration::hours(1) {
            (elapsed.num_minutes(), "minute")
        } else if elapsed < Duration::days(1) {
            (elapsed.num_hours(), "hour")
        } else {
            (elapsed.num_days(), "day")
        };

        if count == 0 {
            return "now".to_string();
        }
        let plural = if count == 1 { "" } else { "s" };
        if future {
            format!("in {count} {unit}{plural}")
        } else {
            format!("{count} {unit}{plural} ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Station {
        serde_json::from_str(
            r#"{"station_id":"123","lat":1.0,"lon":2.0,
                "num_regular_bikes_available":3,"num_ebikes_available":0,
                "num_docks_available":5,"is_renting":true,"is_returning":true,
                "last_reported":"2024-01-01T12:00:00"}"#,
        )
        .unwrap()
    }

    #[test]
    fn total_bikes() {
        let mut station = sample();
        assert_eq!(station.total_bikes_available(), 3);

        station.ebikes_available = 4;
        assert_eq!(station.total_bikes_available(), 7);
    }

    #[test]
    fn total_bikes_saturates_on_huge_counts() {
        let station: Station = serde_json::from_str(
            r#"{"station_id":"1","lat":0,"lon":0,
                "num_regular_bikes_available":4294967295,"num_ebikes_available":1,
                "num_docks_available":0,"is_renting":true,"is_returning":true,
                "last_reported":"2024-01-01T12:00:00"}"#,
        )
        .unwrap();

        assert_eq!(station.total_bikes_available(), u32::MAX);
    }

    #[test]
    fn relative_last_reported() {
        let station = sample();
        let reported = station.last_reported;
        let after = |d: Duration| station.last_reported_relative(reported + d);

        assert_eq!(after(Duration::zero()), "now");
        assert_eq!(after(Duration::seconds(1)), "1 second ago");
        assert_eq!(after(Duration::seconds(59)), "59 seconds ago");
        assert_eq!(after(Duration::seconds(60)), "1 minute ago");
        assert_eq!(after(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(after(Duration::seconds(3599)), "59 minutes ago");
        assert_eq!(after(Duration::hours(1)), "1 hour ago");
        assert_eq!(after(Duration::hours(23) + Duration::minutes(59)), "23 hours ago");
        assert_eq!(after(Duration::hours(24)), "1 day ago");
        assert_eq!(after(Duration::days(3) + Duration::hours(5)), "3 days ago");
    }

    #[test]
    fn relative_last_reported_in_future() {
        let station = sample();
        let now = station.last_reported - Duration::hours(2);

        assert_eq!(station.last_reported_relative(now), "in 2 hours");
    }

    #[test]
    fn display_name_falls_back_to_dock_id() {
        let mut station = sample();
        assert_eq!(station.display_name(), "Dock #123");

        station.name = Some("Market St at 4th St".into());
        assert_eq!(station.display_name(), "Market St at 4th St");
    }

    #[test]
    fn serializes_with_wire_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["station_id"], "123");
        assert_eq!(value["num_docks_available"], 5);
        assert_eq!(value["last_reported"], "2024-01-01T12:00:00");
        assert!(value.get("distance").is_none());
        assert!(value.get("name").is_none());
    }

    #[test]
    fn negative_count_is_rejected() {
        let result: Result<Station, _> = serde_json::from_str(
            r#"{"station_id":"1","lat":0,"lon":0,
                "num_regular_bikes_available":-1,"num_ebikes_available":0,
                "num_docks_available":0,"is_renting":true,"is_returning":true,
                "last_reported":"2024-01-01T12:00:00"}"#,
        );
        assert!(result.is_err());
    }
}
