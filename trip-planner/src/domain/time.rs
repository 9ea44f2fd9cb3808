//! Time handling for the Trip Planner API.
//!
//! The upstream API reports all times as UTC ISO-8601 strings
//! ("2024-03-15T08:30:00Z") but expects query dates and times in local
//! wall-clock form. Every conversion in the crate goes through a single
//! fixed UTC offset so that query-time in and displayed-time out agree.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Format the API uses for timestamps in responses.
const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Error returned when parsing a malformed upstream timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SSZ")]
pub struct TimestampError {
    input: String,
}

/// A fixed UTC offset, in whole hours.
///
/// The offset is configuration rather than a literal scattered through the
/// parsing code: it encodes the timezone the upstream API assumes for its
/// query parameters, and both conversion directions must use the same value
/// for round-trips to hold.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::TzOffset;
///
/// let local = TzOffset::SYDNEY.parse_timestamp("2024-03-15T08:30:00Z").unwrap();
/// assert_eq!(local.to_string(), "2024-03-15 18:30:00");
///
/// // Hour overflow rolls into the next day.
/// let late = TzOffset::SYDNEY.parse_timestamp("2024-03-15T20:30:00Z").unwrap();
/// assert_eq!(late.to_string(), "2024-03-16 06:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzOffset {
    hours: i64,
}

impl TzOffset {
    /// Sydney standard time (UTC+10).
    pub const SYDNEY: TzOffset = TzOffset { hours: 10 };

    /// Create an offset from a whole number of hours.
    pub const fn hours(hours: i64) -> Self {
        Self { hours }
    }

    /// Returns the offset as a `chrono::Duration`.
    fn as_duration(&self) -> Duration {
        Duration::hours(self.hours)
    }

    /// Encode an instant as the `itdDate` and `itdTime` query parameters.
    ///
    /// The instant is shifted into the offset's local zone, then formatted
    /// as `YYYYMMDD` and `HHMM`.
    pub fn to_query_parts(&self, at: DateTime<Utc>) -> (String, String) {
        let local = at.naive_utc() + self.as_duration();
        (
            local.format("%Y%m%d").to_string(),
            local.format("%H%M").to_string(),
        )
    }

    /// Parse an upstream timestamp into offset-corrected local time.
    ///
    /// Accepts exactly the `YYYY-MM-DDTHH:MM:SSZ` form the API emits.
    pub fn parse_timestamp(&self, s: &str) -> Result<NaiveDateTime, TimestampError> {
        let utc = NaiveDateTime::parse_from_str(s, API_TIMESTAMP_FORMAT)
            .map_err(|_| TimestampError { input: s.to_string() })?;
        Ok(utc + self.as_duration())
    }

    /// Format an offset-local time back to the API's UTC form.
    ///
    /// Inverse of [`parse_timestamp`](Self::parse_timestamp): for any valid
    /// API timestamp `s`, `format_timestamp(parse_timestamp(s)) == s`.
    pub fn format_timestamp(&self, local: NaiveDateTime) -> String {
        (local - self.as_duration())
            .format(API_TIMESTAMP_FORMAT)
            .to_string()
    }

    /// Convert an offset-local wall-clock time to an instant.
    pub fn to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        (local - self.as_duration()).and_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parse_applies_offset() {
        let local = TzOffset::SYDNEY
            .parse_timestamp("2024-03-15T08:30:00Z")
            .unwrap();

        assert_eq!(
            local,
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_rolls_over_midnight() {
        let local = TzOffset::SYDNEY
            .parse_timestamp("2024-03-15T20:30:00Z")
            .unwrap();

        assert_eq!(
            local,
            NaiveDate::from_ymd_opt(2024, 3, 16)
                .unwrap()
                .and_hms_opt(6, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_rolls_over_month_end() {
        let local = TzOffset::SYDNEY
            .parse_timestamp("2024-03-31T23:00:00Z")
            .unwrap();

        assert_eq!(
            local,
            NaiveDate::from_ymd_opt(2024, 4, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let offset = TzOffset::SYDNEY;

        assert!(offset.parse_timestamp("").is_err());
        assert!(offset.parse_timestamp("2024-03-15 08:30:00").is_err());
        assert!(offset.parse_timestamp("2024-03-15T08:30:00").is_err());
        assert!(offset.parse_timestamp("2024-13-15T08:30:00Z").is_err());
        assert!(offset.parse_timestamp("not a timestamp").is_err());
    }

    #[test]
    fn query_parts_use_local_zone() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(20, 45, 0)
            .unwrap()
            .and_utc();

        let (date, time) = TzOffset::SYDNEY.to_query_parts(at);

        // 20:45 UTC + 10h = 06:45 the next day.
        assert_eq!(date, "20240316");
        assert_eq!(time, "0645");
    }

    #[test]
    fn to_utc_inverts_local_shift() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 16)
            .unwrap()
            .and_hms_opt(6, 45, 0)
            .unwrap();

        let utc = TzOffset::SYDNEY.to_utc(at);

        assert_eq!(utc.naive_utc().to_string(), "2024-03-15 20:45:00");
    }

    #[test]
    fn zero_offset_is_identity() {
        let offset = TzOffset::hours(0);
        let local = offset.parse_timestamp("2024-03-15T08:30:00Z").unwrap();

        assert_eq!(local.to_string(), "2024-03-15 08:30:00");
        assert_eq!(offset.format_timestamp(local), "2024-03-15T08:30:00Z");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    proptest! {
        /// Round-trip law: parse then format reproduces the input exactly.
        #[test]
        fn parse_format_roundtrip(
            year in 1970i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
            offset_hours in -12i64..=14,
        ) {
            let s = format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                year, month, day, hour, minute, second
            );
            let offset = TzOffset::hours(offset_hours);

            let local = offset.parse_timestamp(&s).unwrap();
            prop_assert_eq!(offset.format_timestamp(local), s);
        }

        /// The parsed local time is always exactly `offset` ahead of UTC.
        #[test]
        fn parse_shifts_by_offset(
            year in 1970i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            offset_hours in -12i64..=14,
        ) {
            let s = format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:00Z",
                year, month, day, hour, minute
            );
            let utc = NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap();

            let local = TzOffset::hours(offset_hours).parse_timestamp(&s).unwrap();
            prop_assert_eq!(
                local.signed_duration_since(utc),
                Duration::hours(offset_hours)
            );
        }

        /// Query parts always format as 8 and 4 digits.
        #[test]
        fn query_parts_shape(
            secs in 0i64..4_000_000_000i64,
            offset_hours in -12i64..=14,
        ) {
            let at = DateTime::<Utc>::from_timestamp(secs, 0).unwrap();
            let (date, time) = TzOffset::hours(offset_hours).to_query_parts(at);

            prop_assert_eq!(date.len(), 8);
            prop_assert!(date.chars().all(|c| c.is_ascii_digit()));
            prop_assert_eq!(time.len(), 4);
            prop_assert!(time.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
