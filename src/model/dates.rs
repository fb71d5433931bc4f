//! Wire format for event dates.
//!
//! The budget service sends dates as RFC 3339 timestamps at midnight UTC, e.g.
//! `2021-11-18T00:00:00Z`. Only the calendar date carries meaning, so dates are held as
//! `NaiveDate`. Decoding takes the UTC calendar date of a timestamp and also accepts a bare
//! `YYYY-MM-DD`. Encoding always writes midnight UTC.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parses a date from either an RFC 3339 timestamp or a `YYYY-MM-DD` string.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    let s = s.trim();
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.with_timezone(&Utc).date_naive()),
        Err(e) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| e),
    }
}

/// Formats a date as the service expects it: midnight UTC in RFC 3339.
pub fn format_date(date: &NaiveDate) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(date))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let date = parse_date("2021-11-18T00:00:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 11, 18).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset_uses_utc_date() {
        // 01:30 at +02:00 is still the previous day in UTC
        let date = parse_date("2021-11-18T01:30:00+02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 11, 17).unwrap());
    }

    #[test]
    fn test_parse_date_only() {
        let date = parse_date("2023-03-12").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 12).unwrap());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_date("12/03/2023").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2021, 11, 19).unwrap();
        assert_eq!(format_date(&date), "2021-11-19T00:00:00Z");
    }
}
