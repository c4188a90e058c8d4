//! Lenient decoding of persisted dates.
//!
//! Files are written with RFC 3339 timestamps and `YYYY-MM-DD` dates. Older files
//! may hold the platform encoding instead: a number of seconds since the
//! 2001-01-01T00:00:00Z reference date. Both forms are accepted on read.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Unix time of the 2001-01-01T00:00:00Z reference date
const REFERENCE_DATE_UNIX_SECONDS: i64 = 978_307_200;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTime {
    Text(String),
    ReferenceSeconds(f64),
}

/// Convert seconds since the reference date into a UTC timestamp
pub fn from_reference_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1_000_000_000.0).round() as u32;
    let secs = REFERENCE_DATE_UNIX_SECONDS.checked_add(whole as i64)?;
    Utc.timestamp_opt(secs, nanos.min(999_999_999)).single()
}

fn parse_timestamp(raw: RawTime) -> Result<DateTime<Utc>, String> {
    match raw {
        RawTime::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| format!("invalid timestamp '{}': {}", text, e)),
        RawTime::ReferenceSeconds(seconds) => from_reference_seconds(seconds)
            .ok_or_else(|| format!("timestamp out of range: {}", seconds)),
    }
}

fn parse_date(raw: RawTime) -> Result<NaiveDate, String> {
    match raw {
        RawTime::Text(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(&text).map(|dt| dt.date_naive()))
            .map_err(|e| format!("invalid date '{}': {}", text, e)),
        // A picked calendar date is stored as local midnight
        RawTime::ReferenceSeconds(seconds) => from_reference_seconds(seconds)
            .map(|dt| dt.with_timezone(&Local).date_naive())
            .ok_or_else(|| format!("date out of range: {}", seconds)),
    }
}

pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawTime::deserialize(deserializer)?;
    parse_timestamp(raw).map_err(serde::de::Error::custom)
}

pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTime>::deserialize(deserializer)?;
    raw.map(parse_date)
        .transpose()
        .map_err(serde::de::Error::custom)
}
