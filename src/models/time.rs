//! Date and timestamp helpers.
//!
//! Upstream rows carry ISO-8601 strings in a few shapes (plain dates, RFC 3339,
//! and Postgres-style `YYYY-MM-DD HH:MM:SS+00`). Everything is normalised to
//! [`NaiveDate`] for handicap history and `DateTime<Utc>` for round timestamps.

use crate::error::{GolfError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};


const SECONDS_PER_DAY: f64 = 86_400.0;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a timestamp, assuming UTC when no offset is present.
///
/// A bare `YYYY-MM-DD` is read as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(GolfError::InvalidDate {
        value: raw.to_string(),
    })
}

/// Parse a calendar date; any time-of-day component is discarded.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_timestamp(s).map(|dt| dt.date_naive())
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64
}

/// Fractional days from `from` to `to`.
pub fn fractional_days(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / SECONDS_PER_DAY
}

/// Calendar date reached `days` after `date`, rounding partial days up.
///
/// Returns `None` when the offset is not finite or overflows the calendar.
pub fn date_after(date: NaiveDate, days: f64) -> Option<NaiveDate> {
    if !days.is_finite() || days.abs() > i32::MAX as f64 {
        return None;
    }
    date.checked_add_signed(Duration::days(days.ceil() as i64))
}

pub fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

pub fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
