//! Handicap index history

use crate::models::time::{days_between, deserialize_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// One handicap index observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiPoint {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub hi: f64,
}

impl HiPoint {
    pub fn new(date: NaiveDate, hi: f64) -> Self {
        Self { date, hi }
    }
}

/// Keep the last observation for each calendar date, ordered by date.
///
/// History is not deduplicated implicitly anywhere in the crate; call this
/// when the upstream feed may repeat revisions on the same day.
pub fn dedupe_by_date(points: &[HiPoint]) -> Vec<HiPoint> {
    let mut by_date = BTreeMap::new();
    for p in points {
        by_date.insert(p.date, *p);
    }
    by_date.into_values().collect()
}

/// Convert history into `(t_days, value)` pairs measured from the earliest date.
///
/// Non-finite values are dropped. Returns `None` when nothing usable remains.
pub fn to_day_series(points: &[HiPoint]) -> Option<(NaiveDate, Vec<(f64, f64)>)> {
    let mut usable: Vec<&HiPoint> = points.iter().filter(|p| p.hi.is_finite()).collect();
    usable.sort_by_key(|p| p.date);

    let first_date = usable.first()?.date;
    let series = usable
        .iter()
        .map(|p| (days_between(first_date, p.date), p.hi))
        .collect();
    Some((first_date, series))
}
