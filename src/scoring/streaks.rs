//! Play streaks and best scoring stretches.

use crate::{
    models::{time::fractional_days, RoundId},
    scoring::{rounds::RoundAggregate, summary::mean},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// A run of rounds with no gap longer than the streak threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub length: usize,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Streak {
    /// Whether another round at `now` would still extend this streak.
    pub fn is_active(&self, now: DateTime<Utc>, gap_days: f64) -> bool {
        fractional_days(self.end, now) <= gap_days
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayStreaks {
    pub gap_days: f64,
    pub longest: Streak,
    /// The run ending at the most recent round.
    pub current: Streak,
}

/// The `size` consecutive rounds with the lowest average scaled to-par.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stretch {
    pub size: usize,
    pub average: f64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub round_ids: Vec<RoundId>,
}

/// Longest and current play streaks.
///
/// Consecutive rounds more than `gap_days` apart break a streak. The longest
/// streak keeps the earliest run on ties.
pub fn play_streaks(dates: &[DateTime<Utc>], gap_days: f64) -> Option<PlayStreaks> {
    if !gap_days.is_finite() || gap_days < 0.0 {
        return None;
    }
    let mut sorted = dates.to_vec();
    sorted.sort();
    let (&first, rest) = sorted.split_first()?;

    let mut run = Streak {
        length: 1,
        start: first,
        end: first,
    };
    let mut longest = run;
    for &date in rest {
        if fractional_days(run.end, date) <= gap_days {
            run.length += 1;
            run.end = date;
        } else {
            run = Streak {
                length: 1,
                start: date,
                end: date,
            };
        }
        if run.length > longest.length {
            longest = run;
        }
    }

    Some(PlayStreaks {
        gap_days,
        longest,
        current: run,
    })
}

/// Best window of exactly `size` rounds by average `to_par_18eq`.
///
/// Rounds without a scaled value are skipped before windowing; ties keep the
/// earliest window.
pub fn best_stretch(rounds: &[RoundAggregate], size: usize) -> Option<Stretch> {
    if size == 0 {
        return None;
    }
    let mut usable: Vec<(&RoundAggregate, f64)> = rounds
        .iter()
        .filter_map(|r| r.to_par_18eq.filter(|v| v.is_finite()).map(|v| (r, v)))
        .collect();
    usable.sort_by(|a, b| a.0.played_at.cmp(&b.0.played_at));

    let mut best: Option<(usize, f64)> = None;
    for (i, window) in usable.windows(size).enumerate() {
        let values: Vec<f64> = window.iter().map(|(_, v)| *v).collect();
        let Some(avg) = mean(&values) else {
            continue;
        };
        if best.map_or(true, |(_, b)| avg < b) {
            best = Some((i, avg));
        }
    }

    let (start, average) = best?;
    let window = &usable[start..start + size];
    Some(Stretch {
        size,
        average,
        start: window[0].0.played_at,
        end: window[size - 1].0.played_at,
        round_ids: window.iter().map(|(r, _)| r.round_id.clone()).collect(),
    })
}
