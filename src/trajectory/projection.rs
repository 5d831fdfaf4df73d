//! Forecast queries over a fitted trajectory.
//!
//! All queries take an optional fit so that "no fit yet" flows through as a
//! status instead of an error.

use crate::{
    models::time::{date_after, days_between},
    trajectory::{
        fit::Fit,
        solve::{find_next_intercept, time_to_target},
    },
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

/// Outcome of an ETA query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EtaStatus {
    /// The current projected value is already at or below the target.
    Reached,
    /// The target is at or below the model floor.
    Unreachable,
    Estimated,
    Unknown,
    /// No fit is available for this history.
    Insufficient,
}

impl fmt::Display for EtaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EtaStatus::Reached => "reached",
            EtaStatus::Unreachable => "unreachable",
            EtaStatus::Estimated => "estimated",
            EtaStatus::Unknown => "unknown",
            EtaStatus::Insufficient => "insufficient",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eta {
    pub status: EtaStatus,
    /// Whole days from today, rounded up. Set for `Reached` and `Estimated`.
    pub days: Option<i64>,
    pub date: Option<NaiveDate>,
}

impl Eta {
    fn status_only(status: EtaStatus) -> Self {
        Self {
            status,
            days: None,
            date: None,
        }
    }
}

/// The floor reported to players, lifted above the raw asymptote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialFloor {
    pub value: f64,
    pub eta: Eta,
}

/// Where two trajectories next cross.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Crossing {
    At {
        date: NaiveDate,
        /// Fractional days after the search start.
        days: f64,
        value: f64,
    },
    NoCrossingInWindow,
}

/// When the trajectory is projected to reach `target`, as seen from `today`.
pub fn eta_for_target(fit: Option<&Fit>, today: NaiveDate, target: f64) -> Eta {
    let Some(fit) = fit else {
        return Eta::status_only(EtaStatus::Insufficient);
    };

    let t_today = fit.t_of(today);
    if fit.predict(t_today) <= target {
        return Eta {
            status: EtaStatus::Reached,
            days: Some(0),
            date: Some(today),
        };
    }
    if target <= fit.c {
        return Eta::status_only(EtaStatus::Unreachable);
    }

    let Some(t_hit) = time_to_target(fit, target) else {
        return Eta::status_only(EtaStatus::Unknown);
    };
    let days = (t_hit - t_today).ceil().max(0.0);
    match date_after(today, days) {
        Some(date) => Eta {
            status: EtaStatus::Estimated,
            days: Some(days as i64),
            date: Some(date),
        },
        None => Eta::status_only(EtaStatus::Unknown),
    }
}

/// Projected handicap index on `date`, rounded to one decimal.
pub fn projected_value_on(fit: Option<&Fit>, date: NaiveDate) -> Option<f64> {
    let value = fit?.predict_on(date);
    value.is_finite().then(|| round1(value))
}

/// The floor shown to players: `c + epsilon` with its ETA from `today`.
pub fn potential_floor(fit: Option<&Fit>, today: NaiveDate, epsilon: f64) -> Option<PotentialFloor> {
    let fit = fit?;
    let value = fit.c + epsilon;
    Some(PotentialFloor {
        value,
        eta: eta_for_target(Some(fit), today, value),
    })
}

/// Next crossing of two trajectories within `horizon_days` of `from`.
pub fn next_crossing(
    fit_a: &Fit,
    fit_b: &Fit,
    from: NaiveDate,
    horizon_days: f64,
    sample_count: usize,
) -> Crossing {
    let t_start = fit_a.t_of(from);
    let Some(t) = find_next_intercept(fit_a, fit_b, t_start, t_start + horizon_days, sample_count)
    else {
        return Crossing::NoCrossingInWindow;
    };

    let days = t - t_start;
    match date_after(from, days) {
        Some(date) => Crossing::At {
            date,
            days,
            value: fit_a.predict(t),
        },
        None => Crossing::NoCrossingInWindow,
    }
}

/// Predicted values every `step_days` from `from` through `to`, for charting.
pub fn curve_samples(fit: &Fit, from: NaiveDate, to: NaiveDate, step_days: u32) -> Vec<(NaiveDate, f64)> {
    if step_days == 0 || to < from {
        return Vec::new();
    }

    let mut samples = Vec::with_capacity((days_between(from, to) as usize) / step_days as usize + 1);
    let mut date = from;
    while date <= to {
        samples.push((date, round1(fit.predict_on(date))));
        match date.checked_add_signed(Duration::days(step_days as i64)) {
            Some(next) => date = next,
            None => break,
        }
    }
    samples
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
