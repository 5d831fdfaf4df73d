//! Exponential decay fit with an asymptotic floor.
//!
//! The model is `hi(t) = a * exp(-b * t) + c` with `t` in days since the first
//! observation. `c` is found by sweeping candidate floors below the lowest
//! observation; for each candidate, `ln(hi - c)` is regressed linearly on `t`
//! and the candidate whose reconstructed curve has the smallest squared error
//! wins. Ties go to the lower floor.

use crate::{
    config::ProjectionConfig,
    error::{GolfError, Result},
    models::{
        history::{to_day_series, HiPoint},
        time::days_between,
    },
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;


/// Tunables for the floor sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Number of candidate floors evaluated.
    pub sweep_steps: usize,
    /// Minimum distance below the lowest observation where the sweep starts.
    ///
    /// The sweep covers `max(floor_span, max - min)` below the minimum.
    pub floor_span: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            sweep_steps: 240,
            floor_span: 1.0,
        }
    }
}

impl From<&ProjectionConfig> for FitOptions {
    fn from(config: &ProjectionConfig) -> Self {
        Self {
            sweep_steps: config.sweep_steps,
            floor_span: config.floor_span,
        }
    }
}

/// A fitted handicap trajectory. `b > 0` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fit {
    pub a: f64,
    pub b: f64,
    /// Asymptotic floor the trajectory approaches.
    pub c: f64,
    pub first_date: NaiveDate,
    /// Root mean squared error of the reconstructed curve against the input.
    pub rmse: f64,
    pub points_used: usize,
}

impl Fit {
    pub fn predict(&self, t_days: f64) -> f64 {
        self.a * (-self.b * t_days).exp() + self.c
    }

    /// Day offset of `date` on this fit's axis.
    pub fn t_of(&self, date: NaiveDate) -> f64 {
        days_between(self.first_date, date)
    }

    pub fn predict_on(&self, date: NaiveDate) -> f64 {
        self.predict(self.t_of(date))
    }
}

/// Fit handicap history, sorting by date first.
pub fn fit_history(points: &[HiPoint], options: &FitOptions) -> Result<Fit> {
    let (first_date, series) = to_day_series(points)
        .ok_or_else(|| GolfError::insufficient("no handicap index history"))?;
    fit_series(&series, first_date, options)
}

/// Fit `(t_days, value)` pairs whose day axis starts at `first_date`.
pub fn fit_series(series: &[(f64, f64)], first_date: NaiveDate, options: &FitOptions) -> Result<Fit> {
    let usable: Vec<(f64, f64)> = series
        .iter()
        .copied()
        .filter(|(t, v)| t.is_finite() && v.is_finite())
        .collect();

    if !has_two_distinct_times(&usable) {
        return Err(GolfError::insufficient(
            "need at least 2 handicap observations on different dates",
        ));
    }
    if options.sweep_steps == 0 {
        return Err(GolfError::Config {
            message: "sweep_steps must be positive".to_string(),
        });
    }

    let (min, max) = usable
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
            (lo.min(v), hi.max(v))
        });
    let span = options.floor_span.max(max - min);
    let start = min - span;
    let step = span / options.sweep_steps as f64;

    let mut best: Option<Candidate> = None;
    let mut evaluated = 0usize;
    for k in 0..options.sweep_steps {
        let c = start + k as f64 * step;
        let Some(candidate) = evaluate_floor(&usable, c) else {
            continue;
        };
        evaluated += 1;
        // Ascending sweep: strict improvement keeps the lower floor on ties
        let improves = best
            .as_ref()
            .map_or(true, |b| candidate.sse < b.sse - 1e-12);
        if improves {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(GolfError::NoFit)?;
    debug!(
        a = best.a,
        b = best.b,
        c = best.c,
        sse = best.sse,
        evaluated,
        "selected handicap floor"
    );

    Ok(Fit {
        a: best.a,
        b: best.b,
        c: best.c,
        first_date,
        rmse: (best.sse / usable.len() as f64).sqrt(),
        points_used: best.used,
    })
}

struct Candidate {
    a: f64,
    b: f64,
    c: f64,
    sse: f64,
    used: usize,
}

fn evaluate_floor(series: &[(f64, f64)], c: f64) -> Option<Candidate> {
    let transformed: Vec<(f64, f64)> = series
        .iter()
        .filter(|(_, v)| *v > c)
        .map(|&(t, v)| (t, (v - c).ln()))
        .collect();
    if transformed.len() < 2 {
        return None;
    }

    let (slope, intercept) = least_squares(&transformed)?;
    let b = -slope;
    let a = intercept.exp();
    if !(b > 0.0 && b.is_finite() && a > 0.0 && a.is_finite()) {
        return None;
    }

    let sse = series
        .iter()
        .map(|&(t, v)| {
            let r = a * (-b * t).exp() + c - v;
            r * r
        })
        .sum::<f64>();
    if !sse.is_finite() {
        return None;
    }

    Some(Candidate {
        a,
        b,
        c,
        sse,
        used: transformed.len(),
    })
}

/// Ordinary least squares of `y` on `x`, returning `(slope, intercept)`.
fn least_squares(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), &(x, y)| {
        let dx = x - mean_x;
        (sxx + dx * dx, sxy + dx * (y - mean_y))
    });
    if sxx.abs() < 1e-12 {
        return None;
    }

    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

fn has_two_distinct_times(series: &[(f64, f64)]) -> bool {
    match series.first() {
        Some(&(t0, _)) => series.iter().any(|&(t, _)| t != t0),
        None => false,
    }
}
