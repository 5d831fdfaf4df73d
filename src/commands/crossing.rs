//! Crossing command implementation

use crate::{
    config::ProjectionConfig,
    error::{GolfError, Result},
    trajectory::{fit_history, next_crossing, Crossing, FitOptions},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{print_json, NamedHistory};

/// Parameters for the crossing command
#[derive(Debug, Clone)]
pub struct CrossingParams {
    pub a: NamedHistory,
    pub b: NamedHistory,
    pub today: NaiveDate,
    pub horizon_days: Option<f64>,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossingReport {
    pub a: String,
    pub b: String,
    pub from: NaiveDate,
    pub horizon_days: f64,
    /// `None` when either history is too short to fit.
    pub crossing: Option<Crossing>,
    pub note: Option<String>,
}

pub fn build_crossing_report(params: &CrossingParams, config: &ProjectionConfig) -> Result<CrossingReport> {
    let horizon_days = params.horizon_days.unwrap_or(config.intercept_horizon_days);
    if !(horizon_days.is_finite() && horizon_days > 0.0) {
        return Err(GolfError::InvalidArgument {
            message: format!("--horizon-days must be positive, got {}", horizon_days),
        });
    }

    let options = FitOptions::from(config);
    let fits = fit_history(&params.a.points, &options)
        .map_err(|e| (params.a.name.as_str(), e))
        .and_then(|fit_a| {
            fit_history(&params.b.points, &options)
                .map(|fit_b| (fit_a, fit_b))
                .map_err(|e| (params.b.name.as_str(), e))
        });

    let (crossing, note) = match fits {
        Ok((fit_a, fit_b)) => (
            Some(next_crossing(
                &fit_a,
                &fit_b,
                params.today,
                horizon_days,
                config.intercept_samples,
            )),
            None,
        ),
        Err((name, e)) if e.is_insufficient() => (None, Some(format!("{}: {}", name, e))),
        Err((_, e)) => return Err(e),
    };

    Ok(CrossingReport {
        a: params.a.name.clone(),
        b: params.b.name.clone(),
        from: params.today,
        horizon_days,
        crossing,
        note,
    })
}

pub fn handle_crossing(params: CrossingParams, config: &ProjectionConfig) -> Result<()> {
    let report = build_crossing_report(&params, config)?;

    if params.as_json {
        return print_json(&report);
    }

    match (&report.crossing, &report.note) {
        (Some(Crossing::At { date, days, value }), _) => println!(
            "{} and {} cross on {} (in {:.0} days) at {:.1}",
            report.a, report.b, date, days.ceil(), value
        ),
        (Some(Crossing::NoCrossingInWindow), _) => println!(
            "{} and {} do not cross within {:.0} days of {}",
            report.a, report.b, report.horizon_days, report.from
        ),
        (None, note) => println!(
            "not enough history yet: {}",
            note.as_deref().unwrap_or("no fit")
        ),
    }
    Ok(())
}
