//! Projection command implementation

use crate::{
    config::ProjectionConfig,
    error::Result,
    trajectory::{
        eta_for_target, fit_history, potential_floor, projected_value_on, Eta, Fit, FitOptions,
        PotentialFloor,
    },
};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::{describe_eta, print_json, require_finite, NamedHistory};

/// Parameters for the project command
#[derive(Debug, Clone)]
pub struct ProjectParams {
    pub histories: Vec<NamedHistory>,
    pub target: Option<f64>,
    pub on: Option<NaiveDate>,
    pub today: NaiveDate,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedValue {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetEta {
    pub target: f64,
    pub eta: Eta,
}

/// Everything the project command reports for one history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityProjection {
    pub name: String,
    pub points: usize,
    pub fit: Option<Fit>,
    /// Why no fit is available.
    pub note: Option<String>,
    pub current: Option<f64>,
    pub target: Option<TargetEta>,
    pub projected: Option<ProjectedValue>,
    pub potential_floor: Option<PotentialFloor>,
}

/// Fit one history and answer every requested query against it.
///
/// Too little history is reported in `note`, not as an error.
pub fn build_projection(
    history: &NamedHistory,
    target: Option<f64>,
    on: Option<NaiveDate>,
    today: NaiveDate,
    config: &ProjectionConfig,
) -> Result<EntityProjection> {
    let (fit, note) = match fit_history(&history.points, &FitOptions::from(config)) {
        Ok(fit) => (Some(fit), None),
        Err(e) if e.is_insufficient() => {
            debug!(name = %history.name, error = %e, "no fit");
            (None, Some(e.to_string()))
        }
        Err(e) => return Err(e),
    };
    let fit = fit.as_ref();

    Ok(EntityProjection {
        name: history.name.clone(),
        points: history.points.len(),
        fit: fit.copied(),
        note,
        current: projected_value_on(fit, today),
        target: target.map(|target| TargetEta {
            target,
            eta: eta_for_target(fit, today, target),
        }),
        projected: on.map(|date| ProjectedValue {
            date,
            value: projected_value_on(fit, date),
        }),
        potential_floor: potential_floor(fit, today, config.floor_epsilon),
    })
}

/// Fit every history in parallel, preserving input order.
pub fn build_projection_report(
    params: &ProjectParams,
    config: &ProjectionConfig,
) -> Result<Vec<EntityProjection>> {
    if let Some(target) = params.target {
        require_finite("--target", target)?;
    }
    params
        .histories
        .par_iter()
        .map(|history| build_projection(history, params.target, params.on, params.today, config))
        .collect()
}

pub fn handle_project(params: ProjectParams, config: &ProjectionConfig) -> Result<()> {
    let report = build_projection_report(&params, config)?;

    if params.as_json {
        return print_json(&report);
    }

    for entity in &report {
        println!("{} ({} observations)", entity.name, entity.points);
        let Some(fit) = &entity.fit else {
            println!(
                "  not enough history yet: {}",
                entity.note.as_deref().unwrap_or("no fit")
            );
            continue;
        };
        println!(
            "  fit: {:.3} * exp(-{:.5} t) + {:.2}  (rmse {:.3}, from {})",
            fit.a, fit.b, fit.c, fit.rmse, fit.first_date
        );
        if let Some(current) = entity.current {
            println!("  projected today ({}): {:.1}", params.today, current);
        }
        if let Some(target) = &entity.target {
            println!("  target {:.1}: {}", target.target, describe_eta(&target.eta));
        }
        if let Some(projected) = &entity.projected {
            match projected.value {
                Some(value) => println!("  projected on {}: {:.1}", projected.date, value),
                None => println!("  projected on {}: -", projected.date),
            }
        }
        if let Some(floor) = &entity.potential_floor {
            println!(
                "  potential floor {:.1}: {}",
                floor.value,
                describe_eta(&floor.eta)
            );
        }
    }
    Ok(())
}
