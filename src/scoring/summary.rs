//! Cross-round scoring summary.

use crate::{
    error::{GolfError, Result},
    models::{HoleRecord, RoundId},
    scoring::rounds::{aggregate_rounds, Milestones, RoundAggregate},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// A single round picked out for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRef {
    pub round_id: RoundId,
    pub played_at: DateTime<Utc>,
    pub course_name: String,
    pub tee_name: String,
    pub gross_total: u32,
    /// Raw, unscaled to-par.
    pub to_par: i32,
}

impl RoundRef {
    fn from_round(round: &RoundAggregate, to_par: i32) -> Self {
        Self {
            round_id: round.round_id.clone(),
            played_at: round.played_at,
            course_name: round.course_name.clone(),
            tee_name: round.tee_name.clone(),
            gross_total: round.gross_total,
            to_par,
        }
    }
}

/// Scoring on holes of one par value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParTypeStats {
    pub par: u8,
    pub holes: u32,
    pub avg_strokes: f64,
    pub avg_to_par: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSummary {
    pub rounds: usize,
    pub eighteen_hole_rounds: usize,
    pub nine_hole_rounds: usize,
    pub avg_to_par_18eq: Option<f64>,
    pub std_dev_to_par_18eq: Option<f64>,
    pub avg_net_to_par_18eq: Option<f64>,
    pub best_18: Option<RoundRef>,
    pub worst_18: Option<RoundRef>,
    pub best_9: Option<RoundRef>,
    pub worst_9: Option<RoundRef>,
    pub milestones: Milestones,
    pub par_types: Vec<ParTypeStats>,
}

/// Summarise a scoring history.
///
/// Fails with `InsufficientData` when no round has strokes entered.
pub fn summarize(records: &[HoleRecord]) -> Result<ScoringSummary> {
    summarize_rounds(&aggregate_rounds(records), records)
}

/// Summarise rounds already built from `records` by [`aggregate_rounds`].
pub fn summarize_rounds(rounds: &[RoundAggregate], records: &[HoleRecord]) -> Result<ScoringSummary> {
    if rounds.is_empty() {
        return Err(GolfError::insufficient("no scored rounds"));
    }

    let scaled: Vec<f64> = rounds.iter().filter_map(|r| r.to_par_18eq).collect();
    let net_scaled: Vec<f64> = rounds.iter().filter_map(|r| r.net_to_par_18eq).collect();

    let (nine, eighteen): (Vec<&RoundAggregate>, Vec<&RoundAggregate>) =
        rounds.iter().partition(|r| r.is_nine_hole);

    let mut milestones = Milestones::default();
    for round in rounds {
        milestones.add(&round.milestones);
    }

    Ok(ScoringSummary {
        rounds: rounds.len(),
        eighteen_hole_rounds: eighteen.len(),
        nine_hole_rounds: nine.len(),
        avg_to_par_18eq: mean(&scaled),
        std_dev_to_par_18eq: population_std_dev(&scaled),
        avg_net_to_par_18eq: mean(&net_scaled),
        best_18: extreme_round(&eighteen, Extreme::Best),
        worst_18: extreme_round(&eighteen, Extreme::Worst),
        best_9: extreme_round(&nine, Extreme::Best),
        worst_9: extreme_round(&nine, Extreme::Worst),
        milestones,
        par_types: par_type_stats(records),
    })
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

#[derive(Clone, Copy)]
enum Extreme {
    Best,
    Worst,
}

/// Lowest or highest raw to-par in a pool; ties go to the earlier round.
fn extreme_round(pool: &[&RoundAggregate], which: Extreme) -> Option<RoundRef> {
    let mut chosen: Option<(&RoundAggregate, i32)> = None;
    for round in pool {
        let Some(to_par) = round.to_par else {
            continue;
        };
        let better = match (chosen, which) {
            (None, _) => true,
            (Some((_, current)), Extreme::Best) => to_par < current,
            (Some((_, current)), Extreme::Worst) => to_par > current,
        };
        if better {
            chosen = Some((round, to_par));
        }
    }
    chosen.map(|(round, to_par)| RoundRef::from_round(round, to_par))
}

fn par_type_stats(records: &[HoleRecord]) -> Vec<ParTypeStats> {
    let mut by_par: BTreeMap<u8, (u32, u64, i64)> = BTreeMap::new();
    for record in records {
        let (Some(strokes), Some(par)) = (record.strokes, record.par) else {
            continue;
        };
        let entry = by_par.entry(par).or_default();
        entry.0 += 1;
        entry.1 += u64::from(strokes);
        entry.2 += i64::from(strokes) - i64::from(par);
    }

    by_par
        .into_iter()
        .map(|(par, (holes, strokes, to_par))| ParTypeStats {
            par,
            holes,
            avg_strokes: strokes as f64 / holes as f64,
            avg_to_par: to_par as f64 / holes as f64,
        })
        .collect()
}
