//! Weak hole ranking.
//!
//! Severity is `max(0, avg_to_par) * sqrt(attempts)`, so a hole needs both a
//! bad average and a real sample size to rank highly.

use crate::{
    models::{CourseId, HoleRecord},
    scoring::canonical::canonicalize,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorstHole {
    pub course_id: CourseId,
    pub course_name: String,
    /// Canonical tee name.
    pub tee_name: String,
    /// Canonical hole number.
    pub hole: u8,
    /// Par from the most recent attempt.
    pub par: u8,
    pub attempts: u32,
    pub avg_to_par: f64,
    pub severity: f64,
}

#[derive(Default)]
struct HoleTally {
    course_name: String,
    tee_name: String,
    par: u8,
    latest: Option<DateTime<Utc>>,
    attempts: u32,
    to_par_sum: i64,
}

/// The `top_n` holes with the highest severity.
///
/// Tee names are grouped ignoring case; the displayed name comes from the most
/// recent attempt. Holes averaging par or better have zero severity and are
/// left out, so a history at or under par everywhere ranks nothing.
pub fn rank_worst_holes(records: &[HoleRecord], top_n: usize) -> Vec<WorstHole> {
    let mut groups: BTreeMap<(CourseId, String, u8), HoleTally> = BTreeMap::new();
    for hole in canonicalize(records) {
        let record = hole.record;
        let (Some(strokes), Some(par)) = (record.strokes, record.par) else {
            continue;
        };

        let tally = groups
            .entry((record.course_id.clone(), hole.tee.key(), hole.hole))
            .or_default();
        tally.attempts += 1;
        tally.to_par_sum += i64::from(strokes) - i64::from(par);
        if tally.latest.map_or(true, |latest| record.played_at >= latest) {
            tally.latest = Some(record.played_at);
            tally.par = par;
            tally.course_name = record.course_name.clone();
            tally.tee_name = hole.tee.name.clone();
        }
    }

    let mut ranked: Vec<WorstHole> = groups
        .into_iter()
        .filter_map(|((course_id, _, hole), tally)| {
            let avg_to_par = tally.to_par_sum as f64 / tally.attempts as f64;
            let severity = avg_to_par.max(0.0) * (tally.attempts as f64).sqrt();
            (severity > 0.0).then_some(WorstHole {
                course_id,
                course_name: tally.course_name,
                tee_name: tally.tee_name,
                hole,
                par: tally.par,
                attempts: tally.attempts,
                avg_to_par,
                severity,
            })
        })
        .collect();

    // BTreeMap order already sorts by course/tee/hole, and the sort is stable
    ranked.sort_by(|a, b| {
        b.severity
            .total_cmp(&a.severity)
            .then_with(|| b.attempts.cmp(&a.attempts))
    });
    ranked.truncate(top_n);
    ranked
}
