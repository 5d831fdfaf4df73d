//! Per-round totals built from flat hole records.
//!
//! Nine-hole and eighteen-hole rounds are compared through `to_par_18eq`,
//! which scales the raw to-par by `18 / holes scored`. Raw `to_par` is kept
//! for single-round displays, which never mix the two pools.

use crate::{
    models::{CourseId, HoleRecord, ProfileId, RoundId, TeeSegment},
    scoring::{
        allocation::{net_for_record, HOLES_PER_ROUND},
        canonical::{canonicalize, CanonicalHole},
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;


/// Gross scoring milestones. Never scaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestones {
    pub birdies: u32,
    pub eagles: u32,
    /// Three or more under par.
    pub albatrosses: u32,
    pub holes_in_one: u32,
}

impl Milestones {
    /// Count one hole. A hole-in-one is also counted under its to-par bucket.
    pub fn record(&mut self, strokes: u32, par: u8) {
        match strokes as i32 - par as i32 {
            -1 => self.birdies += 1,
            -2 => self.eagles += 1,
            d if d <= -3 => self.albatrosses += 1,
            _ => {}
        }
        if strokes == 1 {
            self.holes_in_one += 1;
        }
    }

    pub fn add(&mut self, other: &Milestones) {
        self.birdies += other.birdies;
        self.eagles += other.eagles;
        self.albatrosses += other.albatrosses;
        self.holes_in_one += other.holes_in_one;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundAggregate {
    pub round_id: RoundId,
    pub profile_id: ProfileId,
    pub played_at: DateTime<Utc>,
    pub course_id: CourseId,
    pub course_name: String,
    /// Canonical tee name with any front/back tag removed.
    pub tee_name: String,
    pub segment: TeeSegment,
    /// Records with strokes entered.
    pub holes_scored: u32,
    /// Distinct canonical holes with strokes entered.
    pub unique_holes: u32,
    pub gross_total: u32,
    /// Set only when every scored hole has a net value.
    pub net_total: Option<u32>,
    /// Par over holes with both par and strokes.
    pub par_total: u32,
    pub to_par: Option<i32>,
    pub net_to_par: Option<i32>,
    pub to_par_18eq: Option<f64>,
    pub net_to_par_18eq: Option<f64>,
    pub is_nine_hole: bool,
    pub milestones: Milestones,
}

impl RoundAggregate {
    /// Scale a to-par value to an 18-hole equivalent.
    ///
    /// Uses distinct canonical holes, falling back to the raw count.
    pub fn scale_to_18(&self, to_par: i32) -> Option<f64> {
        let denom = if self.unique_holes > 0 {
            self.unique_holes
        } else {
            self.holes_scored
        };
        if denom == 0 {
            return None;
        }
        Some(to_par as f64 * HOLES_PER_ROUND as f64 / denom as f64)
    }
}

/// Group records by round and total each one, ordered by `played_at`.
///
/// Rounds with no strokes entered are skipped.
pub fn aggregate_rounds(records: &[HoleRecord]) -> Vec<RoundAggregate> {
    let mut by_round: BTreeMap<&RoundId, Vec<CanonicalHole<'_>>> = BTreeMap::new();
    for hole in canonicalize(records) {
        let record: &HoleRecord = hole.record;
        by_round.entry(&record.round_id).or_default().push(hole);
    }

    let mut rounds: Vec<RoundAggregate> = by_round
        .into_values()
        .filter_map(|holes| aggregate_round(&holes))
        .collect();
    rounds.sort_by(|a, b| {
        a.played_at
            .cmp(&b.played_at)
            .then_with(|| a.round_id.cmp(&b.round_id))
    });
    rounds
}

fn aggregate_round(holes: &[CanonicalHole<'_>]) -> Option<RoundAggregate> {
    let first = holes.first()?;

    let mut holes_scored = 0u32;
    let mut unique = BTreeSet::new();
    let mut gross_total = 0u32;
    let mut net_total = 0u32;
    let mut net_complete = true;
    let mut par_total = 0u32;
    let mut to_par = 0i32;
    let mut net_to_par = 0i32;
    let mut has_par = false;
    let mut milestones = Milestones::default();
    let mut segment = TeeSegment::Full;

    for hole in holes {
        let record = hole.record;
        if hole.tee.segment.is_nine() {
            segment = hole.tee.segment;
        }
        let Some(strokes) = record.strokes else {
            continue;
        };

        holes_scored += 1;
        unique.insert(hole.hole);
        gross_total += strokes;

        let net = net_for_record(record);
        match net {
            Some(n) => net_total += n,
            None => net_complete = false,
        }

        if let Some(par) = record.par {
            has_par = true;
            par_total += u32::from(par);
            to_par += strokes as i32 - par as i32;
            if let Some(n) = net {
                net_to_par += n as i32 - par as i32;
            }
            milestones.record(strokes, par);
        }
    }

    if holes_scored == 0 {
        debug!(round_id = %first.record.round_id, "skipping round with no strokes entered");
        return None;
    }

    let max_hole = unique.last().copied().unwrap_or(0);
    let unique_holes = unique.len() as u32;
    let is_nine_hole = segment.is_nine() || (max_hole <= 9 && unique_holes <= 9);

    let mut round = RoundAggregate {
        round_id: first.record.round_id.clone(),
        profile_id: first.record.profile_id.clone(),
        played_at: first.record.played_at,
        course_id: first.record.course_id.clone(),
        course_name: first.record.course_name.clone(),
        tee_name: first.tee.name.clone(),
        segment,
        holes_scored,
        unique_holes,
        gross_total,
        net_total: net_complete.then_some(net_total),
        par_total,
        to_par: has_par.then_some(to_par),
        net_to_par: (has_par && net_complete).then_some(net_to_par),
        to_par_18eq: None,
        net_to_par_18eq: None,
        is_nine_hole,
        milestones,
    };
    round.to_par_18eq = round.to_par.and_then(|tp| round.scale_to_18(tp));
    round.net_to_par_18eq = round.net_to_par.and_then(|tp| round.scale_to_18(tp));
    Some(round)
}
