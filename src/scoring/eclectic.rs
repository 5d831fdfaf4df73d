//! Eclectic (best-ever per hole) scorecards.
//!
//! History on "<tee> (Front 9)", "<tee> (Back 9)" and "<tee>" at the same
//! course all contributes to one 18-hole card for "<tee>".

use crate::{
    error::{GolfError, Result},
    models::{records::canonical_tee_name, CourseId, HoleRecord, RoundId, TeeSegment},
    scoring::canonical::canonicalize,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// Best score recorded on one canonical hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EclecticHole {
    pub hole: u8,
    pub strokes: u32,
    pub par: Option<u8>,
    /// Earliest date this best score was recorded.
    pub played_at: DateTime<Utc>,
    pub round_id: RoundId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EclecticSummary {
    /// Sum of bests; `None` while any hole is missing.
    pub total: Option<u32>,
    pub have: usize,
    pub missing: Vec<u8>,
    pub complete: bool,
    /// Set when the card is complete and every hole has a par.
    pub to_par: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EclecticCard {
    pub course_id: CourseId,
    pub tee_name: String,
    /// Canonical hole numbers with a score, ascending.
    pub holes: Vec<u8>,
    pub best: BTreeMap<u8, EclecticHole>,
    pub summary: EclecticSummary,
}

/// Build the eclectic card for `course_id` and the canonical form of `tee_name`.
pub fn eclectic_card(records: &[HoleRecord], course_id: &CourseId, tee_name: &str) -> Result<EclecticCard> {
    let wanted_tee = canonical_tee_name(tee_name);

    let mut best: BTreeMap<u8, EclecticHole> = BTreeMap::new();
    let mut full_layout = false;
    for hole in canonicalize(records) {
        let record = hole.record;
        if record.course_id != *course_id || !hole.tee.name.eq_ignore_ascii_case(&wanted_tee) {
            continue;
        }
        let Some(strokes) = record.strokes else {
            continue;
        };
        if !(1..=18).contains(&hole.hole) {
            continue;
        }
        // Tagged nine-hole tees imply an 18-hole course
        if hole.tee.segment != TeeSegment::Full || hole.hole > 9 {
            full_layout = true;
        }

        let candidate = EclecticHole {
            hole: hole.hole,
            strokes,
            par: record.par,
            played_at: record.played_at,
            round_id: record.round_id.clone(),
        };
        match best.get(&hole.hole) {
            Some(current)
                if current.strokes < strokes
                    || (current.strokes == strokes && current.played_at <= record.played_at) => {}
            _ => {
                best.insert(hole.hole, candidate);
            }
        }
    }

    if best.is_empty() {
        return Err(GolfError::insufficient(format!(
            "no scored holes at course {} on tee {}",
            course_id, wanted_tee
        )));
    }

    let last_hole: u8 = if full_layout { 18 } else { 9 };
    let missing: Vec<u8> = (1..=last_hole).filter(|h| !best.contains_key(h)).collect();
    let complete = missing.is_empty();
    let total = complete.then(|| best.values().map(|h| h.strokes).sum::<u32>());
    let to_par = total.and_then(|total| {
        let par_total = best
            .values()
            .map(|h| h.par.map(u32::from))
            .sum::<Option<u32>>()?;
        Some(total as i32 - par_total as i32)
    });

    Ok(EclecticCard {
        course_id: course_id.clone(),
        tee_name: wanted_tee,
        holes: best.keys().copied().collect(),
        summary: EclecticSummary {
            total,
            have: best.len(),
            missing,
            complete,
            to_par,
        },
        best,
    })
}
