//! Record builders shared by the scoring unit tests

use crate::models::{CourseId, HoleRecord, ProfileId, RoundId, TeeBoxId};
use chrono::{DateTime, TimeZone, Utc};

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
}

/// A scored hole at course `c1` with sensible defaults.
pub fn hole(round: &str, played_at: DateTime<Utc>, tee: &str, number: u8, par: u8, strokes: u32) -> HoleRecord {
    HoleRecord {
        round_id: RoundId::new(round),
        profile_id: ProfileId::new("p1"),
        played_at,
        course_id: CourseId::new("c1"),
        course_name: "Maple Ridge".to_string(),
        tee_box_id: TeeBoxId::new(format!("tb-{}", tee)),
        tee_name: tee.to_string(),
        hole_number: number,
        par: Some(par),
        yardage: Some(350),
        stroke_index: Some(number),
        strokes: Some(strokes),
        net_strokes: None,
        course_handicap: None,
    }
}

/// A full round on tee `tee` with the given per-hole strokes and pars.
pub fn round(round_id: &str, played_at: DateTime<Utc>, tee: &str, pars: &[u8], strokes: &[u32]) -> Vec<HoleRecord> {
    pars.iter()
        .zip(strokes)
        .enumerate()
        .map(|(i, (&par, &s))| hole(round_id, played_at, tee, i as u8 + 1, par, s))
        .collect()
}

pub const PARS_18: [u8; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5];
