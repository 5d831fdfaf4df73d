//! Hole-level scoring rows and tee segment tagging.

use crate::models::{
    ids::{CourseId, ProfileId, RoundId, TeeBoxId},
    time::deserialize_timestamp,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;


const FRONT_TAG: &str = "(front 9)";
const BACK_TAG: &str = "(back 9)";

/// One scored (or unscored) hole from a player's history.
///
/// Rows arrive flat from the backend, one per hole per round. `par`,
/// `stroke_index` and `strokes` may be missing for partially entered cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleRecord {
    pub round_id: RoundId,
    pub profile_id: ProfileId,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub played_at: DateTime<Utc>,
    pub course_id: CourseId,
    #[serde(default)]
    pub course_name: String,
    pub tee_box_id: TeeBoxId,
    #[serde(default)]
    pub tee_name: String,
    pub hole_number: u8,
    #[serde(default)]
    pub par: Option<u8>,
    #[serde(default)]
    pub yardage: Option<u32>,
    #[serde(default)]
    pub stroke_index: Option<u8>,
    #[serde(default)]
    pub strokes: Option<u32>,
    /// Net strokes when the backend already computed them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_strokes: Option<u32>,
    /// The player's course handicap for this round, used to derive net strokes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_handicap: Option<f64>,
}

impl HoleRecord {
    /// Gross strokes relative to par, when both are recorded.
    pub fn to_par(&self) -> Option<i32> {
        Some(self.strokes? as i32 - self.par? as i32)
    }
}

/// Which part of a course a tee name covers.
///
/// Nine-hole tees are published as "<tee> (Front 9)" / "<tee> (Back 9)" with
/// holes numbered 1-9 locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeeSegment {
    Front,
    Back,
    Full,
}

impl TeeSegment {
    pub fn from_tee_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.contains(FRONT_TAG) {
            TeeSegment::Front
        } else if lower.contains(BACK_TAG) {
            TeeSegment::Back
        } else {
            TeeSegment::Full
        }
    }

    /// Map a locally numbered hole onto the 1-18 course numbering.
    ///
    /// Back-nine holes 1-9 become 10-18; anything already outside 1-9 is kept.
    pub fn canonical_hole(self, local: u8) -> u8 {
        match self {
            TeeSegment::Back if (1..=9).contains(&local) => local + 9,
            _ => local,
        }
    }

    pub fn is_nine(self) -> bool {
        !matches!(self, TeeSegment::Full)
    }
}

impl fmt::Display for TeeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeeSegment::Front => "Front 9",
            TeeSegment::Back => "Back 9",
            TeeSegment::Full => "18",
        };
        write!(f, "{}", s)
    }
}

/// A tee name split into its segment tag and the canonical tee name.
///
/// "Blue (Back 9)" and "Blue" share the canonical name "Blue", so history on
/// either can be combined on the 18-hole layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeeIdentity {
    pub name: String,
    pub segment: TeeSegment,
}

impl TeeIdentity {
    pub fn parse(tee_name: &str) -> Self {
        let segment = TeeSegment::from_tee_name(tee_name);
        let name = match segment {
            TeeSegment::Front => strip_tag(tee_name, FRONT_TAG),
            TeeSegment::Back => strip_tag(tee_name, BACK_TAG),
            TeeSegment::Full => collapse_whitespace(tee_name),
        };
        Self { name, segment }
    }

    /// Case-folded name used when grouping, so "Blue" and "BLUE" are one tee.
    pub fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// Canonical tee name with any front/back tag removed.
pub fn canonical_tee_name(tee_name: &str) -> String {
    TeeIdentity::parse(tee_name).name
}

fn strip_tag(tee_name: &str, tag: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with the original string
    let lower = tee_name.to_ascii_lowercase();
    match lower.find(tag) {
        Some(start) => {
            let mut out = String::with_capacity(tee_name.len());
            out.push_str(&tee_name[..start]);
            out.push(' ');
            out.push_str(&tee_name[start + tag.len()..]);
            collapse_whitespace(&out)
        }
        None => collapse_whitespace(tee_name),
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
