//! Pass-through selection applied to a history before any statistic.

use crate::models::{records::canonical_tee_name, CourseId, HoleRecord, ProfileId, RoundId};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};


/// Narrow a history by profile, course, tee, time window and recency.
///
/// All criteria are optional; an empty filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    profile_id: Option<ProfileId>,
    course_id: Option<CourseId>,
    tee_name: Option<String>,
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
    last_rounds: Option<usize>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_opt(mut self, profile_id: Option<ProfileId>) -> Self {
        self.profile_id = profile_id;
        self
    }

    pub fn course_opt(mut self, course_id: Option<CourseId>) -> Self {
        self.course_id = course_id;
        self
    }

    /// Matched against the canonical tee name, ignoring ASCII case.
    pub fn tee_opt(mut self, tee_name: Option<String>) -> Self {
        self.tee_name = tee_name.map(|t| canonical_tee_name(&t));
        self
    }

    /// Inclusive lower bound on `played_at`.
    pub fn since_opt(mut self, since: Option<DateTime<Utc>>) -> Self {
        self.since = since;
        self
    }

    /// Inclusive upper bound on `played_at`.
    pub fn until_opt(mut self, until: Option<DateTime<Utc>>) -> Self {
        self.until = until;
        self
    }

    /// Keep only the most recent `n` rounds that pass the other criteria.
    pub fn last_rounds_opt(mut self, n: Option<usize>) -> Self {
        self.last_rounds = n;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Per-record criteria (everything except `last_rounds`).
    pub fn matches(&self, record: &HoleRecord) -> bool {
        if let Some(profile_id) = &self.profile_id {
            if record.profile_id != *profile_id {
                return false;
            }
        }
        if let Some(course_id) = &self.course_id {
            if record.course_id != *course_id {
                return false;
            }
        }
        if let Some(tee) = &self.tee_name {
            if !canonical_tee_name(&record.tee_name).eq_ignore_ascii_case(tee) {
                return false;
            }
        }
        if let Some(since) = self.since {
            if record.played_at < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if record.played_at > until {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, records: &[HoleRecord]) -> Vec<HoleRecord> {
        let matching: Vec<&HoleRecord> = records.iter().filter(|r| self.matches(r)).collect();

        let Some(n) = self.last_rounds else {
            return matching.into_iter().cloned().collect();
        };

        let mut latest_by_round: HashMap<&RoundId, DateTime<Utc>> = HashMap::new();
        for record in &matching {
            let entry = latest_by_round
                .entry(&record.round_id)
                .or_insert(record.played_at);
            if record.played_at > *entry {
                *entry = record.played_at;
            }
        }
        let mut rounds: Vec<(&RoundId, DateTime<Utc>)> = latest_by_round.into_iter().collect();
        rounds.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0)));
        let keep: HashSet<&RoundId> = rounds.into_iter().take(n).map(|(id, _)| id).collect();

        matching
            .into_iter()
            .filter(|r| keep.contains(&r.round_id))
            .cloned()
            .collect()
    }
}
