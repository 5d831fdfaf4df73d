//! Canonical hole numbering shared by the statistics.

use crate::models::{HoleRecord, TeeIdentity};
use std::{collections::HashMap, rc::Rc};

/// A record paired with its parsed tee and 1-18 hole number.
#[derive(Debug, Clone)]
pub struct CanonicalHole<'a> {
    pub record: &'a HoleRecord,
    pub tee: Rc<TeeIdentity>,
    pub hole: u8,
}

/// Tag every record with its canonical tee and hole.
///
/// Each distinct tee name is parsed once.
pub fn canonicalize(records: &[HoleRecord]) -> Vec<CanonicalHole<'_>> {
    let mut tees: HashMap<&str, Rc<TeeIdentity>> = HashMap::new();
    records
        .iter()
        .map(|record| {
            let tee = tees
                .entry(record.tee_name.as_str())
                .or_insert_with(|| Rc::new(TeeIdentity::parse(&record.tee_name)))
                .clone();
            let hole = tee.segment.canonical_hole(record.hole_number);
            CanonicalHole { record, tee, hole }
        })
        .collect()
}
