//! Handicap stroke allocation and net scoring.
//!
//! A course handicap `CH` gives every hole `CH / 18` strokes, plus one extra
//! on the `CH % 18` hardest holes by stroke index. Summed over stroke indexes
//! 1-18 that is exactly `CH`.

use crate::models::HoleRecord;

#[cfg(test)]
mod tests;

pub const HOLES_PER_ROUND: u32 = 18;

/// Slope rating of a course of standard difficulty.
const STANDARD_SLOPE: f64 = 113.0;

/// Course handicap floored to a non-negative whole number of strokes.
pub fn playing_handicap(course_handicap: f64) -> u32 {
    if !course_handicap.is_finite() || course_handicap <= 0.0 {
        return 0;
    }
    course_handicap.floor() as u32
}

/// Strokes received on the hole with `stroke_index`.
///
/// A missing or out-of-range stroke index receives nothing.
pub fn strokes_received(course_handicap: f64, stroke_index: Option<u8>) -> u32 {
    let ch = playing_handicap(course_handicap);
    let Some(si) = stroke_index.filter(|si| (1..=18).contains(si)) else {
        return 0;
    };
    if ch == 0 {
        return 0;
    }
    let extra = u32::from(u32::from(si) <= ch % HOLES_PER_ROUND);
    ch / HOLES_PER_ROUND + extra
}

/// Net strokes, never below 1.
pub fn net_strokes(gross: u32, received: u32) -> u32 {
    gross.saturating_sub(received).max(1)
}

/// Strokes received per hole for a whole card, in input order.
pub fn allocate_holes(course_handicap: f64, stroke_indexes: &[Option<u8>]) -> Vec<u32> {
    stroke_indexes
        .iter()
        .map(|&si| strokes_received(course_handicap, si))
        .collect()
}

/// World Handicap System course handicap, rounded to whole strokes.
pub fn course_handicap(handicap_index: f64, slope_rating: f64, course_rating: f64, par: f64) -> f64 {
    (handicap_index * slope_rating / STANDARD_SLOPE + (course_rating - par)).round()
}

/// Net strokes for a record.
///
/// Prefers an upstream net value; otherwise derives it from the round's
/// course handicap and the hole's stroke index.
pub fn net_for_record(record: &HoleRecord) -> Option<u32> {
    if let Some(net) = record.net_strokes {
        return Some(net);
    }
    let gross = record.strokes?;
    let ch = record.course_handicap?;
    Some(net_strokes(gross, strokes_received(ch, record.stroke_index)))
}
