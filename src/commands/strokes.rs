//! Stroke allocation table command implementation

use crate::{
    error::{GolfError, Result},
    scoring::{allocate_holes, playing_handicap},
};
use serde::{Deserialize, Serialize};

use super::common::print_json;

/// Parameters for the strokes command
#[derive(Debug, Clone)]
pub struct StrokesParams {
    pub course_handicap: f64,
    pub as_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeRow {
    pub stroke_index: u8,
    pub strokes_received: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokesReport {
    pub course_handicap: f64,
    pub playing_handicap: u32,
    pub total_received: u32,
    pub holes: Vec<StrokeRow>,
}

pub fn build_strokes_report(course_handicap: f64) -> Result<StrokesReport> {
    if !course_handicap.is_finite() {
        return Err(GolfError::InvalidArgument {
            message: "--course-handicap must be a finite number".to_string(),
        });
    }

    let indexes: Vec<Option<u8>> = (1..=18).map(Some).collect();
    let holes: Vec<StrokeRow> = allocate_holes(course_handicap, &indexes)
        .into_iter()
        .zip(1u8..)
        .map(|(strokes_received, stroke_index)| StrokeRow {
            stroke_index,
            strokes_received,
        })
        .collect();

    Ok(StrokesReport {
        course_handicap,
        playing_handicap: playing_handicap(course_handicap),
        total_received: holes.iter().map(|h| h.strokes_received).sum(),
        holes,
    })
}

pub fn handle_strokes(params: StrokesParams) -> Result<()> {
    let report = build_strokes_report(params.course_handicap)?;

    if params.as_json {
        return print_json(&report);
    }

    println!(
        "Course handicap {} -> {} strokes",
        report.course_handicap, report.playing_handicap
    );
    println!(" SI  Strokes");
    for row in &report.holes {
        println!("{:>3}  {}", row.stroke_index, row.strokes_received);
    }
    Ok(())
}
