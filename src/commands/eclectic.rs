//! Eclectic scorecard command implementation

use crate::{
    error::Result,
    models::{CourseId, HoleRecord},
    scoring::{eclectic_card, EclecticCard},
};

use super::common::print_json;

/// Parameters for the eclectic command
#[derive(Debug, Clone)]
pub struct EclecticParams {
    pub records: Vec<HoleRecord>,
    pub course_id: CourseId,
    pub tee_name: String,
    pub as_json: bool,
}

pub fn build_eclectic_report(params: &EclecticParams) -> Result<EclecticCard> {
    eclectic_card(&params.records, &params.course_id, &params.tee_name)
}

pub fn handle_eclectic(params: EclecticParams) -> Result<()> {
    let card = match build_eclectic_report(&params) {
        Ok(card) => card,
        Err(e) if e.is_insufficient() && !params.as_json => {
            println!("not enough history yet: {}", e);
            return Ok(());
        }
        Err(e) if e.is_insufficient() => {
            return print_json(&serde_json::json!({ "status": "insufficient", "message": e.to_string() }));
        }
        Err(e) => return Err(e),
    };

    if params.as_json {
        return print_json(&card);
    }

    println!("Eclectic card: {} / {}", card.course_id, card.tee_name);
    println!("Hole  Par  Strokes  Date");
    for hole in card.best.values() {
        let par = hole
            .par
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4}  {:>3}  {:>7}  {}",
            hole.hole,
            par,
            hole.strokes,
            hole.played_at.date_naive()
        );
    }

    let summary = &card.summary;
    match (summary.total, summary.to_par) {
        (Some(total), Some(to_par)) => println!("Total: {} ({:+})", total, to_par),
        (Some(total), None) => println!("Total: {}", total),
        _ => println!(
            "{} holes scored, missing: {}",
            summary.have,
            summary
                .missing
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
    Ok(())
}
