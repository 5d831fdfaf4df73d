//! Scoring statistics command implementation

use crate::{
    config::StatsConfig,
    error::Result,
    models::HoleRecord,
    scoring::{
        aggregate_rounds, best_stretch, play_streaks, rank_worst_holes, summarize_rounds, PlayStreaks,
        RecordFilter, RoundRef, ScoringSummary, Stretch, WorstHole,
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{print_json, require_finite};

/// Parameters for the stats command
#[derive(Debug, Clone)]
pub struct StatsParams {
    pub records: Vec<HoleRecord>,
    pub filter: RecordFilter,
    pub gap_days: Option<f64>,
    /// Empty means use the configured sizes.
    pub stretch_sizes: Vec<usize>,
    pub top_n: Option<usize>,
    pub now: DateTime<Utc>,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub summary: ScoringSummary,
    pub streaks: Option<PlayStreaks>,
    /// Whether the current streak is still open as of `now`.
    pub streak_active: bool,
    pub stretches: Vec<Stretch>,
    pub worst_holes: Vec<WorstHole>,
}

/// Filter the history and compute every statistic.
///
/// Fails with `InsufficientData` when nothing scored survives the filter.
pub fn build_stats_report(params: &StatsParams, config: &StatsConfig) -> Result<StatsReport> {
    let gap_days = require_finite("--gap-days", params.gap_days.unwrap_or(config.streak_gap_days))?;
    let sizes = if params.stretch_sizes.is_empty() {
        config.stretch_sizes.as_slice()
    } else {
        params.stretch_sizes.as_slice()
    };
    let top_n = params.top_n.unwrap_or(config.worst_holes_top_n);

    let records = params.filter.apply(&params.records);
    let rounds = aggregate_rounds(&records);
    let summary = summarize_rounds(&rounds, &records)?;

    let dates: Vec<DateTime<Utc>> = rounds.iter().map(|r| r.played_at).collect();
    let streaks = play_streaks(&dates, gap_days);
    let streak_active = streaks
        .as_ref()
        .is_some_and(|s| s.current.is_active(params.now, gap_days));

    Ok(StatsReport {
        summary,
        streaks,
        streak_active,
        stretches: sizes
            .iter()
            .filter_map(|&k| best_stretch(&rounds, k))
            .collect(),
        worst_holes: rank_worst_holes(&records, top_n),
    })
}

pub fn handle_stats(params: StatsParams, config: &StatsConfig) -> Result<()> {
    let report = match build_stats_report(&params, config) {
        Ok(report) => report,
        Err(e) if e.is_insufficient() => {
            if params.as_json {
                return print_json(&serde_json::json!({ "status": "insufficient", "message": e.to_string() }));
            }
            println!("not enough history yet: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if params.as_json {
        return print_json(&report);
    }
    print_report(&report);
    Ok(())
}

fn print_report(report: &StatsReport) {
    let s = &report.summary;
    println!(
        "Rounds: {} ({} x 18 holes, {} x 9 holes)",
        s.rounds, s.eighteen_hole_rounds, s.nine_hole_rounds
    );
    if let Some(avg) = s.avg_to_par_18eq {
        println!(
            "Average to par (18-hole equivalent): {:+.1}  (std dev {:.1})",
            avg,
            s.std_dev_to_par_18eq.unwrap_or(0.0)
        );
    }
    if let Some(net) = s.avg_net_to_par_18eq {
        println!("Average net to par (18-hole equivalent): {:+.1}", net);
    }
    print_round("Best 18", s.best_18.as_ref());
    print_round("Worst 18", s.worst_18.as_ref());
    print_round("Best 9", s.best_9.as_ref());
    print_round("Worst 9", s.worst_9.as_ref());

    let m = &s.milestones;
    println!(
        "Birdies: {}  Eagles: {}  Albatrosses: {}  Holes in one: {}",
        m.birdies, m.eagles, m.albatrosses, m.holes_in_one
    );
    for par in &s.par_types {
        println!(
            "Par {}: {:.2} strokes ({:+.2}) over {} holes",
            par.par, par.avg_strokes, par.avg_to_par, par.holes
        );
    }

    if let Some(streaks) = &report.streaks {
        println!(
            "Longest streak: {} rounds ({} to {}), gap <= {} days",
            streaks.longest.length,
            streaks.longest.start.date_naive(),
            streaks.longest.end.date_naive(),
            streaks.gap_days
        );
        println!(
            "Current streak: {} rounds since {}{}",
            streaks.current.length,
            streaks.current.start.date_naive(),
            if report.streak_active { "" } else { " (ended)" }
        );
    }

    for stretch in &report.stretches {
        println!(
            "Best {}-round stretch: {:+.1} avg ({} to {})",
            stretch.size,
            stretch.average,
            stretch.start.date_naive(),
            stretch.end.date_naive()
        );
    }

    if report.worst_holes.is_empty() {
        println!("No hole averages over par");
    } else {
        println!("Holes costing the most strokes:");
        for hole in &report.worst_holes {
            println!(
                "  {} {} #{} (par {}): {:+.2} over {} attempts",
                hole.course_name, hole.tee_name, hole.hole, hole.par, hole.avg_to_par, hole.attempts
            );
        }
    }
}

fn print_round(label: &str, round: Option<&RoundRef>) {
    if let Some(r) = round {
        println!(
            "{}: {} ({:+}) at {} {} on {}",
            label,
            r.gross_total,
            r.to_par,
            r.course_name,
            r.tee_name,
            r.played_at.date_naive()
        );
    }
}
