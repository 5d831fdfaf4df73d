//! CLI argument definitions and parsing.

use crate::models::{
    time::{parse_date, parse_timestamp},
    CourseId, ProfileId,
};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;


/// Narrowing applied to hole records before any statistic.
#[derive(Debug, Default, Args)]
pub struct RecordFilterArgs {
    /// Only rounds played on or after this date (YYYY-MM-DD or RFC 3339).
    #[clap(long, value_parser = parse_timestamp)]
    pub since: Option<DateTime<Utc>>,

    /// Only rounds played on or before this date. A bare date includes the whole day.
    #[clap(long, value_parser = parse_until)]
    pub until: Option<DateTime<Utc>>,

    /// Only this course ID.
    #[clap(long)]
    pub course: Option<CourseId>,

    /// Only this tee (front/back nine variants included).
    #[clap(long)]
    pub tee: Option<String>,

    /// Only this player profile ID.
    #[clap(long)]
    pub profile: Option<ProfileId>,

    /// Only the most recent N rounds left after the other filters.
    #[clap(long = "last")]
    pub last_rounds: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fit handicap trajectories and forecast targets.
    ///
    /// Each history file is a JSON array of `{ "date", "hi" }` observations;
    /// the file stem is used as the display name.
    Project {
        /// Handicap history file(s) (repeatable).
        #[clap(long = "history", required = true)]
        histories: Vec<PathBuf>,

        /// Target handicap index to estimate an arrival date for.
        #[clap(long)]
        target: Option<f64>,

        /// Report the projected handicap on this date.
        #[clap(long, value_parser = parse_date)]
        on: Option<NaiveDate>,

        /// Evaluate as of this date instead of today.
        #[clap(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Find where two handicap trajectories next cross.
    Crossing {
        /// First handicap history file.
        #[clap(long)]
        a: PathBuf,

        /// Second handicap history file.
        #[clap(long)]
        b: PathBuf,

        /// Search from this date instead of today.
        #[clap(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// How far ahead to search, in days.
        #[clap(long)]
        horizon_days: Option<f64>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Round summary, play streaks, best stretches and weakest holes.
    Stats {
        /// Hole records file (JSON array).
        #[clap(long)]
        records: PathBuf,

        #[clap(flatten)]
        filters: RecordFilterArgs,

        /// Days between rounds that still continue a streak.
        #[clap(long)]
        gap_days: Option<f64>,

        /// Stretch sizes to report (repeatable): `--stretch 3 --stretch 5`.
        #[clap(long = "stretch")]
        stretches: Vec<usize>,

        /// How many weak holes to list.
        #[clap(long)]
        top: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Best-ever score per hole at one course and tee.
    Eclectic {
        /// Hole records file (JSON array).
        #[clap(long)]
        records: PathBuf,

        /// Course ID.
        #[clap(long)]
        course: CourseId,

        /// Tee name; "(Front 9)"/"(Back 9)" suffixes are ignored.
        #[clap(long)]
        tee: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Strokes received on each stroke index for a course handicap.
    Strokes {
        /// Course handicap.
        #[clap(long)]
        course_handicap: f64,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "golf-trajectory",
    about = "Handicap trajectory forecasting and scoring analytics"
)]
pub struct GolfCli {
    /// Analytics config file (or set `GOLF_TRAJECTORY_CONFIG`).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Parse an inclusive upper bound; a bare date means the end of that day.
pub fn parse_until(raw: &str) -> crate::Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        if let Some(end) = date.and_hms_milli_opt(23, 59, 59, 999) {
            return Ok(end.and_utc());
        }
    }
    parse_timestamp(raw)
}
