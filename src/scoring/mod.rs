//! Scoring statistics over hole-level history
//!
//! Records are normalised once (`canonical`, `rounds`, `allocation`) and then
//! fed to independent statistics:
//! - `summary`: averages, spread and best/worst rounds per 9/18 pool
//! - `eclectic`: best-ever score per hole at a course/tee
//! - `streaks`: play streaks and best k-round stretches
//! - `worst_holes`: holes ranked by attempts-weighted damage
//!
//! `filters` narrows a history before any of the above run.

pub mod allocation;
pub mod canonical;
pub mod eclectic;
pub mod filters;
pub mod rounds;
pub mod streaks;
pub mod summary;
pub mod worst_holes;

#[cfg(test)]
pub(crate) mod test_support;

pub use allocation::{
    allocate_holes, course_handicap, net_for_record, net_strokes, playing_handicap,
    strokes_received,
};
pub use eclectic::{eclectic_card, EclecticCard, EclecticHole, EclecticSummary};
pub use filters::RecordFilter;
pub use rounds::{aggregate_rounds, Milestones, RoundAggregate};
pub use streaks::{best_stretch, play_streaks, PlayStreaks, Streak, Stretch};
pub use summary::{summarize, summarize_rounds, ParTypeStats, RoundRef, ScoringSummary};
pub use worst_holes::{rank_worst_holes, WorstHole};
