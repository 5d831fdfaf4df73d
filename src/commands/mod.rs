//! Command handlers composing the analytics core.
//!
//! Each command has a `build_*` function returning a serialisable report and a
//! `handle_*` function that prints it as text or JSON. File loading stays in
//! `common` so the binary can attach path context.

pub mod common;
pub mod crossing;
pub mod eclectic;
pub mod project;
pub mod stats;
pub mod strokes;


use crate::{cli::RecordFilterArgs, scoring::RecordFilter};

impl From<RecordFilterArgs> for RecordFilter {
    fn from(args: RecordFilterArgs) -> Self {
        RecordFilter::new()
            .since_opt(args.since)
            .until_opt(args.until)
            .course_opt(args.course)
            .tee_opt(args.tee)
            .profile_opt(args.profile)
            .last_rounds_opt(args.last_rounds)
    }
}
