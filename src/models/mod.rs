//! Input data models consumed by the analytics core.
//!
//! - `ids`: type-safe wrappers for upstream identifiers
//! - `time`: date/timestamp parsing and day arithmetic
//! - `history`: handicap index observations
//! - `records`: hole-level scoring rows and tee segment tagging

pub mod history;
pub mod ids;
pub mod records;
pub mod time;

pub use history::{dedupe_by_date, HiPoint};
pub use ids::{CourseId, ProfileId, RoundId, TeeBoxId};
pub use records::{HoleRecord, TeeIdentity, TeeSegment};
