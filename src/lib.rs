//! Golf Handicap Trajectory Library
//!
//! Forecasting and scoring analytics over a golfer's history: fits an
//! exponential-decay-with-floor model to handicap index observations and
//! computes scoring statistics from hole-level records.
//!
//! ## Features
//!
//! - **Trajectory Fitting**: Floor sweep + log-linear regression of `a * exp(-b t) + c`
//! - **Forecasting**: Target ETA, projected value on a date, potential floor, crossings
//! - **Handicap Allocation**: Strokes received per hole and net scoring
//! - **Round Statistics**: 9/18-hole normalisation, best/worst rounds, milestones
//! - **Eclectic Cards**: Best-ever score per hole across front/back/full tees
//! - **Streaks & Weak Holes**: Play streaks, best stretches and attempts-weighted hole ranking
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use golf_trajectory::{eta_for_target, fit_history, EtaStatus, FitOptions, HiPoint};
//!
//! # fn example() -> golf_trajectory::Result<()> {
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let history: Vec<HiPoint> = [20.0, 17.0, 15.5, 14.8, 14.5]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &hi)| HiPoint::new(start + chrono::Duration::days(30 * i as i64), hi))
//!     .collect();
//!
//! let fit = fit_history(&history, &FitOptions::default())?;
//! let today = start + chrono::Duration::days(90);
//! let eta = eta_for_target(Some(&fit), today, 14.6);
//! assert_eq!(eta.status, EtaStatus::Estimated);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Configuration
//!
//! Tunables are read from a JSON file; point at it with:
//! ```bash
//! export GOLF_TRAJECTORY_CONFIG=~/golf/config.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod scoring;
pub mod trajectory;

// Re-export commonly used types
pub use config::{AnalyticsConfig, CONFIG_ENV_VAR};
pub use error::{GolfError, Result};
pub use models::{CourseId, HiPoint, HoleRecord, ProfileId, RoundId, TeeBoxId, TeeSegment};
pub use trajectory::{eta_for_target, fit_history, EtaStatus, Fit, FitOptions};
