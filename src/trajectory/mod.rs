//! Handicap trajectory modelling
//!
//! This module fits an exponential-decay-with-floor model to handicap index
//! history and answers forecasting questions against it:
//! - `fit`: the floor sweep + log-linear regression producing a [`Fit`]
//! - `solve`: closed-form target solving and numeric crossing search
//! - `projection`: ETA, projected value, potential floor and crossing queries

pub mod fit;
pub mod projection;
pub mod solve;

pub use fit::{fit_history, fit_series, Fit, FitOptions};
pub use projection::{
    curve_samples, eta_for_target, next_crossing, potential_floor, projected_value_on, Crossing,
    Eta, EtaStatus, PotentialFloor,
};
pub use solve::{find_next_intercept, find_next_root, time_to_target};
