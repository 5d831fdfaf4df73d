//! Unit tests for projection queries

use super::*;
use crate::trajectory::fit::{fit_series, FitOptions};

fn day0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn days(n: i64) -> NaiveDate {
    day0() + Duration::days(n)
}

fn example_fit() -> Fit {
    let series = vec![
        (0.0, 20.0),
        (30.0, 17.0),
        (60.0, 15.5),
        (90.0, 14.8),
        (120.0, 14.5),
    ];
    fit_series(&series, day0(), &FitOptions::default()).unwrap()
}

fn manual_fit(a: f64, b: f64, c: f64) -> Fit {
    Fit {
        a,
        b,
        c,
        first_date: day0(),
        rmse: 0.0,
        points_used: 4,
    }
}

#[test]
fn test_eta_example_estimated_between_day_90_and_120() {
    let fit = example_fit();
    let eta = eta_for_target(Some(&fit), days(90), 14.6);
    assert_eq!(eta.status, EtaStatus::Estimated);
    let date = eta.date.unwrap();
    assert!(date > days(90) && date <= days(120), "eta date {}", date);
    assert_eq!(eta.days, Some((date - days(90)).num_days()));
}

#[test]
fn test_eta_example_below_floor_unreachable() {
    let fit = example_fit();
    let eta = eta_for_target(Some(&fit), days(90), 10.0);
    assert_eq!(eta.status, EtaStatus::Unreachable);
    assert_eq!(eta.days, None);
    assert_eq!(eta.date, None);
}

#[test]
fn test_eta_already_reached() {
    let fit = manual_fit(6.0, 0.02, 14.0);
    let eta = eta_for_target(Some(&fit), days(200), 18.0);
    assert_eq!(eta.status, EtaStatus::Reached);
    assert_eq!(eta.days, Some(0));
    assert_eq!(eta.date, Some(days(200)));
}

#[test]
fn test_eta_without_fit_is_insufficient() {
    let eta = eta_for_target(None, day0(), 12.0);
    assert_eq!(eta.status, EtaStatus::Insufficient);
}

#[test]
fn test_eta_days_round_up() {
    let fit = manual_fit(6.0, 0.02, 14.0);
    // Target hit at t = ln(6) / 0.02 = 89.59 days
    let eta = eta_for_target(Some(&fit), day0(), 15.0);
    assert_eq!(eta.status, EtaStatus::Estimated);
    assert_eq!(eta.days, Some(90));
    assert_eq!(eta.date, Some(days(90)));
}

#[test]
fn test_eta_nan_target_is_unknown() {
    let fit = manual_fit(6.0, 0.02, 14.0);
    let eta = eta_for_target(Some(&fit), day0(), f64::NAN);
    assert_eq!(eta.status, EtaStatus::Unknown);
}

#[test]
fn test_projected_value_on_rounds_to_one_decimal() {
    let fit = manual_fit(6.0, 0.02, 14.0);
    assert_eq!(projected_value_on(Some(&fit), day0()), Some(20.0));
    // 6 * e^-1 + 14 = 16.207
    assert_eq!(projected_value_on(Some(&fit), days(50)), Some(16.2));
    assert_eq!(projected_value_on(None, day0()), None);
}

#[test]
fn test_potential_floor_is_lifted() {
    let fit = manual_fit(6.0, 0.02, 14.0);
    let floor = potential_floor(Some(&fit), day0(), 1.0).unwrap();
    assert_eq!(floor.value, 15.0);
    assert_eq!(floor.eta.status, EtaStatus::Estimated);
    assert_eq!(floor.eta.days, Some(90));
    assert!(potential_floor(None, day0(), 1.0).is_none());
}

#[test]
fn test_potential_floor_reached() {
    let fit = manual_fit(6.0, 0.02, 14.0);
    let floor = potential_floor(Some(&fit), days(400), 1.0).unwrap();
    assert_eq!(floor.eta.status, EtaStatus::Reached);
}

#[test]
fn test_next_crossing_found() {
    let a = manual_fit(10.0, 0.02, 8.0);
    let b = manual_fit(3.0, 0.005, 12.0);
    match next_crossing(&a, &b, day0(), 1825.0, 730) {
        Crossing::At { date, days, value } => {
            assert!(days > 0.0);
            assert!(date >= day0());
            assert!((value - a.predict(days)).abs() < 1e-9);
            assert!((a.predict(days) - b.predict(days)).abs() < 1e-3);
        }
        Crossing::NoCrossingInWindow => panic!("Expected a crossing"),
    }
}

#[test]
fn test_next_crossing_outside_window() {
    let a = manual_fit(10.0, 0.02, 8.0);
    let b = manual_fit(3.0, 0.005, 12.0);
    assert_eq!(next_crossing(&a, &b, day0(), 5.0, 10), Crossing::NoCrossingInWindow);
}

#[test]
fn test_next_crossing_serializes_status() {
    let json = serde_json::to_value(Crossing::NoCrossingInWindow).unwrap();
    assert_eq!(json["status"], "no_crossing_in_window");
}

#[test]
fn test_curve_samples() {
    let fit = manual_fit(6.0, 0.02, 14.0);
    let samples = curve_samples(&fit, day0(), days(70), 7);
    assert_eq!(samples.len(), 11);
    assert_eq!(samples[0], (day0(), 20.0));
    assert_eq!(samples.last().unwrap().0, days(70));
    assert!(curve_samples(&fit, days(10), day0(), 7).is_empty());
    assert!(curve_samples(&fit, day0(), days(10), 0).is_empty());
}

#[test]
fn test_eta_status_display() {
    assert_eq!(EtaStatus::Estimated.to_string(), "estimated");
    assert_eq!(
        serde_json::to_value(EtaStatus::Unreachable).unwrap(),
        serde_json::json!("unreachable")
    );
}
