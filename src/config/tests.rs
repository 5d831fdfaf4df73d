//! Unit tests for configuration loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AnalyticsConfig::default();
    assert_eq!(config.projection.floor_epsilon, 1.0);
    assert_eq!(config.projection.sweep_steps, 240);
    assert_eq!(config.stats.streak_gap_days, 14.0);
    assert_eq!(config.stats.stretch_sizes, vec![3, 5]);
    assert_eq!(config.stats.worst_holes_top_n, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_fills_defaults() {
    let config =
        AnalyticsConfig::from_json_str(r#"{"stats": {"streak_gap_days": 7}}"#).unwrap();
    assert_eq!(config.stats.streak_gap_days, 7.0);
    assert_eq!(config.stats.worst_holes_top_n, 8);
    assert_eq!(config.projection, ProjectionConfig::default());
}

#[test]
fn test_empty_object_is_default() {
    let config = AnalyticsConfig::from_json_str("{}").unwrap();
    assert_eq!(config, AnalyticsConfig::default());
}

#[test]
fn test_invalid_values_rejected() {
    for json in [
        r#"{"projection": {"sweep_steps": 1}}"#,
        r#"{"projection": {"floor_span": 0}}"#,
        r#"{"projection": {"floor_epsilon": -0.5}}"#,
        r#"{"projection": {"intercept_samples": 0}}"#,
        r#"{"projection": {"intercept_horizon_days": -10}}"#,
        r#"{"stats": {"streak_gap_days": -1}}"#,
        r#"{"stats": {"stretch_sizes": [3, 0]}}"#,
    ] {
        let result = AnalyticsConfig::from_json_str(json);
        assert!(
            matches!(result, Err(GolfError::Config { .. })),
            "expected config error for {}",
            json
        );
    }
}

#[test]
fn test_load_config_from_explicit_path() {
    let file = write_temp(r#"{"projection": {"floor_epsilon": 0.5}}"#);
    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.projection.floor_epsilon, 0.5);
}

#[test]
fn test_load_config_explicit_missing_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let result = load_config(Some(&missing));
    match result {
        Err(GolfError::Config { message }) => assert!(message.contains("not found")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_load_config_malformed_json_is_config_error() {
    let file = write_temp("{ not json");
    let result = load_config(Some(file.path()));
    match result {
        Err(GolfError::Config { message }) => assert!(message.contains("parsing")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let explicit = Path::new("/tmp/explicit.json");
    let (path, required) = resolve_config_path(Some(explicit));
    assert_eq!(path, explicit);
    assert!(required);
}

#[test]
fn test_default_config_path_location() {
    let path = default_config_path();
    assert!(path.ends_with("golf-trajectory/config.json"));
}
