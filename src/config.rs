//! Analytics tunables loaded from a JSON file.
//!
//! Lookup order:
//! 1. an explicit path (the `--config` flag)
//! 2. the `GOLF_TRAJECTORY_CONFIG` environment variable
//! 3. `~/.config/golf-trajectory/config.json`
//! 4. built-in defaults (every field is optional)

use crate::error::{GolfError, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

#[cfg(test)]
mod tests;

pub const CONFIG_ENV_VAR: &str = "GOLF_TRAJECTORY_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub projection: ProjectionConfig,
    pub stats: StatsConfig,
}

/// Curve fitting and forecasting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Added to the fitted floor before it is shown as a "potential" handicap.
    pub floor_epsilon: f64,
    pub sweep_steps: usize,
    pub floor_span: f64,
    pub intercept_samples: usize,
    pub intercept_horizon_days: f64,
}

/// Scoring statistics settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub streak_gap_days: f64,
    pub stretch_sizes: Vec<usize>,
    pub worst_holes_top_n: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            floor_epsilon: 1.0,
            sweep_steps: 240,
            floor_span: 1.0,
            intercept_samples: 730,
            intercept_horizon_days: 1825.0,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            streak_gap_days: 14.0,
            stretch_sizes: vec![3, 5],
            worst_holes_top_n: 8,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: AnalyticsConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.projection;
        if p.sweep_steps < 2 {
            return Err(config_error("projection.sweep_steps must be at least 2"));
        }
        if !(p.floor_span.is_finite() && p.floor_span > 0.0) {
            return Err(config_error("projection.floor_span must be positive"));
        }
        if !p.floor_epsilon.is_finite() || p.floor_epsilon < 0.0 {
            return Err(config_error("projection.floor_epsilon must not be negative"));
        }
        if p.intercept_samples < 2 {
            return Err(config_error("projection.intercept_samples must be at least 2"));
        }
        if !(p.intercept_horizon_days.is_finite() && p.intercept_horizon_days > 0.0) {
            return Err(config_error("projection.intercept_horizon_days must be positive"));
        }

        let s = &self.stats;
        if !s.streak_gap_days.is_finite() || s.streak_gap_days < 0.0 {
            return Err(config_error("stats.streak_gap_days must not be negative"));
        }
        if s.stretch_sizes.iter().any(|&k| k == 0) {
            return Err(config_error("stats.stretch_sizes must all be positive"));
        }
        Ok(())
    }
}

/// Path: ~/.config/golf-trajectory/config.json
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("golf-trajectory").join("config.json")
}

/// Resolve which config file to read, if any.
///
/// Returns the path and whether it was requested explicitly.
pub fn resolve_config_path(explicit: Option<&Path>) -> (PathBuf, bool) {
    if let Some(path) = explicit {
        return (path.to_path_buf(), true);
    }
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => (PathBuf::from(path), true),
        _ => (default_config_path(), false),
    }
}

/// Load config from disk, falling back to defaults when no file exists.
///
/// A missing file is only an error when it was requested explicitly.
pub fn load_config(explicit: Option<&Path>) -> Result<AnalyticsConfig> {
    let (path, required) = resolve_config_path(explicit);

    if !path.exists() {
        if required {
            return Err(GolfError::Config {
                message: format!("config file not found: {}", path.display()),
            });
        }
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AnalyticsConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config = AnalyticsConfig::from_json_str(&contents).map_err(|e| match e {
        GolfError::Json(err) => GolfError::Config {
            message: format!("parsing {}: {}", path.display(), err),
        },
        other => other,
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn config_error(message: &str) -> GolfError {
    GolfError::Config {
        message: message.to_string(),
    }
}
