//! Input loading and output helpers shared across commands.

use crate::{
    error::{GolfError, Result},
    models::{HiPoint, HoleRecord},
    trajectory::{Eta, EtaStatus},
};
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, path::Path};
use tracing::debug;

/// A named handicap history, as fed to the projection commands.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedHistory {
    pub name: String,
    pub points: Vec<HiPoint>,
}

impl NamedHistory {
    pub fn new(name: impl Into<String>, points: Vec<HiPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents)?;
    Ok(value)
}

/// Read a handicap history file. The display name is the file stem.
pub fn load_history(path: &Path) -> Result<NamedHistory> {
    let points: Vec<HiPoint> = load_json(path)?;
    debug!(path = %path.display(), points = points.len(), "loaded handicap history");
    Ok(NamedHistory::new(entity_name(path), points))
}

/// Read a hole records file.
pub fn load_records(path: &Path) -> Result<Vec<HoleRecord>> {
    let records: Vec<HoleRecord> = load_json(path)?;
    debug!(path = %path.display(), records = records.len(), "loaded hole records");
    Ok(records)
}

pub fn entity_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Human-readable ETA, e.g. "estimated in 108 days (2024-04-18)".
pub fn describe_eta(eta: &Eta) -> String {
    match (eta.status, eta.days, eta.date) {
        (EtaStatus::Reached, _, _) => "reached".to_string(),
        (EtaStatus::Estimated, Some(days), Some(date)) => {
            format!("estimated in {} days ({})", days, date)
        }
        (EtaStatus::Unreachable, _, _) => "unreachable (below projected floor)".to_string(),
        (EtaStatus::Insufficient, _, _) => "not enough history yet".to_string(),
        _ => "unknown".to_string(),
    }
}

pub fn require_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GolfError::InvalidArgument {
            message: format!("{} must be a finite number", name),
        })
    }
}
