//! Error types for the golf trajectory library

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, GolfError>;

#[derive(Error, Debug)]
pub enum GolfError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Not enough history to compute the requested result.
    ///
    /// Callers should present this as "not enough history yet", not as a failure.
    #[error("Insufficient data: {what}")]
    InsufficientData { what: String },

    /// The floor sweep found no candidate with a decaying (`b > 0`) fit.
    #[error("No decaying fit found for the handicap history")]
    NoFit,

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl GolfError {
    pub fn insufficient(what: impl Into<String>) -> Self {
        GolfError::InsufficientData { what: what.into() }
    }

    /// True for outcomes that mean "not enough history" rather than a real failure.
    ///
    /// `NoFit` is grouped with `InsufficientData` downstream.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, GolfError::InsufficientData { .. } | GolfError::NoFit)
    }
}
