//! Error types for the questionnaire model.

use thiserror::Error;

/// Import failure: the file is not a questionnaire document.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Could not read questionnaire: {message}")]
pub struct ParseError {
    pub message: String,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self { message: err.to_string() }
    }
}

/// Rejected edit. The state the edit was applied to is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("{field} must be a number (got \"{input}\")")]
    InvalidNumber { field: &'static str, input: String },
}

/// Problems found by [`crate::validate`]. These never block editing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate sequence number detected: {sequence}")]
    DuplicateSequence { sequence: f64 },

    #[error("Item {sequence} has a negative weight ({weight})")]
    NegativeWeight { sequence: f64, weight: f64 },

    #[error("{field} must not be negative ({value})")]
    NegativeScore { field: &'static str, value: i64 },

    #[error("Max item score ({max}) is less than min item score ({min})")]
    InvertedScoreBounds { min: i64, max: i64 },
}
