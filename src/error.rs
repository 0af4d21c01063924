use std::time::Duration;
use thiserror::Error;

/// Errors raised while validating profiles or scoring candidates.
///
/// These indicate bad data from the caller and are always surfaced,
/// never absorbed into a low score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidAttributeValue { field: &'static str, value: String },

    #[error("Incomplete profile: missing {field}")]
    IncompleteProfile { field: &'static str },

    #[error("Duplicate candidate id: {0}")]
    DuplicateCandidate(String),
}

/// Errors from a ranking enhancer.
///
/// The ranker absorbs all of these and keeps its deterministic order.
#[derive(Debug, Error)]
pub enum EnhancerError {
    #[error("Enhancer contract violation: {0}")]
    ContractViolation(String),

    #[error("Enhancer unavailable: {0}")]
    Unavailable(String),

    #[error("Enhancer timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
