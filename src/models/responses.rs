use crate::models::domain::{CompatibilityScore, EnhancementStatus, RankedCandidate};
use serde::{Deserialize, Serialize};

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub score: CompatibilityScore,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
    pub enhancement: EnhancementStatus,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
