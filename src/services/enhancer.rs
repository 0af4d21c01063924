use crate::core::RankingEnhancer;
use crate::error::EnhancerError;
use crate::models::{
    CandidateId, EnhancedCandidate, RankedCandidate, StudentLearningStyle, TierName,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RerankCandidate<'a> {
    candidate_id: &'a str,
    raw: u8,
    normalized: u8,
    tier: TierName,
}

#[derive(Debug, Serialize)]
struct RerankRequest<'a> {
    student: &'a StudentLearningStyle,
    candidates: Vec<RerankCandidate<'a>>,
}

#[derive(Debug, Deserialize)]
struct RerankResponse {
    candidates: Vec<EnhancedCandidate>,
}

/// Ranking enhancer backed by a remote model endpoint
///
/// Sends the deterministic top-K with their scores and expects the same
/// candidate ids back, optionally reordered and annotated.
pub struct HttpRankingEnhancer {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpRankingEnhancer {
    /// Create a new enhancer client
    ///
    /// `timeout` bounds the HTTP request itself; the ranker applies its own
    /// timeout around the whole call as well.
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, EnhancerError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RankingEnhancer for HttpRankingEnhancer {
    fn name(&self) -> &str {
        "http"
    }

    async fn rerank(
        &self,
        student: &StudentLearningStyle,
        ranked: &[RankedCandidate],
    ) -> Result<Vec<EnhancedCandidate>, EnhancerError> {
        let payload = RerankRequest {
            student,
            candidates: ranked
                .iter()
                .map(|c| RerankCandidate {
                    candidate_id: &c.candidate_id,
                    raw: c.score.raw,
                    normalized: c.score.normalized,
                    tier: c.score.tier.name,
                })
                .collect(),
        };

        tracing::debug!("Requesting rerank of {} candidates from {}", ranked.len(), self.endpoint);

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(EnhancerError::Unavailable(format!(
                "enhancer returned {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let parsed: RerankResponse = serde_json::from_str(&body)?;

        let ids: Vec<&CandidateId> = parsed.candidates.iter().map(|c| &c.candidate_id).collect();
        tracing::trace!("Enhancer order: {:?}", ids);

        Ok(parsed.candidates)
    }
}
