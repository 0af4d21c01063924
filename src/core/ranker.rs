use crate::core::enhancer::{apply_enhancement, validate_enhancement, RankingEnhancer};
use crate::core::scoring::score;
use crate::error::{EnhancerError, ScoringError};
use crate::models::{
    Candidate, EnhancementStatus, RankedCandidate, StudentLearningStyle, TierName,
};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::time::Duration;

/// Limits applied to the enhancement pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    /// How many of the top deterministic candidates an enhancer may reorder
    pub enhancement_top_k: usize,
    pub enhancement_timeout: Duration,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            enhancement_top_k: 10,
            enhancement_timeout: Duration::from_millis(2000),
        }
    }
}

/// Per-request filtering of a ranking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    pub limit: Option<usize>,
    /// Exclude candidates below this tier
    pub min_tier: Option<TierName>,
}

/// Result of a ranking request
#[derive(Debug)]
pub struct RankOutcome {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
    pub enhancement: EnhancementStatus,
}

/// Deterministic ranking order: normalized desc, raw desc, candidate id asc
pub fn compare_ranked(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.score
        .normalized
        .cmp(&a.score.normalized)
        .then_with(|| b.score.raw.cmp(&a.score.raw))
        .then_with(|| a.candidate_id.cmp(&b.candidate_id))
}

/// Ranks preceptor candidates for one student
///
/// # Pipeline Stages
/// 1. Score every candidate
/// 2. Deterministic sort
/// 3. Tier gate
/// 4. Optional enhancement of the top-K
/// 5. Limit
#[derive(Debug, Clone)]
pub struct MatchRanker {
    policy: RankingPolicy,
}

impl MatchRanker {
    pub fn new(policy: RankingPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: RankingPolicy::default(),
        }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Score and order every candidate
    ///
    /// Returns `DuplicateCandidate` if an id appears more than once.
    pub fn rank(
        &self,
        student: &StudentLearningStyle,
        candidates: Vec<Candidate>,
    ) -> Result<Vec<RankedCandidate>, ScoringError> {
        let mut seen = HashSet::with_capacity(candidates.len());
        for candidate in &candidates {
            if !seen.insert(candidate.candidate_id.as_str()) {
                return Err(ScoringError::DuplicateCandidate(
                    candidate.candidate_id.clone(),
                ));
            }
        }
        drop(seen);

        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|candidate| RankedCandidate {
                score: score(student, &candidate.style),
                candidate_id: candidate.candidate_id,
                note: None,
            })
            .collect();

        ranked.sort_by(compare_ranked);

        Ok(ranked)
    }

    /// Rank, then apply the tier gate and limit
    pub fn rank_with(
        &self,
        student: &StudentLearningStyle,
        candidates: Vec<Candidate>,
        options: RankOptions,
    ) -> Result<RankOutcome, ScoringError> {
        let total_candidates = candidates.len();
        let mut matches = gate(self.rank(student, candidates)?, options.min_tier);

        if let Some(limit) = options.limit {
            matches.truncate(limit);
        }

        Ok(RankOutcome {
            matches,
            total_candidates,
            enhancement: EnhancementStatus::NotRequested,
        })
    }

    /// Rank with an optional enhancement pass
    ///
    /// Enhancer failures, timeouts and contract violations never fail the
    /// request: the deterministic order is kept and the reason reported in
    /// `RankOutcome::enhancement`.
    pub async fn rank_enhanced(
        &self,
        student: &StudentLearningStyle,
        candidates: Vec<Candidate>,
        options: RankOptions,
        enhancer: Option<&dyn RankingEnhancer>,
    ) -> Result<RankOutcome, ScoringError> {
        let total_candidates = candidates.len();
        let ranked = gate(self.rank(student, candidates)?, options.min_tier);

        let (mut matches, enhancement) = match enhancer {
            Some(enhancer) => self.enhance(student, ranked, enhancer).await,
            None => (ranked, EnhancementStatus::NotRequested),
        };

        if let Some(limit) = options.limit {
            matches.truncate(limit);
        }

        Ok(RankOutcome {
            matches,
            total_candidates,
            enhancement,
        })
    }

    async fn enhance(
        &self,
        student: &StudentLearningStyle,
        mut ranked: Vec<RankedCandidate>,
        enhancer: &dyn RankingEnhancer,
    ) -> (Vec<RankedCandidate>, EnhancementStatus) {
        let top_k = self.policy.enhancement_top_k.min(ranked.len());
        if top_k == 0 {
            let reason = if ranked.is_empty() {
                "no eligible candidates"
            } else {
                "enhancement top-k is zero"
            };
            return (
                ranked,
                EnhancementStatus::Skipped {
                    reason: reason.to_string(),
                },
            );
        }

        let tail = ranked.split_off(top_k);
        let head = ranked;

        let timeout = self.policy.enhancement_timeout;
        let result = match tokio::time::timeout(timeout, enhancer.rerank(student, &head)).await {
            Ok(Ok(output)) => validate_enhancement(&head, &output).map(|_| output),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(EnhancerError::Timeout(timeout)),
        };

        match result {
            Ok(output) => {
                tracing::debug!("Enhancer {} reordered top {} candidates", enhancer.name(), top_k);
                let mut matches = apply_enhancement(head, output);
                matches.extend(tail);
                (
                    matches,
                    EnhancementStatus::Applied {
                        enhancer: enhancer.name().to_string(),
                    },
                )
            }
            Err(e) => {
                tracing::debug!(
                    "Enhancer {} rejected, keeping deterministic order: {}",
                    enhancer.name(),
                    e
                );
                let mut matches = head;
                matches.extend(tail);
                (matches, EnhancementStatus::Fallback { reason: e.to_string() })
            }
        }
    }
}

impl Default for MatchRanker {
    fn default() -> Self {
        Self::with_default_policy()
    }
}

fn gate(ranked: Vec<RankedCandidate>, min_tier: Option<TierName>) -> Vec<RankedCandidate> {
    match min_tier {
        Some(min) => ranked
            .into_iter()
            .filter(|c| c.score.tier.name >= min)
            .collect(),
        None => ranked,
    }
}
