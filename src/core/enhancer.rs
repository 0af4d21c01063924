use crate::error::EnhancerError;
use crate::models::{EnhancedCandidate, RankedCandidate, StudentLearningStyle};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// Optional re-ranking pass over the top of a deterministic ranking.
///
/// Implementations may reorder and annotate the candidates they receive but
/// must return exactly the same set of candidate ids. Scores always come
/// from the ranker; an enhancer cannot change them.
#[async_trait]
pub trait RankingEnhancer: Send + Sync {
    /// Short name reported with the ranking
    fn name(&self) -> &str;

    async fn rerank(
        &self,
        student: &StudentLearningStyle,
        ranked: &[RankedCandidate],
    ) -> Result<Vec<EnhancedCandidate>, EnhancerError>;
}

/// Check that an enhancer returned the same candidate set it was given
pub fn validate_enhancement(
    input: &[RankedCandidate],
    output: &[EnhancedCandidate],
) -> Result<(), EnhancerError> {
    let expected: HashSet<&str> = input.iter().map(|c| c.candidate_id.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(output.len());

    for entry in output {
        let id = entry.candidate_id.as_str();
        if !expected.contains(id) {
            return Err(EnhancerError::ContractViolation(format!(
                "unknown candidate {}",
                id
            )));
        }
        if !seen.insert(id) {
            return Err(EnhancerError::ContractViolation(format!(
                "duplicate candidate {}",
                id
            )));
        }
    }

    if seen.len() != expected.len() {
        let mut missing: Vec<&str> = expected.difference(&seen).copied().collect();
        missing.sort_unstable();
        return Err(EnhancerError::ContractViolation(format!(
            "missing candidates {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

/// Reorder `ranked` to follow a validated enhancer output, attaching notes
pub(crate) fn apply_enhancement(
    ranked: Vec<RankedCandidate>,
    output: Vec<EnhancedCandidate>,
) -> Vec<RankedCandidate> {
    let mut by_id: HashMap<String, RankedCandidate> = ranked
        .into_iter()
        .map(|c| (c.candidate_id.clone(), c))
        .collect();

    output
        .into_iter()
        .filter_map(|entry| {
            by_id.remove(&entry.candidate_id).map(|mut candidate| {
                candidate.note = entry.note;
                candidate
            })
        })
        .collect()
}
