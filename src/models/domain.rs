use crate::models::style::PreceptorMentoringStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a preceptor being ranked for a student
pub type CandidateId = String;

/// One of the six comparison dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    LearningMethod,
    FeedbackTiming,
    Structure,
    Autonomy,
    Resources,
    Relationship,
}

impl Axis {
    pub const ALL: [Axis; 6] = [
        Axis::LearningMethod,
        Axis::FeedbackTiming,
        Axis::Structure,
        Axis::Autonomy,
        Axis::Resources,
        Axis::Relationship,
    ];
}

/// How a single dimension paired up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    Best,
    Partial,
    /// Default credit on the axes that never score zero
    Baseline,
    Mismatch,
}

/// Points awarded on one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub axis: Axis,
    pub kind: MatchKind,
    pub points: u8,
    pub max_points: u8,
}

/// Named compatibility tier, ordered `Bronze < Silver < Gold`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TierName {
    Bronze,
    Silver,
    Gold,
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TierName::Bronze => "Bronze",
            TierName::Silver => "Silver",
            TierName::Gold => "Gold",
        };
        f.write_str(name)
    }
}

/// Compatibility tier with display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub name: TierName,
    pub color: &'static str,
    pub description: &'static str,
}

/// Compatibility of one student/preceptor pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    /// Sum of dimension points, 0..=12
    pub raw: u8,
    /// Raw score scaled to 0..=10
    pub normalized: u8,
    pub tier: Tier,
    pub breakdown: [DimensionScore; 6],
}

/// A preceptor offered for ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub candidate_id: CandidateId,
    pub style: PreceptorMentoringStyle,
}

impl Candidate {
    pub fn new(candidate_id: impl Into<CandidateId>, style: PreceptorMentoringStyle) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            style,
        }
    }
}

/// Scored candidate in ranked position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub candidate_id: CandidateId,
    pub score: CompatibilityScore,
    /// Annotation supplied by a ranking enhancer, if one ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One entry of an enhancer's reordered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedCandidate {
    pub candidate_id: CandidateId,
    #[serde(default)]
    pub note: Option<String>,
}

impl EnhancedCandidate {
    pub fn new(candidate_id: impl Into<CandidateId>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            note: None,
        }
    }
}

/// What happened to the enhancement pass of a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EnhancementStatus {
    NotRequested,
    Applied { enhancer: String },
    /// Requested, but there was nothing for the enhancer to look at
    Skipped { reason: String },
    Fallback { reason: String },
}
