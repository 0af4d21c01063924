// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod style;

pub use domain::{
    Axis, Candidate, CandidateId, CompatibilityScore, DimensionScore, EnhancedCandidate,
    EnhancementStatus, MatchKind, RankedCandidate, Tier, TierName,
};
pub use requests::{CandidateInput, RankRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, ScoreResponse};
pub use style::{
    PreceptorMentoringStyle, PreceptorStyleInput, StudentLearningStyle, StudentStyleInput,
};
