use crate::models::domain::TierName;
use crate::models::style::{PreceptorStyleInput, StudentStyleInput};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score a single student/preceptor pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub student: StudentStyleInput,
    pub preceptor: PreceptorStyleInput,
}

/// A preceptor candidate as submitted for ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInput {
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: String,
    pub style: PreceptorStyleInput,
}

/// Request to rank candidates for one student
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(alias = "student_id", rename = "studentId", default)]
    pub student_id: Option<String>,
    pub student: StudentStyleInput,
    #[validate(length(min = 1))]
    pub candidates: Vec<CandidateInput>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(alias = "min_tier", rename = "minTier", default)]
    pub min_tier: Option<TierName>,
    #[serde(default)]
    pub enhance: bool,
}
