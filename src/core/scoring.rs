use crate::core::{dimensions::compare_all, tier::classify_normalized};
use crate::error::ScoringError;
use crate::models::{
    CompatibilityScore, DimensionScore, PreceptorMentoringStyle, PreceptorStyleInput,
    StudentLearningStyle, StudentStyleInput,
};

/// Highest possible raw score (six dimensions, two points each)
pub const MAX_RAW_SCORE: u8 = 12;
/// Top of the normalized scale
pub const NORMALIZED_SCALE: u8 = 10;

/// Scale a raw score to 0-10, rounding half away from zero
#[inline]
pub fn normalize(raw: u8) -> u8 {
    let raw = raw.min(MAX_RAW_SCORE);
    ((f64::from(raw) / f64::from(MAX_RAW_SCORE)) * f64::from(NORMALIZED_SCALE)).round() as u8
}

impl CompatibilityScore {
    /// Build a score from a dimension breakdown
    pub fn from_breakdown(breakdown: [DimensionScore; 6]) -> Self {
        let raw: u8 = breakdown.iter().map(|d| d.points).sum();
        let normalized = normalize(raw);

        Self {
            raw,
            normalized,
            tier: classify_normalized(normalized),
            breakdown,
        }
    }
}

/// Calculate the MentorFit compatibility of a student and a preceptor
///
/// Scoring formula:
/// raw = learning_method + feedback + structure + autonomy + resources + relationship
/// normalized = round(raw / 12 * 10)
pub fn score(
    student: &StudentLearningStyle,
    preceptor: &PreceptorMentoringStyle,
) -> CompatibilityScore {
    CompatibilityScore::from_breakdown(compare_all(student, preceptor))
}

/// Validate raw profile inputs, then score them
///
/// Fails on the first missing or out-of-range attribute, student first.
pub fn score_profiles(
    student: &StudentStyleInput,
    preceptor: &PreceptorStyleInput,
) -> Result<CompatibilityScore, ScoringError> {
    let student = StudentLearningStyle::try_from(student)?;
    let preceptor = PreceptorMentoringStyle::try_from(preceptor)?;
    Ok(score(&student, &preceptor))
}
