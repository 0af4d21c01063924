//! MentorFit - compatibility scoring for student/preceptor matching
//!
//! This library scores how well a nurse-practitioner student's learning style
//! pairs with a clinical preceptor's mentoring style, classifies the result
//! into a tier, and ranks candidate preceptors with an optional enhancement
//! pass that can reorder, but never rescore, the top of the list.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{classify, score, score_profiles, MatchRanker, RankingEnhancer};
pub use error::{EnhancerError, ScoringError};
pub use models::{
    Candidate, CompatibilityScore, PreceptorMentoringStyle, RankedCandidate, StudentLearningStyle,
    Tier, TierName,
};
