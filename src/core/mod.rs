// Core algorithm exports
pub mod dimensions;
pub mod enhancer;
pub mod ranker;
pub mod scoring;
pub mod tier;

pub use dimensions::{compare_all, AXIS_MAX_POINTS};
pub use enhancer::{validate_enhancement, RankingEnhancer};
pub use ranker::{compare_ranked, MatchRanker, RankOptions, RankOutcome, RankingPolicy};
pub use scoring::{normalize, score, score_profiles, MAX_RAW_SCORE};
pub use tier::{classify, classify_normalized};
