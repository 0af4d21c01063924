// Service exports
pub mod enhancer;

pub use enhancer::HttpRankingEnhancer;
