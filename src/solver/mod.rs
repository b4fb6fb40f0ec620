//! Hangman guessing strategies
//!
//! Frequency, pattern-weighted and distribution strategies, plus the adaptive
//! combination that switches between them as attempts run out.

pub mod adaptive;
pub mod distribution;
mod engine;
pub mod frequency;
mod knowledge;
mod matcher;
pub mod pattern_weighted;
pub mod strategy;

pub use adaptive::{AdaptiveStrategy, AdaptiveTier, DEFAULT_ENDGAME_THRESHOLD, Endgame};
pub use distribution::{DistributionStrategy, LengthLetterDistribution};
pub use engine::Solver;
pub use frequency::FrequencyStrategy;
pub use knowledge::Knowledge;
pub use matcher::{filter_candidates, filter_entries};
pub use pattern_weighted::PatternWeightedStrategy;
pub use strategy::{Strategy, StrategyKind, StrategyType};
