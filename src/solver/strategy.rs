//! Guess selection strategies
//!
//! Defines the Strategy trait and the closed set of strategies a session can
//! pick from.

use super::adaptive::{AdaptiveStrategy, DEFAULT_ENDGAME_THRESHOLD, Endgame};
use super::distribution::DistributionStrategy;
use super::frequency::FrequencyStrategy;
use super::knowledge::Knowledge;
use super::pattern_weighted::PatternWeightedStrategy;
use crate::core::Letter;
use crate::game::Board;
use std::fmt;

/// A policy for choosing the next letter from what the board shows
pub trait Strategy {
    /// Pick a letter not yet guessed on `board`
    ///
    /// Returns `None` only when every letter has been guessed.
    fn next_guess(&self, board: &Board) -> Option<Letter>;

    /// Short name for display
    fn name(&self) -> &'static str;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn next_guess(&self, board: &Board) -> Option<Letter> {
        (**self).next_guess(board)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Frequency ranking only
    Frequency,
    /// Heaviest matching word only
    Pattern,
    /// Letter distribution only
    Distribution,
    /// Frequency, then pattern once attempts run low
    Bot,
    /// Frequency, then distribution once attempts run low
    #[default]
    BotAi,
}

impl StrategyKind {
    pub const ALL: [Self; 5] = [
        Self::Frequency,
        Self::Pattern,
        Self::Distribution,
        Self::Bot,
        Self::BotAi,
    ];

    /// Parse a strategy name
    ///
    /// Supported names: "frequency", "pattern", "distribution" (or "ai"), "bot", "bot-ai"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "frequency" | "freq" => Some(Self::Frequency),
            "pattern" | "pattern-weighted" => Some(Self::Pattern),
            "distribution" | "ai" => Some(Self::Distribution),
            "bot" => Some(Self::Bot),
            "bot-ai" | "bot_ai" => Some(Self::BotAi),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Pattern => "pattern",
            Self::Distribution => "distribution",
            Self::Bot => "bot",
            Self::BotAi => "bot-ai",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType<'a> {
    Frequency(FrequencyStrategy<'a>),
    Pattern(PatternWeightedStrategy<'a>),
    Distribution(DistributionStrategy<'a>),
    Adaptive(AdaptiveStrategy<'a>),
}

impl Strategy for StrategyType<'_> {
    fn next_guess(&self, board: &Board) -> Option<Letter> {
        match self {
            Self::Frequency(s) => s.next_guess(board),
            Self::Pattern(s) => s.next_guess(board),
            Self::Distribution(s) => s.next_guess(board),
            Self::Adaptive(s) => s.next_guess(board),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Frequency(s) => s.name(),
            Self::Pattern(s) => s.name(),
            Self::Distribution(s) => s.name(),
            Self::Adaptive(s) => s.name(),
        }
    }
}

impl<'a> StrategyType<'a> {
    /// Build a strategy of `kind` over shared `knowledge`
    ///
    /// `threshold` only matters for the adaptive kinds.
    #[must_use]
    pub fn build(kind: StrategyKind, knowledge: &'a Knowledge, threshold: u8) -> Self {
        let frequency = FrequencyStrategy::new(knowledge.ranking());
        let pattern = PatternWeightedStrategy::new(knowledge.lexicon(), knowledge.ranking());
        let distribution =
            DistributionStrategy::new(knowledge.lexicon(), knowledge.distribution());

        match kind {
            StrategyKind::Frequency => Self::Frequency(frequency),
            StrategyKind::Pattern => Self::Pattern(pattern),
            StrategyKind::Distribution => Self::Distribution(distribution),
            StrategyKind::Bot => {
                Self::Adaptive(AdaptiveStrategy::new(threshold, frequency, Endgame::Pattern(pattern)))
            }
            StrategyKind::BotAi => Self::Adaptive(AdaptiveStrategy::new(
                threshold,
                frequency,
                Endgame::Distribution(distribution),
            )),
        }
    }

    /// Build with the default endgame threshold
    #[must_use]
    pub fn from_kind(kind: StrategyKind, knowledge: &'a Knowledge) -> Self {
        Self::build(kind, knowledge, DEFAULT_ENDGAME_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessPattern, LetterSet, WordEntry};
    use crate::lexicon::{LetterRanking, LetterStats, Lexicon};
    use test_case::test_case;

    fn knowledge() -> Knowledge {
        let lexicon = Lexicon::from_entries(vec![
            WordEntry::new("cat", 5.0).unwrap(),
            WordEntry::new("bat", 3.0).unwrap(),
            WordEntry::new("mat", 1.0).unwrap(),
        ])
        .unwrap();
        let ranking = LetterRanking::build(&LetterStats::from_words(["eeeeeeat"]));
        Knowledge::new(lexicon, ranking)
    }

    #[test_case("frequency", Some(StrategyKind::Frequency))]
    #[test_case("AI", Some(StrategyKind::Distribution))]
    #[test_case("bot-ai", Some(StrategyKind::BotAi))]
    #[test_case("entropy", None)]
    fn kind_from_name(name: &str, expected: Option<StrategyKind>) {
        assert_eq!(StrategyKind::from_name(name), expected);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test_case(StrategyKind::Frequency, 'e')]
    #[test_case(StrategyKind::Pattern, 'c')]
    #[test_case(StrategyKind::Distribution, 't')]
    #[test_case(StrategyKind::Bot, 'c')]
    #[test_case(StrategyKind::BotAi, 't')]
    fn every_kind_answers_endgame_board(kind: StrategyKind, expected: char) {
        let knowledge = knowledge();
        let strategy = StrategyType::from_kind(kind, &knowledge);
        let board = Board::from_parts(
            GuessPattern::parse("_a_").unwrap(),
            LetterSet::from_letters("a"),
            1,
        );

        assert_eq!(strategy.next_guess(&board), Letter::from_char(expected));
        assert_eq!(strategy.name(), kind.name());
    }
}
