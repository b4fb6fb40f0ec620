//! Adaptive strategy
//!
//! Switches from cheap frequency guesses to pattern reasoning once attempts
//! run low.

use super::distribution::DistributionStrategy;
use super::frequency::FrequencyStrategy;
use super::pattern_weighted::PatternWeightedStrategy;
use super::strategy::Strategy;
use crate::core::Letter;
use crate::game::Board;

/// Attempts remaining at or below which the endgame strategy takes over
pub const DEFAULT_ENDGAME_THRESHOLD: u8 = 2;

/// Strategy played once attempts run low
#[derive(Debug, Clone, Copy)]
pub enum Endgame<'a> {
    Pattern(PatternWeightedStrategy<'a>),
    Distribution(DistributionStrategy<'a>),
}

impl Strategy for Endgame<'_> {
    fn next_guess(&self, board: &Board) -> Option<Letter> {
        match self {
            Self::Pattern(s) => s.next_guess(board),
            Self::Distribution(s) => s.next_guess(board),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Pattern(s) => s.name(),
            Self::Distribution(s) => s.name(),
        }
    }
}

/// Frequency guesses while attempts are plentiful, endgame reasoning after
///
/// ```text
/// attempts_remaining >  threshold  → Opening (frequency)
/// attempts_remaining <= threshold  → Endgame (pattern or distribution)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveStrategy<'a> {
    /// Attempts remaining at or below this use the endgame strategy (default: 2)
    pub threshold: u8,
    opening: FrequencyStrategy<'a>,
    endgame: Endgame<'a>,
}

/// Which half of the adaptive strategy is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveTier {
    /// Plenty of attempts left: frequency ranking
    Opening,
    /// Few attempts left: constrained by the pattern
    Endgame,
}

impl<'a> AdaptiveStrategy<'a> {
    #[must_use]
    pub const fn new(threshold: u8, opening: FrequencyStrategy<'a>, endgame: Endgame<'a>) -> Self {
        Self {
            threshold,
            opening,
            endgame,
        }
    }

    /// Get the tier for the given number of attempts remaining
    #[must_use]
    pub const fn get_tier(&self, attempts_remaining: u8) -> AdaptiveTier {
        if attempts_remaining > self.threshold {
            AdaptiveTier::Opening
        } else {
            AdaptiveTier::Endgame
        }
    }
}

impl Strategy for AdaptiveStrategy<'_> {
    fn next_guess(&self, board: &Board) -> Option<Letter> {
        match self.get_tier(board.attempts_remaining()) {
            AdaptiveTier::Opening => self.opening.next_guess(board),
            AdaptiveTier::Endgame => self.endgame.next_guess(board),
        }
    }

    fn name(&self) -> &'static str {
        match self.endgame {
            Endgame::Pattern(_) => "bot",
            Endgame::Distribution(_) => "bot-ai",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessPattern, LetterSet, WordEntry};
    use crate::lexicon::{LetterRanking, LetterStats, Lexicon};
    use test_case::test_case;

    fn setup() -> (Lexicon, LetterRanking) {
        let lexicon = Lexicon::from_entries(vec![
            WordEntry::new("cat", 5.0).unwrap(),
            WordEntry::new("bat", 3.0).unwrap(),
        ])
        .unwrap();
        // 'e' is most frequent but absent from every word
        let ranking = LetterRanking::build(&LetterStats::from_words(["eeeeeeeeat"]));
        (lexicon, ranking)
    }

    #[test_case(6, AdaptiveTier::Opening)]
    #[test_case(3, AdaptiveTier::Opening)]
    #[test_case(2, AdaptiveTier::Endgame)]
    #[test_case(0, AdaptiveTier::Endgame)]
    fn tier_follows_threshold(remaining: u8, expected: AdaptiveTier) {
        let (lexicon, ranking) = setup();
        let strategy = AdaptiveStrategy::new(
            DEFAULT_ENDGAME_THRESHOLD,
            FrequencyStrategy::new(&ranking),
            Endgame::Pattern(PatternWeightedStrategy::new(&lexicon, &ranking)),
        );
        assert_eq!(strategy.get_tier(remaining), expected);
    }

    #[test]
    fn switches_strategy_at_threshold() {
        let (lexicon, ranking) = setup();
        let strategy = AdaptiveStrategy::new(
            2,
            FrequencyStrategy::new(&ranking),
            Endgame::Pattern(PatternWeightedStrategy::new(&lexicon, &ranking)),
        );

        let early = Board::from_parts(GuessPattern::parse("_a_").unwrap(), LetterSet::from_letters("a"), 5);
        let late = Board::from_parts(GuessPattern::parse("_a_").unwrap(), LetterSet::from_letters("a"), 2);

        assert_eq!(strategy.next_guess(&early), Letter::from_char('e'));
        assert_eq!(strategy.next_guess(&late), Letter::from_char('c'));
        assert_eq!(strategy.name(), "bot");
    }
}
