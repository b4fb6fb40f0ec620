//! Guessing from the single most likely matching word

use super::frequency::FrequencyStrategy;
use super::matcher::filter_candidates;
use super::strategy::Strategy;
use crate::core::{Letter, WordEntry};
use crate::game::Board;
use crate::lexicon::{LetterRanking, Lexicon};

/// Picks the heaviest word consistent with the board and plays its first
/// unguessed letter
///
/// Ties on weight go to the word that comes first in lexicon order. With no
/// match, or nothing left to play from the chosen word, falls back to
/// [`FrequencyStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct PatternWeightedStrategy<'a> {
    lexicon: &'a Lexicon,
    fallback: FrequencyStrategy<'a>,
}

impl<'a> PatternWeightedStrategy<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, ranking: &'a LetterRanking) -> Self {
        Self {
            lexicon,
            fallback: FrequencyStrategy::new(ranking),
        }
    }

    /// The word this strategy would bet on for `board`
    #[must_use]
    pub fn best_match(&self, board: &Board) -> Option<&'a WordEntry> {
        filter_candidates(self.lexicon, board.pattern(), board.guessed())
            .into_iter()
            .fold(None, |best: Option<&WordEntry>, entry| match best {
                Some(current) if current.weight() >= entry.weight() => Some(current),
                _ => Some(entry),
            })
    }
}

impl Strategy for PatternWeightedStrategy<'_> {
    fn next_guess(&self, board: &Board) -> Option<Letter> {
        let guessed = board.guessed();
        let from_word = self.best_match(board).and_then(|word| {
            tracing::debug!(word = word.text(), weight = word.weight(), "best pattern match");
            word.letters().find(|&letter| !guessed.contains(letter))
        });

        from_word.or_else(|| self.fallback.next_guess(board))
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessPattern, LetterSet};
    use crate::lexicon::LetterStats;

    fn lexicon(words: &[(&str, f64)]) -> Lexicon {
        Lexicon::from_entries(
            words
                .iter()
                .map(|&(text, weight)| WordEntry::new(text, weight).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn board(pattern: &str, guessed: &str) -> Board {
        Board::from_parts(
            GuessPattern::parse(pattern).unwrap(),
            LetterSet::from_letters(guessed),
            2,
        )
    }

    fn ranking() -> LetterRanking {
        LetterRanking::build(&LetterStats::from_words(["eeeeetttto"]))
    }

    #[test]
    fn heaviest_match_supplies_the_guess() {
        let lexicon = lexicon(&[("cat", 5.0), ("bat", 3.0), ("mat", 1.0)]);
        let ranking = ranking();
        let strategy = PatternWeightedStrategy::new(&lexicon, &ranking);
        let b = board("_a_", "a");

        assert_eq!(strategy.best_match(&b).map(WordEntry::text), Some("cat"));
        assert_eq!(strategy.next_guess(&b), Letter::from_char('c'));
    }

    #[test]
    fn weight_ties_go_to_lexicon_order() {
        let lexicon = lexicon(&[("mat", 2.0), ("bat", 2.0), ("cat", 1.0)]);
        let ranking = ranking();
        let strategy = PatternWeightedStrategy::new(&lexicon, &ranking);

        assert_eq!(strategy.next_guess(&board("_a_", "a")), Letter::from_char('m'));
    }

    #[test]
    fn scans_chosen_word_left_to_right() {
        let lexicon = lexicon(&[("cat", 5.0)]);
        let ranking = ranking();
        let strategy = PatternWeightedStrategy::new(&lexicon, &ranking);

        assert_eq!(strategy.next_guess(&board("ca_", "ca")), Letter::from_char('t'));
    }

    #[test]
    fn falls_back_to_frequency_without_matches() {
        let lexicon = lexicon(&[("cat", 5.0)]);
        let ranking = ranking();
        let strategy = PatternWeightedStrategy::new(&lexicon, &ranking);

        // No five-letter words at all
        assert_eq!(strategy.next_guess(&board("_____", "")), Letter::from_char('e'));
        // Matches exist only for a different revealed letter
        assert_eq!(strategy.next_guess(&board("_o_", "oe")), Letter::from_char('t'));
    }

    #[test]
    fn zero_weight_matches_are_still_candidates() {
        let lexicon = lexicon(&[("dog", 1.0), ("cat", 0.0)]);
        let ranking = ranking();
        let strategy = PatternWeightedStrategy::new(&lexicon, &ranking);

        assert_eq!(strategy.next_guess(&board("_a_", "a")), Letter::from_char('c'));
    }
}
