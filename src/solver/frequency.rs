//! Frequency-only guessing

use super::strategy::Strategy;
use crate::core::Letter;
use crate::game::Board;
use crate::lexicon::LetterRanking;

/// Always plays the most frequent letter not yet guessed
///
/// Ignores the pattern entirely. Cheap, and a good opener.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyStrategy<'a> {
    ranking: &'a LetterRanking,
}

impl<'a> FrequencyStrategy<'a> {
    #[must_use]
    pub const fn new(ranking: &'a LetterRanking) -> Self {
        Self { ranking }
    }
}

impl Strategy for FrequencyStrategy<'_> {
    fn next_guess(&self, board: &Board) -> Option<Letter> {
        self.ranking.first_unguessed(board.guessed())
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}
