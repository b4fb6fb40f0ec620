//! Main Hangman solver interface

use super::matcher::filter_candidates;
use super::strategy::Strategy;
use crate::core::{Letter, WordEntry};
use crate::game::Board;
use crate::lexicon::Lexicon;

/// Hangman solver
///
/// Pairs a strategy with the lexicon it reasons over, and exposes the
/// candidate set for a board alongside the suggested letter.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    lexicon: &'a Lexicon,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and lexicon
    pub const fn new(strategy: S, lexicon: &'a Lexicon) -> Self {
        Self { strategy, lexicon }
    }

    /// Get the next letter to play
    ///
    /// Returns `None` once every letter has been guessed.
    pub fn next_guess(&self, board: &Board) -> Option<Letter> {
        self.strategy.next_guess(board)
    }

    /// Words still consistent with the board, in lexicon order
    pub fn get_candidates(&self, board: &Board) -> Vec<&'a WordEntry> {
        filter_candidates(self.lexicon, board.pattern(), board.guessed())
    }

    /// The strategy in use
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}
