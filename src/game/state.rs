//! Game state, status, and result types

use crate::core::{GuessPattern, LetterSet, WordEntry};
use crate::error::{HangmanError, Result};

/// Wrong guesses allowed per game
pub const MAX_ATTEMPTS: u8 = 6;

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: u8,
}

impl GameConfig {
    /// Settings with a custom wrong-guess budget
    ///
    /// # Errors
    /// Returns `InvalidAttempts` unless `1 <= max_attempts <= MAX_ATTEMPTS`.
    pub fn new(max_attempts: u8) -> Result<Self> {
        if (1..=MAX_ATTEMPTS).contains(&max_attempts) {
            Ok(Self { max_attempts })
        } else {
            Err(HangmanError::InvalidAttempts(max_attempts))
        }
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> u8 {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    Aborted,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a player can see: the pattern, the guessed letters, the attempts left
///
/// Strategies only ever receive a `Board`, never the target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pattern: GuessPattern,
    guessed: LetterSet,
    attempts_remaining: u8,
    max_attempts: u8,
}

impl Board {
    /// A fresh board: all blanks, nothing guessed, full budget
    #[must_use]
    pub fn new(word_len: usize, max_attempts: u8) -> Self {
        Self {
            pattern: GuessPattern::blank(word_len),
            guessed: LetterSet::EMPTY,
            attempts_remaining: max_attempts,
            max_attempts,
        }
    }

    /// A board in an arbitrary position, out of the default budget
    ///
    /// Used to ask strategies about positions that did not arise from play.
    /// `attempts_remaining` is capped at [`MAX_ATTEMPTS`].
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{GuessPattern, LetterSet};
    /// use hangman_solver::game::Board;
    ///
    /// let board = Board::from_parts(GuessPattern::parse("_a_").unwrap(), LetterSet::from_letters("a"), 2);
    /// assert_eq!(board.attempts_used(), 4);
    /// ```
    #[must_use]
    pub fn from_parts(pattern: GuessPattern, guessed: LetterSet, attempts_remaining: u8) -> Self {
        Self {
            pattern,
            guessed,
            attempts_remaining: attempts_remaining.min(MAX_ATTEMPTS),
            max_attempts: MAX_ATTEMPTS,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &GuessPattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Wrong guesses made so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        self.max_attempts - self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.pattern.len()
    }

    pub(super) const fn guessed_mut(&mut self) -> &mut LetterSet {
        &mut self.guessed
    }

    pub(super) const fn pattern_mut(&mut self) -> &mut GuessPattern {
        &mut self.pattern
    }

    pub(super) const fn consume_attempt(&mut self) {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
    }
}

/// One game: the hidden target plus the visible board
///
/// Exclusively owned by the loop driving it.
#[derive(Debug, Clone)]
pub struct GameState {
    target: WordEntry,
    board: Board,
    status: GameStatus,
}

impl GameState {
    #[must_use]
    pub fn new(target: WordEntry, config: GameConfig) -> Self {
        let board = Board::new(target.len(), config.max_attempts);
        Self {
            target,
            board,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &WordEntry {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    pub(super) const fn parts_mut(&mut self) -> (&WordEntry, &mut Board) {
        (&self.target, &mut self.board)
    }

    pub(super) const fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Summary of a finished game
    pub(super) fn to_result(&self) -> GameResult {
        GameResult {
            word: self.target.text().to_string(),
            won: self.status == GameStatus::Won,
            word_length: self.target.len(),
            attempts_used: self.board.attempts_used(),
            total_guesses: self.board.guessed().len(),
        }
    }
}

/// Outcome of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub word: String,
    pub won: bool,
    pub word_length: usize,
    /// Wrong guesses spent (0 to the attempt budget)
    pub attempts_used: u8,
    /// Distinct letters guessed, hits and misses
    pub total_guesses: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_blank() {
        let target = WordEntry::new("gallows", 1.0).unwrap();
        let state = GameState::new(target, GameConfig::default());

        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.board().pattern().to_string(), "_______");
        assert!(state.board().guessed().is_empty());
        assert_eq!(state.board().attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(state.board().attempts_used(), 0);
    }

    #[test]
    fn config_accepts_budgets_within_range() {
        assert_eq!(GameConfig::new(1).unwrap().max_attempts(), 1);
        assert_eq!(GameConfig::new(MAX_ATTEMPTS).unwrap(), GameConfig::default());
    }

    #[test]
    fn config_rejects_budgets_out_of_range() {
        assert!(matches!(GameConfig::new(0), Err(HangmanError::InvalidAttempts(0))));
        assert!(matches!(
            GameConfig::new(MAX_ATTEMPTS + 1),
            Err(HangmanError::InvalidAttempts(7))
        ));
        assert!(matches!(GameConfig::new(10), Err(HangmanError::InvalidAttempts(10))));
    }

    #[test]
    fn short_budget_caps_attempts_used() {
        let target = WordEntry::new("cat", 1.0).unwrap();
        let state = GameState::new(target, GameConfig::new(2).unwrap());

        assert_eq!(state.board().attempts_remaining(), 2);
        assert_eq!(state.board().max_attempts(), 2);
    }

    #[test]
    fn status_terminality() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
        assert!(GameStatus::Aborted.is_terminal());
    }

    #[test]
    fn board_from_parts_keeps_attempts() {
        let board = Board::from_parts(GuessPattern::blank(4), LetterSet::from_letters("xyz"), 3);
        assert_eq!(board.attempts_remaining(), 3);
        assert_eq!(board.max_attempts(), MAX_ATTEMPTS);
        assert_eq!(board.word_len(), 4);
        assert_eq!(board.guessed().len(), 3);
    }

    #[test]
    fn board_from_parts_caps_attempts() {
        let board = Board::from_parts(GuessPattern::blank(4), LetterSet::EMPTY, 40);
        assert_eq!(board.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(board.attempts_used(), 0);
    }

    #[test]
    fn consume_attempt_saturates() {
        let mut board = Board::new(3, 1);
        board.consume_attempt();
        board.consume_attempt();
        assert_eq!(board.attempts_remaining(), 0);
        assert_eq!(board.attempts_used(), 1);
    }
}
