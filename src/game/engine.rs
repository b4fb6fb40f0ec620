//! The per-game state machine
//!
//! `InProgress` → `Won` | `Lost` | `Aborted`. Invalid and repeated guesses are
//! no-ops: they cost nothing and leave the state untouched.

use super::player::Player;
use super::state::{Board, GameConfig, GameResult, GameState, GameStatus};
use crate::core::{Letter, WordEntry};
use crate::error::{GuessError, Result};
use crate::lexicon::Lexicon;
use rand::Rng;

/// Token that aborts a game from text input
pub const EXIT_TOKEN: &str = "exit";

/// What a player wants to do this turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Guess(Letter),
    /// Leave the game
    Exit,
    /// The player has no letter left to offer
    Exhausted,
    /// Input that is not a guess at all
    Invalid(GuessError),
}

impl Move {
    /// Interpret one line of text input
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Letter;
    /// use hangman_solver::game::Move;
    ///
    /// assert_eq!(Move::parse(" E\n"), Move::Guess(Letter::from_char('e').unwrap()));
    /// assert_eq!(Move::parse("exit"), Move::Exit);
    /// assert!(matches!(Move::parse("ab"), Move::Invalid(_)));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(EXIT_TOKEN) {
            return Self::Exit;
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Letter::from_char(ch).map_or_else(
                || Self::Invalid(GuessError::NotALetter(trimmed.to_string())),
                Self::Guess,
            ),
            _ => Self::Invalid(GuessError::NotALetter(trimmed.to_string())),
        }
    }
}

/// What a turn did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The letter is in the word; `revealed` slots opened up
    Hit { letter: Letter, revealed: usize },
    /// The letter is not in the word; one attempt spent
    Miss { letter: Letter, attempts_remaining: u8 },
    /// Rejected input; ask again
    Invalid(GuessError),
    /// The player left
    Aborted,
    /// The player ran out of letters
    Exhausted,
    /// The game had already ended
    GameOver,
}

/// Drives one game from the first guess to its result
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Start a game on a known target
    #[must_use]
    pub fn new(target: WordEntry, config: GameConfig) -> Self {
        Self {
            state: GameState::new(target, config),
        }
    }

    /// Start a game on a weighted random draw from `lexicon`
    pub fn start<R: Rng + ?Sized>(lexicon: &Lexicon, rng: &mut R, config: GameConfig) -> Self {
        let target = lexicon.sample(rng).clone();
        tracing::debug!(len = target.len(), "new game");
        Self::new(target, config)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// Apply one move and update the status
    pub fn apply(&mut self, mv: Move) -> TurnOutcome {
        if self.is_over() {
            return TurnOutcome::GameOver;
        }

        let outcome = match mv {
            Move::Guess(letter) => self.guess(letter),
            Move::Invalid(err) => TurnOutcome::Invalid(err),
            Move::Exit => {
                self.state.set_status(GameStatus::Aborted);
                TurnOutcome::Aborted
            }
            Move::Exhausted => {
                self.state.set_status(GameStatus::Lost);
                TurnOutcome::Exhausted
            }
        };

        tracing::debug!(?outcome, pattern = %self.board().pattern(), "turn");
        outcome
    }

    fn guess(&mut self, letter: Letter) -> TurnOutcome {
        let (target, board) = self.state.parts_mut();
        if !board.guessed_mut().insert(letter) {
            return TurnOutcome::Invalid(GuessError::AlreadyGuessed(letter));
        }

        let revealed = board.pattern_mut().reveal(target, letter);
        let outcome = if revealed > 0 {
            TurnOutcome::Hit { letter, revealed }
        } else {
            board.consume_attempt();
            TurnOutcome::Miss {
                letter,
                attempts_remaining: board.attempts_remaining(),
            }
        };

        if board.pattern().is_complete() {
            self.state.set_status(GameStatus::Won);
        } else if board.attempts_remaining() == 0 {
            self.state.set_status(GameStatus::Lost);
        }
        outcome
    }

    /// Ask `player` for a move and apply it
    ///
    /// # Errors
    /// Propagates input failures from the player.
    pub fn step<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<TurnOutcome> {
        let mv = player.next_move(self.board())?;
        Ok(self.apply(mv))
    }

    /// Play until the game ends, calling `on_turn` after every move
    ///
    /// # Errors
    /// Propagates input failures from the player.
    pub fn run<P, F>(mut self, player: &mut P, mut on_turn: F) -> Result<GameResult>
    where
        P: Player + ?Sized,
        F: FnMut(&TurnOutcome, &GameState),
    {
        while !self.is_over() {
            let outcome = self.step(player)?;
            on_turn(&outcome, &self.state);
        }
        Ok(self.state.to_result())
    }

    /// The result, if the game has ended
    #[must_use]
    pub fn finish(self) -> Option<GameResult> {
        self.is_over().then(|| self.state.to_result())
    }
}
