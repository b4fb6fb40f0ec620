//! Players: strategies and humans behind one interface

use super::engine::Move;
use super::state::Board;
use crate::error::Result;
use crate::solver::Strategy;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Anything that can take a turn
pub trait Player {
    /// Decide the next move given the visible board
    ///
    /// # Errors
    /// Returns an I/O error if input cannot be read.
    fn next_move(&mut self, board: &Board) -> Result<Move>;

    /// Display name
    fn name(&self) -> &str;
}

/// A bot that plays whatever its strategy suggests
#[derive(Debug, Clone)]
pub struct StrategyPlayer<S> {
    strategy: S,
}

impl<S: Strategy> StrategyPlayer<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }
}

impl<S: Strategy> Player for StrategyPlayer<S> {
    fn next_move(&mut self, board: &Board) -> Result<Move> {
        Ok(self
            .strategy
            .next_guess(board)
            .map_or(Move::Exhausted, Move::Guess))
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

/// Prompt shown to a human player each turn
pub const GUESS_PROMPT: &str = "Please guess a letter or type exit: ";

/// Line-oriented text input: guesses and menu choices
pub trait InputSource {
    /// Show `prompt` and read one line; `None` means the input has ended
    ///
    /// # Errors
    /// Returns an I/O error if reading fails.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Reads lines from stdin, prompting on stdout
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

/// Replays a fixed list of inputs, then reports end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// A person typing guesses
///
/// End of input counts as leaving the game.
#[derive(Debug)]
pub struct HumanPlayer<I> {
    name: String,
    input: I,
}

impl<I: InputSource> HumanPlayer<I> {
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<I: InputSource> Player for HumanPlayer<I> {
    fn next_move(&mut self, _board: &Board) -> Result<Move> {
        Ok(self
            .input
            .read_line(GUESS_PROMPT)?
            .map_or(Move::Exit, |line| Move::parse(&line)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessPattern, Letter, LetterSet};
    use crate::lexicon::{LetterRanking, LetterStats};
    use crate::solver::FrequencyStrategy;

    #[test]
    fn strategy_player_reports_exhaustion() {
        let ranking = LetterRanking::build(&LetterStats::default());
        let mut player = StrategyPlayer::new(FrequencyStrategy::new(&ranking));

        let fresh = Board::new(3, 6);
        assert_eq!(player.next_move(&fresh).unwrap(), Move::Guess(Letter::from_char('a').unwrap()));

        let spent = Board::from_parts(GuessPattern::blank(3), LetterSet::FULL, 6);
        assert_eq!(player.next_move(&spent).unwrap(), Move::Exhausted);
        assert_eq!(player.name(), "frequency");
    }

    #[test]
    fn human_player_parses_input_and_exits_at_end() {
        let mut player = HumanPlayer::new("Ada", ScriptedInput::new(["x", "exit"]));
        let board = Board::new(3, 6);

        assert_eq!(player.next_move(&board).unwrap(), Move::Guess(Letter::from_char('x').unwrap()));
        assert_eq!(player.next_move(&board).unwrap(), Move::Exit);
        assert_eq!(player.next_move(&board).unwrap(), Move::Exit);
        assert_eq!(player.name(), "Ada");
    }
}
