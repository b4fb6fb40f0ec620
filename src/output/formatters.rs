//! Formatting utilities for terminal output

use crate::game::{Board, MAX_ATTEMPTS};

/// Gallows drawings, from empty to complete
pub const GALLOWS: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Which drawing to show: one body part per wrong guess
///
/// Budgets other than six are scaled onto the six body parts.
#[must_use]
pub fn gallows_stage(board: &Board) -> usize {
    let last = GALLOWS.len() - 1;
    let used = usize::from(board.attempts_used());
    let max = usize::from(board.max_attempts());

    if max == usize::from(MAX_ATTEMPTS) || max == 0 {
        used.min(last)
    } else {
        (used * last / max).min(last)
    }
}

/// The board as printed between turns
///
/// # Examples
/// ```
/// use hangman_solver::core::{GuessPattern, LetterSet};
/// use hangman_solver::game::Board;
/// use hangman_solver::output::formatters::render_board;
///
/// let board = Board::from_parts(GuessPattern::parse("c_t").unwrap(), LetterSet::from_letters("tcz"), 5);
/// let text = render_board(&board);
/// assert!(text.contains("Word: c_t"));
/// assert!(text.contains("Guessed letters: c t z"));
/// assert!(text.contains("Attempts remaining: 5"));
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    format!(
        "{}\nWord: {}\nGuessed letters: {}\nAttempts remaining: {}\n{}",
        GALLOWS[gallows_stage(board)],
        board.pattern(),
        board.guessed(),
        board.attempts_remaining(),
        "-".repeat(20)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Win rate in [0, 1] as a percentage bar
#[must_use]
pub fn win_rate_bar(win_rate: f64, width: usize) -> String {
    create_progress_bar(win_rate, 1.0, width)
}
