//! Error types shared across the crate

use crate::core::Letter;

/// Fatal errors surfaced to the caller
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    /// No playable word survived filtering, or sampling had nothing to draw from
    #[error("lexicon is empty: no playable words after filtering")]
    EmptyLexicon,

    /// The lexicon has words but no positive, finite total weight
    #[error("lexicon weights must sum to a positive finite value, got {total}")]
    InvalidWeights { total: f64 },

    /// A wrong-guess budget outside 1 to 6
    #[error("attempt budget must be between 1 and 6, got {0}")]
    InvalidAttempts(u8),

    /// A batch was asked to run a non-positive number of games
    #[error("game count must be a positive integer, got {0}")]
    InvalidCount(i64),

    /// A source file row could not be parsed
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, HangmanError>;

/// Why a guess was rejected
///
/// Recovered inside the game loop by asking again; costs no attempt and never
/// reaches the caller as a `HangmanError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// Not exactly one alphabetic character
    #[error("Invalid input. Please enter a single letter.")]
    NotALetter(String),
    /// Already guessed this game
    #[error("You've already guessed '{0}'. Try again.")]
    AlreadyGuessed(Letter),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_errors_read_as_prompts() {
        let not_letter = GuessError::NotALetter("42".into());
        assert_eq!(not_letter.to_string(), "Invalid input. Please enter a single letter.");

        let repeat = GuessError::AlreadyGuessed(Letter::from_char('q').unwrap());
        assert_eq!(repeat.to_string(), "You've already guessed 'q'. Try again.");
    }

    #[test]
    fn budget_error_names_the_value() {
        assert_eq!(
            HangmanError::InvalidAttempts(9).to_string(),
            "attempt budget must be between 1 and 6, got 9"
        );
    }
}
