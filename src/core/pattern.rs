//! Partially revealed word pattern
//!
//! A pattern has one slot per letter of the target word. Each slot is either
//! blank or holds the revealed letter. Slots only ever go from blank to
//! revealed, never back.

use super::{Letter, LetterSet, WordEntry};
use std::fmt;

/// Character used to display (and parse) a blank slot
pub const BLANK: char = '_';

/// The partially revealed target word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessPattern {
    slots: Vec<Option<Letter>>,
}

/// Error returned when parsing a pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidChar(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must not be empty"),
            Self::InvalidChar(ch) => {
                write!(f, "Invalid pattern character '{ch}' (use letters and '{BLANK}')")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl GuessPattern {
    /// An all-blank pattern of the given length
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Parse a pattern such as `"_a_"` or `"c.t"`
    ///
    /// `_`, `.`, `-` and `?` denote blanks; letters are case-insensitive.
    ///
    /// # Errors
    /// Returns `PatternError` for an empty string or an unknown character.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::GuessPattern;
    ///
    /// let pattern = GuessPattern::parse("_A_").unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.to_string(), "_a_");
    /// assert_eq!(pattern.blanks(), 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let slots = s
            .trim()
            .chars()
            .map(|ch| match ch {
                '_' | '.' | '-' | '?' => Ok(None),
                _ => Letter::from_char(ch)
                    .map(Some)
                    .ok_or(PatternError::InvalidChar(ch)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if slots.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { slots })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of blank slots
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Whether every slot is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Letters revealed so far
    #[must_use]
    pub fn revealed(&self) -> LetterSet {
        self.slots.iter().flatten().copied().collect()
    }

    /// Reveal every position where `target` holds `letter`
    ///
    /// Returns the number of slots that became revealed.
    pub fn reveal(&mut self, target: &WordEntry, letter: Letter) -> usize {
        debug_assert_eq!(target.len(), self.len(), "target length mismatch");

        let mut revealed = 0;
        for (slot, actual) in self.slots.iter_mut().zip(target.letters()) {
            if actual == letter && slot.is_none() {
                *slot = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }

    /// Whether `word` is consistent with this pattern and the guessed letters
    ///
    /// A word matches iff it has the same length, agrees on every revealed slot,
    /// and holds no guessed letter at any blank slot (a guessed letter would
    /// already have been revealed there).
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{GuessPattern, LetterSet, WordEntry};
    ///
    /// let pattern = GuessPattern::parse("_a_").unwrap();
    /// let guessed = LetterSet::from_letters("ae");
    ///
    /// assert!(pattern.matches(&WordEntry::new("cat", 1.0).unwrap(), guessed));
    /// assert!(!pattern.matches(&WordEntry::new("aaa", 1.0).unwrap(), guessed));
    /// assert!(!pattern.matches(&WordEntry::new("cart", 1.0).unwrap(), guessed));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &WordEntry, guessed: LetterSet) -> bool {
        word.len() == self.len()
            && self
                .slots
                .iter()
                .zip(word.letters())
                .all(|(slot, actual)| match slot {
                    Some(expected) => *expected == actual,
                    None => !guessed.contains(actual),
                })
    }
}

impl fmt::Display for GuessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "{BLANK}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for GuessPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
