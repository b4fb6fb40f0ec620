//! Lexicon word representation
//!
//! A `WordEntry` stores a playable word together with its sampling weight and
//! the set of distinct letters it contains.

use super::{Letter, LetterSet};
use std::fmt;

/// Shortest word accepted into the lexicon
pub const MIN_WORD_LEN: usize = 3;

/// A playable word with its relative sampling weight
///
/// Immutable once built. The text is lowercase ASCII, at least
/// [`MIN_WORD_LEN`] letters long, and contains at least one vowel.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    text: String,
    weight: f64,
    letters: LetterSet,
}

/// Error type for words rejected by the lexicon filter
#[derive(Debug, Clone, PartialEq)]
pub enum WordError {
    TooShort(usize),
    NonAlphabetic,
    NoVowel,
    InvalidWeight(f64),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must be at least {MIN_WORD_LEN} letters, got {len}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
            Self::NoVowel => write!(f, "Word must contain at least one vowel"),
            Self::InvalidWeight(weight) => {
                write!(f, "Weight must be finite and non-negative, got {weight}")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Check a raw word against the lexicon filter
///
/// Case-insensitive: purely alphabetic, at least three letters, at least one vowel.
///
/// # Errors
/// Returns the first rule the word breaks.
pub fn check_playable(text: &str) -> Result<(), WordError> {
    if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(WordError::NonAlphabetic);
    }

    if text.len() < MIN_WORD_LEN {
        return Err(WordError::TooShort(text.len()));
    }

    let has_vowel = text
        .bytes()
        .filter_map(Letter::from_byte)
        .any(Letter::is_vowel);
    if !has_vowel {
        return Err(WordError::NoVowel);
    }

    Ok(())
}

impl WordEntry {
    /// Create a new entry, lowercasing the text
    ///
    /// # Errors
    /// Returns `WordError` if the word fails the lexicon filter or the weight is
    /// negative, NaN, or infinite.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Cat", 5.0).unwrap();
    /// assert_eq!(entry.text(), "cat");
    ///
    /// assert!(WordEntry::new("hmm", 1.0).is_err());
    /// assert!(WordEntry::new("it", 1.0).is_err());
    /// ```
    pub fn new(text: impl Into<String>, weight: f64) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();
        check_playable(&text)?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(WordError::InvalidWeight(weight));
        }

        let letters = text.bytes().filter_map(Letter::from_byte).collect();

        Ok(Self {
            text,
            weight,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Relative sampling mass
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`: entries hold at least three letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letters left to right
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().map(|b| Letter(b - b'a'))
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(letter)
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("hangman", 2.5).unwrap();
        assert_eq!(entry.text(), "hangman");
        assert_eq!(entry.len(), 7);
        assert!((entry.weight() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn entry_uppercase_normalized() {
        let entry = WordEntry::new("HaNgMaN", 1.0).unwrap();
        assert_eq!(entry.text(), "hangman");
    }

    #[test_case("at", WordError::TooShort(2) ; "too short")]
    #[test_case("", WordError::TooShort(0) ; "empty")]
    #[test_case("rhythm", WordError::NoVowel ; "no vowel")]
    #[test_case("can't", WordError::NonAlphabetic ; "apostrophe")]
    #[test_case("mp3s", WordError::NonAlphabetic ; "digit")]
    #[test_case("café", WordError::NonAlphabetic ; "non ascii")]
    fn entry_rejected(text: &str, expected: WordError) {
        assert_eq!(WordEntry::new(text, 1.0), Err(expected));
    }

    #[test]
    fn entry_rejects_bad_weights() {
        assert!(matches!(
            WordEntry::new("cat", -1.0),
            Err(WordError::InvalidWeight(_))
        ));
        assert!(WordEntry::new("cat", f64::NAN).is_err());
        assert!(WordEntry::new("cat", f64::INFINITY).is_err());
        assert!(WordEntry::new("cat", 0.0).is_ok());
    }

    #[test]
    fn entry_letter_set_is_distinct() {
        let entry = WordEntry::new("banana", 1.0).unwrap();
        assert_eq!(entry.letter_set(), LetterSet::from_letters("abn"));
        assert!(entry.has_letter(letter('n')));
        assert!(!entry.has_letter(letter('z')));
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("gallows", 1.0).unwrap();
        assert_eq!(format!("{entry}"), "gallows");
    }
}
