//! Letters of the English alphabet and compact letter sets
//!
//! A `Letter` is a lowercase ASCII letter stored as its alphabet index (0-25).
//! A `LetterSet` packs up to 26 letters into a single `u32` bitmask.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Vowels used by the lexicon filter
pub const VOWELS: [u8; 5] = *b"aeiou";

/// A single lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(pub(super) u8);

impl Letter {
    /// Create a letter from an ASCII byte (either case)
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Letter;
    ///
    /// assert_eq!(Letter::from_byte(b'C'), Letter::from_byte(b'c'));
    /// assert!(Letter::from_byte(b'3').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let lower = byte.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Self(lower - b'a'))
        } else {
            None
        }
    }

    /// Create a letter from a char (either case)
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_byte)
    }

    /// Create a letter from its alphabet index (0 = 'a')
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Alphabet index (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        b'a' + self.0
    }

    /// Lowercase char
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.byte() as char
    }

    /// Whether this letter is one of a, e, i, o, u
    #[inline]
    #[must_use]
    pub fn is_vowel(self) -> bool {
        VOWELS.contains(&self.byte())
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of letters, iterated in alphabetical order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const FULL: Self = Self((1 << ALPHABET_LEN) - 1);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Parse every ASCII letter in `s`, ignoring anything else
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Letter, LetterSet};
    ///
    /// let set = LetterSet::from_letters("a, T");
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains(Letter::from_byte(b't').unwrap()));
    /// ```
    #[must_use]
    pub fn from_letters(s: &str) -> Self {
        s.bytes().filter_map(Letter::from_byte).collect()
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.0;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every letter of the alphabet is present
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL.0
    }

    /// Letters present in both sets
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Iterate letters alphabetically
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    /// Space-separated, alphabetical
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for letter in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
            first = false;
        }
        Ok(())
    }
}
