//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and cheap to copy or clone.

mod letter;
mod pattern;
mod word;

pub use letter::{ALPHABET_LEN, Letter, LetterSet, VOWELS};
pub use pattern::{BLANK, GuessPattern, PatternError};
pub use word::{MIN_WORD_LEN, WordEntry, WordError, check_playable};
