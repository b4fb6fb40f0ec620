//! Embedded data tables
//!
//! Compiled into the binary so the game runs without any data files.

/// Rank-ordered `word,count` sample of English unigram frequencies
pub const UNIGRAM_CSV: &str = include_str!("../../data/unigram_freq.csv");

/// Per-letter occurrence totals counted over [`UNIGRAM_CSV`]
pub const LETTER_FREQUENCY_CSV: &str = include_str!("../../data/letter_frequency.csv");
