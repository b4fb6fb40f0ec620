//! Frequency-weighted word lexicon
//!
//! Builds the playable word set from rank-ordered `(word, count)` rows, applies
//! rank damping to the weights, and draws weighted random targets.

mod embedded;
pub mod loader;
pub mod ranking;

pub use embedded::{LETTER_FREQUENCY_CSV, UNIGRAM_CSV};
pub use loader::{LetterSource, SourceRow, WordSource};
pub use ranking::{LetterRanking, LetterStats};

use crate::core::{WordEntry, check_playable};
use crate::error::{HangmanError, Result};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rustc_hash::FxHashMap;

/// Smallest count in the reference unigram corpus, used to normalize raw counts
pub const MIN_CORPUS_COUNT: f64 = 12_711.0;

/// Ranks below this get a fixed, near-zero weight
pub const SUPPRESSED_RANKS: usize = 30;

/// Ranks below this are scaled down by `rank / DAMPED_RANKS`
pub const DAMPED_RANKS: usize = 1000;

/// Sampling weight for a word at source `rank` with `raw_count` occurrences
///
/// ```text
/// rank < 30          → rank / 1000
/// 30 <= rank < 1000  → (count / 12711) × rank / 1000
/// rank >= 1000       → count / 12711
/// ```
///
/// The most common words would otherwise dominate every draw.
///
/// # Examples
/// ```
/// use hangman_solver::lexicon::damped_weight;
///
/// assert_eq!(damped_weight(0, 1e9), 0.0);
/// assert!((damped_weight(10, 1e9) - 0.01).abs() < 1e-12);
/// assert!((damped_weight(5000, 12_711.0) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn damped_weight(rank: usize, raw_count: f64) -> f64 {
    let normalized = raw_count / MIN_CORPUS_COUNT;
    let damping = rank as f64 / DAMPED_RANKS as f64;

    if rank < SUPPRESSED_RANKS {
        damping
    } else if rank < DAMPED_RANKS {
        normalized * damping
    } else {
        normalized
    }
}

/// The filtered, weighted candidate word set
///
/// Never empty and always carries a positive total weight, so sampling cannot
/// fail once a `Lexicon` exists. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<WordEntry>,
    by_length: FxHashMap<usize, Vec<usize>>,
    sampler: WeightedIndex<f64>,
    total_weight: f64,
}

impl Lexicon {
    /// Filter and weight rank-ordered source rows
    ///
    /// Rows that are not purely alphabetic, shorter than three letters, or
    /// vowel-free are dropped. Their rank still counts towards damping.
    ///
    /// # Errors
    /// - `EmptyLexicon` if no row survives filtering
    /// - `InvalidWeights` if the surviving weights do not sum to a positive finite value
    pub fn load<I: IntoIterator<Item = SourceRow>>(rows: I) -> Result<Self> {
        let mut rejected = 0usize;

        let entries: Vec<WordEntry> = rows
            .into_iter()
            .filter_map(|row| {
                if check_playable(&row.word).is_err() {
                    rejected += 1;
                    return None;
                }
                let weight = damped_weight(row.rank, row.count);
                match WordEntry::new(row.word, weight) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        tracing::warn!(rank = row.rank, "skipping source row: {e}");
                        rejected += 1;
                        None
                    }
                }
            })
            .collect();

        tracing::debug!(kept = entries.len(), rejected, "filtered source rows");
        Self::from_entries(entries)
    }

    /// Build a lexicon from entries whose weights are already final
    ///
    /// Lexicon order is the order of `entries`.
    ///
    /// # Errors
    /// Same as [`Lexicon::load`].
    pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(HangmanError::EmptyLexicon);
        }

        let total_weight: f64 = entries.iter().map(WordEntry::weight).sum();
        if !total_weight.is_finite() || total_weight <= 0.0 {
            return Err(HangmanError::InvalidWeights {
                total: total_weight,
            });
        }

        let sampler = WeightedIndex::new(entries.iter().map(WordEntry::weight)).map_err(|_| {
            HangmanError::InvalidWeights {
                total: total_weight,
            }
        })?;

        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (index, entry) in entries.iter().enumerate() {
            by_length.entry(entry.len()).or_default().push(index);
        }

        tracing::info!(
            words = entries.len(),
            lengths = by_length.len(),
            total_weight,
            "lexicon ready"
        );

        Ok(Self {
            entries,
            by_length,
            sampler,
            total_weight,
        })
    }

    /// Draw one word, using each entry's weight as relative probability mass
    ///
    /// Every call is independent; the same word may come up again.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordEntry {
        &self.entries[self.sampler.sample(rng)]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed lexicon
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in lexicon order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Sum of all weights
    #[inline]
    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Entries of exactly `len` letters, in lexicon order
    pub fn with_length(&self, len: usize) -> impl Iterator<Item = &WordEntry> + '_ {
        self.by_length
            .get(&len)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&index| &self.entries[index])
    }

    /// Number of entries of exactly `len` letters
    #[must_use]
    pub fn count_with_length(&self, len: usize) -> usize {
        self.by_length.get(&len).map_or(0, Vec::len)
    }

    /// Distinct word lengths, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Look up a word by text (case-insensitive)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&WordEntry> {
        let text = text.to_ascii_lowercase();
        self.with_length(text.len()).find(|entry| entry.text() == text)
    }
}
