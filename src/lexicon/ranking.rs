//! Global letter frequency ranking
//!
//! Orders the alphabet by corpus occurrence, most frequent first. Built once
//! at startup and shared read-only.

use crate::core::{ALPHABET_LEN, Letter, LetterSet};
use std::fmt;

/// Occurrence statistic per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStats {
    counts: [u64; ALPHABET_LEN],
}

impl LetterStats {
    /// Count every letter occurrence in `words`, ignoring non-letters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Letter;
    /// use hangman_solver::lexicon::LetterStats;
    ///
    /// let stats = LetterStats::from_words(["noon", "on"]);
    /// assert_eq!(stats.get(Letter::from_byte(b'n').unwrap()), 3);
    /// ```
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stats = Self::default();
        for word in words {
            for letter in word.bytes().filter_map(Letter::from_byte) {
                stats.counts[letter.index()] += 1;
            }
        }
        stats
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> u64 {
        self.counts[letter.index()]
    }

    #[inline]
    pub fn set(&mut self, letter: Letter, value: u64) {
        self.counts[letter.index()] = value;
    }
}

/// The 26 letters, most frequent first
///
/// Ties are broken alphabetically so the order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRanking {
    order: Vec<Letter>,
}

impl LetterRanking {
    /// Sort the alphabet by descending statistic
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::lexicon::{LetterRanking, LetterStats};
    ///
    /// let ranking = LetterRanking::build(&LetterStats::from_words(["eel", "tee"]));
    /// assert!(ranking.to_string().starts_with("elta"));
    /// ```
    #[must_use]
    pub fn build(stats: &LetterStats) -> Self {
        let mut order: Vec<Letter> = Letter::all().collect();
        order.sort_by(|a, b| stats.get(*b).cmp(&stats.get(*a)).then(a.cmp(b)));
        Self { order }
    }

    /// Letters in rank order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Letter] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }

    /// Highest-ranked letter not in `guessed`
    #[must_use]
    pub fn first_unguessed(&self, guessed: LetterSet) -> Option<Letter> {
        self.iter().find(|&letter| !guessed.contains(letter))
    }

    /// Zero-based rank of `letter`
    #[must_use]
    pub fn rank_of(&self, letter: Letter) -> usize {
        self.order
            .iter()
            .position(|&l| l == letter)
            .unwrap_or(ALPHABET_LEN)
    }
}

impl fmt::Display for LetterRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.order {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn ranking_contains_every_letter_once() {
        let ranking = LetterRanking::build(&LetterStats::from_words(["hangman"]));
        assert_eq!(ranking.as_slice().len(), ALPHABET_LEN);
        let set: LetterSet = ranking.iter().collect();
        assert!(set.is_full());
    }

    #[test]
    fn ranking_orders_by_descending_count() {
        let ranking = LetterRanking::build(&LetterStats::from_words(["banana"]));
        assert_eq!(
            &ranking.as_slice()[..3],
            &[letter('a'), letter('n'), letter('b')]
        );
    }

    #[test]
    fn ranking_ties_break_alphabetically() {
        // Everything unseen ties at zero
        let ranking = LetterRanking::build(&LetterStats::default());
        assert_eq!(ranking.to_string(), "abcdefghijklmnopqrstuvwxyz");

        let ranking = LetterRanking::build(&LetterStats::from_words(["zyx"]));
        assert!(ranking.to_string().starts_with("xyzabc"));
    }

    #[test]
    fn first_unguessed_skips_guessed() {
        let ranking = LetterRanking::build(&LetterStats::from_words(["eeettta"]));
        assert_eq!(ranking.first_unguessed(LetterSet::EMPTY), Some(letter('e')));
        assert_eq!(
            ranking.first_unguessed(LetterSet::from_letters("et")),
            Some(letter('a'))
        );
        assert_eq!(ranking.first_unguessed(LetterSet::FULL), None);
    }

    #[test]
    fn rank_of_matches_position() {
        let ranking = LetterRanking::build(&LetterStats::from_words(["eeettta"]));
        assert_eq!(ranking.rank_of(letter('e')), 0);
        assert_eq!(ranking.rank_of(letter('t')), 1);
        assert_eq!(ranking.rank_of(letter('a')), 2);
    }

    #[test]
    fn stats_skip_non_letters() {
        let stats = LetterStats::from_words(["cat", "dog!"]);
        assert_eq!(Letter::all().map(|l| stats.get(l)).sum::<u64>(), 6);
    }
}
