//! Length-conditioned letter distribution guessing
//!
//! Scores letters by the weight of the matching words that contain them, and
//! falls back to a per-length letter profile of the whole lexicon when nothing
//! matches.

use super::matcher::filter_candidates;
use super::strategy::Strategy;
use crate::core::{ALPHABET_LEN, Letter, LetterSet};
use crate::game::Board;
use crate::lexicon::Lexicon;
use rustc_hash::FxHashMap;

/// Per word length, the fraction of words containing each letter at least once
#[derive(Debug, Clone, Default)]
pub struct LengthLetterDistribution {
    by_length: FxHashMap<usize, [f64; ALPHABET_LEN]>,
}

impl LengthLetterDistribution {
    /// Count document frequencies over every lexicon entry
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut counts: FxHashMap<usize, ([u32; ALPHABET_LEN], u32)> = FxHashMap::default();

        for entry in lexicon.entries() {
            let (letters, words) = counts.entry(entry.len()).or_insert(([0; ALPHABET_LEN], 0));
            *words += 1;
            for letter in entry.letter_set().iter() {
                letters[letter.index()] += 1;
            }
        }

        let by_length = counts
            .into_iter()
            .map(|(len, (letters, words))| {
                let total = f64::from(words);
                (len, letters.map(|count| f64::from(count) / total))
            })
            .collect();

        Self { by_length }
    }

    /// The profile for `len`, if any word had that length
    #[must_use]
    pub fn for_length(&self, len: usize) -> Option<&[f64; ALPHABET_LEN]> {
        self.by_length.get(&len)
    }

    /// Fraction of `len`-letter words containing `letter` (zero if unknown)
    #[must_use]
    pub fn probability(&self, len: usize, letter: Letter) -> f64 {
        self.for_length(len).map_or(0.0, |p| p[letter.index()])
    }

    #[must_use]
    pub fn lengths(&self) -> usize {
        self.by_length.len()
    }
}

/// Highest scoring letter; earlier letters win ties
fn argmax(scores: &[Option<f64>; ALPHABET_LEN]) -> Option<Letter> {
    let mut best: Option<(usize, f64)> = None;
    for (index, score) in scores.iter().enumerate() {
        let Some(score) = *score else { continue };
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best.and_then(|(index, _)| Letter::from_index(index))
}

/// The probabilistic strategy
///
/// 1. Sum the weights of matching words per unguessed letter they contain.
/// 2. No matches: use the length profile, restricted to unguessed letters.
/// 3. Unknown length: every unguessed letter scores the same.
///
/// Ties always resolve to the alphabetically smallest letter, so the result is
/// a pure function of the board.
#[derive(Debug, Clone, Copy)]
pub struct DistributionStrategy<'a> {
    lexicon: &'a Lexicon,
    distribution: &'a LengthLetterDistribution,
}

impl<'a> DistributionStrategy<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, distribution: &'a LengthLetterDistribution) -> Self {
        Self {
            lexicon,
            distribution,
        }
    }

    /// Weight mass per unguessed letter over the words matching `board`
    ///
    /// `None` marks letters that are guessed or absent from every match.
    #[must_use]
    pub fn match_scores(&self, board: &Board) -> [Option<f64>; ALPHABET_LEN] {
        let guessed = board.guessed();
        let mut scores = [None; ALPHABET_LEN];

        for entry in filter_candidates(self.lexicon, board.pattern(), guessed) {
            for letter in entry.letter_set().iter() {
                if !guessed.contains(letter) {
                    *scores[letter.index()].get_or_insert(0.0) += entry.weight();
                }
            }
        }
        scores
    }

    fn profile_scores(&self, len: usize, guessed: LetterSet) -> [Option<f64>; ALPHABET_LEN] {
        let uniform = [1.0 / ALPHABET_LEN as f64; ALPHABET_LEN];
        let profile = self.distribution.for_length(len).unwrap_or_else(|| {
            tracing::debug!(len, "no letter profile for length, using uniform");
            &uniform
        });

        let mut scores = [None; ALPHABET_LEN];
        for letter in Letter::all().filter(|&l| !guessed.contains(l)) {
            scores[letter.index()] = Some(profile[letter.index()]);
        }
        scores
    }
}

impl Strategy for DistributionStrategy<'_> {
    fn next_guess(&self, board: &Board) -> Option<Letter> {
        argmax(&self.match_scores(board))
            .or_else(|| argmax(&self.profile_scores(board.word_len(), board.guessed())))
    }

    fn name(&self) -> &'static str {
        "distribution"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessPattern, WordEntry};

    fn lexicon(words: &[(&str, f64)]) -> Lexicon {
        Lexicon::from_entries(
            words
                .iter()
                .map(|&(text, weight)| WordEntry::new(text, weight).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn board(pattern: &str, guessed: &str) -> Board {
        Board::from_parts(
            GuessPattern::parse(pattern).unwrap(),
            LetterSet::from_letters(guessed),
            2,
        )
    }

    #[test]
    fn profile_is_document_frequency() {
        let lexicon = lexicon(&[("all", 1.0), ("ant", 1.0), ("bee", 1.0), ("tree", 1.0)]);
        let distribution = LengthLetterDistribution::build(&lexicon);

        // Repeated letters count once per word
        assert!((distribution.probability(3, letter('a')) - 2.0 / 3.0).abs() < 1e-12);
        assert!((distribution.probability(3, letter('l')) - 1.0 / 3.0).abs() < 1e-12);
        assert!((distribution.probability(4, letter('e')) - 1.0).abs() < 1e-12);
        assert!(distribution.probability(7, letter('e')).abs() < f64::EPSILON);
        assert_eq!(distribution.lengths(), 2);
    }

    #[test]
    fn scores_letters_by_matching_weight() {
        // c and t: 5, m: 3 + 1 + 4
        let lexicon = lexicon(&[("cat", 5.0), ("ham", 3.0), ("jam", 1.0), ("yam", 4.0)]);
        let distribution = LengthLetterDistribution::build(&lexicon);
        let strategy = DistributionStrategy::new(&lexicon, &distribution);

        assert_eq!(strategy.next_guess(&board("_a_", "a")), Some(letter('m')));
    }

    #[test]
    fn score_ties_go_to_earlier_letter() {
        let lexicon = lexicon(&[("dog", 2.0), ("cot", 2.0)]);
        let distribution = LengthLetterDistribution::build(&lexicon);
        let strategy = DistributionStrategy::new(&lexicon, &distribution);

        assert_eq!(strategy.next_guess(&board("_o_", "o")), Some(letter('c')));
    }

    #[test]
    fn letters_absent_from_matches_are_not_scored() {
        let lexicon = lexicon(&[("zoo", 0.0), ("cats", 1.0)]);
        let distribution = LengthLetterDistribution::build(&lexicon);
        let strategy = DistributionStrategy::new(&lexicon, &distribution);

        let scores = strategy.match_scores(&board("___", ""));
        assert_eq!(scores[letter('a').index()], None);
        assert_eq!(scores[letter('z').index()], Some(0.0));
        assert_eq!(strategy.next_guess(&board("___", "")), Some(letter('o')));
    }

    #[test]
    fn falls_back_to_length_profile() {
        let lexicon = lexicon(&[("tee", 1.0), ("toe", 1.0), ("ant", 1.0)]);
        let distribution = LengthLetterDistribution::build(&lexicon);
        let strategy = DistributionStrategy::new(&lexicon, &distribution);

        // Nothing matches "z__"; 't' is in every three-letter word
        assert_eq!(strategy.next_guess(&board("z__", "z")), Some(letter('t')));
        assert_eq!(strategy.next_guess(&board("z__", "zt")), Some(letter('e')));
    }

    #[test]
    fn unknown_length_uses_uniform_alphabetical_choice() {
        let lexicon = lexicon(&[("cat", 1.0)]);
        let distribution = LengthLetterDistribution::build(&lexicon);
        let strategy = DistributionStrategy::new(&lexicon, &distribution);

        assert_eq!(strategy.next_guess(&board("________", "")), Some(letter('a')));
        assert_eq!(strategy.next_guess(&board("________", "abq")), Some(letter('c')));
    }

    #[test]
    fn exhaustion_returns_none() {
        let lexicon = lexicon(&[("cat", 1.0)]);
        let distribution = LengthLetterDistribution::build(&lexicon);
        let strategy = DistributionStrategy::new(&lexicon, &distribution);

        let b = Board::from_parts(GuessPattern::blank(9), LetterSet::FULL, 1);
        assert_eq!(strategy.next_guess(&b), None);
    }
}
