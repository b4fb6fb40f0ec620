//! Suggest command
//!
//! Shows what every strategy would play in a given position.

use crate::core::{GuessPattern, Letter, LetterSet};
use crate::game::Board;
use crate::solver::{Knowledge, PatternWeightedStrategy, Solver, Strategy, StrategyKind, StrategyType};

/// How many of the heaviest candidates to list
pub const TOP_CANDIDATES: usize = 10;

/// One strategy's answer
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub kind: StrategyKind,
    pub letter: Option<Letter>,
    /// Zero-based position of `letter` in the frequency ranking
    pub rank: Option<usize>,
    /// Share of words of this length containing `letter`
    pub profile: Option<f64>,
}

impl Suggestion {
    fn new(kind: StrategyKind, letter: Option<Letter>, knowledge: &Knowledge, len: usize) -> Self {
        Self {
            kind,
            letter,
            rank: letter.map(|l| knowledge.ranking().rank_of(l)),
            profile: letter.map(|l| knowledge.distribution().probability(len, l)),
        }
    }
}

/// Result of analyzing a position
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub board: Board,
    /// Slots still hidden
    pub blanks: usize,
    pub candidate_count: usize,
    /// Heaviest matching words first
    pub top_candidates: Vec<(String, f64)>,
    /// The word the pattern-weighted strategy bets on
    pub best_word: Option<String>,
    /// The chosen strategy's answer
    pub recommended: Suggestion,
    /// Every strategy's answer
    pub suggestions: Vec<Suggestion>,
}

/// Build the board for a pattern such as `"_a_"`
///
/// Letters revealed in the pattern count as guessed, whether or not they are
/// repeated in `guessed`.
#[must_use]
pub fn board_for(pattern: GuessPattern, guessed: LetterSet, attempts_remaining: u8) -> Board {
    let guessed: LetterSet = guessed.iter().chain(pattern.revealed().iter()).collect();
    Board::from_parts(pattern, guessed, attempts_remaining)
}

/// Ask `kind`, and every other strategy, about `board`
#[must_use]
pub fn suggest(
    knowledge: &Knowledge,
    board: &Board,
    kind: StrategyKind,
    threshold: u8,
) -> SuggestResult {
    let solver = Solver::new(StrategyType::build(kind, knowledge, threshold), knowledge.lexicon());
    let len = board.word_len();
    let recommended = Suggestion::new(kind, solver.next_guess(board), knowledge, len);

    let mut candidates = solver.get_candidates(board);
    let candidate_count = candidates.len();
    // Stable sort keeps lexicon order among equal weights
    candidates.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
    let top_candidates = candidates
        .iter()
        .take(TOP_CANDIDATES)
        .map(|entry| (entry.text().to_string(), entry.weight()))
        .collect();

    let best_word = PatternWeightedStrategy::new(knowledge.lexicon(), knowledge.ranking())
        .best_match(board)
        .map(|entry| entry.text().to_string());

    let suggestions = StrategyKind::ALL
        .into_iter()
        .map(|kind| {
            let letter = StrategyType::build(kind, knowledge, threshold).next_guess(board);
            Suggestion::new(kind, letter, knowledge, len)
        })
        .collect();

    tracing::debug!(pattern = %board.pattern(), candidate_count, "suggestions computed");

    SuggestResult {
        board: board.clone(),
        blanks: board.pattern().blanks(),
        candidate_count,
        top_candidates,
        best_word,
        recommended,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::lexicon::{LetterRanking, LetterStats, Lexicon};

    fn knowledge() -> Knowledge {
        let lexicon = Lexicon::from_entries(vec![
            WordEntry::new("cat", 5.0).unwrap(),
            WordEntry::new("bat", 3.0).unwrap(),
            WordEntry::new("mat", 1.0).unwrap(),
            WordEntry::new("dog", 8.0).unwrap(),
        ])
        .unwrap();
        let ranking = LetterRanking::build(&LetterStats::from_words(["eeeeat"]));
        Knowledge::new(lexicon, ranking)
    }

    #[test]
    fn revealed_letters_join_guessed() {
        let board = board_for(GuessPattern::parse("_a_").unwrap(), LetterSet::from_letters("z"), 2);
        assert_eq!(board.guessed(), LetterSet::from_letters("az"));
        assert_eq!(board.attempts_remaining(), 2);
    }

    #[test]
    fn suggests_for_every_strategy() {
        let knowledge = knowledge();
        let board = board_for(GuessPattern::parse("_a_").unwrap(), LetterSet::EMPTY, 2);
        let result = suggest(&knowledge, &board, StrategyKind::Distribution, 2);

        assert_eq!(result.blanks, 2);
        assert_eq!(result.candidate_count, 3);
        assert_eq!(result.best_word.as_deref(), Some("cat"));
        assert_eq!(result.top_candidates[0].0, "cat");
        assert_eq!(result.top_candidates[2].0, "mat");
        assert_eq!(result.suggestions.len(), StrategyKind::ALL.len());
        // t: 5 + 3 + 1
        assert_eq!(result.recommended.letter, Letter::from_char('t'));
        // ranking built from "eeeeat": e, a, t
        assert_eq!(result.recommended.rank, Some(2));
        // every three-letter word but "dog" has a t
        assert!((result.recommended.profile.unwrap() - 0.75).abs() < 1e-12);

        let pattern = result
            .suggestions
            .iter()
            .find(|s| s.kind == StrategyKind::Pattern)
            .unwrap();
        assert_eq!(pattern.letter, Letter::from_char('c'));
    }
}
