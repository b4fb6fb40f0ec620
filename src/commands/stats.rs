//! Stats command
//!
//! Summarizes the loaded lexicon and letter ranking.

use crate::core::WordEntry;
use crate::solver::Knowledge;

/// Summary of the loaded data
#[derive(Debug, Clone)]
pub struct LexiconStats {
    pub words: usize,
    pub total_weight: f64,
    /// (length, word count), ascending by length
    pub lengths: Vec<(usize, usize)>,
    pub ranking: String,
    /// Word lengths with a letter profile
    pub profiled_lengths: usize,
    /// Heaviest words, most likely targets first
    pub heaviest: Vec<(String, f64)>,
}

/// Gather statistics about `knowledge`
#[must_use]
pub fn lexicon_stats(knowledge: &Knowledge, top: usize) -> LexiconStats {
    let lexicon = knowledge.lexicon();

    let lengths = lexicon
        .lengths()
        .into_iter()
        .map(|len| (len, lexicon.count_with_length(len)))
        .collect();

    let mut by_weight: Vec<&WordEntry> = lexicon.entries().iter().collect();
    by_weight.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
    let heaviest = by_weight
        .into_iter()
        .take(top)
        .map(|entry| (entry.text().to_string(), entry.weight()))
        .collect();

    LexiconStats {
        words: lexicon.len(),
        total_weight: lexicon.total_weight(),
        lengths,
        ranking: knowledge.ranking().to_string(),
        profiled_lengths: knowledge.distribution().lengths(),
        heaviest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LetterRanking, LetterStats, Lexicon};

    #[test]
    fn stats_summarize_lexicon() {
        let lexicon = Lexicon::from_entries(vec![
            WordEntry::new("cat", 1.0).unwrap(),
            WordEntry::new("house", 4.0).unwrap(),
            WordEntry::new("dog", 2.0).unwrap(),
        ])
        .unwrap();
        let knowledge = Knowledge::new(lexicon, LetterRanking::build(&LetterStats::default()));

        let stats = lexicon_stats(&knowledge, 2);
        assert_eq!(stats.words, 3);
        assert!((stats.total_weight - 7.0).abs() < 1e-12);
        assert_eq!(stats.lengths, vec![(3, 2), (5, 1)]);
        assert_eq!(stats.ranking, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(stats.profiled_lengths, 2);
        assert_eq!(stats.heaviest, vec![("house".to_string(), 4.0), ("dog".to_string(), 2.0)]);
    }
}
