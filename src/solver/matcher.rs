//! Candidate filtering against a partially revealed pattern

use crate::core::{GuessPattern, LetterSet, WordEntry};
use crate::lexicon::Lexicon;

/// Words of the lexicon consistent with `pattern` and `guessed`, in lexicon order
///
/// Only the length bucket of the pattern is scanned. An empty result is a
/// normal outcome that strategies fall back from.
///
/// # Examples
/// ```
/// use hangman_solver::core::{GuessPattern, LetterSet, WordEntry};
/// use hangman_solver::lexicon::Lexicon;
/// use hangman_solver::solver::filter_candidates;
///
/// let lexicon = Lexicon::from_entries(vec![
///     WordEntry::new("cat", 5.0).unwrap(),
///     WordEntry::new("cot", 1.0).unwrap(),
///     WordEntry::new("house", 2.0).unwrap(),
/// ])
/// .unwrap();
///
/// let pattern = GuessPattern::parse("_a_").unwrap();
/// let matches = filter_candidates(&lexicon, &pattern, LetterSet::from_letters("a"));
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].text(), "cat");
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    lexicon: &'a Lexicon,
    pattern: &GuessPattern,
    guessed: LetterSet,
) -> Vec<&'a WordEntry> {
    lexicon
        .with_length(pattern.len())
        .filter(|entry| pattern.matches(entry, guessed))
        .collect()
}

/// Narrow an existing candidate list with the same rules
#[must_use]
pub fn filter_entries<'a, I>(entries: I, pattern: &GuessPattern, guessed: LetterSet) -> Vec<&'a WordEntry>
where
    I: IntoIterator<Item = &'a WordEntry>,
{
    entries
        .into_iter()
        .filter(|entry| pattern.matches(entry, guessed))
        .collect()
}
