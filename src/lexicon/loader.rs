//! Word and letter-statistic loading
//!
//! Parses the unigram CSV (`word,count`, rank-ordered) and the letter frequency
//! CSV (`Letter,Occurrences,...`), from embedded data or from files.

use super::{LETTER_FREQUENCY_CSV, LetterStats, UNIGRAM_CSV};
use crate::core::Letter;
use crate::error::{HangmanError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One row of the unigram source
///
/// `rank` is the zero-based data row index in the source, including rows that
/// the lexicon filter later rejects.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    pub rank: usize,
    pub word: String,
    pub count: f64,
}

/// Where the word counts come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Sample compiled into the binary
    Embedded,
    /// A `word,count` CSV file with a header line
    File(PathBuf),
}

impl WordSource {
    /// `"embedded"` selects the built-in sample; anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Read all rows in source order
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn rows(&self) -> Result<Vec<SourceRow>> {
        match self {
            Self::Embedded => Ok(parse_unigram_csv(UNIGRAM_CSV)),
            Self::File(path) => load_unigram_file(path),
        }
    }
}

/// Where the letter ranking statistics come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSource {
    /// Letter table compiled into the binary
    Embedded,
    /// Counted from the words of the loaded lexicon
    Derived,
    /// A `Letter,Occurrences,...` CSV file with a header line
    File(PathBuf),
}

impl LetterSource {
    /// `"embedded"` or `"derived"`; anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            "derived" => Self::Derived,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Produce the statistics, counting `words` when the source is `Derived`
    ///
    /// # Errors
    /// Returns an I/O or parse error for file sources.
    pub fn stats<'a, I>(&self, words: I) -> Result<LetterStats>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Self::Embedded => parse_letter_csv(LETTER_FREQUENCY_CSV),
            Self::Derived => Ok(LetterStats::from_words(words)),
            Self::File(path) => parse_letter_csv(&fs::read_to_string(path)?),
        }
    }
}

/// Load unigram rows from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::lexicon::loader::load_unigram_file;
///
/// let rows = load_unigram_file("unigram_freq.csv").unwrap();
/// println!("Loaded {} rows", rows.len());
/// ```
pub fn load_unigram_file<P: AsRef<Path>>(path: P) -> Result<Vec<SourceRow>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_unigram_csv(&content))
}

/// Parse `word,count` rows, skipping the header line
///
/// Rows without exactly two fields, or with a count that is not a number, are
/// skipped but still consume a rank.
///
/// # Examples
/// ```
/// use hangman_solver::lexicon::loader::parse_unigram_csv;
///
/// let rows = parse_unigram_csv("word,count\nthe,100\nbroken\ncat,40\n");
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].word, "cat");
/// assert_eq!(rows[1].rank, 2);
/// ```
#[must_use]
pub fn parse_unigram_csv(content: &str) -> Vec<SourceRow> {
    content
        .lines()
        .skip(1)
        .enumerate()
        .filter_map(|(rank, line)| {
            let fields: Vec<&str> = line.trim().split(',').collect();
            let [word, count] = fields.as_slice() else {
                return None;
            };
            match count.trim().parse::<f64>() {
                Ok(count) => Some(SourceRow {
                    rank,
                    word: word.trim().to_string(),
                    count,
                }),
                Err(_) => {
                    tracing::warn!(rank, line, "skipping row with non-numeric count");
                    None
                }
            }
        })
        .collect()
}

/// Parse a letter frequency table
///
/// The first line is a header. The statistic is read from the `Occurrences`
/// column when the header names one, otherwise from the second column.
/// Letters absent from the table get a statistic of zero.
///
/// # Errors
/// Returns `HangmanError::Parse` for a row whose letter or statistic is invalid.
pub fn parse_letter_csv(content: &str) -> Result<LetterStats> {
    let mut lines = content.lines();
    let header = lines.next().unwrap_or_default();
    let column = header
        .split(',')
        .position(|name| name.trim().eq_ignore_ascii_case("occurrences"))
        .unwrap_or(1);

    let mut stats = LetterStats::default();
    for (index, line) in lines.enumerate() {
        let line_no = index + 2;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let letter = match fields.first().map(|f| f.as_bytes()) {
            Some([byte]) => Letter::from_byte(*byte),
            _ => None,
        }
        .ok_or_else(|| HangmanError::Parse {
            line: line_no,
            reason: format!("expected a single letter, got '{}'", fields[0]),
        })?;

        let value = fields
            .get(column)
            .and_then(|f| f.parse::<u64>().ok())
            .ok_or_else(|| HangmanError::Parse {
                line: line_no,
                reason: format!("missing or non-numeric statistic for '{letter}'"),
            })?;

        stats.set(letter, value);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn unigram_ranks_count_skipped_rows() {
        let rows = parse_unigram_csv("word,count\na,10\n\nbad,row,extra\nthe,x\ncat,5\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], SourceRow { rank: 0, word: "a".into(), count: 10.0 });
        assert_eq!(rows[1].word, "cat");
        assert_eq!(rows[1].rank, 4);
    }

    #[test]
    fn unigram_header_only() {
        assert!(parse_unigram_csv("word,count\n").is_empty());
        assert!(parse_unigram_csv("").is_empty());
    }

    #[test]
    fn letter_csv_uses_occurrences_column() {
        let csv = "Letter,Word_Occurrences,Occurrences\na,1,50\nb,99,7\n";
        let stats = parse_letter_csv(csv).unwrap();
        assert_eq!(stats.get(letter('a')), 50);
        assert_eq!(stats.get(letter('b')), 7);
        assert_eq!(stats.get(letter('z')), 0);
    }

    #[test]
    fn letter_csv_falls_back_to_second_column() {
        let stats = parse_letter_csv("L,Count\nE,12\n").unwrap();
        assert_eq!(stats.get(letter('e')), 12);
    }

    #[test]
    fn letter_csv_reports_bad_rows() {
        let err = parse_letter_csv("Letter,Occurrences\nab,3\n").unwrap_err();
        assert!(matches!(err, HangmanError::Parse { line: 2, .. }));

        let err = parse_letter_csv("Letter,Occurrences\na,lots\n").unwrap_err();
        assert!(matches!(err, HangmanError::Parse { line: 2, .. }));
    }

    #[test]
    fn embedded_sources_load() {
        let rows = WordSource::Embedded.rows().unwrap();
        assert!(rows.len() > 1000);
        assert_eq!(rows[0].word, "the");

        let stats = LetterSource::Embedded.stats(std::iter::empty()).unwrap();
        assert!(Letter::all().all(|l| stats.get(l) > 0));
    }

    #[test]
    fn derived_letter_source_counts_words() {
        let stats = LetterSource::Derived.stats(["cat", "tot"]).unwrap();
        assert_eq!(stats.get(letter('t')), 3);
        assert_eq!(stats.get(letter('c')), 1);
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
        assert_eq!(
            WordSource::from_arg("words.csv"),
            WordSource::File(PathBuf::from("words.csv"))
        );
        assert_eq!(LetterSource::from_arg("derived"), LetterSource::Derived);
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = WordSource::File(PathBuf::from("/nonexistent/unigram.csv"));
        assert!(matches!(source.rows(), Err(HangmanError::Io(_))));
    }
}
