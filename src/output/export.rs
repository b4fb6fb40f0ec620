//! Exporting game results

use crate::error::Result;
use crate::game::GameResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header row of the results CSV
pub const CSV_HEADER: &str = "word,won,word_length,attempts_used,total_guesses";

/// Destination for finished games
pub trait ResultSink {
    /// Persist every result, in order
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    fn write_results(&mut self, results: &[GameResult]) -> Result<()>;
}

/// Writes results as CSV, `won` as 0 or 1
pub struct CsvResultSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvResultSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Hand back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl CsvResultSink<BufWriter<File>> {
    /// Create (or truncate) a CSV file at `path`
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> ResultSink for CsvResultSink<W> {
    fn write_results(&mut self, results: &[GameResult]) -> Result<()> {
        writeln!(self.writer, "{CSV_HEADER}")?;
        for r in results {
            writeln!(
                self.writer,
                "{},{},{},{},{}",
                r.word,
                u8::from(r.won),
                r.word_length,
                r.attempts_used,
                r.total_guesses
            )?;
        }
        self.writer.flush()?;
        tracing::debug!(rows = results.len(), "results exported");
        Ok(())
    }
}
