//! Read-only data shared by every strategy and game

use super::distribution::LengthLetterDistribution;
use crate::core::WordEntry;
use crate::error::Result;
use crate::lexicon::{LetterRanking, LetterSource, Lexicon, WordSource};

/// Lexicon, letter ranking, and per-length letter profile
///
/// Built once per process and borrowed by strategies. Never mutated, so it can
/// be shared across threads as `&Knowledge`.
#[derive(Debug, Clone)]
pub struct Knowledge {
    lexicon: Lexicon,
    ranking: LetterRanking,
    distribution: LengthLetterDistribution,
}

impl Knowledge {
    /// Derive the letter profile from `lexicon` and bundle everything
    #[must_use]
    pub fn new(lexicon: Lexicon, ranking: LetterRanking) -> Self {
        let distribution = LengthLetterDistribution::build(&lexicon);
        Self {
            lexicon,
            ranking,
            distribution,
        }
    }

    /// Load words and letter statistics from their sources
    ///
    /// # Errors
    /// Fails if a source cannot be read or parsed, or the lexicon ends up empty.
    pub fn load(words: &WordSource, letters: &LetterSource) -> Result<Self> {
        let lexicon = Lexicon::load(words.rows()?)?;
        let stats = letters.stats(lexicon.entries().iter().map(WordEntry::text))?;
        let ranking = LetterRanking::build(&stats);
        tracing::debug!(%ranking, "letter ranking built");
        Ok(Self::new(lexicon, ranking))
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[inline]
    #[must_use]
    pub const fn ranking(&self) -> &LetterRanking {
        &self.ranking
    }

    #[inline]
    #[must_use]
    pub const fn distribution(&self) -> &LengthLetterDistribution {
        &self.distribution
    }
}
