//! Batch simulation
//!
//! Plays many independent bot games and aggregates win statistics.

use crate::error::{HangmanError, Result};
use crate::game::{GameConfig, GameLoop, GameResult, StrategyPlayer};
use crate::lexicon::Lexicon;
use crate::solver::Strategy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Default seed when none is given
pub const DEFAULT_SEED: u64 = 42;

/// How a batch is played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
    /// Spread games over the rayon thread pool
    pub parallel: bool,
    pub game: GameConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            parallel: false,
            game: GameConfig::default(),
        }
    }
}

/// Snapshot handed to the progress observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    pub completed: usize,
    pub total: usize,
    pub wins: usize,
}

/// Aggregate statistics over a batch
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub total_games: usize,
    pub wins: usize,
    pub win_rate: f64,
    /// Every game in index order
    pub results: Vec<GameResult>,
    pub duration: Duration,
    pub average_guesses: f64,
    pub average_attempts_used: f64,
    /// Word length → (wins, games)
    pub wins_by_length: BTreeMap<usize, (usize, usize)>,
}

impl BatchReport {
    fn from_results(results: Vec<GameResult>, duration: Duration) -> Self {
        let total_games = results.len();
        let wins = results.iter().filter(|r| r.won).count();
        let total = total_games.max(1) as f64;

        let mut wins_by_length: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
        for result in &results {
            let (won, played) = wins_by_length.entry(result.word_length).or_default();
            *played += 1;
            if result.won {
                *won += 1;
            }
        }

        Self {
            total_games,
            wins,
            win_rate: wins as f64 / total,
            average_guesses: results.iter().map(|r| r.total_guesses).sum::<usize>() as f64 / total,
            average_attempts_used: results.iter().map(|r| usize::from(r.attempts_used)).sum::<usize>()
                as f64
                / total,
            results,
            duration,
            wins_by_length,
        }
    }

    /// Games per second over the whole batch
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        self.total_games as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Check a caller-supplied game count
///
/// # Errors
/// Returns `InvalidCount` for zero or negative counts.
pub fn validate_count(count: i64) -> Result<usize> {
    usize::try_from(count)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(HangmanError::InvalidCount(count))
}

/// Plays batches of games with one strategy
pub struct BatchRunner<'a, S> {
    lexicon: &'a Lexicon,
    strategy: S,
    config: BatchConfig,
}

impl<'a, S: Strategy + Sync> BatchRunner<'a, S> {
    pub const fn new(lexicon: &'a Lexicon, strategy: S, config: BatchConfig) -> Self {
        Self {
            lexicon,
            strategy,
            config,
        }
    }

    /// Play game number `index` of the batch
    ///
    /// The target depends only on the seed and the index, so the same game can
    /// be replayed on its own.
    ///
    /// # Errors
    /// Propagates player failures; strategy players never fail.
    pub fn play_one(&self, index: usize) -> Result<GameResult> {
        let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(index as u64));
        let mut player = StrategyPlayer::new(&self.strategy);
        GameLoop::start(self.lexicon, &mut rng, self.config.game).run(&mut player, |_, _| {})
    }

    /// Play `count` games
    ///
    /// # Errors
    /// Returns `InvalidCount` if `count` is not positive, before any game is played.
    pub fn run(&self, count: i64) -> Result<BatchReport> {
        self.run_with_progress(count, &|_| {})
    }

    /// Play `count` games, reporting progress about every 1% of the batch
    ///
    /// Results are identical whether or not the batch runs in parallel. In
    /// parallel, workers call `observer` concurrently and snapshots may arrive
    /// out of order, but each cadence step is reported exactly once.
    ///
    /// # Errors
    /// Returns `InvalidCount` if `count` is not positive, before any game is played.
    pub fn run_with_progress(
        &self,
        count: i64,
        observer: &(dyn Fn(BatchProgress) + Sync),
    ) -> Result<BatchReport> {
        let total = validate_count(count)?;
        let cadence = (total / 100).max(1);
        let start = Instant::now();

        tracing::info!(
            games = total,
            strategy = self.strategy.name(),
            seed = self.config.seed,
            parallel = self.config.parallel,
            "starting batch"
        );

        let completed = AtomicUsize::new(0);
        let wins = AtomicUsize::new(0);
        let play = |index: usize| -> Result<GameResult> {
            let result = self.play_one(index)?;
            if result.won {
                wins.fetch_add(1, Ordering::Relaxed);
            }
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % cadence == 0 || done == total {
                observer(BatchProgress {
                    completed: done,
                    total,
                    wins: wins.load(Ordering::Relaxed),
                });
            }
            Ok(result)
        };

        let results: Vec<GameResult> = if self.config.parallel {
            (0..total).into_par_iter().map(play).collect::<Result<_>>()?
        } else {
            (0..total).map(play).collect::<Result<_>>()?
        };

        let report = BatchReport::from_results(results, start.elapsed());
        tracing::info!(
            wins = report.wins,
            win_rate = report.win_rate,
            elapsed_ms = report.duration.as_millis() as u64,
            "batch complete"
        );
        Ok(report)
    }
}
