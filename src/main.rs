//! Hangman Solver - CLI
//!
//! Play Hangman against frequency-weighted English words, watch the bot and
//! AI players, or simulate thousands of games and export the results.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        BatchConfig, BatchRunner, DEFAULT_SEED, SessionConfig, board_for, lexicon_stats,
        run_session, suggest, watch_game,
    },
    core::{GuessPattern, LetterSet},
    game::{GameConfig, MAX_ATTEMPTS, StdinInput},
    lexicon::{LetterSource, WordSource},
    output::{CsvResultSink, ResultSink, print_batch_report, print_lexicon_stats, print_suggestion},
    solver::{DEFAULT_ENDGAME_THRESHOLD, Knowledge, Strategy, StrategyKind, StrategyType},
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman with frequency-weighted words and letter-guessing bots",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: bot-ai (default), bot, frequency, pattern, distribution (ai)
    #[arg(short, long, global = true, default_value = "bot-ai")]
    strategy: String,

    /// Word counts: 'embedded' (default) or path to a `word,count` CSV
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Letter ranking: 'embedded' (default), 'derived' from the words, or path to a CSV
    #[arg(short = 'l', long, global = true, default_value = "embedded")]
    letters: String,

    /// Attempts remaining at or below which bots switch to their endgame strategy
    #[arg(short, long, global = true, default_value_t = DEFAULT_ENDGAME_THRESHOLD)]
    threshold: u8,

    /// Random seed (default: random for games, 42 for batches)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default): play yourself or let the bot or AI play
    Play,

    /// Watch the selected strategy play games
    Watch {
        /// Number of games to watch
        #[arg(short = 'n', long, default_value = "1")]
        games: usize,
    },

    /// Simulate many games and report win statistics
    Batch {
        /// Number of games to run
        #[arg(short = 'n', long, default_value = "50000", allow_negative_numbers = true)]
        count: i64,

        /// Write every result to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run games on all cores
        #[arg(short, long)]
        parallel: bool,
    },

    /// Show what each strategy would guess for a pattern like "_a__e"
    Suggest {
        /// Revealed letters with '_' for blanks
        pattern: String,

        /// Letters already guessed (revealed letters are added automatically)
        #[arg(short, long, default_value = "")]
        guessed: String,

        /// Attempts remaining
        #[arg(short, long, default_value_t = MAX_ATTEMPTS)]
        attempts: u8,
    },

    /// Show lexicon and letter ranking statistics
    Stats {
        /// Number of most likely words to list
        #[arg(long, default_value = "15")]
        top: usize,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let kind = StrategyKind::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}' (expected one of: frequency, pattern, distribution, ai, bot, bot-ai)",
            cli.strategy
        )
    })?;

    let knowledge = Knowledge::load(
        &WordSource::from_arg(&cli.words),
        &LetterSource::from_arg(&cli.letters),
    )
    .with_context(|| format!("failed to load words '{}' / letters '{}'", cli.words, cli.letters))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&knowledge, cli.threshold, cli.seed),
        Commands::Watch { games } => run_watch_command(&knowledge, kind, cli.threshold, cli.seed, games),
        Commands::Batch {
            count,
            output,
            parallel,
        } => run_batch_command(&knowledge, kind, cli.threshold, cli.seed, count, output, parallel),
        Commands::Suggest {
            pattern,
            guessed,
            attempts,
        } => run_suggest_command(&knowledge, kind, cli.threshold, &pattern, &guessed, attempts),
        Commands::Stats { top } => {
            print_lexicon_stats(&lexicon_stats(&knowledge, top));
            Ok(())
        }
    }
}

fn run_play_command(knowledge: &Knowledge, threshold: u8, seed: Option<u64>) -> Result<()> {
    let mut rng = rng_from(seed);
    let config = SessionConfig {
        game: GameConfig::default(),
        threshold,
    };

    let results = run_session(knowledge, &mut StdinInput, &mut rng, config)?;
    let wins = results.iter().filter(|r| r.won).count();
    tracing::info!(games = results.len(), wins, "session finished");
    Ok(())
}

fn run_watch_command(
    knowledge: &Knowledge,
    kind: StrategyKind,
    threshold: u8,
    seed: Option<u64>,
    games: usize,
) -> Result<()> {
    let mut rng = rng_from(seed);

    for game in 1..=games {
        if games > 1 {
            println!("\n=== Game {game}/{games} ({kind}) ===");
        }
        watch_game(knowledge, kind, threshold, &mut rng, GameConfig::default())?;
    }
    Ok(())
}

fn run_batch_command(
    knowledge: &Knowledge,
    kind: StrategyKind,
    threshold: u8,
    seed: Option<u64>,
    count: i64,
    output: Option<PathBuf>,
    parallel: bool,
) -> Result<()> {
    let strategy = StrategyType::build(kind, knowledge, threshold);
    let config = BatchConfig {
        seed: seed.unwrap_or(DEFAULT_SEED),
        parallel,
        game: GameConfig::default(),
    };
    let runner = BatchRunner::new(knowledge.lexicon(), strategy, config);

    let pb = ProgressBar::new(count.max(0).unsigned_abs());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let report = runner.run_with_progress(count, &|progress| {
        pb.set_position(progress.completed as u64);
        pb.set_message(format!(
            "Win rate: {:.2}%",
            progress.wins as f64 / progress.completed as f64 * 100.0
        ));
    });
    pb.finish_and_clear();
    let report = report?;

    print_batch_report(&report, strategy.name());

    if let Some(path) = output {
        let mut sink = CsvResultSink::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        sink.write_results(&report.results)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nResults written to {}", path.display());
    }
    Ok(())
}

fn run_suggest_command(
    knowledge: &Knowledge,
    kind: StrategyKind,
    threshold: u8,
    pattern: &str,
    guessed: &str,
    attempts: u8,
) -> Result<()> {
    let pattern = GuessPattern::parse(pattern).map_err(|e| anyhow!(e))?;
    let board = board_for(pattern, LetterSet::from_letters(guessed), attempts);

    print_suggestion(&suggest(knowledge, &board, kind, threshold));
    Ok(())
}
