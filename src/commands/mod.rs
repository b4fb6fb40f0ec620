//! Command implementations

pub mod batch;
pub mod play;
pub mod stats;
pub mod suggest;

pub use batch::{BatchConfig, BatchProgress, BatchReport, BatchRunner, DEFAULT_SEED, validate_count};
pub use play::{PlayerChoice, SessionChoice, SessionConfig, play_game, run_session, watch_game};
pub use stats::{LexiconStats, lexicon_stats};
pub use suggest::{SuggestResult, Suggestion, board_for, suggest};
