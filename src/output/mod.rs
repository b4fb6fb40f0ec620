//! Terminal output and result export
//!
//! Display utilities for games and CLI results, plus the CSV result sink.

pub mod display;
pub mod export;
pub mod formatters;

pub use display::{
    print_batch_report, print_board, print_game_over, print_lexicon_stats, print_suggestion,
    print_turn,
};
pub use export::{CsvResultSink, ResultSink};
