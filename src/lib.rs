//! Hangman Solver
//!
//! A Hangman simulator over frequency-weighted English words, with letter
//! guessing strategies ranging from plain frequency order to weighted
//! pattern matching and length-conditioned letter distributions.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{GuessPattern, LetterSet};
//! use hangman_solver::game::Board;
//! use hangman_solver::lexicon::{LetterSource, WordSource};
//! use hangman_solver::solver::{Knowledge, Strategy, StrategyKind, StrategyType};
//!
//! let knowledge = Knowledge::load(&WordSource::Embedded, &LetterSource::Embedded).unwrap();
//! let strategy = StrategyType::from_kind(StrategyKind::Distribution, &knowledge);
//!
//! let board = Board::from_parts(GuessPattern::parse("_a__").unwrap(), LetterSet::from_letters("ae"), 2);
//! let letter = strategy.next_guess(&board).unwrap();
//! assert!(!board.guessed().contains(letter));
//! ```

// Core domain types
pub mod core;

// Crate-wide errors
pub mod error;

// Word and letter data
pub mod lexicon;

// Guessing strategies
pub mod solver;

// Game state machine and players
pub mod game;

// Command implementations
pub mod commands;

// Terminal output and export
pub mod output;

pub use error::{GuessError, HangmanError, Result};
