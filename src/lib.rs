//! Wordle Game
//!
//! A single-player five-letter word game with daily and practice rounds, hard
//! mode, statistics and persisted progress, playable in a TUI or on the command line.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GuessEvaluation, LetterState, Word};
//!
//! let solution = Word::new("crane").unwrap();
//! let evaluation = GuessEvaluation::evaluate("trace", &solution);
//!
//! assert_eq!(evaluation.states()[0], LetterState::Absent);
//! assert_eq!(evaluation.states()[1], LetterState::Correct);
//! ```

// Core domain types
pub mod core;

// Round state machine, hard mode, statistics
pub mod game;

// Settings and statistics carried with the round
pub mod session;

// Player preferences
pub mod settings;

// User-facing text
pub mod i18n;

// Word lists
pub mod wordlists;

// Persistence and sanitizing of stored state
pub mod storage;

// Clipboard for share text
pub mod clipboard;

// Session plus I/O
pub mod controller;

// Data directory and word list configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
