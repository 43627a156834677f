//! Wordle Game
//!
//! A terminal Wordle: guess evaluation with correct duplicate-letter handling,
//! a turn-based game state machine, and TUI / line-mode front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Evaluation, Feedback, Word};
//!
//! let guess = Word::new("slate").unwrap();
//! let solution = Word::new("crate").unwrap();
//!
//! let evaluation = Evaluation::evaluate(&guess, &solution);
//! assert_eq!(evaluation.count(Feedback::Correct), 3);
//! println!("{}", evaluation.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Normalized key events
pub mod input;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
