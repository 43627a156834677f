//! Core domain types for Wordle
//!
//! Letters, words, guess evaluation and keyboard hints. Everything here is
//! pure and deterministic.

mod feedback;
mod hints;
mod word;

pub use feedback::{Evaluation, Feedback};
pub use hints::KeyboardHints;
pub use word::{Letter, WORD_LENGTH, Word, WordError};
