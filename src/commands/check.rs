//! Guess check command
//!
//! Scores one guess against a given solution without starting a game.

use crate::core::{Evaluation, Word, WordError};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub solution: Word,
    pub evaluation: Evaluation,
}

/// Evaluate `guess` against `solution`
///
/// # Errors
///
/// Returns `WordError` if either input is not a 5-letter word.
pub fn check_guess(guess: &str, solution: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let evaluation = Evaluation::evaluate(&guess, &solution);

    Ok(CheckResult {
        guess,
        solution,
        evaluation,
    })
}
