//! Guess evaluation
//!
//! Compares a guess to the solution and classifies every position as
//! correct, present or absent, handling repeated letters the way Wordle does.

use super::word::{Letter, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Feedback for a single letter
///
/// `Unused` marks a cell (or keyboard key) that has not been scored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Rank used when merging hints: `Unused` < `Absent` < `Present` < `Correct`
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// True once a letter has been scored
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Unused)
    }

    /// Emoji square for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Unused => '⬜',
        }
    }
}

/// Result of evaluating one guess, one entry per guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Feedback; WORD_LENGTH]);

impl Evaluation {
    /// Evaluate `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and remove them from the pool
    ///    of the solution's remaining letters
    /// 2. Second pass: each other position claims one remaining occurrence of
    ///    its letter (present) or, if none is left, is absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, Feedback::*, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let solution = Word::new("allow").unwrap();
    ///
    /// assert_eq!(
    ///     Evaluation::evaluate(&guess, &solution).feedback(),
    ///     &[Present, Present, Correct, Absent, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut available = solution.letter_counts();

        // First pass: exact position matches
        for (i, (g, s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
            if g == s {
                result[i] = Feedback::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (slot, letter) in result.iter_mut().zip(guess.letters()) {
            if *slot == Feedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Correct)
    }

    /// Count the positions with the given feedback
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == feedback).count()
    }

    /// Best feedback each letter of `guess` earned in this evaluation
    ///
    /// A letter that appears twice, once correct and once absent, reports correct.
    #[must_use]
    pub fn best_per_letter(&self, guess: &Word) -> FxHashMap<Letter, Feedback> {
        let mut best: FxHashMap<Letter, Feedback> = FxHashMap::default();
        for (&letter, &feedback) in guess.letters().iter().zip(&self.0) {
            let entry = best.entry(letter).or_default();
            if feedback.rank() > entry.rank() {
                *entry = feedback;
            }
        }
        best
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
