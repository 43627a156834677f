//! Keyboard hints
//!
//! Tracks the best feedback seen for each letter across all submitted guesses.

use super::feedback::{Evaluation, Feedback};
use super::word::{Letter, Word};
use rustc_hash::FxHashMap;

/// Best feedback so far per letter
///
/// A letter's hint is only ever upgraded (`Absent` < `Present` < `Correct`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    best: FxHashMap<Letter, Feedback>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded hint for `letter`, `None` if it has never been submitted
    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<Feedback> {
        self.best.get(&letter).copied()
    }

    /// Hint for `letter`, with `Feedback::Unused` standing in for "never submitted"
    #[must_use]
    pub fn feedback_for(&self, letter: Letter) -> Feedback {
        self.get(letter).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Merge one scored guess into the hints
    ///
    /// Each letter contributes its best feedback within the guess, and replaces
    /// the recorded hint only if it ranks strictly higher.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, Feedback, KeyboardHints, Letter, Word};
    ///
    /// let solution = Word::new("crate").unwrap();
    /// let mut hints = KeyboardHints::new();
    ///
    /// for guess in ["trace", "slate"] {
    ///     let guess = Word::new(guess).unwrap();
    ///     hints.merge(&guess, &Evaluation::evaluate(&guess, &solution));
    /// }
    ///
    /// let t = Letter::new('t').unwrap();
    /// assert_eq!(hints.get(t), Some(Feedback::Correct));
    /// ```
    pub fn merge(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (letter, feedback) in evaluation.best_per_letter(guess) {
            self.upgrade(letter, feedback);
        }
    }

    /// Record `feedback` for `letter` if it outranks the current hint
    ///
    /// Returns true if the hint changed.
    pub fn upgrade(&mut self, letter: Letter, feedback: Feedback) -> bool {
        let current = self.feedback_for(letter);
        if feedback.rank() > current.rank() {
            self.best.insert(letter, feedback);
            true
        } else {
            false
        }
    }

    /// Iterate over every letter that has a recorded hint
    pub fn iter(&self) -> impl Iterator<Item = (Letter, Feedback)> + '_ {
        self.best.iter().map(|(&letter, &feedback)| (letter, feedback))
    }

    pub fn clear(&mut self) {
        self.best.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{Absent, Correct, Present};

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn merge_all(solution: &str, guesses: &[&str]) -> KeyboardHints {
        let solution = Word::new(solution).unwrap();
        let mut hints = KeyboardHints::new();
        for guess in guesses {
            let guess = Word::new(guess).unwrap();
            hints.merge(&guess, &Evaluation::evaluate(&guess, &solution));
        }
        hints
    }

    #[test]
    fn starts_empty() {
        let hints = KeyboardHints::new();
        assert!(hints.is_empty());
        assert_eq!(hints.get(letter('a')), None);
        assert_eq!(hints.feedback_for(letter('a')), Feedback::Unused);
    }

    #[test]
    fn unset_ranks_below_absent() {
        let mut hints = KeyboardHints::new();
        assert!(hints.upgrade(letter('q'), Absent));
        assert_eq!(hints.get(letter('q')), Some(Absent));
    }

    #[test]
    fn never_downgrades() {
        let mut hints = KeyboardHints::new();
        assert!(hints.upgrade(letter('a'), Correct));
        assert!(!hints.upgrade(letter('a'), Present));
        assert!(!hints.upgrade(letter('a'), Absent));
        assert!(!hints.upgrade(letter('a'), Correct));
        assert_eq!(hints.get(letter('a')), Some(Correct));
    }

    #[test]
    fn upgrades_present_to_correct() {
        // t and c are present after "trace", correct after "crate"
        let hints = merge_all("crate", &["trace", "crate"]);
        assert_eq!(hints.get(letter('t')), Some(Correct));
        assert_eq!(hints.get(letter('c')), Some(Correct));
    }

    #[test]
    fn duplicate_letter_contributes_its_best() {
        // l: present, correct and absent within the same guess
        let hints = merge_all("allow", &["lolly"]);
        assert_eq!(hints.get(letter('l')), Some(Correct));
        assert_eq!(hints.get(letter('o')), Some(Present));
        assert_eq!(hints.get(letter('y')), Some(Absent));
        assert_eq!(hints.len(), 3);
    }

    #[test]
    fn hints_are_monotonic_over_a_game() {
        let solution = Word::new("mount").unwrap();
        let guesses = ["toast", "unmet", "count", "mouth", "mount"];
        let mut hints = KeyboardHints::new();
        let mut previous = hints.clone();

        for guess in guesses {
            let guess = Word::new(guess).unwrap();
            hints.merge(&guess, &Evaluation::evaluate(&guess, &solution));

            for l in Letter::all() {
                assert!(
                    hints.feedback_for(l).rank() >= previous.feedback_for(l).rank(),
                    "hint for {l} was downgraded after {guess}"
                );
            }
            previous = hints.clone();
        }
    }

    #[test]
    fn clear_resets() {
        let mut hints = merge_all("crate", &["slate"]);
        assert!(!hints.is_empty());
        hints.clear();
        assert!(hints.is_empty());
    }
}
