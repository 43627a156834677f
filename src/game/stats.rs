//! Session statistics
//!
//! Counts finished games for the current process only; nothing is persisted.

use super::board::MAX_ATTEMPTS;
use super::state::Signal;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins in `n` guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Record the outcome carried by a game-ending signal
    ///
    /// Other signals are ignored.
    pub fn record(&mut self, signal: &Signal) {
        match signal {
            Signal::Won { attempts, .. } => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(*attempts) {
                    *slot += 1;
                }
            }
            Signal::Lost { .. } => self.total_games += 1,
            Signal::NotEnoughLetters => {}
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
