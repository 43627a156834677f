//! Turn-based game state machine
//!
//! `Game` owns the board, cursor, keyboard hints and phase, and is the only
//! thing that mutates them. Front ends feed it `Key`s and read snapshots back.

use super::board::{Board, Cursor, MAX_ATTEMPTS};
use super::provider::{ProviderError, WordProvider, pick_solution};
use crate::core::{Evaluation, KeyboardHints, Letter, Word};
use crate::input::Key;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Overall game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Advisory output of an operation, for the front end to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Submit pressed before the row had five letters
    NotEnoughLetters,
    /// The submitted row matched the solution
    Won { solution: Word, attempts: usize },
    /// The sixth row was submitted without a match
    Lost { solution: Word },
}

/// A single game of Wordle
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
    board: Board,
    cursor: Cursor,
    hints: KeyboardHints,
    phase: GamePhase,
    signal: Option<Signal>,
}

impl Game {
    /// Start a game with a solution drawn from `provider`
    ///
    /// # Errors
    /// Returns `ProviderError::Empty` if the provider has no words.
    pub fn new<P, R>(provider: &P, rng: &mut R) -> Result<Self, ProviderError>
    where
        P: WordProvider + ?Sized,
        R: Rng + ?Sized,
    {
        Ok(Self::with_solution(pick_solution(provider, rng)?))
    }

    /// Start a game with a known solution
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, GamePhase, Signal};
    /// use wordle_game::input::Key;
    ///
    /// let mut game = Game::with_solution(Word::new("crate").unwrap());
    /// for guess in ["slate", "crate"] {
    ///     for key in Key::typed(guess).unwrap() {
    ///         game.apply(key);
    ///     }
    /// }
    ///
    /// assert_eq!(game.phase(), GamePhase::Won);
    /// assert!(matches!(game.signal(), Some(Signal::Won { attempts: 2, .. })));
    /// ```
    #[must_use]
    pub fn with_solution(solution: Word) -> Self {
        Self {
            solution,
            board: Board::new(),
            cursor: Cursor::default(),
            hints: KeyboardHints::new(),
            phase: GamePhase::Playing,
            signal: None,
        }
    }

    /// Abandon the current game and start another
    ///
    /// State is only replaced if a solution could be drawn.
    ///
    /// # Errors
    /// Returns `ProviderError::Empty` if the provider has no words.
    #[instrument(skip_all, fields(previous = ?self.phase))]
    pub fn new_game<P, R>(&mut self, provider: &P, rng: &mut R) -> Result<(), ProviderError>
    where
        P: WordProvider + ?Sized,
        R: Rng + ?Sized,
    {
        *self = Self::new(provider, rng)?;
        info!("New game started");
        debug!(solution = %self.solution, "Solution drawn");
        Ok(())
    }

    /// Dispatch a normalized key event
    pub fn apply(&mut self, key: Key) -> Option<Signal> {
        match key {
            Key::Letter(letter) => {
                self.apply_letter(letter);
                None
            }
            Key::Delete => {
                self.apply_backspace();
                None
            }
            Key::Submit => self.apply_submit(),
        }
    }

    /// Type a letter into the active row
    ///
    /// No-op once the game is over or the row is full.
    #[instrument(skip(self), fields(row = self.cursor.row, col = self.cursor.col))]
    pub fn apply_letter(&mut self, letter: Letter) {
        if self.phase.is_over() || self.cursor.row_full() {
            return;
        }

        self.board
            .row_mut(self.cursor.row)
            .set_letter(self.cursor.col, Some(letter));
        self.cursor.col += 1;
        self.signal = None;
        debug!(%letter, "Letter entered");
    }

    /// Erase the last letter of the active row
    ///
    /// No-op once the game is over or the row is empty.
    #[instrument(skip(self), fields(row = self.cursor.row, col = self.cursor.col))]
    pub fn apply_backspace(&mut self) {
        if self.phase.is_over() || self.cursor.col == 0 {
            return;
        }

        self.cursor.col -= 1;
        self.board
            .row_mut(self.cursor.row)
            .set_letter(self.cursor.col, None);
        self.signal = None;
        debug!("Letter erased");
    }

    /// Submit the active row
    ///
    /// Scores the row, merges keyboard hints, then either ends the game or
    /// moves to the next row. Returns the signal raised, if any.
    #[instrument(skip(self), fields(row = self.cursor.row))]
    pub fn apply_submit(&mut self) -> Option<Signal> {
        if self.phase.is_over() {
            return None;
        }

        let Some(guess) = self
            .cursor
            .row_full()
            .then(|| self.board.row(self.cursor.row).word())
            .flatten()
        else {
            debug!(col = self.cursor.col, "Submit with incomplete row");
            return self.raise(Signal::NotEnoughLetters);
        };

        let evaluation = Evaluation::evaluate(&guess, &self.solution);
        self.board.row_mut(self.cursor.row).score(&evaluation);
        self.hints.merge(&guess, &evaluation);
        info!(%guess, feedback = %evaluation.to_emoji(), "Guess scored");

        if evaluation.is_win() {
            self.phase = GamePhase::Won;
            let attempts = self.cursor.row + 1;
            info!(attempts, "Game won");
            self.raise(Signal::Won {
                solution: self.solution.clone(),
                attempts,
            })
        } else if self.cursor.on_last_row() {
            self.phase = GamePhase::Lost;
            info!(solution = %self.solution, "Game lost");
            self.raise(Signal::Lost {
                solution: self.solution.clone(),
            })
        } else {
            self.cursor.row += 1;
            self.cursor.col = 0;
            self.signal = None;
            None
        }
    }

    fn raise(&mut self, signal: Signal) -> Option<Signal> {
        self.signal = Some(signal.clone());
        Some(signal)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The most recent signal, until a later operation replaces or clears it
    #[must_use]
    pub const fn signal(&self) -> Option<&Signal> {
        self.signal.as_ref()
    }

    /// The solution, revealed only once the game is over
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.phase.is_over().then_some(&self.solution)
    }

    /// Number of rows submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.board.scored_rows().count()
    }

    /// Letters typed into the active row so far
    #[must_use]
    pub fn pending_letters(&self) -> usize {
        if self.phase.is_over() { 0 } else { self.cursor.col }
    }

    /// Guesses still available, including the active row
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.attempts()
    }
}
