//! The 6×5 guess grid and the input cursor

use crate::core::{Evaluation, Feedback, Letter, WORD_LENGTH, Word};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<Letter>,
    pub feedback: Feedback,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// A row of five cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// True once the row has been submitted and scored
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.cells.iter().all(|c| c.feedback.is_scored())
    }

    /// True if no letter has been typed into the row
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// The row's letters as a word, if all five are filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let letters: Option<Vec<Letter>> = self.cells.iter().map(|c| c.letter).collect();
        letters
            .and_then(|l| <[Letter; WORD_LENGTH]>::try_from(l).ok())
            .map(Word::from_letters)
    }

    /// The evaluation stored in a scored row
    #[must_use]
    pub fn evaluation(&self) -> Option<[Feedback; WORD_LENGTH]> {
        self.is_scored().then(|| self.cells.map(|c| c.feedback))
    }

    pub(crate) fn set_letter(&mut self, col: usize, letter: Option<Letter>) {
        self.cells[col] = Cell {
            letter,
            feedback: Feedback::Unused,
        };
    }

    pub(crate) fn score(&mut self, evaluation: &Evaluation) {
        for (cell, &feedback) in self.cells.iter_mut().zip(evaluation.feedback()) {
            cell.feedback = feedback;
        }
    }
}

/// All six rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    rows: [Row; MAX_ATTEMPTS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Get the row at `index` (0-5)
    ///
    /// # Panics
    /// Panics if index >= 6
    #[must_use]
    pub const fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// Submitted rows in order, with their guesses
    pub fn scored_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().take_while(|r| r.is_scored())
    }

    /// True if nothing has been typed or scored anywhere
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| *r == Row::default())
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }
}

/// Position of the next letter to be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// True if the active row has all five letters
    #[must_use]
    pub const fn row_full(&self) -> bool {
        self.col == WORD_LENGTH
    }

    /// True if the active row is the last one
    #[must_use]
    pub const fn on_last_row(&self) -> bool {
        self.row + 1 == MAX_ATTEMPTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_row(word: &str) -> Row {
        let mut row = Row::default();
        for (col, c) in word.chars().enumerate() {
            row.set_letter(col, Some(Letter::new(c).unwrap()));
        }
        row
    }

    #[test]
    fn new_board_is_empty_and_unscored() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.scored_rows().count(), 0);
        for row in board.rows() {
            assert!(row.cells().iter().all(|c| *c == Cell::default()));
        }
    }

    #[test]
    fn row_word_requires_all_letters() {
        let mut row = filled_row("cra");
        assert_eq!(row.word(), None);

        row.set_letter(3, Some(Letter::new('t').unwrap()));
        row.set_letter(4, Some(Letter::new('e').unwrap()));
        assert_eq!(row.word(), Some(Word::new("crate").unwrap()));
    }

    #[test]
    fn scoring_a_row() {
        let guess = Word::new("slate").unwrap();
        let solution = Word::new("crate").unwrap();
        let mut row = filled_row("slate");
        assert!(!row.is_scored());
        assert_eq!(row.evaluation(), None);

        let evaluation = Evaluation::evaluate(&guess, &solution);
        row.score(&evaluation);

        assert!(row.is_scored());
        assert_eq!(row.evaluation(), Some(*evaluation.feedback()));
    }

    #[test]
    fn cursor_helpers() {
        assert!(!Cursor::default().row_full());
        assert!(Cursor { row: 0, col: 5 }.row_full());
        assert!(Cursor { row: 5, col: 0 }.on_last_row());
        assert!(!Cursor { row: 4, col: 5 }.on_last_row());
    }
}
