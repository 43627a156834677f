//! Word lists for drawing solutions
//!
//! Provides the embedded answer list and a non-empty `WordList` wrapper that
//! acts as the game's word provider.

mod embedded;
pub mod loader;

use crate::core::Word;
use crate::game::WordProvider;
use derive_more::{Display, Error};

pub use embedded::{ANSWERS, ANSWERS_COUNT};

/// Error building a word list
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordListError {
    #[display("Word list contains no valid 5-letter words")]
    Empty,
}

/// A non-empty list of candidate solutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Wrap a list of words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The embedded answer list
    #[must_use]
    pub fn answers() -> Self {
        Self {
            words: loader::words_from_slice(ANSWERS),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordProvider for WordList {
    fn words(&self) -> &[Word] {
        &self.words
    }
}
