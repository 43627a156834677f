//! Wordle letter and word representation
//!
//! A `Letter` is one validated lowercase ASCII letter; a `Word` is exactly five of them.

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A single lowercase letter a-z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for invalid letters and words
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    #[display("Word must be exactly 5 letters, got {len}")]
    InvalidLength { len: usize },
    #[display("Word must contain only ASCII letters")]
    NonAscii,
    #[display("Not a letter: {found:?}")]
    InvalidCharacter { found: char },
}

impl Letter {
    /// Create a letter, normalizing case
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacter` for anything outside a-z / A-Z.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, WordError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(WordError::InvalidCharacter { found: c })
        }
    }

    /// The letter as a lowercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// The letter as a lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Iterate over a..=z
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A 5-letter Wordle word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRATE").unwrap();
    /// assert_eq!(word.text(), "crate");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength { len: text.len() });
        }

        let mut letters = [Letter(b'a'); WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::new(c)?;
        }

        Ok(Self::from_letters(letters))
    }

    /// Build a word from five already-validated letters
    #[must_use]
    pub fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        let text = letters.iter().map(|l| l.as_char()).collect();
        Self { text, letters }
    }

    /// Get the word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by evaluation to account for duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<Letter, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
