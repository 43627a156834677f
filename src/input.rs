//! Normalized key events
//!
//! Front ends translate raw input into a `Key` before it reaches the game.
//! Anything that is not a letter, delete or submit is rejected here.

use crate::core::Letter;
use derive_more::{Display, Error};

/// A normalized input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(Letter),
    Delete,
    Submit,
}

/// Error for tokens that are not a recognized key
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized key: {token:?}")]
pub struct InputError {
    pub token: String,
}

impl Key {
    /// Parse a key token
    ///
    /// Accepts a single ASCII letter in either case, `Enter`, and
    /// `Backspace` / `Delete` / `←`.
    ///
    /// # Errors
    /// Returns `InputError` for any other token.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::input::Key;
    ///
    /// assert!(matches!(Key::parse("Q"), Ok(Key::Letter(_))));
    /// assert_eq!(Key::parse("Enter"), Ok(Key::Submit));
    /// assert_eq!(Key::parse("←"), Ok(Key::Delete));
    /// assert!(Key::parse("Shift").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, InputError> {
        match token {
            "Enter" => Ok(Self::Submit),
            "Backspace" | "Delete" | "←" => Ok(Self::Delete),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Letter::new(c).map(Self::Letter).map_err(|_| InputError {
                        token: token.to_string(),
                    }),
                    _ => Err(InputError {
                        token: token.to_string(),
                    }),
                }
            }
        }
    }

    /// Keys that type out `word` letter by letter, then submit
    ///
    /// # Errors
    /// Returns `InputError` if `word` contains anything but letters.
    pub fn typed(word: &str) -> Result<Vec<Self>, InputError> {
        let mut keys = word
            .chars()
            .map(|c| {
                Letter::new(c).map(Self::Letter).map_err(|_| InputError {
                    token: c.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        keys.push(Self::Submit);
        Ok(keys)
    }
}
