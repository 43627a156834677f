//! Solution selection
//!
//! The game draws its solution from a `WordProvider` using a caller-supplied
//! random number generator, so tests can fix the word with a seeded RNG.

use crate::core::Word;
use derive_more::{Display, Error};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Source of candidate solutions
pub trait WordProvider {
    /// Candidate solutions, in order
    fn words(&self) -> &[Word];
}

impl WordProvider for [Word] {
    fn words(&self) -> &[Word] {
        self
    }
}

impl WordProvider for Vec<Word> {
    fn words(&self) -> &[Word] {
        self
    }
}

/// Error drawing a solution
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ProviderError {
    #[display("Word provider has no words")]
    Empty,
}

/// Pick a solution uniformly at random
///
/// # Errors
/// Returns `ProviderError::Empty` if the provider has no words.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use wordle_game::core::Word;
/// use wordle_game::game::pick_solution;
///
/// let words = vec![Word::new("crate").unwrap()];
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(pick_solution(&words, &mut rng).unwrap().text(), "crate");
/// ```
pub fn pick_solution<P, R>(provider: &P, rng: &mut R) -> Result<Word, ProviderError>
where
    P: WordProvider + ?Sized,
    R: Rng + ?Sized,
{
    provider
        .words()
        .choose(rng)
        .cloned()
        .ok_or(ProviderError::Empty)
}
