//! Game state machine
//!
//! The board, the turn/cursor bookkeeping and win/loss detection, plus
//! solution selection from a word provider and per-session statistics.

mod board;
mod provider;
mod state;
mod stats;

pub use board::{Board, Cell, Cursor, MAX_ATTEMPTS, Row};
pub use provider::{ProviderError, WordProvider, pick_solution};
pub use state::{Game, GamePhase, Signal};
pub use stats::Statistics;
