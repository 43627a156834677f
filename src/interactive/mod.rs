//! Interactive TUI
//!
//! A ratatui front end that draws the board and keyboard and forwards key
//! presses to the game.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, key_from_code, run_tui};
pub use rendering::ui;
