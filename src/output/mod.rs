//! Terminal output formatting
//!
//! Display utilities for the line-oriented front ends and text shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_evaluation, print_game_over, print_keyboard, print_signal,
    print_statistics,
};
pub use formatters::{format_signal, share_grid};
