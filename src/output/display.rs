//! Colored terminal output for the line-oriented front ends

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, format_signal, share_grid};
use crate::core::{Evaluation, Feedback, Letter, Word};
use crate::game::{Board, Game, GamePhase, MAX_ATTEMPTS, Row, Signal, Statistics};
use colored::{ColoredString, Colorize};

fn paint(text: &str, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", text.to_uppercase());
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
        Feedback::Unused => text.normal(),
    }
}

/// Format one board row as colored tiles
#[must_use]
pub fn format_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| {
            let letter = cell.letter.map_or_else(|| "·".to_string(), |l| l.to_string());
            paint(&letter, cell.feedback).to_string()
        })
        .collect()
}

/// Print the submitted rows of the board
pub fn print_board(board: &Board) {
    for row in board.scored_rows() {
        println!("  {}", format_row(row));
    }
}

/// Print the keyboard with each key shaded by its hint
pub fn print_keyboard(game: &Game) {
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = keys
            .chars()
            .filter_map(|c| Letter::new(c).ok())
            .map(|l| paint(&l.to_string(), game.hints().feedback_for(l)).to_string())
            .collect();
        println!("  {}{line}", " ".repeat(indent * 2));
    }
}

/// Print a signal in the style matching its outcome
pub fn print_signal(signal: &Signal) {
    let text = format_signal(signal);
    match signal {
        Signal::NotEnoughLetters => println!("{}", text.yellow()),
        Signal::Won { .. } => println!("\n{}", text.green().bold()),
        Signal::Lost { .. } => println!("\n{}", text.red().bold()),
    }
}

/// Print the end-of-game summary with the emoji grid
pub fn print_game_over(game: &Game) {
    if let Some(signal) = game.signal() {
        print_signal(signal);
    }
    let score = if game.phase() == GamePhase::Won {
        game.attempts().to_string()
    } else {
        "X".to_string()
    };
    println!("\nWordle {score}/{MAX_ATTEMPTS}\n{}\n", share_grid(game.board()));
}

/// Print a single evaluation (used by `check`)
pub fn print_evaluation(guess: &Word, evaluation: &Evaluation) {
    let tiles: String = guess
        .letters()
        .iter()
        .zip(evaluation.feedback())
        .map(|(l, &f)| paint(&l.to_string(), f).to_string())
        .collect();
    println!("  {tiles}  {}", evaluation.to_emoji());
}

/// Print the session statistics and guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    if stats.games_won == 0 {
        return;
    }

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses}: {} {count}", bar.green());
    }
}
