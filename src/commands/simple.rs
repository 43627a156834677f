//! Simple interactive CLI mode
//!
//! Line-based play without a TUI: each line typed is one guess.

use crate::core::WORD_LENGTH;
use crate::game::{Game, MAX_ATTEMPTS, Signal, Statistics, WordProvider};
use crate::input::Key;
use crate::output::{print_board, print_game_over, print_keyboard, print_signal, print_statistics};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or the provider has no words.
pub fn run_simple<P, R>(provider: &P, rng: &mut R) -> Result<Statistics>
where
    P: WordProvider + ?Sized,
    R: Rng + ?Sized,
{
    let stdin = io::stdin();
    play_lines(provider, rng, stdin.lock())
}

/// Play games reading guesses and commands from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading `input` fails or the provider has no words.
pub fn play_lines<P, R, B>(provider: &P, rng: &mut R, mut input: B) -> Result<Statistics>
where
    P: WordProvider + ?Sized,
    R: Rng + ?Sized,
    B: BufRead,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden 5-letter word in {MAX_ATTEMPTS} tries.");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let mut game = Game::new(provider, rng)?;
    let mut stats = Statistics::default();

    loop {
        if game.phase().is_over() {
            print_game_over(&game);
            print_statistics(&stats);

            match prompt(&mut input, "\nPlay again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    game.new_game(provider, rng)?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let label = format!("Guess {}/{MAX_ATTEMPTS}", game.attempts() + 1);
        let Some(line) = prompt(&mut input, &label)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                info!("Game abandoned");
                game.new_game(provider, rng)?;
                println!("\n🔄 New game started!\n");
            }
            guess => {
                if let Some(signal) = submit_line(&mut game, guess) {
                    stats.record(&signal);
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Feed one typed guess to the game as key events and show the result
///
/// Returns the game-ending signal, if the guess ended the game.
fn submit_line(game: &mut Game, guess: &str) -> Option<Signal> {
    if guess.chars().count() > WORD_LENGTH {
        println!("{}", "Too many letters".yellow());
        return None;
    }

    let keys = match Key::typed(guess) {
        Ok(keys) => keys,
        Err(e) => {
            warn!(error = %e, "Rejected guess");
            println!("{}", format!("❌ {e}").red());
            return None;
        }
    };

    let mut signal = None;
    for key in keys {
        signal = game.apply(key);
    }

    match signal {
        Some(Signal::NotEnoughLetters) => {
            print_signal(&Signal::NotEnoughLetters);
            // Each line is a whole guess, so discard the partial row
            while game.cursor().col > 0 {
                game.apply(Key::Delete);
            }
            None
        }
        Some(end) => {
            print_board(game.board());
            Some(end)
        }
        None => {
            print_board(game.board());
            println!();
            print_keyboard(game);
            println!();
            None
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<B: BufRead>(input: &mut B, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(solution: &str, input: &str) -> Statistics {
        let words = vec![Word::new(solution).unwrap()];
        let mut rng = StdRng::seed_from_u64(0);
        play_lines(&words, &mut rng, input.as_bytes()).unwrap()
    }

    #[test]
    fn win_then_stop() {
        let stats = run("crate", "slate\ncrate\nno\n");
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
    }

    #[test]
    fn loss_after_six_guesses() {
        let stats = run("mount", "crane\ncrane\ncrane\ncrane\ncrane\ncrane\nno\n");
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn bad_lines_do_not_use_a_guess() {
        // Short, long and non-letter lines are all rejected before scoring
        let stats = run(
            "crate",
            "cra\ncrates\ncr4te\ncrane\ncrane\ncrane\ncrane\ncrane\ncrate\nno\n",
        );
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[6], 1);
    }

    #[test]
    fn play_again_starts_a_fresh_game() {
        let stats = run("crate", "crate\nyes\ncrate\nn\n");
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.guess_distribution[1], 2);
    }

    #[test]
    fn new_mid_game_forfeits_without_recording() {
        let stats = run("crate", "slate\nnew\ncrate\nno\n");
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn quit_and_eof_end_the_session() {
        assert_eq!(run("crate", "quit\n"), Statistics::default());
        assert_eq!(run("crate", "slate\n"), Statistics::default());
    }

    #[test]
    fn empty_provider_is_an_error() {
        let words: Vec<Word> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(play_lines(&words, &mut rng, "crate\n".as_bytes()).is_err());
    }
}
