//! Formatting utilities shared by the terminal front ends

use crate::game::{Board, Signal};

/// QWERTY layout used to draw keyboard hints
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// User-facing text for a signal
#[must_use]
pub fn format_signal(signal: &Signal) -> String {
    match signal {
        Signal::NotEnoughLetters => "Not enough letters".to_string(),
        Signal::Won { attempts, .. } => {
            let praise = match attempts {
                1 => "Genius",
                2 => "Magnificent",
                3 => "Impressive",
                4 => "Splendid",
                5 => "Great",
                _ => "Phew",
            };
            format!("Congratulations! You won! {praise} ({attempts}/6)")
        }
        Signal::Lost { solution } => {
            format!("Game over! The word was {}", solution.text().to_uppercase())
        }
    }
}

/// Emoji grid of the submitted rows, one line per guess
#[must_use]
pub fn share_grid(board: &Board) -> String {
    board
        .scored_rows()
        .map(|row| row.cells().iter().map(|c| c.feedback.emoji()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Game;
    use crate::input::Key;

    fn play(solution: &str, guesses: &[&str]) -> Game {
        let mut game = Game::with_solution(Word::new(solution).unwrap());
        for guess in guesses {
            for key in Key::typed(guess).unwrap() {
                game.apply(key);
            }
        }
        game
    }

    #[test]
    fn signal_text() {
        assert_eq!(format_signal(&Signal::NotEnoughLetters), "Not enough letters");
        assert_eq!(
            format_signal(&Signal::Lost {
                solution: Word::new("mount").unwrap()
            }),
            "Game over! The word was MOUNT"
        );
        assert_eq!(
            format_signal(&Signal::Won {
                solution: Word::new("crate").unwrap(),
                attempts: 2
            }),
            "Congratulations! You won! Magnificent (2/6)"
        );
    }

    #[test]
    fn share_grid_lists_scored_rows() {
        let game = play("crate", &["slate", "crate"]);
        assert_eq!(share_grid(game.board()), "⬜⬜🟩🟩🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_ignores_unsubmitted_letters() {
        let mut game = play("crate", &["slate"]);
        game.apply(Key::parse("c").unwrap());
        assert_eq!(share_grid(game.board()), "⬜⬜🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
