//! Wordle Game - CLI
//!
//! Play Wordle in a TUI (default) or line by line, or check a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{check_guess, run_simple},
    output::print_evaluation,
    wordlists::{WordList, loader::load_word_list},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'answers' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "answers")]
    wordlist: String,

    /// Seed for solution selection (same seed, same words)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score one guess against a given solution
    Check {
        /// The guessed word
        guess: String,

        /// The solution to score against
        solution: String,
    },
}

/// Set up tracing: to `log_file` if given, otherwise to stderr unless the TUI owns the terminal
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None if !tui => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        None => {}
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => {
            let words = load_word_list(&cli.wordlist)?;
            run_play_command(&words, make_rng(cli.seed))
        }
        Commands::Simple => {
            let words = load_word_list(&cli.wordlist)?;
            info!(words = words.len(), "Starting simple mode");
            run_simple(&words, &mut make_rng(cli.seed)).map(|_| ())
        }
        Commands::Check { guess, solution } => run_check_command(&guess, &solution),
    }
}

fn run_check_command(guess: &str, solution: &str) -> Result<()> {
    let result = check_guess(guess, solution)?;
    print_evaluation(&result.guess, &result.evaluation);
    Ok(())
}

fn run_play_command(words: &WordList, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, rng)?;
    run_tui(app)
}
