//! TUI application state and logic

use crate::core::Letter;
use crate::game::{Game, Signal, Statistics};
use crate::input::Key;
use crate::output::format_signal;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info, instrument};

/// Application state
pub struct App<'a> {
    pub game: Game,
    pub words: &'a WordList,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Map a terminal key to a game key, dropping anything unrecognized
#[must_use]
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Letter::new(c).ok().map(Key::Letter),
        KeyCode::Backspace | KeyCode::Delete => Some(Key::Delete),
        KeyCode::Enter => Some(Key::Submit),
        _ => None,
    }
}

impl<'a> App<'a> {
    /// Create the app and deal the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no solution can be drawn from `words`.
    pub fn new(words: &'a WordList, mut rng: StdRng) -> Result<Self> {
        let game = Game::new(words, &mut rng)?;

        Ok(Self {
            game,
            words,
            rng,
            messages: vec![Message {
                text: "Type a guess and press Enter. Ctrl-N: new game, Esc: quit".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Handle one terminal key event
    #[instrument(skip_all, fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Enter if self.game.phase().is_over() => self.new_game(),
            code => {
                if let Some(key) = key_from_code(code) {
                    self.press(key);
                } else {
                    debug!("Ignoring key");
                }
            }
        }
    }

    /// Forward a normalized key to the game and report what it signalled
    pub fn press(&mut self, key: Key) {
        let Some(signal) = self.game.apply(key) else {
            return;
        };

        let style = match signal {
            Signal::NotEnoughLetters => MessageStyle::Error,
            Signal::Won { .. } => MessageStyle::Success,
            Signal::Lost { .. } => MessageStyle::Info,
        };
        self.stats.record(&signal);
        self.add_message(&format_signal(&signal), style);

        if self.game.phase().is_over() {
            self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match self.game.new_game(self.words, &mut self.rng) {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    info!("Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(stats) => {
            info!(
                games = stats.total_games,
                won = stats.games_won,
                "TUI session ended"
            );
            if stats.total_games > 0 {
                crate::output::print_statistics(&stats);
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "TUI failed");
            eprintln!("Error: {err}");
        }
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
