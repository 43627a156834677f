//! TUI rendering with ratatui
//!
//! Draws the board, the hint-shaded keyboard, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, Letter};
use crate::game::{Cell, GamePhase, MAX_ATTEMPTS};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn tile_style(feedback: Feedback) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match feedback {
        Feedback::Correct => base.fg(Color::Black).bg(Color::Green),
        Feedback::Present => base.fg(Color::Black).bg(Color::Yellow),
        Feedback::Absent => base.fg(Color::White).bg(Color::DarkGray),
        Feedback::Unused => base.fg(Color::White),
    }
}

fn tile(cell: &Cell) -> Span<'static> {
    let text = cell
        .letter
        .map_or_else(|| " _ ".to_string(), |l| format!(" {} ", l.as_char().to_ascii_uppercase()));
    Span::styled(text, tile_style(cell.feedback))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let cursor = app.game.cursor();
    let playing = app.game.phase() == GamePhase::Playing;

    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in app.game.board().rows().iter().enumerate() {
        let mut spans = Vec::new();
        for cell in row.cells() {
            spans.push(tile(cell));
            spans.push(Span::raw(" "));
        }
        if playing && i == cursor.row {
            spans.push(Span::styled("◀", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.game.solution() {
        Some(solution) => format!(" Solution: {} ", solution.text().to_uppercase()),
        None => format!(
            " Guess {} of {MAX_ATTEMPTS} ",
            (cursor.row + 1).min(MAX_ATTEMPTS)
        ),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.game.hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .filter_map(|c| Letter::new(c).ok())
                .flat_map(|l| {
                    [
                        Span::styled(
                            format!(" {} ", l.as_char().to_ascii_uppercase()),
                            tile_style(hints.feedback_for(l)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}% | Enter: Submit | Ctrl-N: New | Esc: Quit",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::input::Key;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn play(app: &mut App, guess: &str) {
        for key in Key::typed(guess).unwrap() {
            app.press(key);
        }
    }

    #[test]
    fn renders_board_letters_and_messages() {
        let list = WordList::new(vec![Word::new("crate").unwrap()]).unwrap();
        let mut app = App::new(&list, StdRng::seed_from_u64(0)).unwrap();
        play(&mut app, "slate");
        app.press(Key::parse("c").unwrap());

        let text = screen(&app);
        assert!(text.contains("WORDLE"));
        assert!(text.contains(" S   L   A   T   E "));
        assert!(text.contains(" C   _   _ "));
        assert!(text.contains("Guess 2 of 6"));
        assert!(!text.contains("CRATE"));
    }

    #[test]
    fn reveals_solution_after_loss() {
        let list = WordList::new(vec![Word::new("mount").unwrap()]).unwrap();
        let mut app = App::new(&list, StdRng::seed_from_u64(0)).unwrap();
        for _ in 0..6 {
            play(&mut app, "crane");
        }

        let text = screen(&app);
        assert!(text.contains("Solution: MOUNT"));
        assert!(text.contains("Game over! The word was MOUNT"));
        assert!(text.contains("Games: 1 | Won: 0"));
    }
}
