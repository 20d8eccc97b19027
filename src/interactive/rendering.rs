//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game interface.

use super::app::{App, MessageStyle};
use crate::core::LetterState;
use crate::game::{Cell, FinishedState, KeyCap};
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
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn tile_style(state: Option<LetterState>) -> Style {
    let base = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    match state {
        Some(LetterState::Correct) => base.bg(Color::Green).fg(Color::Black),
        Some(LetterState::CorrectLetter) => base.bg(Color::Yellow).fg(Color::Black),
        Some(LetterState::ActiveRow) => base.bg(Color::DarkGray),
        Some(LetterState::Incorrect) => base.bg(Color::Black).fg(Color::Gray),
        Some(LetterState::Unanswered) | None => base,
    }
}

fn cell_span(cell: &Cell) -> Span<'static> {
    Span::styled(
        format!(" {} ", cell.letter.unwrap_or('·')),
        tile_style(Some(cell.state)),
    )
}

fn key_span(key: &KeyCap) -> Span<'static> {
    let style = match key.state {
        Some(LetterState::Incorrect) => Style::default().fg(Color::DarkGray),
        state => tile_style(state),
    };
    Span::styled(format!(" {} ", key.letter), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    let banner = match app.game.finished_state() {
        Some(FinishedState::Won) => Some(("WON", Color::Green)),
        Some(FinishedState::Lost) => Some(("LOST", Color::Red)),
        None if app.game.invalid_submit() => Some(("Word not in word list", Color::Red)),
        None => None,
    };
    lines.push(match banner {
        Some((text, color)) => Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    });

    for row in app.game.grid() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for cell in &row {
            spans.push(cell_span(cell));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .game
        .keyboard()
        .iter()
        .map(|row| Line::from(row.iter().map(key_span).collect::<Vec<_>>()))
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
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

    if let Some(share) = app.game.share_text() {
        items.push(ListItem::new(""));
        items.extend(share.lines().map(|line| ListItem::new(line.to_string())));
    }

    let messages = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let row_text = format!(
        "Guess: {}/{}",
        (app.game.current_row() + 1).min(crate::core::HEIGHT),
        crate::core::HEIGHT
    );
    f.render_widget(
        Paragraph::new(row_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Enter: Submit | Ctrl-N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
