//! TUI state and key handling

use crate::game::{EngineConfig, FinishedState, Game, SubmitOutcome};
use crate::wordlists::{WordBank, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tracing::info;

const MAX_MESSAGES: usize = 5;

/// State of one TUI run: the live game, recent messages and session stats
pub struct App {
    pub game: Game,
    pub words: Arc<WordBank>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    fn record(&mut self, finished: FinishedState, guesses: usize) {
        self.total_games += 1;
        if finished == FinishedState::Won {
            self.games_won += 1;
            if guesses < self.guess_distribution.len() {
                self.guess_distribution[guesses] += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(words: Arc<WordBank>, config: EngineConfig) -> Self {
        let mut game = Game::with_config(words.clone(), config);
        game.initialize(words.random_word());

        Self {
            game,
            words,
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn new_game(&mut self) {
        self.game.initialize(self.words.random_word());
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Apply one key press
    pub async fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => self.game.add_letter(c),
            KeyCode::Backspace => self.game.backspace(),
            KeyCode::Enter => self.submit().await,
            _ => {}
        }
    }

    pub async fn submit(&mut self) {
        if self.game.finished_state().is_some() {
            self.add_message("Press Ctrl-N for a new game.", MessageStyle::Info);
            return;
        }

        match self.game.submit().await {
            SubmitOutcome::Ignored => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            SubmitOutcome::Rejected => {
                self.add_message("Word not in word list", MessageStyle::Error);
            }
            SubmitOutcome::Accepted => self.check_finished(),
        }
    }

    fn check_finished(&mut self) {
        let Some(finished) = self.game.finished_state() else {
            return;
        };

        let guesses = self.game.current_row();
        self.stats.record(finished, guesses);
        info!(result = %finished, guesses, "game finished");

        match finished {
            FinishedState::Won => {
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            FinishedState::Lost => {
                let answer = self
                    .game
                    .answer()
                    .map(|w| w.text().to_string())
                    .unwrap_or_default();
                self.add_message(&format!("The word was {answer}"), MessageStyle::Error);
            }
        }
        self.add_message("Press Ctrl-N for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Take over the terminal and play until the user quits
///
/// # Errors
///
/// Returns an error if raw mode or the alternate screen cannot be set up or
/// torn down, or if drawing or reading events fails.
pub async fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Release and repeat events would double-type letters
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key).await;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    fn app() -> App {
        let answers = words_from_slice(&["crane"]);
        let allowed = words_from_slice(&["slate"]);
        let words = Arc::new(WordBank::new(answers, &allowed).unwrap());
        App::new(words, EngineConfig::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_and_enter(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(press(KeyCode::Char(c))).await;
        }
        app.handle_key(press(KeyCode::Enter)).await;
    }

    #[tokio::test]
    async fn typing_and_winning_updates_stats() {
        let mut app = app();
        assert_eq!(app.game.answer(), Some(&Word::new("crane").unwrap()));

        type_and_enter(&mut app, "slate").await;
        type_and_enter(&mut app, "crane").await;

        assert_eq!(app.game.finished_state(), Some(FinishedState::Won));
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn short_and_unknown_words_report_errors() {
        let mut app = app();

        type_and_enter(&mut app, "cra").await;
        assert_eq!(app.messages.last().unwrap().text, "Not enough letters");

        app.handle_key(press(KeyCode::Backspace)).await;
        type_and_enter(&mut app, "zzzzz").await;
        assert_eq!(app.messages.last().unwrap().text, "Word not in word list");
        assert!(app.game.invalid_submit());
    }

    #[tokio::test]
    async fn ctrl_n_starts_new_game_and_esc_quits() {
        let mut app = app();
        type_and_enter(&mut app, "crane").await;

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
            .await;
        assert_eq!(app.game.finished_state(), None);
        assert_eq!(app.game.current_row(), 0);

        app.handle_key(press(KeyCode::Esc)).await;
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
