//! TUI application state and logic

use crate::core::Rejection;
use crate::dictionary::SpellChecker;
use crate::session::{GameSession, SubmissionOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<C: SpellChecker, R: Rng> {
    pub session: GameSession<C, R>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Modal error popup, dismissed with Enter or Esc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<&Rejection> for Alert {
    fn from(rejection: &Rejection) -> Self {
        Self {
            title: rejection.title().to_string(),
            message: rejection.message(),
        }
    }
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
    pub rounds_played: usize,
    pub best_score: u32,
    pub total_words: usize,
}

impl<C: SpellChecker, R: Rng> App<C, R> {
    #[must_use]
    pub fn new(session: GameSession<C, R>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: vec![
                Message {
                    text: "Welcome! Spell words using the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits, Ctrl-R restarts, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An open alert swallows everything until dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }

    /// Submit the current input buffer
    pub fn submit(&mut self) {
        match self.session.submit(&self.input_buffer) {
            SubmissionOutcome::Ignored => {}
            SubmissionOutcome::Accepted { word, score } => {
                self.stats.total_words += 1;
                self.stats.best_score = self.stats.best_score.max(score);
                self.add_message(
                    &format!("'{}' accepted! Score: {score}", word.trim()),
                    MessageStyle::Success,
                );
                self.input_buffer.clear();
            }
            SubmissionOutcome::Rejected(rejection) => {
                self.add_message(rejection.title(), MessageStyle::Error);
                self.alert = Some(Alert::from(&rejection));
            }
        }
    }

    /// Start a new round with a fresh root word
    pub fn restart(&mut self) {
        match self.session.start_game() {
            Ok(()) => {
                self.stats.rounds_played += 1;
                self.input_buffer.clear();
                self.alert = None;
                self.messages.clear();
                let text = format!(
                    "New round! Your word is '{}'.",
                    self.session.root_word()
                );
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => {
                tracing::error!(error = %e, "Restart failed");
                self.add_message(&format!("Could not restart: {e}"), MessageStyle::Error);
            }
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
/// Returns an error if terminal initialization, rendering, or event handling fails.
pub fn run_tui<C: SpellChecker, R: Rng>(app: App<C, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let score = res?;
    println!("Final score: {score}");
    Ok(())
}

fn run_app<B, C, R>(terminal: &mut Terminal<B>, mut app: App<C, R>) -> Result<u32>
where
    B: ratatui::backend::Backend,
    C: SpellChecker,
    R: Rng,
{
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

    Ok(app.session.score())
}
