//! TUI rendering with ratatui
//!
//! Layout for the word scramble screen.

use super::app::{Alert, App, MessageStyle};
use crate::dictionary::SpellChecker;
use crate::output::formatters::{letter_badge, spaced_letters};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Root word and score
            Constraint::Length(3), // Input area
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Used words
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            spaced_letters(app.session.root_word()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Score: {}", app.session.score())),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" WORD SCRAMBLE ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let (content, style) = if app.input_buffer.is_empty() {
        (
            "Enter your word",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            app.input_buffer.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(content).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(input, area);
}

fn render_used_words<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .used_words()
        .iter()
        .map(|word| {
            let len = word.trim().chars().count();
            ListItem::new(Line::from(vec![
                Span::styled(letter_badge(len), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::raw(word.trim().to_string()),
            ]))
        })
        .collect();

    let title = format!(" Your Words ({}) ", app.session.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Longest word gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_longest_word(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_longest_word<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let root_len = app.session.root_word().chars().count();
    let longest = app
        .session
        .used_words()
        .iter()
        .map(|word| word.trim().chars().count())
        .max()
        .unwrap_or(0);
    let percent = if root_len == 0 {
        0
    } else {
        (longest * 100 / root_len).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Longest Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{longest}/{root_len} letters"));

    f.render_widget(gauge, area);
}

fn render_messages<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
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

fn render_status<C: SpellChecker, R: Rng>(f: &mut Frame, app: &App<C, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Best: {} | Words: {}",
        app.stats.rounds_played, app.stats.best_score, app.stats.total_words
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.alert.is_some() {
        "Enter/Esc: OK"
    } else {
        "Enter: Submit | Ctrl-R: Restart | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 30, f.area());

    let content = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rect of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
