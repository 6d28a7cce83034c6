//! TUI rendering with ratatui
//!
//! Gallows, pattern and family breakdown for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🪢 HANGMAN - {} letters, {} difficulty",
        app.config.word_length, app.config.difficulty
    ))
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),     // Gallows and word
            Constraint::Percentage(50), // Families
            Constraint::Min(3),         // History
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_families(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(round) = app.round() {
        let max = round.max_wrong_guesses();
        let wrong = max - round.wrong_guesses_left();
        let word_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = gallows(wrong, max)
            .iter()
            .map(|row| Line::from(*row))
            .collect();
        lines.push(Line::from(vec![
            Span::raw("Word:    "),
            Span::styled(round.pattern().spaced(), word_style),
        ]));
        lines.push(Line::from(format!(
            "Guessed: {}",
            round.guessed_letters_string()
        )));
        lines
    } else {
        vec![Line::from("No round in progress")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_families(f: &mut Frame, app: &App, area: Rect) {
    let chosen = app.round().map(|r| r.current_pattern()).unwrap_or_default();

    let mut families: Vec<(&String, &usize)> = app.last_families.iter().collect();
    families.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let items: Vec<ListItem> = if families.is_empty() {
        vec![ListItem::new("No guesses yet")]
    } else {
        families
            .iter()
            .map(|(pattern, size)| {
                let style = if **pattern == chosen {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!("{pattern}  {size:>5}")).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Last Split ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let style = if entry.hit {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            let content = format!(
                "{}: {} {} [{} families] {} → {}",
                app.history.len() - i,
                entry.letter.to_ascii_uppercase(),
                entry.pattern,
                entry.families,
                entry.candidates_before,
                entry.candidates_after
            );
            ListItem::new(content).style(style)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Budget gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let (left, max) = app
        .round()
        .map_or((0, 0), |r| (r.wrong_guesses_left(), r.max_wrong_guesses()));
    let percent = if max == 0 {
        0
    } else {
        u16::try_from(left * 100 / max).unwrap_or(100)
    };
    let color = if left * 4 <= max { Color::Red } else { Color::Green };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{max}"));

    f.render_widget(gauge, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for new game or 'q' to quit ",
            app.answer
                .as_deref()
                .map_or_else(String::new, |w| format!("The word was {w}")),
            if app.round().is_some_and(|r| r.is_solved()) {
                Color::Green
            } else {
                Color::Red
            },
        ),
        InputMode::Guessing => (
            " Type a letter to guess | ESC to quit ",
            app.round()
                .map(|r| r.pattern().spaced())
                .unwrap_or_default(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Difficulty: {}", app.config.difficulty);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.get_candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Game",
        InputMode::Guessing => "a-z: Guess | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
