//! TUI rendering with ratatui
//!
//! Everything on screen is drawn from the current `RoundView`.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Difficulty, MAX_WRONG_STAGES, RoundStatus, alphabet::KEYBOARD_WIDTH};
use crate::engine::{KeyState, RoundView};
use crate::output::formatters::{key_label, length_hint, loss_message, win_message};
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
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &app.screen {
        Screen::DifficultySelect { selected } => render_picker(f, *selected, chunks[1]),
        Screen::Round { cursor, .. } => {
            if let Some(view) = app.round_view() {
                render_round(f, app, &view, *cursor, chunks[1]);
            }
        }
    }

    render_messages(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ВИСЕЛИЦА")
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

fn render_picker(f: &mut Frame, selected: usize, area: Rect) {
    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, difficulty)| {
            let text = format!("  {}) {:<8} {}", i + 1, difficulty.label(), difficulty.band());
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Выберите уровень сложности ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_round(f: &mut Frame, app: &App, view: &RoundView, cursor: usize, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and keyboard
        ])
        .split(area);

    // Frame plus borders, misses below
    let frame_height = u16::try_from(app.gallows.height()).unwrap_or(u16::MAX);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(frame_height.saturating_add(2)),
            Constraint::Min(3),
        ])
        .split(main_chunks[0]);

    let gallows = Paragraph::new(app.gallows.frame(view.wrong_count).to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(gallows, left[0]);

    let misses = view
        .misses
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let misses = Paragraph::new(Span::styled(misses, Style::default().fg(Color::Red)))
        .block(Block::default().title(" Мимо ").borders(Borders::ALL));
    f.render_widget(misses, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Stage gauge
            Constraint::Min(5),    // Keyboard
        ])
        .split(main_chunks[1]);

    render_word(f, view, right[0]);
    render_stage(f, view, right[1]);
    render_keyboard(f, view, cursor, right[2]);
}

fn render_word(f: &mut Frame, view: &RoundView, area: Rect) {
    let answer = view.answer.as_deref().unwrap_or_default();
    let (banner, color) = match view.status {
        RoundStatus::InProgress => (length_hint(view.length), Color::DarkGray),
        RoundStatus::Won => (win_message(answer), Color::Green),
        RoundStatus::Lost => (loss_message(answer), Color::Red),
    };

    let content = vec![
        Line::from(Span::styled(
            view.masked.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(banner, Style::default().fg(color))),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Слово ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_stage(f: &mut Frame, view: &RoundView, area: Rect) {
    let ratio = f64::from(view.wrong_count.min(MAX_WRONG_STAGES)) / f64::from(MAX_WRONG_STAGES);
    let color = if view.remaining_attempts() <= 1 {
        Color::Red
    } else {
        Color::Yellow
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Ошибки ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}/{MAX_WRONG_STAGES}", view.wrong_count));
    f.render_widget(gauge, area);
}

fn render_keyboard(f: &mut Frame, view: &RoundView, cursor: usize, area: Rect) {
    let locked = view.status.is_terminal();

    let lines: Vec<Line> = view
        .key_rows(KEYBOARD_WIDTH)
        .enumerate()
        .map(|(row, keys)| {
            let spans: Vec<Span> = keys
                .iter()
                .enumerate()
                .map(|(col, key)| {
                    let mut style = match key.state {
                        KeyState::Available => Style::default().fg(Color::White),
                        KeyState::Hit => Style::default().fg(Color::Green),
                        KeyState::Miss => Style::default().fg(Color::Red),
                    };
                    if locked {
                        style = style.add_modifier(Modifier::DIM);
                    } else if row * KEYBOARD_WIDTH + col == cursor {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(format!(" {} ", key_label(key)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Клавиатура ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
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
        List::new(messages).block(Block::default().title(" Сообщения ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.screen {
        Screen::DifficultySelect { .. } => "1-3 / ↑↓ Enter: уровень | q: выход",
        Screen::Round { state, .. } if state.status().is_terminal() => {
            "Enter / Esc: новая игра | Ctrl+C: выход"
        }
        Screen::Round { .. } => "Буква или ←↑↓→ Enter: ход | Esc: заново | Ctrl+C: выход",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
