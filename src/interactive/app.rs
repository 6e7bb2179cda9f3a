//! TUI application state and logic

use crate::core::{Difficulty, GuessOutcome, RoundState, alphabet::KEYBOARD_WIDTH};
use crate::engine::{GameEngine, RoundView};
use crate::gallows::Gallows;
use crate::output::formatters::{loss_message, outcome_message, win_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen is showing
#[derive(Debug, Clone)]
pub enum Screen {
    /// Difficulty picker with the highlighted entry
    DifficultySelect { selected: usize },
    /// A live (or just finished) round and the keyboard cursor
    Round { state: RoundState, cursor: usize },
}

/// On-screen keyboard cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
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

/// Application state
pub struct App<'a> {
    pub engine: &'a GameEngine,
    pub words: &'a [String],
    pub gallows: &'a Gallows,
    pub screen: Screen,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        engine: &'a GameEngine,
        words: &'a [String],
        gallows: &'a Gallows,
        rng: StdRng,
    ) -> Self {
        Self {
            engine,
            words,
            gallows,
            screen: Screen::DifficultySelect { selected: 0 },
            messages: vec![Message {
                text: "Выберите уровень сложности".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng,
        }
    }

    /// Snapshot of the current round, if one is showing
    #[must_use]
    pub fn round_view(&self) -> Option<RoundView> {
        match &self.screen {
            Screen::Round { state, .. } => Some(self.engine.view(state)),
            Screen::DifficultySelect { .. } => None,
        }
    }

    /// Start a round; an empty band keeps the picker open with an error
    pub fn start_round(&mut self, difficulty: Difficulty) {
        match self.engine.start_round(difficulty, self.words, &mut self.rng) {
            Ok(state) => {
                self.screen = Screen::Round { state, cursor: 0 };
                self.messages.clear();
                self.add_message(
                    &format!("{}: угадайте слово", difficulty.label()),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.add_message(&format!("Ошибка: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Return to the difficulty picker, discarding the round
    pub fn restart(&mut self) {
        self.screen = Screen::DifficultySelect { selected: 0 };
        self.add_message("Выберите уровень сложности", MessageStyle::Info);
    }

    pub fn guess(&mut self, letter: char) {
        let Screen::Round { state, .. } = &mut self.screen else {
            return;
        };

        let outcome = self.engine.guess(state, letter);
        let word = state.secret().text().to_string();

        let (text, style) = match outcome {
            GuessOutcome::Won(_) => (win_message(&word), MessageStyle::Success),
            GuessOutcome::Lost(_) => (loss_message(&word), MessageStyle::Error),
            GuessOutcome::Hit(_) => (outcome_message(outcome), MessageStyle::Success),
            _ => (outcome_message(outcome), MessageStyle::Info),
        };
        self.add_message(&text, style);

        if matches!(outcome, GuessOutcome::Won(_) | GuessOutcome::Lost(_)) {
            self.add_message("Enter: новая игра", MessageStyle::Info);
        }
    }

    /// Guess the key under the keyboard cursor
    pub fn press_cursor_key(&mut self) {
        let Screen::Round { cursor, .. } = &self.screen else {
            return;
        };
        if let Some(&letter) = self.engine.alphabet().symbols().get(*cursor) {
            self.guess(letter);
        }
    }

    /// Move the keyboard cursor one key or one row, clamped to the alphabet
    pub fn move_cursor(&mut self, step: CursorMove) {
        let last = self.engine.alphabet().len().saturating_sub(1);
        if let Screen::Round { cursor, .. } = &mut self.screen {
            let target = match step {
                CursorMove::Left => cursor.saturating_sub(1),
                CursorMove::Right => cursor.saturating_add(1),
                CursorMove::Up => cursor.saturating_sub(KEYBOARD_WIDTH),
                CursorMove::Down => cursor.saturating_add(KEYBOARD_WIDTH),
            };
            *cursor = target.min(last);
        }
    }

    /// Cycle the picker highlight, wrapping at both ends
    fn move_selection(&mut self, down: bool) {
        if let Screen::DifficultySelect { selected } = &mut self.screen {
            let count = Difficulty::ALL.len();
            *selected = if down {
                (*selected + 1) % count
            } else {
                (*selected + count - 1) % count
            };
        }
    }

    fn round_finished(&self) -> bool {
        matches!(&self.screen, Screen::Round { state, .. } if state.status().is_terminal())
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

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match &self.screen {
            Screen::DifficultySelect { selected } => {
                let selected = *selected;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                    KeyCode::Up => self.move_selection(false),
                    KeyCode::Down => self.move_selection(true),
                    KeyCode::Enter => self.start_round(Difficulty::ALL[selected]),
                    KeyCode::Char(c) => {
                        if let Some(difficulty) = Difficulty::from_name(&c.to_string()) {
                            self.start_round(difficulty);
                        }
                    }
                    _ => {}
                }
            }
            Screen::Round { .. } => match key.code {
                KeyCode::Esc => self.restart(),
                KeyCode::Enter if self.round_finished() => self.restart(),
                KeyCode::Enter => self.press_cursor_key(),
                KeyCode::Left => self.move_cursor(CursorMove::Left),
                KeyCode::Right => self.move_cursor(CursorMove::Right),
                KeyCode::Up => self.move_cursor(CursorMove::Up),
                KeyCode::Down => self.move_cursor(CursorMove::Down),
                KeyCode::Char(c) => self.guess(c),
                _ => {}
            },
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, RoundStatus};
    use rand::SeedableRng;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn fixtures() -> (GameEngine, Vec<String>, Gallows) {
        (
            GameEngine::new(Alphabet::cyrillic()),
            vec!["кот".to_string(), "собака".to_string()],
            Gallows::builtin(),
        )
    }

    #[test]
    fn picker_starts_round_by_number() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));

        press(&mut app, KeyCode::Char('2'));
        let view = app.round_view().unwrap();
        assert_eq!(view.length, 6);
        assert_eq!(view.status, RoundStatus::InProgress);
    }

    #[test]
    fn picker_arrow_and_enter() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));

        press(&mut app, KeyCode::Up);
        assert!(matches!(app.screen, Screen::DifficultySelect { selected: 2 }));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.round_view().unwrap().length, 3);
    }

    #[test]
    fn empty_band_stays_on_picker() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));

        press(&mut app, KeyCode::Char('3'));
        assert!(matches!(app.screen, Screen::DifficultySelect { .. }));
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn typed_letters_play_to_a_win_and_enter_restarts() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));

        press(&mut app, KeyCode::Char('1'));
        for c in ['к', 'о', 'т'] {
            press(&mut app, KeyCode::Char(c));
        }
        let view = app.round_view().unwrap();
        assert_eq!(view.status, RoundStatus::Won);
        assert_eq!(view.answer.as_deref(), Some("КОТ"));

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::DifficultySelect { .. }));
    }

    #[test]
    fn lost_round_ignores_further_letters() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));

        press(&mut app, KeyCode::Char('1'));
        for c in ['а', 'б', 'в', 'г', 'д'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.round_view().unwrap().status, RoundStatus::Lost);

        press(&mut app, KeyCode::Char('е'));
        let view = app.round_view().unwrap();
        assert_eq!(view.wrong_count, 5);
        assert!(view.misses.iter().all(|&c| c != 'Е'));
    }

    #[test]
    fn cursor_moves_and_presses_keys() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));
        press(&mut app, KeyCode::Char('1'));

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        // Row 2, column 2: К
        assert!(matches!(app.screen, Screen::Round { cursor: 11, .. }));

        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert!(matches!(app.screen, Screen::Round { cursor: 32, .. }));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.round_view().unwrap().misses, vec!['Я']);
    }

    #[test]
    fn cursor_stays_inside_keyboard_at_edges() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));
        press(&mut app, KeyCode::Char('1'));

        app.move_cursor(CursorMove::Up);
        app.move_cursor(CursorMove::Left);
        assert!(matches!(app.screen, Screen::Round { cursor: 0, .. }));

        for _ in 0..40 {
            app.move_cursor(CursorMove::Right);
        }
        assert!(matches!(app.screen, Screen::Round { cursor: 32, .. }));
        app.move_cursor(CursorMove::Down);
        assert!(matches!(app.screen, Screen::Round { cursor: 32, .. }));
        app.move_cursor(CursorMove::Up);
        assert!(matches!(app.screen, Screen::Round { cursor: 22, .. }));
    }

    #[test]
    fn escape_discards_round() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Esc);
        assert!(app.round_view().is_none());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let (engine, words, gallows) = fixtures();
        let mut app = App::new(&engine, &words, &gallows, StdRng::seed_from_u64(0));
        press(&mut app, KeyCode::Char('1'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
