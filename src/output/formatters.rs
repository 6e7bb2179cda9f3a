//! Formatting utilities for terminal output

use crate::core::{GuessOutcome, MAX_WRONG_STAGES};
use crate::engine::{KeyState, KeyView};

/// Marker drawn over keys that have been used
pub const CROSSED_KEY: char = '×';

/// Notice shown after a guess
#[must_use]
pub fn outcome_message(outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::NotInAlphabet(c) => format!("Буквы '{c}' нет на клавиатуре"),
        GuessOutcome::AlreadyGuessed(c) => format!("Буква '{c}' уже открыта"),
        GuessOutcome::RoundOver => "Раунд окончен. Начните заново".to_string(),
        GuessOutcome::Hit(c) => format!("Есть буква '{c}'!"),
        GuessOutcome::Miss(c) => format!("Буквы '{c}' нет в слове"),
        GuessOutcome::Won(c) => format!("Буква '{c}' открыла слово!"),
        GuessOutcome::Lost(c) => format!("Буквы '{c}' нет. Виселица достроена"),
    }
}

/// Win notice with the word
#[must_use]
pub fn win_message(word: &str) -> String {
    format!("Вы выиграли! Слово: {word}")
}

/// Loss notice with the word
#[must_use]
pub fn loss_message(word: &str) -> String {
    format!("Игра окончена! Слово было: {word}")
}

/// Word length hint under the masked word
#[must_use]
pub fn length_hint(length: usize) -> String {
    format!("Слово из {length} букв")
}

/// Character drawn on a key: its symbol, or a cross once used
#[inline]
#[must_use]
pub const fn key_label(key: &KeyView) -> char {
    match key.state {
        KeyState::Available => key.symbol,
        KeyState::Hit | KeyState::Miss => CROSSED_KEY,
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Gallows stage as a bar, one cell per stage
#[must_use]
pub fn stage_bar(stage: usize) -> String {
    let max = usize::from(MAX_WRONG_STAGES);
    create_progress_bar(stage as f64, max as f64, max)
}
