//! Read model handed to renderers
//!
//! A `RoundView` is an immutable snapshot. Front ends redraw everything from
//! it after each action instead of patching widgets.

use crate::core::{MAX_WRONG_STAGES, RoundStatus};

/// Placeholder for letters not yet revealed
pub const PLACEHOLDER: char = '_';

/// State of a single on-screen key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Available,
    /// Guessed (or revealed) and present in the word
    Hit,
    /// Guessed and absent from the word
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyView {
    pub symbol: char,
    pub state: KeyState,
}

/// Everything a renderer needs to draw a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Masked word, symbols separated by spaces: "К _ Т"
    pub masked: String,
    /// Word length hint
    pub length: usize,
    /// One entry per alphabet symbol in keyboard order
    pub keys: Vec<KeyView>,
    pub status: RoundStatus,
    pub wrong_count: u8,
    /// Gallows stage, `min(wrong_count, MAX_WRONG_STAGES)`
    pub stage: usize,
    /// Wrong letters in the order they were guessed
    pub misses: Vec<char>,
    /// The secret word, only once the round is over
    pub answer: Option<String>,
}

impl RoundView {
    /// Keys grouped into keyboard rows of `width`
    pub fn key_rows(&self, width: usize) -> impl Iterator<Item = &[KeyView]> {
        self.keys.chunks(width.max(1))
    }

    #[must_use]
    pub fn key(&self, symbol: char) -> Option<&KeyView> {
        self.keys.iter().find(|k| k.symbol == symbol)
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        MAX_WRONG_STAGES.saturating_sub(self.wrong_count)
    }
}
