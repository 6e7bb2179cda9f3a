//! State of a single Hangman round
//!
//! A `RoundState` is created by the engine when a round starts and is only
//! ever mutated through `GameEngine::guess`. Starting a new round replaces it
//! wholesale.

use super::{Difficulty, SecretWord};
use rustc_hash::FxHashSet;

/// Wrong guesses that end a round; the gallows has stages `0..=MAX_WRONG_STAGES`
pub const MAX_WRONG_STAGES: u8 = 5;

/// Derived status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// Won and Lost accept no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a call to `GameEngine::guess` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Symbol is not on the keyboard; nothing changed
    NotInAlphabet(char),
    /// Symbol was guessed (or revealed) before; nothing changed
    AlreadyGuessed(char),
    /// Round is already won or lost; nothing changed
    RoundOver,
    /// Letter is in the word, round continues
    Hit(char),
    /// Letter is not in the word, round continues
    Miss(char),
    /// Letter completed the word
    Won(char),
    /// Letter was the final wrong guess
    Lost(char),
}

impl GuessOutcome {
    /// True for the outcomes that left the round untouched
    #[inline]
    #[must_use]
    pub const fn is_noop(self) -> bool {
        matches!(
            self,
            Self::NotInAlphabet(_) | Self::AlreadyGuessed(_) | Self::RoundOver
        )
    }
}

/// Authoritative data for one round
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: SecretWord,
    difficulty: Difficulty,
    guessed: FxHashSet<char>,
    hints: Vec<char>,
    player_guesses: Vec<char>,
    wrong_count: u8,
}

impl RoundState {
    pub(crate) fn new(secret: SecretWord, difficulty: Difficulty) -> Self {
        Self {
            secret,
            difficulty,
            guessed: FxHashSet::default(),
            hints: Vec::new(),
            player_guesses: Vec::new(),
            wrong_count: 0,
        }
    }

    /// Reveal a letter of the secret word without counting it as a guess
    ///
    /// Returns false if the letter is not in the word or already visible.
    pub(crate) fn reveal(&mut self, letter: char) -> bool {
        if !self.secret.has_letter(letter) || !self.guessed.insert(letter) {
            return false;
        }
        self.hints.push(letter);
        true
    }

    /// Record a player guess; returns whether the letter is in the word
    ///
    /// Callers check for repeats and terminal status first.
    pub(crate) fn record_guess(&mut self, letter: char) -> bool {
        self.guessed.insert(letter);
        self.player_guesses.push(letter);

        let hit = self.secret.has_letter(letter);
        if !hit {
            self.wrong_count += 1;
        }
        hit
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Every visible letter, hints included
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Letters revealed at round start, in reveal order
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[char] {
        &self.hints
    }

    /// Letters the player chose, in order
    #[inline]
    #[must_use]
    pub fn player_guesses(&self) -> &[char] {
        &self.player_guesses
    }

    /// Player guesses that are not in the word, in order
    #[must_use]
    pub fn misses(&self) -> Vec<char> {
        self.player_guesses
            .iter()
            .copied()
            .filter(|&c| !self.secret.has_letter(c))
            .collect()
    }

    #[inline]
    #[must_use]
    pub const fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    /// Wrong guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        MAX_WRONG_STAGES.saturating_sub(self.wrong_count)
    }

    /// Gallows stage to display, `0..=MAX_WRONG_STAGES`
    #[inline]
    #[must_use]
    pub fn stage(&self) -> usize {
        usize::from(self.wrong_count.min(MAX_WRONG_STAGES))
    }

    /// Every symbol of the secret word is visible
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.secret.chars().iter().all(|c| self.guessed.contains(c))
    }

    /// Win is checked before loss; a correct letter never adds a wrong guess
    /// so both cannot become true on the same guess.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_solved() {
            RoundStatus::Won
        } else if self.wrong_count >= MAX_WRONG_STAGES {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// What the player sees: `Some(letter)` for revealed positions
    #[must_use]
    pub fn pattern(&self) -> Vec<Option<char>> {
        self.secret
            .chars()
            .iter()
            .map(|&c| self.guessed.contains(&c).then_some(c))
            .collect()
    }
}
