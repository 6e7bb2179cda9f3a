//! Main Hangman engine interface

use super::hints::pick_hints;
use super::view::{KeyState, KeyView, PLACEHOLDER, RoundView};
use crate::core::alphabet::normalize;
use crate::core::{
    Alphabet, Difficulty, GameError, GuessOutcome, RoundState, RoundStatus, SecretWord,
};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

/// Hangman game engine
///
/// Creates rounds, applies guesses and derives status. Holds no round state
/// itself; every operation takes the round it works on.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    alphabet: Alphabet,
}

impl GameEngine {
    /// Create an engine for the given keyboard alphabet
    #[must_use]
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Check whether a raw word list entry is playable at `difficulty`
    ///
    /// The word must keep at least one letter hidden after the hints, so a
    /// round never starts already won.
    fn is_candidate(&self, difficulty: Difficulty, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || !difficulty.accepts(word.chars().count()) {
            return false;
        }

        let mut distinct: FxHashSet<char> = FxHashSet::default();
        for c in word.chars().map(normalize) {
            if !self.alphabet.contains(c) {
                return false;
            }
            distinct.insert(c);
        }
        distinct.len() > difficulty.hint_count()
    }

    /// All playable words for a difficulty, in source order
    pub fn candidates<S: AsRef<str>>(&self, difficulty: Difficulty, words: &[S]) -> Vec<SecretWord> {
        words
            .iter()
            .filter(|w| self.is_candidate(difficulty, w.as_ref()))
            .filter_map(|w| SecretWord::new(w.as_ref(), &self.alphabet).ok())
            .collect()
    }

    /// Pick a random secret word whose length fits `difficulty`
    ///
    /// Words are uppercased. Entries with symbols outside the alphabet, or
    /// with no more distinct letters than the difficulty reveals, are skipped.
    ///
    /// # Errors
    /// Returns `GameError::NoCandidateWords` if no entry fits the band.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Alphabet, Difficulty, GameError};
    /// use hangman::engine::GameEngine;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let engine = GameEngine::new(Alphabet::cyrillic());
    /// let words = ["кот", "собака", "телевизор"];
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let word = engine.select_word(Difficulty::Medium, &words, &mut rng).unwrap();
    /// assert_eq!(word.text(), "СОБАКА");
    ///
    /// let short = ["кот", "слон"];
    /// assert_eq!(
    ///     engine.select_word(Difficulty::Hard, &short, &mut rng),
    ///     Err(GameError::NoCandidateWords(Difficulty::Hard))
    /// );
    /// ```
    pub fn select_word<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        words: &[S],
        rng: &mut R,
    ) -> Result<SecretWord, GameError> {
        let candidates: Vec<&str> = words
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| self.is_candidate(difficulty, w))
            .collect();

        debug!(%difficulty, candidates = candidates.len(), "selecting secret word");

        let Some(&chosen) = candidates.choose(rng) else {
            warn!(%difficulty, total = words.len(), "no words fit difficulty band");
            return Err(GameError::NoCandidateWords(difficulty));
        };

        // Filter already checked every symbol against the alphabet
        SecretWord::new(chosen, &self.alphabet).map_err(|_| GameError::NoCandidateWords(difficulty))
    }

    /// Start a new round: choose a word and reveal the difficulty's hints
    ///
    /// # Errors
    /// Returns `GameError::NoCandidateWords` if no word fits the band; no
    /// round is created in that case.
    pub fn start_round<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        words: &[S],
        rng: &mut R,
    ) -> Result<RoundState, GameError> {
        let secret = self.select_word(difficulty, words, rng)?;
        let hints = pick_hints(&secret, difficulty, rng);

        let mut state = RoundState::new(secret, difficulty);
        for letter in hints {
            state.reveal(letter);
        }

        info!(
            %difficulty,
            length = state.secret().len(),
            hints = ?state.hints(),
            "round started"
        );
        Ok(state)
    }

    /// Apply a letter guess to a round
    ///
    /// The letter is uppercased first. Letters outside the alphabet, repeated
    /// letters and guesses on a finished round leave the state untouched and
    /// report a no-op outcome.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Alphabet, Difficulty, GuessOutcome, RoundStatus};
    /// use hangman::engine::GameEngine;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let engine = GameEngine::new(Alphabet::cyrillic());
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let mut round = engine.start_round(Difficulty::Easy, &["кот"], &mut rng).unwrap();
    ///
    /// assert_eq!(engine.guess(&mut round, 'я'), GuessOutcome::Miss('Я'));
    /// assert_eq!(engine.guess(&mut round, 'Я'), GuessOutcome::AlreadyGuessed('Я'));
    /// assert_eq!(round.wrong_count(), 1);
    ///
    /// for letter in ['к', 'о', 'т'] {
    ///     engine.guess(&mut round, letter);
    /// }
    /// assert_eq!(engine.status(&round), RoundStatus::Won);
    /// ```
    pub fn guess(&self, state: &mut RoundState, letter: char) -> GuessOutcome {
        let letter = normalize(letter);

        if !self.alphabet.contains(letter) {
            return GuessOutcome::NotInAlphabet(letter);
        }
        if state.is_guessed(letter) {
            return GuessOutcome::AlreadyGuessed(letter);
        }
        if state.status().is_terminal() {
            return GuessOutcome::RoundOver;
        }

        let hit = state.record_guess(letter);
        let outcome = match (hit, state.status()) {
            (true, RoundStatus::Won) => GuessOutcome::Won(letter),
            (true, _) => GuessOutcome::Hit(letter),
            (false, RoundStatus::Lost) => GuessOutcome::Lost(letter),
            (false, _) => GuessOutcome::Miss(letter),
        };

        debug!(%letter, ?outcome, wrong = state.wrong_count(), "guess applied");
        if matches!(outcome, GuessOutcome::Won(_) | GuessOutcome::Lost(_)) {
            info!(
                word = state.secret().text(),
                wrong = state.wrong_count(),
                guesses = state.player_guesses().len(),
                ?outcome,
                "round finished"
            );
        }

        outcome
    }

    /// Derive the round status
    #[must_use]
    pub fn status(&self, state: &RoundState) -> RoundStatus {
        state.status()
    }

    /// Build the presentation snapshot for a round
    #[must_use]
    pub fn view(&self, state: &RoundState) -> RoundView {
        let status = state.status();

        let masked = state
            .pattern()
            .into_iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER).to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let keys = self
            .alphabet
            .symbols()
            .iter()
            .map(|&symbol| {
                let key_state = if !state.is_guessed(symbol) {
                    KeyState::Available
                } else if state.secret().has_letter(symbol) {
                    KeyState::Hit
                } else {
                    KeyState::Miss
                };
                KeyView {
                    symbol,
                    state: key_state,
                }
            })
            .collect();

        RoundView {
            masked,
            length: state.secret().len(),
            keys,
            status,
            wrong_count: state.wrong_count(),
            stage: state.stage(),
            misses: state.misses(),
            answer: status
                .is_terminal()
                .then(|| state.secret().text().to_string()),
        }
    }
}
