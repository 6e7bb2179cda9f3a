//! Letter selection strategies
//!
//! Defines the Guesser trait and concrete implementations. A guesser only sees
//! what a human player would: the masked pattern and the letters already used.

use super::FrequencyGuesser;
use crate::core::{Alphabet, RoundState, SecretWord};
use rand::Rng;
use rand::seq::IndexedRandom;

/// A strategy for choosing the next letter to guess
pub trait Guesser {
    /// Pick an unguessed alphabet symbol
    ///
    /// Returns `None` if every symbol has been used.
    fn next_guess<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum GuesserType {
    /// Uniform choice among unused letters
    Random(RandomGuesser),
    /// Most common letter among dictionary words matching the pattern
    Frequency(FrequencyGuesser),
}

impl Guesser for GuesserType {
    fn next_guess<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Option<char> {
        match self {
            Self::Random(g) => g.next_guess(state, alphabet, rng),
            Self::Frequency(g) => g.next_guess(state, alphabet, rng),
        }
    }
}

impl GuesserType {
    /// Create guesser from name string
    ///
    /// Supported names: "random", "frequency". Defaults to frequency if name is
    /// unrecognized. The dictionary is only used by the frequency guesser.
    #[must_use]
    pub fn from_name(name: &str, dictionary: &[SecretWord]) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser),
            _ => Self::Frequency(FrequencyGuesser::new(dictionary)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Frequency(_) => "frequency",
        }
    }
}

/// Uniformly random unused letter
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_guess<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Option<char> {
        let unused: Vec<char> = alphabet
            .symbols()
            .iter()
            .copied()
            .filter(|&c| !state.is_guessed(c))
            .collect();
        unused.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::engine::GameEngine;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_guesser_never_repeats() {
        let engine = GameEngine::new(Alphabet::cyrillic());
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = engine.start_round(Difficulty::Easy, &["кот"], &mut rng).unwrap();

        let letter = RandomGuesser
            .next_guess(&state, engine.alphabet(), &mut rng)
            .unwrap();
        assert!(!state.is_guessed(letter));
        engine.guess(&mut state, letter);
        let next = RandomGuesser
            .next_guess(&state, engine.alphabet(), &mut rng)
            .unwrap();
        assert_ne!(letter, next);
    }

    #[test]
    fn random_guesser_exhausts_alphabet() {
        let alphabet = Alphabet::new("tiny", "ab".chars()).unwrap();
        let engine = GameEngine::new(alphabet);
        let mut rng = StdRng::seed_from_u64(0);
        let state = engine.start_round(Difficulty::Easy, &["ab"], &mut rng).unwrap();
        // One letter is a hint; only one remains
        let letter = RandomGuesser.next_guess(&state, engine.alphabet(), &mut rng);
        assert!(letter.is_some());
        assert!(!state.is_guessed(letter.unwrap()));
    }

    #[test]
    fn from_name_defaults_to_frequency() {
        assert_eq!(GuesserType::from_name("random", &[]).name(), "random");
        assert_eq!(GuesserType::from_name("whatever", &[]).name(), "frequency");
    }
}
