//! Dictionary letter-frequency guesser
//!
//! Narrows the dictionary to words that agree with the masked pattern, then
//! guesses the unused letter that appears in the most of them.

use super::strategy::{Guesser, RandomGuesser};
use crate::core::{Alphabet, RoundState, SecretWord};
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;

/// Guesser backed by a word dictionary
#[derive(Debug, Clone, Default)]
pub struct FrequencyGuesser {
    dictionary: Vec<Vec<char>>,
}

impl FrequencyGuesser {
    #[must_use]
    pub fn new(dictionary: &[SecretWord]) -> Self {
        Self {
            dictionary: dictionary.iter().map(|w| w.chars().to_vec()).collect(),
        }
    }

    /// Dictionary words the player cannot rule out yet
    fn consistent<'a>(
        &'a self,
        pattern: &'a [Option<char>],
        guessed: &'a FxHashSet<char>,
    ) -> impl Iterator<Item = &'a Vec<char>> + 'a {
        self.dictionary
            .iter()
            .filter(move |word| is_consistent(word, pattern, guessed))
    }

    /// Count, per unused letter, how many consistent words contain it
    #[must_use]
    pub fn letter_counts(&self, state: &RoundState, alphabet: &Alphabet) -> FxHashMap<char, usize> {
        let pattern = state.pattern();
        let guessed = state.guessed();
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();

        for word in self.consistent(&pattern, guessed) {
            let mut seen: FxHashSet<char> = FxHashSet::default();
            for &c in word {
                if !guessed.contains(&c) && alphabet.contains(c) && seen.insert(c) {
                    *counts.entry(c).or_insert(0) += 1;
                }
            }
        }

        counts
    }
}

/// A word fits if revealed slots match and hidden slots hold no used letter
fn is_consistent(word: &[char], pattern: &[Option<char>], guessed: &FxHashSet<char>) -> bool {
    word.len() == pattern.len()
        && word.iter().zip(pattern).all(|(&c, slot)| match slot {
            Some(revealed) => c == *revealed,
            None => !guessed.contains(&c),
        })
}

impl Guesser for FrequencyGuesser {
    fn next_guess<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Option<char> {
        let counts = self.letter_counts(state, alphabet);

        // Ties go to the letter earlier on the keyboard
        counts
            .into_iter()
            .max_by_key(|&(c, n)| (n, Reverse(alphabet.index_of(c))))
            .map(|(c, _)| c)
            .or_else(|| RandomGuesser.next_guess(state, alphabet, rng))
    }
}
