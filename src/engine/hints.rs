//! Hint pre-revelation policy
//!
//! Runs once when a round starts and decides which letters are visible before
//! the player's first guess.

use crate::core::{Difficulty, SecretWord};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Choose the letters to reveal at round start
///
/// - Easy / Medium: the letter at one random position. Picking by position
///   favors letters that occur more often.
/// - Hard: two distinct letters, or the only one if the word has a single
///   distinct letter.
///
/// # Examples
/// ```
/// use hangman::core::{Alphabet, Difficulty, SecretWord};
/// use hangman::engine::pick_hints;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let word = SecretWord::new("телевизор", &Alphabet::cyrillic()).unwrap();
/// let hints = pick_hints(&word, Difficulty::Hard, &mut StdRng::seed_from_u64(7));
/// assert_eq!(hints.len(), 2);
/// assert_ne!(hints[0], hints[1]);
/// ```
pub fn pick_hints<R: Rng + ?Sized>(
    secret: &SecretWord,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<char> {
    match difficulty {
        Difficulty::Easy | Difficulty::Medium => {
            let position = rng.random_range(0..secret.len());
            vec![secret.char_at(position)]
        }
        Difficulty::Hard => {
            let distinct = secret.distinct_letters();
            if distinct.len() >= 2 {
                distinct
                    .choose_multiple(rng, difficulty.hint_count())
                    .copied()
                    .collect()
            } else {
                distinct
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> SecretWord {
        SecretWord::new(text, &Alphabet::cyrillic()).unwrap()
    }

    #[test]
    fn easy_reveals_one_letter_of_the_word() {
        let secret = word("кот");
        for seed in 0..50 {
            let hints = pick_hints(&secret, Difficulty::Easy, &mut StdRng::seed_from_u64(seed));
            assert_eq!(hints.len(), 1);
            assert!(secret.has_letter(hints[0]));
        }
    }

    #[test]
    fn medium_reveals_one_letter_of_the_word() {
        let secret = word("собака");
        for seed in 0..50 {
            let hints = pick_hints(&secret, Difficulty::Medium, &mut StdRng::seed_from_u64(seed));
            assert_eq!(hints.len(), 1);
            assert!(secret.has_letter(hints[0]));
        }
    }

    #[test]
    fn hard_reveals_two_distinct_letters() {
        let secret = word("карандаш");
        for seed in 0..50 {
            let hints = pick_hints(&secret, Difficulty::Hard, &mut StdRng::seed_from_u64(seed));
            assert_eq!(hints.len(), 2);
            assert_ne!(hints[0], hints[1]);
            assert!(hints.iter().all(|&c| secret.has_letter(c)));
        }
    }

    #[test]
    fn hard_with_single_distinct_letter_reveals_it() {
        let secret = word("аааааааа");
        let hints = pick_hints(&secret, Difficulty::Hard, &mut StdRng::seed_from_u64(1));
        assert_eq!(hints, vec!['А']);
    }

    #[test]
    fn position_pick_covers_every_letter() {
        let secret = word("кот");
        let mut seen = Vec::new();
        for seed in 0..200 {
            let hint = pick_hints(&secret, Difficulty::Easy, &mut StdRng::seed_from_u64(seed))[0];
            if !seen.contains(&hint) {
                seen.push(hint);
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, vec!['К', 'О', 'Т']);
    }
}
