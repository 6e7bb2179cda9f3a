//! Word list inspection
//!
//! Reports how many playable words each difficulty band has.

use crate::core::Difficulty;
use crate::engine::GameEngine;

/// Candidate counts for a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStats {
    pub total: usize,
    pub per_difficulty: Vec<(Difficulty, usize)>,
    /// Entries no band accepts (foreign symbols, or too few distinct letters)
    pub unusable: usize,
}

impl WordStats {
    /// Bands a player could not start a round on
    #[must_use]
    pub fn empty_bands(&self) -> Vec<Difficulty> {
        self.per_difficulty
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(d, _)| *d)
            .collect()
    }
}

/// Count playable words per difficulty
#[must_use]
pub fn word_stats(engine: &GameEngine, words: &[String]) -> WordStats {
    let per_difficulty: Vec<(Difficulty, usize)> = Difficulty::ALL
        .iter()
        .map(|&d| (d, engine.candidates(d, words).len()))
        .collect();
    let usable: usize = per_difficulty.iter().map(|(_, count)| count).sum();

    WordStats {
        total: words.len(),
        per_difficulty,
        unusable: words.len().saturating_sub(usable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    #[test]
    fn counts_each_band_and_foreign_words() {
        let engine = GameEngine::new(Alphabet::cyrillic());
        let words: Vec<String> = ["кот", "слон", "собака", "телевизор", "cat", "кот-пёс"]
            .iter()
            .map(|w| (*w).to_string())
            .collect();

        let stats = word_stats(&engine, &words);
        assert_eq!(stats.total, 6);
        assert_eq!(
            stats.per_difficulty,
            vec![
                (Difficulty::Easy, 2),
                (Difficulty::Medium, 1),
                (Difficulty::Hard, 1)
            ]
        );
        assert_eq!(stats.unusable, 2);
        assert!(stats.empty_bands().is_empty());
    }

    #[test]
    fn words_solved_by_hints_are_unusable() {
        let engine = GameEngine::new(Alphabet::cyrillic());
        let words: Vec<String> = ["я", "аааааааа", "кот"].iter().map(|w| (*w).to_string()).collect();

        let stats = word_stats(&engine, &words);
        assert_eq!(stats.unusable, 2);
        assert_eq!(stats.per_difficulty[0], (Difficulty::Easy, 1));
    }

    #[test]
    fn reports_empty_bands() {
        let engine = GameEngine::new(Alphabet::cyrillic());
        let words = vec!["кот".to_string()];
        let stats = word_stats(&engine, &words);
        assert_eq!(stats.empty_bands(), vec![Difficulty::Medium, Difficulty::Hard]);
    }
}
