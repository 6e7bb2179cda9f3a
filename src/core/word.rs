//! Secret word representation
//!
//! A `SecretWord` stores an uppercase word as symbols along with the set of
//! letters it contains for hit lookups.

use super::Alphabet;
use super::alphabet::normalize;
use rustc_hash::FxHashSet;
use std::fmt;

/// An uppercase word whose every symbol belongs to the game alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    chars: Vec<char>,
    letters: FxHashSet<char>,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ForeignSymbol(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::ForeignSymbol(c) => write!(f, "Word contains '{c}', which is not in the alphabet"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new word, uppercasing and trimming the input
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed word is empty
    /// - A symbol is not part of `alphabet`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Alphabet, SecretWord};
    ///
    /// let abc = Alphabet::cyrillic();
    /// let word = SecretWord::new("кот", &abc).unwrap();
    /// assert_eq!(word.text(), "КОТ");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(SecretWord::new("cat", &abc).is_err());
    /// assert!(SecretWord::new("  ", &abc).is_err());
    /// ```
    pub fn new(text: impl AsRef<str>, alphabet: &Alphabet) -> Result<Self, WordError> {
        let chars: Vec<char> = text.as_ref().trim().chars().map(normalize).collect();

        if chars.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(&foreign) = chars.iter().find(|&&c| !alphabet.contains(c)) {
            return Err(WordError::ForeignSymbol(foreign));
        }

        let letters: FxHashSet<char> = chars.iter().copied().collect();

        Ok(Self {
            text: chars.iter().collect(),
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as symbols
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in symbols (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters in order of first appearance
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut seen = Vec::with_capacity(self.letters.len());
        for &ch in &self.chars {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        seen
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> SecretWord {
        SecretWord::new(text, &Alphabet::cyrillic()).unwrap()
    }

    #[test]
    fn word_creation_uppercases() {
        assert_eq!(word("кот").text(), "КОТ");
        assert_eq!(word("КоТ").text(), "КОТ");
        assert_eq!(word("  ёж ").text(), "ЁЖ");
    }

    #[test]
    fn word_length_counts_symbols_not_bytes() {
        let w = word("слон");
        assert_eq!(w.len(), 4);
        assert_eq!(w.text().len(), 8);
    }

    #[test]
    fn word_creation_rejects_empty() {
        let abc = Alphabet::cyrillic();
        assert_eq!(SecretWord::new("", &abc), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   ", &abc), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_rejects_foreign_symbols() {
        let abc = Alphabet::cyrillic();
        assert_eq!(
            SecretWord::new("кот-пёс", &abc),
            Err(WordError::ForeignSymbol('-'))
        );
        assert_eq!(
            SecretWord::new("cat", &abc),
            Err(WordError::ForeignSymbol('C'))
        );
    }

    #[test]
    fn word_has_letter() {
        let w = word("кот");
        assert!(w.has_letter('К'));
        assert!(!w.has_letter('к'));
        assert!(!w.has_letter('Ы'));
    }

    #[test]
    fn distinct_letters_keep_first_appearance_order() {
        let w = word("молоко");
        assert_eq!(w.distinct_letters(), vec!['М', 'О', 'Л', 'К']);
        assert_eq!(w.distinct_count(), 4);
    }

    #[test]
    fn word_char_at() {
        let w = word("кот");
        assert_eq!(w.char_at(0), 'К');
        assert_eq!(w.char_at(2), 'Т');
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", word("слон")), "СЛОН");
    }
}
