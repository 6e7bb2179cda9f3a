//! Guess keyboard alphabet
//!
//! An ordered, duplicate-free set of uppercase symbols. The engine only ever
//! asks whether a symbol belongs to it, so any finite symbol set works.

use super::GameError;
use std::fmt;

/// Russian alphabet in keyboard order (33 letters, Ё included)
const CYRILLIC: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// Basic Latin alphabet
const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Keys per on-screen keyboard row
pub const KEYBOARD_WIDTH: usize = 10;

/// The set of symbols a player can guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    name: String,
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from arbitrary symbols
    ///
    /// Symbols are uppercased; duplicates after normalization are dropped while
    /// the first occurrence keeps its position.
    ///
    /// # Errors
    /// Returns `GameError::InvalidAlphabet` if no symbols remain, or if a
    /// symbol is whitespace.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Alphabet;
    ///
    /// let abc = Alphabet::new("tiny", "abca".chars()).unwrap();
    /// assert_eq!(abc.symbols(), &['A', 'B', 'C']);
    /// assert!(Alphabet::new("empty", "".chars()).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        symbols: impl IntoIterator<Item = char>,
    ) -> Result<Self, GameError> {
        let name = name.into();
        let mut normalized: Vec<char> = Vec::new();

        for symbol in symbols {
            if symbol.is_whitespace() {
                return Err(GameError::InvalidAlphabet(format!(
                    "{name}: whitespace is not a guessable symbol"
                )));
            }
            let symbol = normalize(symbol);
            if !normalized.contains(&symbol) {
                normalized.push(symbol);
            }
        }

        if normalized.is_empty() {
            return Err(GameError::InvalidAlphabet(format!("{name}: no symbols")));
        }

        Ok(Self {
            name,
            symbols: normalized,
        })
    }

    /// The 33-letter Russian alphabet
    #[must_use]
    pub fn cyrillic() -> Self {
        Self {
            name: "cyrillic".to_string(),
            symbols: CYRILLIC.chars().collect(),
        }
    }

    /// The 26-letter Latin alphabet
    #[must_use]
    pub fn latin() -> Self {
        Self {
            name: "latin".to_string(),
            symbols: LATIN.chars().collect(),
        }
    }

    /// Look up a built-in alphabet by name
    ///
    /// Supported names: "cyrillic" (also "russian", "ru"), "latin" (also "english", "en").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "cyrillic" | "russian" | "ru" => Some(Self::cyrillic()),
            "latin" | "english" | "en" => Some(Self::latin()),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbols in keyboard order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check membership of an already-normalized symbol
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Position of a symbol in keyboard order
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Symbols split into on-screen keyboard rows
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.symbols.chunks(KEYBOARD_WIDTH)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::cyrillic()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} letters)", self.name, self.symbols.len())
    }
}

/// Uppercase a single symbol
///
/// Symbols whose uppercase form is not a single character (e.g. `ß`) are kept
/// as they are.
#[must_use]
pub fn normalize(symbol: char) -> char {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => symbol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_has_33_letters() {
        let abc = Alphabet::cyrillic();
        assert_eq!(abc.len(), 33);
        assert_eq!(abc.symbols()[0], 'А');
        assert_eq!(abc.symbols()[6], 'Ё');
        assert_eq!(abc.symbols()[32], 'Я');
    }

    #[test]
    fn latin_has_26_letters() {
        assert_eq!(Alphabet::latin().len(), 26);
    }

    #[test]
    fn keyboard_rows_are_ten_wide() {
        let abc = Alphabet::cyrillic();
        let rows: Vec<&[char]> = abc.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[3], &['Э', 'Ю', 'Я']);
    }

    #[test]
    fn new_normalizes_and_dedups() {
        let abc = Alphabet::new("mixed", "бБаА".chars()).unwrap();
        assert_eq!(abc.symbols(), &['Б', 'А']);
    }

    #[test]
    fn new_rejects_whitespace() {
        assert!(matches!(
            Alphabet::new("bad", "a b".chars()),
            Err(GameError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn from_name_aliases() {
        assert_eq!(Alphabet::from_name("RU"), Some(Alphabet::cyrillic()));
        assert_eq!(Alphabet::from_name("english"), Some(Alphabet::latin()));
        assert_eq!(Alphabet::from_name("klingon"), None);
    }

    #[test]
    fn normalize_uppercases() {
        assert_eq!(normalize('ё'), 'Ё');
        assert_eq!(normalize('к'), 'К');
        assert_eq!(normalize('Z'), 'Z');
        assert_eq!(normalize('ß'), 'ß');
    }

    #[test]
    fn index_of_follows_keyboard_order() {
        let abc = Alphabet::cyrillic();
        assert_eq!(abc.index_of('А'), Some(0));
        assert_eq!(abc.index_of('Я'), Some(32));
        assert_eq!(abc.index_of('Q'), None);
    }
}
