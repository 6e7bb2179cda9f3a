//! Difficulty levels and their word-length bands

use clap::ValueEnum;
use std::fmt;

/// Difficulty chosen by the player before a round
///
/// Each level accepts secret words of a given length (counted in symbols):
/// - Easy: up to 4
/// - Medium: 5 to 7
/// - Hard: 8 and more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels in picker order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Check whether a word of `len` symbols belongs to this level
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Difficulty;
    ///
    /// assert!(Difficulty::Easy.accepts(4));
    /// assert!(Difficulty::Medium.accepts(5));
    /// assert!(!Difficulty::Hard.accepts(7));
    /// ```
    #[must_use]
    pub const fn accepts(self, len: usize) -> bool {
        match self {
            Self::Easy => len <= 4,
            Self::Medium => 5 <= len && len <= 7,
            Self::Hard => len > 7,
        }
    }

    /// Number of letters revealed before the player's first guess (upper bound)
    #[must_use]
    pub const fn hint_count(self) -> usize {
        match self {
            Self::Easy | Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    /// Human-readable label for the picker ("Лёгкий", "Средний", "Сложный")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Лёгкий",
            Self::Medium => "Средний",
            Self::Hard => "Сложный",
        }
    }

    /// Length band as text, e.g. "5-7 letters"
    #[must_use]
    pub const fn band(self) -> &'static str {
        match self {
            Self::Easy => "up to 4 letters",
            Self::Medium => "5-7 letters",
            Self::Hard => "8+ letters",
        }
    }

    /// Parse from a picker number (1-3) or a name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "1" | "easy" | "лёгкий" | "легкий" => Some(Self::Easy),
            "2" | "medium" | "средний" => Some(Self::Medium),
            "3" | "hard" | "сложный" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_do_not_overlap() {
        for len in 1..=20 {
            let matching = Difficulty::ALL.iter().filter(|d| d.accepts(len)).count();
            assert_eq!(matching, 1, "length {len} should belong to exactly one band");
        }
    }

    #[test]
    fn band_edges() {
        assert!(Difficulty::Easy.accepts(1));
        assert!(Difficulty::Easy.accepts(4));
        assert!(!Difficulty::Easy.accepts(5));
        assert!(Difficulty::Medium.accepts(7));
        assert!(!Difficulty::Medium.accepts(8));
        assert!(Difficulty::Hard.accepts(8));
        assert!(Difficulty::Hard.accepts(13));
    }

    #[test]
    fn from_name_accepts_numbers_and_names() {
        assert_eq!(Difficulty::from_name("1"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_name(" Medium "), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_name("Сложный"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("4"), None);
    }

    #[test]
    fn display_is_lowercase_name() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
