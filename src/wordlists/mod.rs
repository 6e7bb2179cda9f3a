//! Word lists for Hangman
//!
//! The built-in Russian list is compiled into the binary; a custom list can be
//! read from a file at startup.

mod embedded;
pub mod loader;

use crate::core::GameError;
use std::fmt;
use std::path::PathBuf;

pub use embedded::{WORDS, WORDS_COUNT};

/// Where candidate words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// List embedded at build time
    Builtin,
    /// UTF-8 file with one word per line
    File(PathBuf),
}

impl WordSource {
    /// Interpret the `--words` argument
    ///
    /// "builtin" (or "embedded") selects the embedded list; anything else is a path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "builtin" | "embedded" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Read the full candidate list in source order
    ///
    /// # Errors
    /// Returns `GameError::ResourceMissing` if the file cannot be read.
    pub fn load(&self) -> Result<Vec<String>, GameError> {
        match self {
            Self::Builtin => Ok(loader::words_from_slice(WORDS)),
            Self::File(path) => loader::load_from_file(path)
                .map_err(|e| GameError::missing(path.display().to_string(), e)),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in list ({WORDS_COUNT} words)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Difficulty, SecretWord};

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn builtin_words_are_cyrillic() {
        let abc = Alphabet::cyrillic();
        for &word in WORDS {
            assert!(
                SecretWord::new(word, &abc).is_ok(),
                "Word '{word}' has symbols outside the Russian alphabet"
            );
        }
    }

    #[test]
    fn builtin_list_covers_every_difficulty() {
        for difficulty in Difficulty::ALL {
            let count = WORDS
                .iter()
                .filter(|w| difficulty.accepts(w.chars().count()))
                .count();
            assert!(count > 0, "No built-in words for {difficulty}");
        }
    }

    #[test]
    fn from_arg_distinguishes_paths() {
        assert_eq!(WordSource::from_arg("builtin"), WordSource::Builtin);
        assert_eq!(
            WordSource::from_arg("Words.txt"),
            WordSource::File(PathBuf::from("Words.txt"))
        );
    }

    #[test]
    fn missing_file_is_resource_missing() {
        let source = WordSource::File(PathBuf::from("no/such/Words.txt"));
        assert!(matches!(
            source.load(),
            Err(GameError::ResourceMissing { .. })
        ));
    }

    #[test]
    fn builtin_load_matches_embedded() {
        assert_eq!(WordSource::Builtin.load().unwrap().len(), WORDS_COUNT);
    }
}
