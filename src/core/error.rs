//! Game error taxonomy
//!
//! Guessing a letter twice or after the round is over is not an error; those
//! cases come back as `GuessOutcome` no-ops instead.

use super::Difficulty;
use std::fmt;

/// Failures surfaced by setup and round creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A required resource (word list, gallows frames) could not be found
    ResourceMissing { resource: String, detail: String },
    /// No word in the list fits the chosen difficulty
    NoCandidateWords(Difficulty),
    /// Alphabet configuration is unusable
    InvalidAlphabet(String),
}

impl GameError {
    pub(crate) fn missing(resource: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::ResourceMissing {
            resource: resource.into(),
            detail: detail.to_string(),
        }
    }

    /// Whether the player can recover by picking another difficulty
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoCandidateWords(_))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceMissing { resource, detail } => {
                write!(f, "Missing resource {resource}: {detail}")
            }
            Self::NoCandidateWords(difficulty) => write!(
                f,
                "No words of suitable length for {difficulty} difficulty ({})",
                difficulty.band()
            ),
            Self::InvalidAlphabet(reason) => write!(f, "Invalid alphabet {reason}"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_band_is_recoverable() {
        assert!(GameError::NoCandidateWords(Difficulty::Hard).is_recoverable());
        assert!(!GameError::missing("words.txt", "not found").is_recoverable());
    }

    #[test]
    fn display_mentions_band() {
        let msg = GameError::NoCandidateWords(Difficulty::Medium).to_string();
        assert!(msg.contains("medium"));
        assert!(msg.contains("5-7"));
    }
}
