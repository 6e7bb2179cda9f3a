//! Core domain types for Hangman
//!
//! Alphabet, difficulty bands, secret words and the per-round state. Nothing
//! here performs I/O or draws random numbers.

pub mod alphabet;
mod difficulty;
mod error;
mod round;
mod word;

pub use alphabet::Alphabet;
pub use difficulty::Difficulty;
pub use error::GameError;
pub use round::{GuessOutcome, MAX_WRONG_STAGES, RoundState, RoundStatus};
pub use word::{SecretWord, WordError};
