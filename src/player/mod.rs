//! Automated players
//!
//! Guessers used by the simulation command to play rounds without a human.

mod frequency;
pub mod strategy;

pub use frequency::FrequencyGuesser;
pub use strategy::{Guesser, GuesserType, RandomGuesser};
