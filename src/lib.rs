//! Hangman
//!
//! A word-guessing game with difficulty bands, letter hints and a terminal UI.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Alphabet, Difficulty, GuessOutcome};
//! use hangman::engine::GameEngine;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let engine = GameEngine::new(Alphabet::cyrillic());
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let mut round = engine.start_round(Difficulty::Easy, &["кот"], &mut rng).unwrap();
//! assert_eq!(round.hints().len(), 1);
//!
//! let outcome = engine.guess(&mut round, 'я');
//! assert_eq!(outcome, GuessOutcome::Miss('Я'));
//! println!("{}", engine.view(&round).masked);
//! ```

// Core domain types
pub mod core;

// Word selection, hints and guess evaluation
pub mod engine;

// Automated guessers
pub mod player;

// Word lists
pub mod wordlists;

// Gallows artwork
pub mod gallows;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
