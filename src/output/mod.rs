//! Terminal output formatting
//!
//! Display utilities for the line-based game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_simulation_result, print_word_stats, write_round};
