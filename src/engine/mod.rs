//! Hangman game engine
//!
//! Word selection, hint pre-revelation, guess evaluation and the read model
//! consumed by front ends.

mod game;
pub mod hints;
pub mod view;

pub use game::GameEngine;
pub use hints::pick_hints;
pub use view::{KeyState, KeyView, PLACEHOLDER, RoundView};
