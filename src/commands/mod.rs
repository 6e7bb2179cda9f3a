//! Command implementations

pub mod simple;
pub mod simulate;
pub mod words;

pub use simple::{play_session, run_simple};
pub use simulate::{SimulateConfig, SimulationResult, play_round, run_simulation};
pub use words::{WordStats, word_stats};
