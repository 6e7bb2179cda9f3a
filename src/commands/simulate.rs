//! Simulation command
//!
//! Plays many independent rounds with an automated guesser and collects
//! win/loss statistics.

use crate::core::{Difficulty, GameError, RoundState, RoundStatus};
use crate::engine::GameEngine;
use crate::player::Guesser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub rounds: usize,
    pub difficulty: Difficulty,
    /// Round `i` uses seed `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(rounds: usize, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            rounds,
            difficulty,
            seed,
            show_progress: true,
        }
    }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub difficulty: Difficulty,
    pub guesser: String,
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub total_wrong: usize,
    /// Rounds per final wrong-guess count
    pub wrong_distribution: FxHashMap<u8, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64
        }
    }

    #[must_use]
    pub fn average_wrong(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_wrong as f64 / self.rounds as f64
        }
    }
}

/// Let a guesser play a round to the end
///
/// Stops early only if the guesser runs out of letters.
pub fn play_round<G: Guesser, R: Rng + ?Sized>(
    engine: &GameEngine,
    state: &mut RoundState,
    guesser: &G,
    rng: &mut R,
) -> RoundStatus {
    while engine.status(state) == RoundStatus::InProgress {
        let Some(letter) = guesser.next_guess(state, engine.alphabet(), rng) else {
            break;
        };
        engine.guess(state, letter);
    }
    engine.status(state)
}

/// Run `config.rounds` seeded rounds in parallel
///
/// # Errors
///
/// Returns `GameError::NoCandidateWords` if the difficulty band is empty.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation<G: Guesser + Sync>(
    engine: &GameEngine,
    words: &[String],
    guesser: &G,
    guesser_name: &str,
    config: &SimulateConfig,
) -> Result<SimulationResult, GameError> {
    if engine.candidates(config.difficulty, words).is_empty() {
        return Err(GameError::NoCandidateWords(config.difficulty));
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} / {guesser_name}", config.difficulty));

    let start = Instant::now();

    let outcomes = (0..config.rounds)
        .into_par_iter()
        .map(|i| -> Result<(RoundStatus, u8), GameError> {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let mut state = engine.start_round(config.difficulty, words, &mut rng)?;
            let status = play_round(engine, &mut state, guesser, &mut rng);
            pb.inc(1);
            Ok((status, state.wrong_count()))
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut won = 0;
    let mut lost = 0;
    let mut total_wrong = 0;
    let mut wrong_distribution: FxHashMap<u8, usize> = FxHashMap::default();

    for (status, wrong) in outcomes {
        match status {
            RoundStatus::Won => won += 1,
            RoundStatus::Lost => lost += 1,
            RoundStatus::InProgress => {}
        }
        total_wrong += usize::from(wrong);
        *wrong_distribution.entry(wrong).or_insert(0) += 1;
    }

    info!(
        difficulty = %config.difficulty,
        guesser = guesser_name,
        rounds = config.rounds,
        won,
        lost,
        "simulation finished"
    );

    Ok(SimulationResult {
        difficulty: config.difficulty,
        guesser: guesser_name.to_string(),
        rounds: config.rounds,
        won,
        lost,
        total_wrong,
        wrong_distribution,
        duration,
        rounds_per_second: config.rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
