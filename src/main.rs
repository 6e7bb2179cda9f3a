//! Hangman - CLI
//!
//! Word-guessing game with TUI and line-based modes, plus tooling to simulate
//! automated players and inspect word lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimulateConfig, run_simple, run_simulation, word_stats},
    core::{Alphabet, Difficulty, SecretWord},
    engine::GameEngine,
    gallows::Gallows,
    output::{print_simulation_result, print_word_stats},
    player::GuesserType,
    wordlists::WordSource,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word-guessing game with difficulty levels and letter hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    words: String,

    /// Alphabet for the keyboard and word validation: cyrillic (default) or latin
    #[arg(short, long, global = true, default_value = "cyrillic")]
    alphabet: String,

    /// Directory with gallows frames hang_0.txt .. hang_5.txt
    #[arg(long, global = true)]
    gallows: Option<PathBuf>,

    /// Seed for word selection and hints (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to <DIR>/hangman.log
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Let an automated guesser play many rounds
    Simulate {
        /// Number of rounds per difficulty
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Only simulate this difficulty (all three if omitted)
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Guesser: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        guesser: String,
    },

    /// Show how a word list splits into difficulty bands
    Words,
}

/// Install the tracing subscriber
///
/// With a log directory everything at INFO and above goes to a file. Without
/// one, warnings go to stderr, except in the TUI where stderr would corrupt
/// the screen.
fn init_logging(log_dir: Option<&Path>, tui: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::from_default_env();

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create log directory {}", dir.display()))?;
        let file_appender = tracing_appender::rolling::never(dir, "hangman.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter.add_directive(tracing::Level::INFO.into()))
            .with(fmt::layer().with_writer(non_blocking_file).with_ansi(false))
            .init();

        info!("Log file: {}/hangman.log", dir.display());
        return Ok(Some(guard));
    }

    if !tui {
        tracing_subscriber::registry()
            .with(env_filter.add_directive(tracing::Level::WARN.into()))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(None)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let _guard = init_logging(cli.log_dir.as_deref(), matches!(command, Commands::Play))?;

    let alphabet = Alphabet::from_name(&cli.alphabet)
        .with_context(|| format!("unknown alphabet '{}' (expected cyrillic or latin)", cli.alphabet))?;
    let engine = GameEngine::new(alphabet);

    let source = WordSource::from_arg(&cli.words);
    let words = source.load()?;
    info!("Loaded {} words from {source}", words.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match command {
        Commands::Play => {
            let gallows = load_gallows(cli.gallows.as_deref())?;
            run_play_command(&engine, &words, &gallows, rng)
        }
        Commands::Simple => {
            let gallows = load_gallows(cli.gallows.as_deref())?;
            run_simple(&engine, &words, &gallows, &mut rng)
        }
        Commands::Simulate {
            count,
            difficulty,
            guesser,
        } => {
            let seed = cli.seed.unwrap_or_else(|| rng.random());
            run_simulate_command(&engine, &words, count, difficulty, &guesser, seed);
            Ok(())
        }
        Commands::Words => {
            let stats = word_stats(&engine, &words);
            print_word_stats(&stats, &source.to_string());
            Ok(())
        }
    }
}

fn load_gallows(dir: Option<&Path>) -> Result<Gallows> {
    let gallows = match dir {
        Some(dir) => Gallows::load_dir(dir)?,
        None => Gallows::builtin(),
    };
    Ok(gallows)
}

fn run_simulate_command(
    engine: &GameEngine,
    words: &[String],
    count: usize,
    difficulty: Option<Difficulty>,
    guesser_name: &str,
    seed: u64,
) {
    let dictionary: Vec<SecretWord> = Difficulty::ALL
        .iter()
        .flat_map(|&d| engine.candidates(d, words))
        .collect();
    let guesser = GuesserType::from_name(guesser_name, &dictionary);

    let difficulties = difficulty.map_or_else(|| Difficulty::ALL.to_vec(), |d| vec![d]);

    println!(
        "Simulating {count} rounds per difficulty with the {} guesser (seed {seed})...",
        guesser.name()
    );

    for difficulty in difficulties {
        let config = SimulateConfig::new(count, difficulty, seed);
        match run_simulation(engine, words, &guesser, guesser.name(), &config) {
            Ok(result) => print_simulation_result(&result),
            Err(e) if e.is_recoverable() => {
                warn!("Skipping {difficulty}: {e}");
                println!("\nSkipping {difficulty}: {e}");
            }
            Err(e) => warn!("Simulation failed: {e}"),
        }
    }
}

fn run_play_command(
    engine: &GameEngine,
    words: &[String],
    gallows: &Gallows,
    rng: StdRng,
) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(engine, words, gallows, rng);
    run_tui(app)
}
