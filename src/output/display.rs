//! Display functions for rounds and command results

use super::formatters::{create_progress_bar, key_label, length_hint, stage_bar};
use crate::commands::{SimulationResult, WordStats};
use crate::core::{MAX_WRONG_STAGES, alphabet::KEYBOARD_WIDTH};
use crate::engine::{KeyState, RoundView};
use crate::gallows::Gallows;
use colored::Colorize;
use std::io::{self, Write};

/// Draw a round for the line-based mode
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round<W: Write>(out: &mut W, view: &RoundView, gallows: &Gallows) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows.frame(view.wrong_count).lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", view.masked.bright_white().bold())?;
    writeln!(out, "  {}", length_hint(view.length).bright_black())?;
    writeln!(
        out,
        "  Ошибки: [{}] {}/{MAX_WRONG_STAGES}",
        stage_bar(view.stage).red(),
        view.wrong_count
    )?;
    if !view.misses.is_empty() {
        let misses: String = view.misses.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
        writeln!(out, "  Мимо: {}", misses.red())?;
    }
    writeln!(out)?;

    for row in view.key_rows(KEYBOARD_WIDTH) {
        let keys: Vec<String> = row
            .iter()
            .map(|key| {
                let label = key_label(key).to_string();
                match key.state {
                    KeyState::Available => format!("[{label}]"),
                    KeyState::Hit => format!("[{}]", label.green()),
                    KeyState::Miss => format!("[{}]", label.red()),
                }
            })
            .collect();
        writeln!(out, "  {}", keys.join(" "))?;
    }
    writeln!(out)
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} / {} ",
        "SIMULATION RESULTS:".bright_cyan().bold(),
        result.difficulty.to_string().bright_yellow().bold(),
        result.guesser
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Avg wrong:        {:.2}", result.average_wrong());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Wrong guesses per round:".bright_cyan().bold());
    for wrong in 0..=MAX_WRONG_STAGES {
        let count = result.wrong_distribution.get(&wrong).copied().unwrap_or(0);
        let pct = if result.rounds > 0 {
            (count as f64 / result.rounds as f64) * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        let bar = if wrong == MAX_WRONG_STAGES {
            bar.red()
        } else {
            bar.green()
        };
        println!("   {wrong}: {bar} {count:5} ({pct:5.1}%)");
    }
}

/// Print per-difficulty counts for a word list
pub fn print_word_stats(stats: &WordStats, source: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Word list: {}", source.bright_yellow());
    println!("{}", "─".repeat(60).cyan());
    println!("   Entries:   {}", stats.total);

    for (difficulty, count) in &stats.per_difficulty {
        let line = format!(
            "   {:<8} {:>5}  ({})",
            difficulty.to_string(),
            count,
            difficulty.band()
        );
        if *count == 0 {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }

    if stats.unusable > 0 {
        println!(
            "   {}",
            format!("{} entries cannot be played (foreign symbols or too few distinct letters)", stats.unusable).yellow()
        );
    }
}
