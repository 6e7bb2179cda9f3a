//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: pick a difficulty, then type one letter
//! per line.

use crate::core::{Difficulty, GameError, RoundStatus};
use crate::engine::GameEngine;
use crate::gallows::Gallows;
use crate::output::formatters::{loss_message, outcome_message, win_message};
use crate::output::write_round;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for at the prompt
enum Input {
    Quit,
    Restart,
    Letter(char),
    /// More than one symbol on the line
    NotALetter,
    Empty,
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "quit" | "exit" | "выход" => Input::Quit,
        "new" | "restart" | "заново" => Input::Restart,
        "" => Input::Empty,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => Input::Letter(letter),
                _ => Input::NotALetter,
            }
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if a
/// round fails for a reason other than an empty difficulty band.
pub fn run_simple<R: Rng + ?Sized>(
    engine: &GameEngine,
    words: &[String],
    gallows: &Gallows,
    rng: &mut R,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(engine, words, gallows, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Play rounds until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or a non-recoverable `GameError`.
pub fn play_session<R, I, W>(
    engine: &GameEngine,
    words: &[String],
    gallows: &Gallows,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║               ВИСЕЛИЦА               ║")?;
    writeln!(out, "╚══════════════════════════════════════╝")?;
    writeln!(out, "Команды: 'new' начать заново, 'quit' выход\n")?;

    loop {
        // Difficulty picker
        writeln!(out, "Выберите уровень сложности:")?;
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            writeln!(out, "  {}) {} ({})", i + 1, difficulty.label(), difficulty.band())?;
        }

        let Some(line) = prompt(input, out, "Уровень")? else {
            return Ok(());
        };
        if matches!(parse_input(&line), Input::Quit) {
            writeln!(out, "До встречи!")?;
            return Ok(());
        }
        let Some(difficulty) = Difficulty::from_name(&line) else {
            writeln!(out, "{}\n", "Введите 1, 2 или 3".red())?;
            continue;
        };

        let mut state = match engine.start_round(difficulty, words, rng) {
            Ok(state) => state,
            Err(e @ GameError::NoCandidateWords(_)) => {
                writeln!(out, "{}\n", format!("Ошибка: {e}").red())?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        // Round
        loop {
            let view = engine.view(&state);
            write_round(out, &view, gallows)?;

            match view.status {
                RoundStatus::Won => {
                    let word = view.answer.unwrap_or_default();
                    writeln!(out, "{}\n", win_message(&word).green().bold())?;
                    break;
                }
                RoundStatus::Lost => {
                    let word = view.answer.unwrap_or_default();
                    writeln!(out, "{}\n", loss_message(&word).red().bold())?;
                    break;
                }
                RoundStatus::InProgress => {}
            }

            let Some(line) = prompt(input, out, "Буква")? else {
                return Ok(());
            };
            match parse_input(&line) {
                Input::Quit => {
                    writeln!(out, "До встречи!")?;
                    return Ok(());
                }
                Input::Restart => break,
                Input::Empty => {}
                Input::NotALetter => {
                    writeln!(out, "{}", "Введите одну букву".yellow())?;
                }
                Input::Letter(letter) => {
                    let outcome = engine.guess(&mut state, letter);
                    let message = outcome_message(outcome);
                    if outcome.is_noop() {
                        writeln!(out, "{}", message.yellow())?;
                    } else {
                        writeln!(out, "{message}")?;
                    }
                }
            }
        }
    }
}

/// Read one line; `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session(words: &[&str], script: &str) -> String {
        colored::control::set_override(false);
        let engine = GameEngine::new(Alphabet::cyrillic());
        let words: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        let mut rng = StdRng::seed_from_u64(0);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();

        play_session(
            &engine,
            &words,
            &Gallows::builtin(),
            &mut rng,
            &mut input,
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn guessing_every_letter_wins() {
        let text = session(&["кот"], "1\nк\nо\nт\nquit\n");
        assert!(text.contains("Вы выиграли! Слово: КОТ"));
        assert!(text.contains("До встречи!"));
    }

    #[test]
    fn five_misses_lose() {
        let text = session(&["кот"], "1\nа\nб\nв\nг\nд\n");
        assert!(text.contains("Игра окончена! Слово было: КОТ"));
    }

    #[test]
    fn empty_band_returns_to_picker() {
        let text = session(&["кот"], "3\nquit\n");
        assert!(text.contains("Ошибка: No words of suitable length for hard"));
        assert!(text.contains("До встречи!"));
    }

    #[test]
    fn repeated_letter_is_reported() {
        let text = session(&["кот"], "1\nя\nя\nquit\n");
        assert!(text.contains("Буква 'Я' уже открыта"));
    }

    #[test]
    fn whole_word_input_is_not_a_guess() {
        let text = session(&["кот"], "1\nкот\nquit\n");
        assert!(text.contains("Введите одну букву"));
        assert!(!text.contains("1/5"));
        assert!(!text.contains("Есть буква"));
        assert!(!text.contains("Буква 'К' уже открыта"));
    }

    #[test]
    fn restart_goes_back_to_picker() {
        let text = session(&["кот"], "1\nnew\nquit\n");
        assert_eq!(text.matches("Выберите уровень сложности:").count(), 2);
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let text = session(&["кот"], "");
        assert!(text.contains("Выберите уровень сложности:"));
    }

    #[test]
    fn parse_input_commands() {
        assert!(matches!(parse_input("QUIT"), Input::Quit));
        assert!(matches!(parse_input(" new "), Input::Restart));
        assert!(matches!(parse_input("к"), Input::Letter('к')));
        assert!(matches!(parse_input("кот"), Input::NotALetter));
        assert!(matches!(parse_input("   "), Input::Empty));
    }
}
