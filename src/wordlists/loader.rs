//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.
//! Entries are only trimmed here; uppercasing and length filtering belong to
//! the engine.

use std::fs;
use std::io;
use std::path::Path;

/// Split text into trimmed, non-empty lines
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load words from a UTF-8 file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Convert embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_lines_trims_and_skips_blank() {
        let words = parse_lines("кот\n  слон \n\n\t\nсобака\r\n");
        assert_eq!(words, vec!["кот", "слон", "собака"]);
    }

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["ёж", " дом", ""]);
        assert_eq!(words, vec!["ёж", "дом"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_utf8() {
        let path = std::env::temp_dir().join(format!("hangman-loader-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "кот\n\nтелевизор").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["кот", "телевизор"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("definitely/not/here/words.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
