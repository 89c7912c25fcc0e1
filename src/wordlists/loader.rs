//! Dictionary loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, one per line
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Lines with
/// inner whitespace are skipped with a warning since they cannot be a single
/// hangman word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);

    debug!(path = %path.display(), words = words.len(), "dictionary loaded");
    Ok(words)
}

fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            if trimmed.contains(char::is_whitespace) {
                warn!(line = number + 1, "skipping entry with inner whitespace");
                return None;
            }
            Some(trimmed.to_string())
        })
        .collect()
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
