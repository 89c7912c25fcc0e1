//! Dictionaries for hangman
//!
//! Provides the embedded dictionary compiled into the binary, file loading,
//! and a per-length summary used to validate the requested word length.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use std::collections::BTreeMap;

/// Count words per length (in chars)
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::length_histogram;
///
/// let histogram = length_histogram(["cat", "dog", "goat"]);
/// assert_eq!(histogram.get(&3), Some(&2));
/// assert_eq!(histogram.get(&4), Some(&1));
/// ```
pub fn length_histogram<I, S>(words: I) -> BTreeMap<usize, usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut histogram = BTreeMap::new();
    for word in words {
        *histogram.entry(word.as_ref().chars().count()).or_insert(0) += 1;
    }
    histogram
}
