//! Hangman display pattern
//!
//! A pattern is one symbol per letter position: either a revealed letter or
//! the placeholder `-`. It is rendered with single spaces between symbols,
//! e.g. `c a -`.
//!
//! Patterns order by their rendered form. The partitioner relies on this to
//! break ties between equally sized families: the alphabetically-first pattern
//! wins, which puts `-` (0x2D) ahead of any ASCII letter at the first
//! differing position.

use super::Word;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Revealed letters and placeholders for every position of the hidden word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    symbols: Vec<Option<char>>,
}

/// Error type for unparseable pattern strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must contain at least one symbol")]
    Empty,
}

impl Pattern {
    /// Symbol shown for a position that has not been revealed
    pub const PLACEHOLDER: char = '-';

    /// Create a pattern with every position hidden
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::hidden(3);
    /// assert_eq!(pattern.to_string(), "- - -");
    /// ```
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            symbols: vec![None; len],
        }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The letter revealed at `position`, if any
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn revealed_at(&self, position: usize) -> Option<char> {
        self.symbols[position]
    }

    /// The display symbol at `position`: the revealed letter or `-`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> char {
        self.symbols[position].unwrap_or(Self::PLACEHOLDER)
    }

    /// Display symbols in position order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols
            .iter()
            .map(|symbol| symbol.unwrap_or(Self::PLACEHOLDER))
    }

    /// Number of positions showing `letter`
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.symbols
            .iter()
            .filter(|&&symbol| symbol == Some(letter))
            .count()
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.symbols.iter().filter(|symbol| symbol.is_none()).count()
    }

    /// True when every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.symbols.iter().all(Option::is_some)
    }

    /// Build a new pattern with `letter` revealed at `positions`
    ///
    /// Every other position keeps what `self` shows. This is the group-pattern
    /// a candidate produces for a guess: `positions` are where the candidate
    /// has the guessed letter.
    ///
    /// # Panics
    /// Panics if any position is out of range.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::hidden(3).with_letter('c', &[0]);
    /// assert_eq!(pattern.to_string(), "c - -");
    ///
    /// let next = pattern.with_letter('a', &[1]);
    /// assert_eq!(next.to_string(), "c a -");
    /// ```
    #[must_use]
    pub fn with_letter(&self, letter: char, positions: &[usize]) -> Self {
        let mut symbols = self.symbols.clone();
        for &position in positions {
            symbols[position] = Some(letter);
        }
        Self { symbols }
    }

    /// Check that `word` agrees with every revealed position
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .symbols
                .iter()
                .zip(word.chars())
                .all(|(symbol, &ch)| symbol.is_none_or(|letter| letter == ch))
    }

    fn sort_key(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.symbols
            .iter()
            .map(|symbol| (symbol.unwrap_or(Self::PLACEHOLDER), symbol.is_some()))
    }
}

impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(other.sort_key())
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse the rendered form, with or without separating spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<Option<char>> = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| (ch != Self::PLACEHOLDER).then_some(ch))
            .collect();

        if symbols.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { symbols })
    }
}
