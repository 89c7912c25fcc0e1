//! Automated guessers
//!
//! Defines the Guesser trait and the enum used to pick one at runtime. The
//! guessers play against the engine in simulations and benchmarks.

mod guessers;

pub use guessers::{AlphabeticalGuesser, FrequencyGuesser, RandomGuesser};

use crate::engine::Engine;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Letters every guesser may fall back on
#[must_use]
pub fn alphabet() -> RangeInclusive<char> {
    'a'..='z'
}

/// A player that picks the next letter to guess
pub trait Guesser {
    /// Pick the next letter, or `None` if no acceptable letter remains
    fn next_letter(&mut self, engine: &Engine) -> Option<char>;

    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Whether the seed changes this guesser's choices; deterministic
    /// guessers replay the same game for every seed
    fn is_seeded(&self) -> bool {
        false
    }
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of a guesser while keeping static dispatch.
pub enum GuesserType {
    /// Most common letter among the candidates (default)
    Frequency(FrequencyGuesser),
    /// First un-guessed letter of the alphabet
    Alphabetical(AlphabeticalGuesser),
    /// Seeded uniform choice
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn next_letter(&mut self, engine: &Engine) -> Option<char> {
        match self {
            Self::Frequency(g) => g.next_letter(engine),
            Self::Alphabetical(g) => g.next_letter(engine),
            Self::Random(g) => g.next_letter(engine),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Frequency(g) => g.name(),
            Self::Alphabetical(g) => g.name(),
            Self::Random(g) => g.name(),
        }
    }

    fn is_seeded(&self) -> bool {
        match self {
            Self::Frequency(g) => g.is_seeded(),
            Self::Alphabetical(g) => g.is_seeded(),
            Self::Random(g) => g.is_seeded(),
        }
    }
}

impl GuesserType {
    /// Create a guesser from its name
    ///
    /// Supported names: "frequency", "alphabetical", "random".
    /// Defaults to frequency if name is unrecognized. `seed` only affects
    /// the random guesser.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "alphabetical" | "alpha" => Self::Alphabetical(AlphabeticalGuesser),
            "random" => Self::Random(RandomGuesser::new(seed)),
            _ => Self::Frequency(FrequencyGuesser),
        }
    }
}

/// Every letter the engine would currently accept: the alphabet plus any
/// other letter that appears in a candidate
#[must_use]
pub fn guessable_letters(engine: &Engine) -> BTreeSet<char> {
    alphabet()
        .chain(engine.candidate_words().iter().flat_map(|word| word.letters()))
        .filter(|&letter| engine.can_guess(letter))
        .collect()
}
