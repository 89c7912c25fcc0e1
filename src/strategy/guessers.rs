//! Guesser implementations

use super::{Guesser, alphabet, guessable_letters};
use crate::engine::Engine;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Guess the letter found in the most candidates
///
/// Ties go to the alphabetically first letter. Once every candidate letter
/// has been tried, falls back to the alphabet.
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter(&mut self, engine: &Engine) -> Option<char> {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in engine.candidate_words() {
            for letter in word.letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        counts
            .into_iter()
            .filter(|&(letter, _)| engine.can_guess(letter))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(letter, _)| letter)
            .or_else(|| alphabet().find(|&letter| engine.can_guess(letter)))
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

/// Guess `a`, `b`, `c`, ... in order, then any other candidate letter
pub struct AlphabeticalGuesser;

impl Guesser for AlphabeticalGuesser {
    fn next_letter(&mut self, engine: &Engine) -> Option<char> {
        alphabet()
            .find(|&letter| engine.can_guess(letter))
            .or_else(|| guessable_letters(engine).into_iter().next())
    }

    fn name(&self) -> &'static str {
        "alphabetical"
    }
}

/// Guess uniformly at random among the acceptable letters
///
/// Seeded so simulations can be replayed.
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Guesser for RandomGuesser {
    fn next_letter(&mut self, engine: &Engine) -> Option<char> {
        let letters: Vec<char> = guessable_letters(engine).into_iter().collect();
        letters.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn is_seeded(&self) -> bool {
        true
    }
}
