//! Adversarial hangman engine
//!
//! The engine never picks a secret word. It keeps every dictionary word of the
//! requested length that is still consistent with the guesses so far, and on
//! each guess narrows that set to the largest family the guess induces.

use super::config::GameConfig;
use super::error::{ArgumentError, EngineError, StateError};
use super::partition::{Family, group_by_pattern, ranked_families, select_winner};
use crate::core::{Pattern, Word};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Where a game stands after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses remain and the word is not yet fully revealed
    InProgress,
    /// Every position is revealed
    Won,
    /// The wrong-guess budget is spent
    Lost,
    /// The dictionary had no words of the requested length
    NoCandidates,
}

/// Candidate store, guess ledger, pattern tracker and remaining budget
#[derive(Debug, Clone)]
pub struct Engine {
    candidates: BTreeSet<Word>,
    guessed: BTreeSet<char>,
    pattern: Pattern,
    remaining: usize,
    max_wrong: usize,
}

impl Engine {
    /// Create an engine over the words of `length` found in `dictionary`
    ///
    /// Words of any other length are discarded, as are words containing the
    /// placeholder or whitespace, since those letters can never be guessed.
    /// Duplicate words collapse into one candidate. The dictionary itself is only read.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `length` is zero.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::Engine;
    ///
    /// let engine = Engine::new(["cat", "car", "cow", "goat"], 3, 5).unwrap();
    /// let words: Vec<&str> = engine.candidates().collect();
    /// assert_eq!(words, vec!["car", "cat", "cow"]);
    /// assert_eq!(engine.pattern().unwrap().to_string(), "- - -");
    /// assert_eq!(engine.remaining(), 5);
    /// ```
    pub fn new<I, S>(dictionary: I, length: usize, max_wrong: usize) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(dictionary, &GameConfig::new(length, max_wrong))
    }

    /// Create an engine from a validated [`GameConfig`]
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the configuration is invalid.
    pub fn with_config<I, S>(dictionary: I, config: &GameConfig) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;

        let candidates: BTreeSet<Word> = dictionary
            .into_iter()
            .filter(|word| word.as_ref().chars().count() == config.word_length)
            .filter(|word| is_playable(word.as_ref()))
            .filter_map(|word| Word::new(word.as_ref()).ok())
            .collect();

        debug!(
            length = config.word_length,
            max_wrong = config.max_wrong,
            candidates = candidates.len(),
            "engine created"
        );

        Ok(Self {
            candidates,
            guessed: BTreeSet::new(),
            pattern: Pattern::hidden(config.word_length),
            remaining: config.max_wrong,
            max_wrong: config.max_wrong,
        })
    }

    /// Current candidate words in alphabetical order
    pub fn candidates(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.candidates.iter().map(Word::text)
    }

    /// Current candidates as words, for callers that need letter positions
    #[must_use]
    pub const fn candidate_words(&self) -> &BTreeSet<Word> {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Wrong guesses still allowed
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Wrong-guess budget the game started with
    #[must_use]
    pub const fn max_wrong(&self) -> usize {
        self.max_wrong
    }

    /// Wrong guesses made so far
    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.max_wrong - self.remaining
    }

    /// Letters guessed so far, alphabetically
    #[must_use]
    pub const fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.pattern.len()
    }

    /// The pattern shared by every current candidate
    ///
    /// # Errors
    /// Returns `InvalidState` if no candidates remain.
    pub fn pattern(&self) -> Result<&Pattern, EngineError> {
        if self.candidates.is_empty() {
            return Err(StateError::NoCandidates.into());
        }
        Ok(&self.pattern)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.candidates.is_empty() {
            GameStatus::NoCandidates
        } else if self.pattern.is_complete() {
            GameStatus::Won
        } else if self.remaining == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// The word the engine owns up to: the alphabetically first candidate
    #[must_use]
    pub fn reveal(&self) -> Option<&str> {
        self.candidates.first().map(Word::text)
    }

    /// Whether `record(letter)` would be accepted right now
    #[must_use]
    pub fn can_guess(&self, letter: char) -> bool {
        self.check_guess(letter).is_ok()
    }

    /// Preview the families `record(letter)` would choose between
    ///
    /// Families come back winner first, then by descending size and pattern.
    /// Nothing is recorded.
    ///
    /// # Errors
    /// Same conditions as [`Engine::record`].
    pub fn families(&self, letter: char) -> Result<Vec<Family<'_>>, EngineError> {
        self.check_guess(letter)?;
        Ok(ranked_families(group_by_pattern(
            &self.pattern,
            letter,
            &self.candidates,
        )))
    }

    /// Record a guess and narrow the candidates adversarially
    ///
    /// Returns how many positions of the new pattern show `letter`. A result
    /// of zero means the guess was wrong and one guess of the budget is gone.
    ///
    /// On error nothing changes.
    ///
    /// # Errors
    /// - `InvalidState` if no guesses or no candidates remain
    /// - `InvalidArgument` if `letter` was already guessed, or is the
    ///   placeholder or whitespace
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::Engine;
    ///
    /// let mut engine = Engine::new(["cat", "car", "cow"], 3, 5).unwrap();
    /// assert_eq!(engine.record('c').unwrap(), 1);
    /// assert_eq!(engine.record('a').unwrap(), 1);
    /// assert_eq!(engine.pattern().unwrap().to_string(), "c a -");
    ///
    /// assert_eq!(engine.record('z').unwrap(), 0);
    /// assert_eq!(engine.remaining(), 4);
    /// ```
    pub fn record(&mut self, letter: char) -> Result<usize, EngineError> {
        self.check_guess(letter)?;

        let groups = group_by_pattern(&self.pattern, letter, &self.candidates);
        let family_count = groups.len();
        for (pattern, members) in &groups {
            trace!(%letter, %pattern, size = members.len(), "family");
        }

        let Some(winner) = select_winner(groups) else {
            return Err(StateError::NoCandidates.into());
        };

        // Build the whole next state before touching any field
        let occurrences = winner.occurrences(letter);
        let candidates: BTreeSet<Word> = winner.members.into_iter().cloned().collect();
        let pattern = winner.pattern;

        self.guessed.insert(letter);
        self.candidates = candidates;
        self.pattern = pattern;
        if occurrences == 0 {
            self.remaining -= 1;
        }

        debug!(
            %letter,
            families = family_count,
            pattern = %self.pattern,
            candidates = self.candidates.len(),
            occurrences,
            remaining = self.remaining,
            "guess recorded"
        );

        Ok(occurrences)
    }

    fn check_guess(&self, letter: char) -> Result<(), EngineError> {
        if self.remaining < 1 {
            return Err(StateError::NoGuessesLeft.into());
        }
        if self.candidates.is_empty() {
            return Err(StateError::NoCandidates.into());
        }
        if self.guessed.contains(&letter) {
            return Err(ArgumentError::AlreadyGuessed(letter).into());
        }
        if !is_guessable(letter) {
            return Err(ArgumentError::Unguessable(letter).into());
        }
        Ok(())
    }
}

fn is_guessable(letter: char) -> bool {
    letter != Pattern::PLACEHOLDER && !letter.is_whitespace()
}

/// Every letter of `word` can be guessed, so the word can be fully revealed
fn is_playable(word: &str) -> bool {
    word.chars().all(is_guessable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn farm() -> Engine {
        Engine::new(["cat", "car", "cow"], 3, 5).unwrap()
    }

    fn words(engine: &Engine) -> Vec<&str> {
        engine.candidates().collect()
    }

    #[test]
    fn construction_filters_by_length() {
        let engine = Engine::new(["a", "to", "cat", "dog", "goat", "dog"], 3, 2).unwrap();
        assert_eq!(words(&engine), vec!["cat", "dog"]);
        assert_eq!(engine.word_length(), 3);
        assert!(engine.guessed().is_empty());
        assert_eq!(engine.remaining(), 2);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn construction_skips_unwinnable_words() {
        let engine = Engine::new(["a-b", "a b", "abc"], 3, 5).unwrap();
        assert_eq!(words(&engine), vec!["abc"]);

        let mut engine = Engine::new(["a-b"], 3, 5).unwrap();
        assert_eq!(engine.status(), GameStatus::NoCandidates);
        assert!(engine.record('a').unwrap_err().is_invalid_state());
    }

    #[test]
    fn construction_rejects_zero_length() {
        let err = Engine::new(["cat"], 0, 5).unwrap_err();
        assert_eq!(err, EngineError::InvalidArgument(ArgumentError::ZeroLength));
    }

    #[test]
    fn construction_does_not_consume_dictionary() {
        let dictionary = vec!["cat".to_string(), "horse".to_string()];
        let engine = Engine::new(&dictionary, 5, 1).unwrap();
        assert_eq!(words(&engine), vec!["horse"]);
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn scenario_cat_car_cow() {
        let mut engine = farm();

        assert_eq!(engine.record('c').unwrap(), 1);
        assert_eq!(engine.pattern().unwrap().to_string(), "c - -");
        assert_eq!(engine.remaining(), 5);
        assert_eq!(words(&engine), vec!["car", "cat", "cow"]);

        assert_eq!(engine.record('a').unwrap(), 1);
        assert_eq!(engine.pattern().unwrap().to_string(), "c a -");
        assert_eq!(engine.remaining(), 5);
        assert_eq!(words(&engine), vec!["car", "cat"]);

        assert_eq!(engine.record('z').unwrap(), 0);
        assert_eq!(engine.pattern().unwrap().to_string(), "c a -");
        assert_eq!(engine.remaining(), 4);
        assert_eq!(engine.wrong_guesses(), 1);
        assert_eq!(engine.guessed().iter().collect::<String>(), "acz");
    }

    #[test]
    fn repeated_letter_rejected_without_changes() {
        let mut engine = farm();
        engine.record('c').unwrap();
        let before = engine.clone();

        let err = engine.record('c').unwrap_err();
        assert_eq!(err, EngineError::from(ArgumentError::AlreadyGuessed('c')));
        assert_eq!(engine.guessed(), before.guessed());
        assert_eq!(engine.remaining(), before.remaining());
        assert_eq!(words(&engine), words(&before));
    }

    #[test]
    fn repeated_wrong_letter_rejected() {
        let mut engine = farm();
        assert_eq!(engine.record('q').unwrap(), 0);
        assert!(engine.record('q').unwrap_err().is_invalid_argument());
        assert_eq!(engine.remaining(), 4);
    }

    #[test]
    fn placeholder_and_whitespace_rejected() {
        let mut engine = farm();
        assert_eq!(
            engine.record('-'),
            Err(EngineError::from(ArgumentError::Unguessable('-')))
        );
        assert_eq!(
            engine.record(' '),
            Err(EngineError::from(ArgumentError::Unguessable(' ')))
        );
        assert!(engine.guessed().is_empty());
    }

    #[test]
    fn zero_budget_refuses_first_guess() {
        let mut engine = Engine::new(["cat", "dog"], 3, 0).unwrap();
        assert_eq!(engine.record('a'), Err(EngineError::from(StateError::NoGuessesLeft)));
        assert_eq!(engine.remaining(), 0);
        assert!(engine.guessed().is_empty());
        assert_eq!(engine.status(), GameStatus::Lost);
    }

    #[test]
    fn budget_never_goes_negative() {
        let mut engine = Engine::new(["cat", "dog"], 3, 1).unwrap();
        assert_eq!(engine.record('z').unwrap(), 0);
        assert_eq!(engine.remaining(), 0);
        assert_eq!(engine.record('y'), Err(EngineError::from(StateError::NoGuessesLeft)));
        assert_eq!(engine.remaining(), 0);
    }

    #[test]
    fn no_candidates_is_invalid_state() {
        let mut engine = Engine::new(["cat", "dog"], 7, 3).unwrap();
        assert_eq!(engine.candidate_count(), 0);
        assert_eq!(engine.pattern(), Err(EngineError::from(StateError::NoCandidates)));
        assert_eq!(engine.record('a'), Err(EngineError::from(StateError::NoCandidates)));
        assert_eq!(engine.status(), GameStatus::NoCandidates);
        assert!(engine.reveal().is_none());
    }

    #[test]
    fn state_errors_take_priority_over_repeats() {
        let mut engine = Engine::new(["cat", "dog"], 3, 1).unwrap();
        engine.record('z').unwrap();
        assert_eq!(engine.record('z'), Err(EngineError::from(StateError::NoGuessesLeft)));
    }

    #[test]
    fn game_is_won_when_pattern_complete() {
        let mut engine = Engine::new(["dad"], 3, 2).unwrap();
        assert_eq!(engine.record('d').unwrap(), 2);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.record('a').unwrap(), 1);
        assert_eq!(engine.status(), GameStatus::Won);
        assert!(engine.is_over());
        assert_eq!(engine.reveal(), Some("dad"));
    }

    #[test]
    fn families_preview_does_not_record() {
        let mut engine = farm();
        engine.record('c').unwrap();

        let families = engine.families('a').unwrap();
        assert_eq!(families.len(), 2);
        assert_eq!(families[0].pattern.to_string(), "c a -");
        assert_eq!(families[0].size(), 2);
        assert_eq!(families[1].pattern.to_string(), "c - -");

        assert!(!engine.guessed().contains(&'a'));
        assert_eq!(engine.candidate_count(), 3);
        assert!(engine.families('c').unwrap_err().is_invalid_argument());
    }

    #[test]
    fn adversary_prefers_absence_on_ties() {
        // 'e' splits {bed, bat} into "- e -" and "- - -"; both size 1, "- - -" wins
        let mut engine = Engine::new(["bat", "bed"], 3, 3).unwrap();
        assert_eq!(engine.record('e').unwrap(), 0);
        assert_eq!(words(&engine), vec!["bat"]);
        assert_eq!(engine.remaining(), 2);
    }

    #[test]
    fn can_guess_reflects_record_preconditions() {
        let mut engine = farm();
        assert!(engine.can_guess('a'));
        engine.record('a').unwrap();
        assert!(!engine.can_guess('a'));
        assert!(!engine.can_guess('-'));
    }

    fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-f]{1,5}", 1..60)
    }

    proptest! {
        #[test]
        fn candidates_always_have_requested_length(
            dictionary in dictionary_strategy(),
            length in 1usize..6,
        ) {
            let engine = Engine::new(&dictionary, length, 3).unwrap();
            prop_assert!(engine.candidates().all(|w| w.chars().count() == length));
        }

        #[test]
        fn every_guess_keeps_invariants(
            dictionary in dictionary_strategy(),
            length in 1usize..6,
            guesses in prop::collection::vec(prop::char::range('a', 'h'), 0..12),
        ) {
            let mut engine = Engine::new(&dictionary, length, 6).unwrap();

            for letter in guesses {
                let before = engine.candidate_count();
                let remaining = engine.remaining();
                let Ok(occurrences) = engine.record(letter) else {
                    continue;
                };

                let pattern = engine.pattern().unwrap().clone();
                prop_assert_eq!(pattern.len(), length);
                prop_assert!(engine.candidate_count() <= before);
                prop_assert!(engine.candidate_count() >= 1);
                prop_assert_eq!(occurrences, pattern.count(letter));
                prop_assert_eq!(
                    engine.remaining(),
                    if occurrences == 0 { remaining - 1 } else { remaining }
                );
                for word in engine.candidate_words() {
                    prop_assert!(pattern.matches(word));
                }
                for symbol in pattern.symbols() {
                    prop_assert!(symbol == Pattern::PLACEHOLDER || engine.guessed().contains(&symbol));
                }
            }
        }

        #[test]
        fn identical_engines_stay_identical(
            dictionary in dictionary_strategy(),
            guesses in prop::collection::vec(prop::char::range('a', 'h'), 0..10),
        ) {
            let mut first = Engine::new(&dictionary, 3, 4).unwrap();
            let mut second = Engine::new(&dictionary, 3, 4).unwrap();

            for letter in guesses {
                prop_assert_eq!(first.record(letter), second.record(letter));
                prop_assert_eq!(first.pattern(), second.pattern());
                prop_assert_eq!(first.remaining(), second.remaining());
            }
        }
    }
}
