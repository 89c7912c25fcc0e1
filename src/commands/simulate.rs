//! Single-game simulation
//!
//! Plays one game between a guesser and the engine and returns every step.

use crate::engine::{Engine, EngineError, GameConfig, GameStatus};
use crate::strategy::Guesser;

/// Result of simulating a game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub guesser: String,
    pub config: GameConfig,
    pub steps: Vec<GuessStep>,
    pub status: GameStatus,
    pub final_pattern: String,
    /// The word the engine admits to once the game ends
    pub revealed: Option<String>,
    pub initial_candidates: usize,
}

/// A single guess in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: char,
    pub occurrences: usize,
    pub pattern: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub remaining: usize,
}

impl GameResult {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.steps.iter().filter(|step| step.occurrences == 0).count()
    }
}

/// Play one game with `guesser` against a fresh engine
///
/// The game ends when the engine reports it over or the guesser has no letter
/// left to offer.
///
/// # Errors
///
/// Returns an error if the configuration is invalid. A dictionary without
/// words of the requested length is not an error; the result then has status
/// `NoCandidates` and no steps.
///
/// # Examples
/// ```
/// use evil_hangman::commands::simulate_game;
/// use evil_hangman::engine::GameConfig;
/// use evil_hangman::strategy::FrequencyGuesser;
///
/// let result = simulate_game(["cat", "car", "cow"], &GameConfig::new(3, 8), &mut FrequencyGuesser)
///     .unwrap();
/// assert!(result.won());
/// ```
pub fn simulate_game<I, S, G>(
    dictionary: I,
    config: &GameConfig,
    guesser: &mut G,
) -> Result<GameResult, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    G: Guesser + ?Sized,
{
    let mut engine = Engine::with_config(dictionary, config)?;
    let initial_candidates = engine.candidate_count();
    let mut steps = Vec::new();

    while !engine.is_over() {
        let Some(letter) = guesser.next_letter(&engine) else {
            break;
        };

        let candidates_before = engine.candidate_count();
        let occurrences = engine.record(letter)?;

        steps.push(GuessStep {
            letter,
            occurrences,
            pattern: engine.pattern()?.to_string(),
            candidates_before,
            candidates_after: engine.candidate_count(),
            remaining: engine.remaining(),
        });
    }

    let final_pattern = engine
        .pattern()
        .map_or_else(|_| String::new(), ToString::to_string);

    Ok(GameResult {
        guesser: guesser.name().to_string(),
        config: *config,
        steps,
        status: engine.status(),
        final_pattern,
        revealed: engine.reveal().map(str::to_string),
        initial_candidates,
    })
}
