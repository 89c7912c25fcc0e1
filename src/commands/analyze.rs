//! Guess analysis command
//!
//! Replays a guess history and previews how the next letter would split the
//! remaining candidates.

use crate::engine::{Engine, EngineError, GameConfig};

/// One family in the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySummary {
    pub pattern: String,
    pub size: usize,
    pub occurrences: usize,
    /// Up to `sample_size` members, alphabetically
    pub sample: Vec<String>,
}

/// Result of analyzing a letter
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub letter: char,
    pub history: Vec<char>,
    pub pattern: String,
    pub remaining: usize,
    pub total_candidates: usize,
    /// Winner first
    pub families: Vec<FamilySummary>,
}

impl AnalysisResult {
    /// The family the engine would keep
    #[must_use]
    pub fn winner(&self) -> Option<&FamilySummary> {
        self.families.first()
    }
}

/// Replay `history`, then preview the families for `letter`
///
/// # Errors
///
/// Returns an error if the configuration is invalid, if any letter in the
/// history is rejected by the engine, or if `letter` itself cannot be guessed
/// after the history.
///
/// # Examples
/// ```
/// use evil_hangman::commands::analyze_guess;
/// use evil_hangman::engine::GameConfig;
///
/// let result = analyze_guess(["cat", "car", "cow"], &GameConfig::new(3, 5), &['c'], 'a', 3)
///     .unwrap();
/// assert_eq!(result.winner().unwrap().pattern, "c a -");
/// assert_eq!(result.families.len(), 2);
/// ```
pub fn analyze_guess<I, S>(
    dictionary: I,
    config: &GameConfig,
    history: &[char],
    letter: char,
    sample_size: usize,
) -> Result<AnalysisResult, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut engine = Engine::with_config(dictionary, config)?;
    for &guess in history {
        engine.record(guess)?;
    }

    let families: Vec<FamilySummary> = engine
        .families(letter)?
        .into_iter()
        .map(|family| FamilySummary {
            pattern: family.pattern.to_string(),
            size: family.size(),
            occurrences: family.occurrences(letter),
            sample: family
                .members
                .iter()
                .take(sample_size)
                .map(|word| word.text().to_string())
                .collect(),
        })
        .collect();

    Ok(AnalysisResult {
        letter,
        history: history.to_vec(),
        pattern: engine.pattern()?.to_string(),
        remaining: engine.remaining(),
        total_candidates: engine.candidate_count(),
        families,
    })
}
