//! Benchmark command
//!
//! Plays many simulated games per word length and reports how often the
//! guesser beats the adversary.

use super::simulate::simulate_game;
use crate::engine::{EngineError, GameConfig};
use crate::strategy::{Guesser, GuesserType};
use crate::wordlists::length_histogram;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Parameters for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Word lengths to play; lengths without dictionary words are reported
    /// with zero games
    pub lengths: Vec<usize>,
    pub games_per_length: usize,
    pub max_wrong: usize,
    pub guesser: String,
    /// Seed of the first game; game `i` uses `seed + i`, wrapping at
    /// `u64::MAX`. Only seeded guessers play more than one game per length.
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            lengths: (3..=8).collect(),
            games_per_length: 20,
            max_wrong: 10,
            guesser: "frequency".to_string(),
            seed: 0,
            show_progress: true,
        }
    }
}

/// Outcome of all games played at one word length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthStats {
    pub length: usize,
    /// Dictionary words of this length
    pub candidates: usize,
    pub games: usize,
    pub wins: usize,
    pub total_wrong: usize,
    pub total_guesses: usize,
}

impl LengthStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub guesser: String,
    pub max_wrong: usize,
    pub total_games: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub average_wrong: f64,
    pub average_guesses: f64,
    pub per_length: Vec<LengthStats>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the benchmark over `dictionary`
///
/// Games run in parallel; results are identical to a sequential run because
/// each game owns its engine and seeded guesser.
///
/// # Errors
///
/// Returns the first engine error raised by any game. Lengths without
/// dictionary words (including zero) are never played, so none is expected.
pub fn run_benchmark<S>(
    dictionary: &[S],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, EngineError>
where
    S: AsRef<str> + Sync,
{
    let start = Instant::now();
    let histogram = length_histogram(dictionary);

    // A deterministic guesser plays the same game for every seed
    let seeded = GuesserType::from_name(&config.guesser, config.seed).is_seeded();
    let games_per_length = if seeded {
        config.games_per_length
    } else {
        config.games_per_length.min(1)
    };

    let jobs: Vec<(usize, u64)> = config
        .lengths
        .iter()
        .filter(|&&length| histogram.contains_key(&length))
        .flat_map(|&length| {
            (0..games_per_length as u64).map(move |game| (length, config.seed.wrapping_add(game)))
        })
        .collect();

    info!(
        games = jobs.len(),
        guesser = %config.guesser,
        max_wrong = config.max_wrong,
        "benchmark started"
    );

    let pb = if config.show_progress {
        ProgressBar::new(jobs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let outcomes = jobs
        .par_iter()
        .map(|&(length, seed)| {
            let mut guesser = GuesserType::from_name(&config.guesser, seed);
            let game_config = GameConfig::new(length, config.max_wrong);
            let result = simulate_game(dictionary, &game_config, &mut guesser);
            pb.inc(1);
            result.map(|game| (length, game.won(), game.wrong_guesses(), game.steps.len()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let mut per_length: BTreeMap<usize, LengthStats> = config
        .lengths
        .iter()
        .map(|&length| {
            let stats = LengthStats {
                length,
                candidates: histogram.get(&length).copied().unwrap_or(0),
                ..LengthStats::default()
            };
            (length, stats)
        })
        .collect();

    for (length, won, wrong, guesses) in outcomes {
        if let Some(stats) = per_length.get_mut(&length) {
            stats.games += 1;
            stats.wins += usize::from(won);
            stats.total_wrong += wrong;
            stats.total_guesses += guesses;
        }
    }

    let per_length: Vec<LengthStats> = per_length.into_values().collect();
    let total_games: usize = per_length.iter().map(|s| s.games).sum();
    let wins: usize = per_length.iter().map(|s| s.wins).sum();
    let total_wrong: usize = per_length.iter().map(|s| s.total_wrong).sum();
    let total_guesses: usize = per_length.iter().map(|s| s.total_guesses).sum();

    let duration = start.elapsed();
    let average = |total: usize| {
        if total_games == 0 {
            0.0
        } else {
            total as f64 / total_games as f64
        }
    };

    Ok(BenchmarkResult {
        guesser: GuesserType::from_name(&config.guesser, config.seed)
            .name()
            .to_string(),
        max_wrong: config.max_wrong,
        total_games,
        wins,
        win_rate: average(wins),
        average_wrong: average(total_wrong),
        average_guesses: average(total_guesses),
        per_length,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;

    fn quiet(lengths: Vec<usize>, games: usize, guesser: &str) -> BenchmarkConfig {
        BenchmarkConfig {
            lengths,
            games_per_length: games,
            max_wrong: 8,
            guesser: guesser.to_string(),
            seed: 3,
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(DICTIONARY, &quiet(vec![3, 5], 4, "random")).unwrap();

        assert_eq!(result.total_games, 8);
        assert!(result.wins <= result.total_games);
        assert!((0.0..=1.0).contains(&result.win_rate));
        assert!(result.average_wrong <= 8.0);
        assert_eq!(result.guesser, "random");
    }

    #[test]
    fn benchmark_per_length_sums_to_total() {
        let result = run_benchmark(DICTIONARY, &quiet(vec![4, 6, 7], 3, "frequency")).unwrap();

        let games: usize = result.per_length.iter().map(|s| s.games).sum();
        assert_eq!(games, result.total_games);
        assert_eq!(result.per_length.len(), 3);
        assert!(result.per_length.iter().all(|s| s.candidates > 0));
    }

    #[test]
    fn benchmark_reports_missing_lengths_with_zero_games() {
        let result = run_benchmark(&["cat", "dog"], &quiet(vec![3, 12], 2, "random")).unwrap();

        assert_eq!(result.total_games, 2);
        let missing = result.per_length.iter().find(|s| s.length == 12).unwrap();
        assert_eq!(missing.games, 0);
        assert_eq!(missing.candidates, 0);
        assert!(missing.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_plays_deterministic_guesser_once_per_length() {
        let result = run_benchmark(DICTIONARY, &quiet(vec![4, 5], 10, "frequency")).unwrap();

        assert_eq!(result.total_games, 2);
        assert!(result.per_length.iter().all(|s| s.games == 1));
    }

    #[test]
    fn benchmark_seed_wraps_at_max() {
        let mut config = quiet(vec![3, 5], 2, "random");
        config.seed = u64::MAX;

        let result = run_benchmark(DICTIONARY, &config).unwrap();
        assert_eq!(result.total_games, 4);
    }

    #[test]
    fn benchmark_is_deterministic() {
        let config = quiet(vec![5], 5, "random");
        let first = run_benchmark(DICTIONARY, &config).unwrap();
        let second = run_benchmark(DICTIONARY, &config).unwrap();

        assert_eq!(first.per_length, second.per_length);
    }

    #[test]
    fn benchmark_empty_dictionary() {
        let dictionary: &[&str] = &[];
        let result = run_benchmark(dictionary, &quiet(vec![5], 5, "frequency")).unwrap();

        assert_eq!(result.total_games, 0);
        assert!(result.average_wrong.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_zero_length_never_plays() {
        // Length zero has no dictionary words, so no engine is ever built for it
        let result = run_benchmark(DICTIONARY, &quiet(vec![0], 2, "frequency")).unwrap();
        assert_eq!(result.total_games, 0);
    }
}
