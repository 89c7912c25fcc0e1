//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, FamilySummary, analyze_guess};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, LengthStats, run_benchmark};
pub use simple::{SessionStats, play_session, run_simple};
pub use simulate::{GameResult, GuessStep, simulate_game};
