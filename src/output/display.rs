//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, GameResult};
use crate::engine::GameStatus;
use colored::Colorize;

/// Print the result of a simulated game
pub fn print_game_result(result: &GameResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Simulating: {} guesser vs {} letters, {} misses allowed",
        result.guesser.bright_yellow().bold(),
        result.config.word_length,
        result.config.max_wrong
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let verdict = if step.occurrences == 0 {
            "miss".red()
        } else {
            format!("{} found", step.occurrences).green()
        };
        println!(
            "\nTurn {}: {}  {}  {}",
            i + 1,
            step.letter.to_string().bright_white().bold(),
            step.pattern,
            verdict
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Remaining:  {} misses", step.remaining);
        }
    }

    println!();
    let word = result.revealed.as_deref().unwrap_or("?");
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved {word} in {} guesses!", result.steps.len())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!(
                "❌ Out of guesses after {} turns; the engine settled on {word}",
                result.steps.len()
            )
            .red()
            .bold()
        ),
        GameStatus::NoCandidates => println!(
            "{}",
            format!("No {}-letter words in the dictionary", result.config.word_length)
                .yellow()
                .bold()
        ),
        GameStatus::InProgress => println!(
            "{}",
            format!("Guesser gave up at {}", result.final_pattern)
                .yellow()
                .bold()
        ),
    }
}

/// Print the result of a letter analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FAMILY ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let history: String = result.history.iter().collect();
    println!("\n📊 After guesses '{history}':");
    println!("   Pattern:     {}", result.pattern.bright_white().bold());
    println!("   Candidates:  {}", result.total_candidates);
    println!("   Remaining:   {} misses", result.remaining);
    println!("   Families:    {}\n", result.families.len());

    for (i, family) in result.families.iter().enumerate() {
        let bar = create_progress_bar(
            family.size as f64,
            result.total_candidates.max(1) as f64,
            20,
        );
        let marker = if i == 0 { "★".bright_yellow() } else { " ".normal() };
        println!(
            " {marker} {}  [{}] {:5}  {}",
            family.pattern.bright_white(),
            bar.green(),
            family.size,
            family.sample.join(", ").bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Guesser:          {}", result.guesser);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Avg misses:       {}",
        format!("{:.2} / {}", result.average_wrong, result.max_wrong).yellow()
    );
    println!("   Avg guesses:      {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "By word length:".bright_cyan().bold());
    for stats in &result.per_length {
        if stats.games == 0 {
            println!(
                "   {:2}: {}",
                stats.length,
                "no words of this length".bright_black()
            );
            continue;
        }

        let pct = stats.win_rate() * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!(
            "   {:2}: {bar} {:3}/{:<3} ({pct:5.1}%)  {} words",
            stats.length, stats.wins, stats.games, stats.candidates
        );
    }
}
