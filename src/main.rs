//! Evil Hangman - CLI
//!
//! Hangman against an engine that keeps its options open, with TUI and CLI
//! modes plus simulation tools for automated guessers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{BenchmarkConfig, analyze_guess, run_benchmark, run_simple, simulate_game},
    engine::GameConfig,
    output::{print_analysis_result, print_benchmark_result, print_game_result},
    strategy::{Guesser, GuesserType},
    wordlists::{DICTIONARY, length_histogram, loader::words_from_slice},
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman where the computer never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Length of the hidden word
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Wrong guesses allowed
    #[arg(short, long, global = true, default_value_t = 10)]
    guesses: usize,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Show debug logs and per-turn details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Watch an automated guesser play one game
    Simulate {
        /// Guesser: frequency (default), alphabetical, random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,

        /// Seed for the random guesser
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Play many automated games and report win rates
    Benchmark {
        /// Games per word length
        #[arg(short = 'n', long, default_value_t = 20)]
        games: usize,

        /// Guesser: frequency (default), alphabetical, random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,

        /// Comma-separated word lengths (default: 3-8)
        #[arg(long, value_delimiter = ',')]
        lengths: Vec<usize>,

        /// Seed of the first game
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Preview how a letter would split the candidates
    Analyze {
        /// Letter to analyze
        letter: char,

        /// Letters already guessed, in order
        #[arg(long, default_value = "")]
        history: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "evil_hangman=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    use evil_hangman::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;
    info!(words = words.len(), source = %cli.wordlist, "word list loaded");

    let config = GameConfig::new(cli.length, cli.guesses);
    config.validate()?;

    let command = cli.command.unwrap_or(Commands::Play);

    // Benchmark picks its own lengths
    if !matches!(command, Commands::Benchmark { .. })
        && !length_histogram(&words).contains_key(&config.word_length)
    {
        warn!(
            length = config.word_length,
            "no words of this length in the word list"
        );
    }

    match command {
        Commands::Play => run_play_command(&words, config),
        Commands::Simple => {
            let stats = run_simple(words.as_slice(), &config)?;
            info!(games = stats.games, wins = stats.wins, "session finished");
            Ok(())
        }
        Commands::Simulate { strategy, seed } => {
            let mut guesser = GuesserType::from_name(&strategy, seed);
            let result = simulate_game(&words, &config, &mut guesser)?;
            print_game_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Benchmark {
            games,
            strategy,
            lengths,
            seed,
        } => {
            let defaults = BenchmarkConfig::default();
            let benchmark = BenchmarkConfig {
                lengths: if lengths.is_empty() {
                    defaults.lengths
                } else {
                    lengths
                },
                games_per_length: games,
                max_wrong: cli.guesses,
                guesser: strategy,
                seed,
                show_progress: true,
            };

            println!(
                "Running benchmark: {} games per length, {} misses allowed...",
                benchmark.games_per_length, benchmark.max_wrong
            );
            if !GuesserType::from_name(&benchmark.guesser, seed).is_seeded() {
                println!("Only the random guesser uses the seed; others play one game per length.");
            }
            let result = run_benchmark(words.as_slice(), &benchmark)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Analyze { letter, history } => {
            let history: Vec<char> = history.chars().filter(|c| !c.is_whitespace()).collect();
            let result = analyze_guess(&words, &config, &history, letter, 8)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(words: &[String], config: GameConfig) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    let app = App::new(words, config)?;
    run_tui(app)
}
