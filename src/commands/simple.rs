//! Simple interactive CLI mode
//!
//! Text-based hangman against the adversarial engine, without the TUI.

use crate::engine::{ArgumentError, Engine, EngineError, GameConfig, GameStatus};
use crate::output::formatters::{budget_bar, format_guessed};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Games played in one interactive session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub games: usize,
    pub wins: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if the
/// dictionary has no words of the configured length.
pub fn run_simple<S: AsRef<str>>(dictionary: &[S], config: &GameConfig) -> Result<SessionStats> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(dictionary, config, stdin.lock(), stdout.lock())
}

/// Play games reading guesses from `input` and writing to `output`
///
/// The session ends on `quit`, on end of input, or when the player declines
/// another game.
///
/// # Errors
///
/// Returns an error on I/O failure, an invalid configuration, or a dictionary
/// without words of the configured length.
pub fn play_session<S, R, W>(
    dictionary: &[S],
    config: &GameConfig,
    mut input: R,
    mut output: W,
) -> Result<SessionStats>
where
    S: AsRef<str>,
    R: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Hangman - Interactive Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "I'm thinking of a {}-letter word.", config.word_length)?;
    writeln!(output, "Guess one letter at a time. You may miss {} times.", config.max_wrong)?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game, 'count' for words left\n")?;

    loop {
        let mut engine = Engine::with_config(dictionary, config)?;
        if engine.candidate_count() == 0 {
            bail!("no words of length {} in the dictionary", config.word_length);
        }

        while !engine.is_over() {
            write_status(&mut output, &engine)?;

            let Some(line) = read_input(&mut input, &mut output, "Your guess")? else {
                return Ok(stats);
            };

            match line.as_str() {
                "quit" | "exit" => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(stats);
                }
                "new" => {
                    writeln!(output, "\n🔄 New game started!\n")?;
                    engine = Engine::with_config(dictionary, config)?;
                    continue;
                }
                "count" => {
                    writeln!(output, "{} words still fit.\n", engine.candidate_count())?;
                    continue;
                }
                _ => {}
            }

            let mut chars = line.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                writeln!(output, "❌ Please enter a single letter.\n")?;
                continue;
            };

            match engine.record(letter) {
                Ok(0) => writeln!(output, "Sorry, there are no {letter}'s\n")?,
                Ok(1) => writeln!(output, "Yes, there is one {letter}\n")?,
                Ok(count) => writeln!(output, "Yes, there are {count} {letter}'s\n")?,
                Err(EngineError::InvalidArgument(ArgumentError::AlreadyGuessed(_))) => {
                    writeln!(output, "You already guessed that\n")?;
                }
                Err(err) => writeln!(output, "❌ {err}\n")?,
            }
        }

        stats.games += 1;
        write_summary(&mut output, &engine, &mut stats)?;

        let again = read_input(&mut input, &mut output, "Play again? (yes/no)")?;
        if !matches!(again.as_deref(), Some("yes" | "y")) {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(stats);
        }
        writeln!(output, "\n🔄 New game started!\n")?;
    }
}

fn write_status<W: Write>(output: &mut W, engine: &Engine) -> Result<()> {
    let pattern = engine.pattern()?;
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(output, "Word:      {}", pattern.to_string().bright_white().bold())?;
    writeln!(output, "Guessed:   {}", format_guessed(engine.guessed()))?;
    writeln!(
        output,
        "Remaining: [{}] {}",
        budget_bar(engine.remaining(), engine.max_wrong(), 20),
        engine.remaining()
    )?;
    Ok(())
}

fn write_summary<W: Write>(output: &mut W, engine: &Engine, stats: &mut SessionStats) -> Result<()> {
    let answer = engine.reveal().unwrap_or("?");

    match engine.status() {
        GameStatus::Won => {
            stats.wins += 1;
            writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(output, "{}", "    🎉  You beat me!  🎉    ".bright_green().bold())?;
            writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
            writeln!(output, "\nThe word was {}.", answer.bright_yellow().bold())?;
        }
        _ => {
            writeln!(output, "\n{}", "You lose. Better luck next time!".red().bold())?;
            writeln!(output, "The word was {}.", answer.bright_yellow().bold())?;
        }
    }

    writeln!(
        output,
        "Session: {} of {} won\n",
        stats.wins, stats.games
    )?;
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn read_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
