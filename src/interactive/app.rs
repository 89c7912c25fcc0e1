//! TUI application state and logic

use crate::engine::{ArgumentError, Engine, EngineError, GameConfig, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub engine: Engine,
    pub dictionary: &'a [String],
    pub config: GameConfig,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    /// Show the candidate list instead of just the count
    pub peek: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letter: char,
    pub occurrences: usize,
    pub pattern: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}

impl<'a> App<'a> {
    /// Start a session with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(dictionary: &'a [String], config: GameConfig) -> Result<Self, EngineError> {
        let engine = Engine::with_config(dictionary, &config)?;

        let mut app = Self {
            engine,
            dictionary,
            config,
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            peek: false,
            should_quit: false,
        };
        app.announce_game();
        Ok(app)
    }

    fn announce_game(&mut self) {
        if self.engine.status() == GameStatus::NoCandidates {
            self.input_mode = InputMode::GameOver;
            self.add_message(
                &format!("No {}-letter words in the word list!", self.config.word_length),
                MessageStyle::Error,
            );
            return;
        }

        self.add_message(
            &format!(
                "I'm thinking of a {}-letter word. You may miss {} times.",
                self.config.word_length, self.config.max_wrong
            ),
            MessageStyle::Info,
        );
        self.add_message("Type a letter to guess it.", MessageStyle::Info);
    }

    pub fn handle_guess(&mut self, letter: char) {
        let candidates_before = self.engine.candidate_count();

        match self.engine.record(letter) {
            Ok(occurrences) => {
                let pattern = self
                    .engine
                    .pattern()
                    .map_or_else(|_| String::new(), ToString::to_string);
                self.history.push(HistoryEntry {
                    letter,
                    occurrences,
                    pattern,
                    candidates_before,
                    candidates_after: self.engine.candidate_count(),
                });

                match occurrences {
                    0 => self.add_message(
                        &format!("Sorry, there are no {letter}'s"),
                        MessageStyle::Error,
                    ),
                    1 => self.add_message(
                        &format!("Yes, there is one {letter}"),
                        MessageStyle::Success,
                    ),
                    n => self.add_message(
                        &format!("Yes, there are {n} {letter}'s"),
                        MessageStyle::Success,
                    ),
                }

                if self.engine.is_over() {
                    self.finish_game();
                }
            }
            Err(EngineError::InvalidArgument(ArgumentError::AlreadyGuessed(_))) => {
                self.add_message("You already guessed that", MessageStyle::Error);
            }
            Err(err) => {
                debug!(%letter, error = %err, "guess rejected");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        let answer = self.engine.reveal().unwrap_or("?").to_string();
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if self.engine.status() == GameStatus::Won {
            self.stats.games_won += 1;
            self.add_message(
                &format!("🎉 You beat me! The word was {answer}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("💀 Out of guesses! The word was {answer}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        // The config was validated when the session started
        if let Ok(engine) = Engine::with_config(self.dictionary, &self.config) {
            self.engine = engine;
        }
        self.history.clear();
        self.messages.clear();
        self.peek = false;
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        self.announce_game();
    }

    pub fn toggle_peek(&mut self) {
        self.peek = !self.peek;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Tab => self.toggle_peek(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.toggle_peek(),
                KeyCode::Char(c) if c.is_alphabetic() => self.handle_guess(c),
                KeyCode::Char(_) => {
                    self.add_message("Please enter a single letter.", MessageStyle::Error);
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn app_plays_to_a_win() {
        let words = dictionary(&["cat", "car", "cow"]);
        let mut app = App::new(&words, GameConfig::new(3, 5)).unwrap();

        for c in ['c', 'a', 'r', 't'] {
            press(&mut app, c);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.history.len(), 4);
        assert_eq!(app.history[2].occurrences, 0);
        assert_eq!(app.history[3].pattern, "c a t");
    }

    #[test]
    fn app_counts_a_loss() {
        let words = dictionary(&["cat", "dog"]);
        let mut app = App::new(&words, GameConfig::new(3, 1)).unwrap();

        press(&mut app, 'z');

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        // Letters are ignored once the game is over
        press(&mut app, 'c');
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn app_rejects_repeat_without_history() {
        let words = dictionary(&["cat", "dog"]);
        let mut app = App::new(&words, GameConfig::new(3, 5)).unwrap();

        press(&mut app, 'z');
        press(&mut app, 'z');

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.engine.remaining(), 4);
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "You already guessed that");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn app_new_game_resets_board() {
        let words = dictionary(&["cat", "dog"]);
        let mut app = App::new(&words, GameConfig::new(3, 1)).unwrap();

        press(&mut app, 'z');
        press(&mut app, 'n');

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert_eq!(app.engine.remaining(), 1);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn app_tab_toggles_peek_and_esc_quits() {
        let words = dictionary(&["cat"]);
        let mut app = App::new(&words, GameConfig::new(3, 5)).unwrap();

        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert!(app.peek);
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert!(!app.peek);

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn app_without_words_starts_over() {
        let words = dictionary(&["cat"]);
        let app = App::new(&words, GameConfig::new(8, 5)).unwrap();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 0);
    }

    #[test]
    fn app_rejects_invalid_config() {
        let words = dictionary(&["cat"]);
        assert!(App::new(&words, GameConfig::new(0, 5)).is_err());
    }

    #[test]
    fn messages_are_capped() {
        let words = dictionary(&["cat"]);
        let mut app = App::new(&words, GameConfig::new(3, 5)).unwrap();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
