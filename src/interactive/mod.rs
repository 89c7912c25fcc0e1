//! Interactive TUI
//!
//! Full-screen hangman against the engine, built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
