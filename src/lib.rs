//! Evil Hangman
//!
//! A hangman engine that never commits to a secret word. Every guess splits
//! the remaining candidates into families by where the letter appears, and the
//! engine keeps the largest family.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::engine::Engine;
//!
//! let mut engine = Engine::new(["cat", "car", "cow"], 3, 5).unwrap();
//!
//! // Every candidate starts with 'c', so the guess is revealed
//! assert_eq!(engine.record('c').unwrap(), 1);
//!
//! // {car, cat} outnumbers {cow}
//! engine.record('a').unwrap();
//! println!("Pattern: {}", engine.pattern().unwrap());
//! ```

// Core domain types
pub mod core;

// Adversarial selection engine
pub mod engine;

// Automated guessers
pub mod strategy;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
