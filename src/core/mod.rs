//! Core domain types for hangman
//!
//! Pure value types with no game state: a dictionary word and the display
//! pattern shared by the remaining candidates.

mod pattern;
mod word;

pub use pattern::{Pattern, PatternError};
pub use word::{Word, WordError};
