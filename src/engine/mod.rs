//! Adversarial word-selection engine
//!
//! [`Engine`] owns the candidate set, guess ledger, display pattern and
//! remaining budget. [`partition`] holds the grouping and tie-break rules it
//! applies on every guess.

mod config;
mod error;
mod game;
pub mod partition;

pub use config::GameConfig;
pub use error::{ArgumentError, EngineError, StateError};
pub use game::{Engine, GameStatus};
pub use partition::Family;
