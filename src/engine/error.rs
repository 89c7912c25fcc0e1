//! Engine error types

use thiserror::Error;

/// Contract violations reported by the engine
///
/// Both kinds are caller mistakes. The engine never retries and never leaves
/// partially updated state behind when it returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),
}

/// Why an argument was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("word length must be at least 1")]
    ZeroLength,
    #[error("letter '{0}' has already been guessed")]
    AlreadyGuessed(char),
    #[error("'{0}' cannot be guessed")]
    Unguessable(char),
}

/// Why the engine cannot serve the request in its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no candidate words remain")]
    NoCandidates,
    #[error("no guesses remain")]
    NoGuessesLeft,
}

impl EngineError {
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}
