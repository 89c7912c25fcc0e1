//! Game configuration

use super::error::{ArgumentError, EngineError};

/// Parameters for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Length of the hidden word
    pub word_length: usize,
    /// Wrong guesses allowed before the game is lost
    pub max_wrong: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_wrong: usize) -> Self {
        Self {
            word_length,
            max_wrong,
        }
    }

    /// Check the configuration before building an engine from it
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `word_length` is zero.
    pub const fn validate(&self) -> Result<(), EngineError> {
        if self.word_length == 0 {
            return Err(EngineError::InvalidArgument(ArgumentError::ZeroLength));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(5, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_wrong, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_length_rejected() {
        let config = GameConfig::new(0, 3);
        assert_eq!(
            config.validate(),
            Err(EngineError::InvalidArgument(ArgumentError::ZeroLength))
        );
    }

    #[test]
    fn zero_budget_is_valid() {
        assert!(GameConfig::new(4, 0).validate().is_ok());
    }
}
