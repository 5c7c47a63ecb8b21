//! Game configuration

use crate::wordlists::WordSource;

/// Wrong guesses allowed before a round is lost
pub const DEFAULT_ALLOWANCE: u32 = 10;

/// Largest sensible allowance: one wrong guess per letter of the alphabet
pub const MAX_ALLOWANCE: u32 = 26;

/// Settings a front end needs to start rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub allowance: u32,
    pub word_source: WordSource,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            allowance: DEFAULT_ALLOWANCE,
            word_source: WordSource::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(allowance: u32, word_source: WordSource) -> Self {
        Self {
            allowance: allowance.clamp(1, MAX_ALLOWANCE),
            word_source,
        }
    }
}
