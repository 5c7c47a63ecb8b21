//! Recoverable errors surfaced by the game core
//!
//! None of these are fatal: front ends report them to the player and keep
//! running with the previous game state.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while starting, restoring or persisting a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word list could not be found or opened
    ResourceMissing { source: String, reason: String },
    /// The word list was readable but held no usable words
    EmptyWordList { source: String },
    /// Save data was malformed or inconsistent with the rules
    CorruptSave(String),
    /// A save file could not be read or written
    SaveIo { path: PathBuf, reason: String },
}

impl GameError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptSave(reason.into())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceMissing { source, reason } => {
                write!(f, "Word list '{source}' could not be loaded: {reason}")
            }
            Self::EmptyWordList { source } => {
                write!(f, "Word list '{source}' contains no usable words")
            }
            Self::CorruptSave(reason) => write!(f, "Save data is corrupt: {reason}"),
            Self::SaveIo { path, reason } => {
                write!(f, "Could not access save file {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for GameError {}
