//! Saving and restoring rounds
//!
//! A save holds only what is needed to replay a round: the secret word, the
//! revealed letters, the wrong-guess total and the guesses in order. The
//! allowance is not stored and comes from the current configuration.

mod codec;

pub use codec::{SCHEMA_PREFIX, SCHEMA_VERSION, decode, encode};

use crate::core::Letter;
use crate::error::GameError;
use crate::game::Game;
use log::info;
use std::fs;
use std::path::Path;

/// Conventional extension for save files
pub const SAVE_EXTENSION: &str = "hng";

/// The reconstructable subset of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Secret word, uppercase
    pub word: String,
    /// Letter of every revealed position, in position order
    pub revealed_letters: Vec<Letter>,
    /// Allowance minus remaining guesses
    pub wrong_guesses: u32,
    /// Every guessed letter, in guess order
    pub guesses: Vec<Letter>,
}

/// Write a snapshot to `path`
///
/// # Errors
///
/// Returns `GameError::SaveIo` if the file cannot be written.
pub fn save_to_file(path: &Path, snapshot: &RoundSnapshot) -> Result<(), GameError> {
    fs::write(path, encode(snapshot)).map_err(|e| GameError::SaveIo {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read and decode a snapshot from `path`
///
/// # Errors
///
/// Returns `GameError::SaveIo` if the file cannot be read and
/// `GameError::CorruptSave` if its contents do not decode.
pub fn load_from_file(path: &Path) -> Result<RoundSnapshot, GameError> {
    let text = fs::read_to_string(path).map_err(|e| GameError::SaveIo {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    decode(&text)
}

/// Save the game's current round and clear its modified flag
///
/// Returns `false` without touching the file system if no round has been
/// started yet.
///
/// # Errors
///
/// Returns `GameError::SaveIo` if the file cannot be written.
pub fn save_game(game: &mut Game, path: &Path) -> Result<bool, GameError> {
    let Some(snapshot) = game.snapshot() else {
        return Ok(false);
    };
    save_to_file(path, &snapshot)?;
    game.mark_saved();
    info!("saved round to {}", path.display());
    Ok(true)
}

/// Replace the game's round with the one saved at `path`
///
/// # Errors
///
/// Returns `GameError::SaveIo` or `GameError::CorruptSave`; the game is left
/// untouched on error.
pub fn load_game(game: &mut Game, path: &Path, allowance: u32) -> Result<(), GameError> {
    let snapshot = load_from_file(path)?;
    game.restore(&snapshot, allowance)
}
