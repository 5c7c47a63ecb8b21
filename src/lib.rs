//! Hangman
//!
//! A word-guessing game engine with save/load support, plus terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::SecretWord;
//! use hangman::game::{Game, RoundState};
//! use hangman::save::{decode, encode};
//!
//! let mut game = Game::new();
//! game.start_round_with_word(SecretWord::new("cat").unwrap(), 10);
//! game.submit_guess('c');
//! game.submit_guess('z');
//!
//! // Persist and restore the round
//! let text = encode(&game.snapshot().unwrap());
//! let mut restored = Game::new();
//! restored.restore(&decode(&text).unwrap(), 10).unwrap();
//! assert_eq!(restored.display_state(), game.display_state());
//! assert_eq!(restored.state(), RoundState::InProgress);
//! ```

// Core domain types
pub mod core;

// Round engine
pub mod game;

// Save files
pub mod save;

// Word lists
pub mod wordlists;

// Configuration and errors
pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::GameError;
