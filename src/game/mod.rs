//! Hangman round logic
//!
//! This module contains the word selector and the game engine that drives a
//! round from word selection to a win or a loss.

mod engine;
mod selector;

pub use engine::{Cell, DisplayState, Game, GuessResult, RoundState};
pub use selector::{LetterState, WordSelector, pick_random};
