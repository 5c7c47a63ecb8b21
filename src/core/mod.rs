//! Core domain types for hangman
//!
//! This module contains the fundamental domain types. They do no I/O and hold
//! no randomness, so every rule here is directly unit tested.

mod alphabet;
mod letter;
mod word;

pub use alphabet::{AlphabetTracker, LetterMark};
pub use letter::{ALPHABET_LEN, Letter};
pub use word::{SecretWord, WordError};
