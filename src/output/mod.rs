//! Terminal output formatting
//!
//! Display utilities for the simple CLI and shared drawing helpers.

pub mod display;
pub mod formatters;

pub use display::{render_board, render_guess, render_outcome, word_summary};
