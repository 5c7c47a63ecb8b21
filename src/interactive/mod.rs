//! Interactive TUI interface
//!
//! Terminal UI for playing hangman with ratatui.

mod app;
mod rendering;

pub use app::{App, run_tui};
