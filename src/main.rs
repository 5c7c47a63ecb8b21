//! Hangman - CLI
//!
//! Word-guessing game with TUI and simple CLI modes, plus resumable saves.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use hangman::{
    commands::run_simple,
    config::{DEFAULT_ALLOWANCE, GameConfig, MAX_ALLOWANCE},
    interactive::{App, run_tui},
    wordlists::WordSource,
};
use std::fs::File;
use std::path::PathBuf;

/// Log file used while the TUI owns the terminal
const TUI_LOG_FILE: &str = "hangman.log";

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows are complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: path to a file with one word per line, or 'builtin'
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: String,

    /// Wrong guesses allowed before the round is lost
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ALLOWANCE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ALLOWANCE))
    )]
    allowance: u32,

    /// Resume a saved game (.hng) instead of starting a new one
    #[arg(short, long, global = true)]
    load: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Where log records go for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSink {
    Stderr,
    File(&'static str),
    Off,
}

/// The TUI draws over stderr, so it logs to a file when `RUST_LOG` is set
/// and stays silent otherwise.
const fn log_sink(tui: bool, rust_log_set: bool) -> LogSink {
    match (tui, rust_log_set) {
        (false, _) => LogSink::Stderr,
        (true, true) => LogSink::File(TUI_LOG_FILE),
        (true, false) => LogSink::Off,
    }
}

/// Set up `env_logger` from `RUST_LOG`
fn init_logging(tui: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match log_sink(tui, std::env::var_os("RUST_LOG").is_some()) {
        LogSink::Stderr => {}
        LogSink::File(path) => {
            builder.target(Target::Pipe(Box::new(File::create(path)?)));
        }
        LogSink::Off => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    let word_source: WordSource = cli.wordlist.parse()?;
    let config = GameConfig::new(cli.allowance, word_source);
    log::debug!("starting with {config:?}");

    match command {
        Commands::Play => run_tui(App::new(config), cli.load.as_deref()),
        Commands::Simple => run_simple(&config, cli.load.as_deref()),
    }
}
