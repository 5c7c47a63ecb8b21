//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one letter or command per line.

use crate::config::GameConfig;
use crate::game::{Game, RoundState};
use crate::output::{render_board, render_guess, render_outcome};
use crate::save::{SAVE_EXTENSION, load_game, save_game};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// What the player wants to do after an unsaved-changes prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
    Proceed,
    Cancel,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(config: &GameConfig, load: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(config, load, stdin.lock(), stdout.lock())
}

/// Run the simple mode over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails. Game
/// errors (missing word list, corrupt saves) are reported to `output`.
pub fn run_simple_with<R: BufRead, W: Write>(
    config: &GameConfig,
    load: Option<&Path>,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut game = Game::new();

    writeln!(output, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(output, "║               H A N G M A N                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(output, "Guess the word one letter at a time.")?;
    writeln!(
        output,
        "You may make {} wrong guesses before you hang.\n",
        config.allowance
    )?;
    print_help(&mut output)?;

    match load {
        Some(path) => load_round(&mut game, config, path, &mut output)?,
        None => start_round(&mut game, config, &mut output)?,
    }

    loop {
        let Some(line) = prompt(&mut input, &mut output, "Guess")? else {
            break;
        };
        let (command, argument) = split_command(&line);

        match command.as_str() {
            "" => {}
            "quit" | "exit" | "q" => {
                if confirm_discard(&mut game, "quitting", &mut input, &mut output)?
                    == Confirm::Proceed
                {
                    break;
                }
            }
            "help" | "?" => print_help(&mut output)?,
            "new" => {
                if confirm_discard(&mut game, "starting a new game", &mut input, &mut output)?
                    == Confirm::Proceed
                {
                    start_round(&mut game, config, &mut output)?;
                }
            }
            "save" => {
                let path = argument.map_or_else(default_save_path, PathBuf::from);
                save_round(&mut game, &path, &mut output)?;
            }
            "load" => {
                let Some(path) = argument else {
                    writeln!(output, "Usage: load <file.{SAVE_EXTENSION}>")?;
                    continue;
                };
                if confirm_discard(&mut game, "loading", &mut input, &mut output)?
                    == Confirm::Proceed
                {
                    load_round(&mut game, config, Path::new(path), &mut output)?;
                }
            }
            word => {
                let mut chars = word.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => guess(&mut game, c, &mut output)?,
                    _ => writeln!(output, "Enter one letter at a time (or 'help').")?,
                }
            }
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn guess<W: Write>(game: &mut Game, c: char, output: &mut W) -> Result<()> {
    let result = game.submit_guess(c);
    writeln!(output, "{}", render_guess(&result))?;
    if !result.applied {
        return Ok(());
    }

    let display = game.display_state();
    write!(output, "{}", render_board(&display))?;
    if result.state.is_terminal() {
        write!(output, "{}", render_outcome(&display))?;
        writeln!(output, "Type 'new' to play again or 'quit' to exit.")?;
    }
    Ok(())
}

fn start_round<W: Write>(game: &mut Game, config: &GameConfig, output: &mut W) -> Result<()> {
    match game.start_new_round(&config.word_source, config.allowance) {
        Ok(()) => {
            writeln!(output, "\n🔄 New game started!")?;
            write!(output, "{}", render_board(&game.display_state()))?;
        }
        Err(e) => {
            writeln!(output, "❌ {e}")?;
            writeln!(
                output,
                "Use --wordlist to pick another list, or 'load <file>' to resume a save."
            )?;
        }
    }
    Ok(())
}

fn load_round<W: Write>(
    game: &mut Game,
    config: &GameConfig,
    path: &Path,
    output: &mut W,
) -> Result<()> {
    match load_game(game, path, config.allowance) {
        Ok(()) => {
            writeln!(output, "📂 Loaded {}", path.display())?;
            let display = game.display_state();
            write!(output, "{}", render_board(&display))?;
            write!(output, "{}", render_outcome(&display))?;
        }
        Err(e) => writeln!(output, "❌ {e}")?,
    }
    Ok(())
}

fn save_round<W: Write>(game: &mut Game, path: &Path, output: &mut W) -> Result<()> {
    if game.state() != RoundState::InProgress {
        writeln!(output, "Nothing to save: no round in progress.")?;
        return Ok(());
    }
    match save_game(game, path) {
        Ok(_) => writeln!(output, "💾 Saved to {}", path.display())?,
        Err(e) => writeln!(output, "❌ {e}")?,
    }
    Ok(())
}

/// Offer to save unsaved progress before it is discarded
fn confirm_discard<R: BufRead, W: Write>(
    game: &mut Game,
    action: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Confirm> {
    if !game.is_modified() {
        return Ok(Confirm::Proceed);
    }

    loop {
        let question = format!("Save the game before {action}? (yes/no/cancel)");
        let Some(answer) = prompt(input, output, &question)? else {
            return Ok(Confirm::Cancel);
        };
        match answer.to_lowercase().as_str() {
            "yes" | "y" => {
                let path = prompt(input, output, "Save file")?
                    .filter(|p| !p.is_empty())
                    .map_or_else(default_save_path, PathBuf::from);
                save_round(game, &path, output)?;
                // A failed save keeps the round so nothing is lost.
                return Ok(if game.is_modified() {
                    Confirm::Cancel
                } else {
                    Confirm::Proceed
                });
            }
            "no" | "n" => return Ok(Confirm::Proceed),
            "cancel" | "c" => return Ok(Confirm::Cancel),
            _ => writeln!(output, "Please answer yes, no or cancel.")?,
        }
    }
}

fn print_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  <letter>        guess a letter")?;
    writeln!(output, "  new             start a new game")?;
    writeln!(output, "  save [file]     save progress (default hangman.{SAVE_EXTENSION})")?;
    writeln!(output, "  load <file>     resume a saved game")?;
    writeln!(output, "  help            show this help")?;
    writeln!(output, "  quit            exit\n")?;
    Ok(())
}

fn default_save_path() -> PathBuf {
    PathBuf::from(format!("hangman.{SAVE_EXTENSION}"))
}

/// Split a line into a lowercase command and its raw argument
fn split_command(line: &str) -> (String, Option<&str>) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command.to_lowercase(), Some(rest.trim())),
        None => (line.to_lowercase(), None),
    }
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
