//! Colored text rendering for the simple CLI

use super::formatters::{gallows_lines, gallows_stage, guessed_letters, masked_word};
use crate::game::{Cell, DisplayState, GuessResult, RoundState};
use colored::Colorize;

/// Render the board: gallows, word, guessed letters and remaining budget
#[must_use]
pub fn render_board(display: &DisplayState) -> String {
    let mut out = String::new();
    let stage = gallows_stage(display.wrong_guesses, display.allowance);

    out.push('\n');
    for line in gallows_lines(stage) {
        out.push_str(&format!("    {}\n", line.bright_black()));
    }

    let word: Vec<String> = display
        .cells
        .iter()
        .map(|cell| match cell {
            Cell::Hidden => "_".bright_black().to_string(),
            Cell::Guessed(l) => l.to_string().bright_white().bold().to_string(),
            Cell::Exposed(l) => l.to_string().red().to_string(),
        })
        .collect();
    out.push_str(&format!("\n  Word:      {}\n", word.join(" ")));

    let (hits, misses) = guessed_letters(&display.letters);
    out.push_str(&format!("  Correct:   {}\n", spaced(&hits).green()));
    out.push_str(&format!("  Wrong:     {}\n", spaced(&misses).red()));

    let remaining = format!("{}/{}", display.remaining_guesses, display.allowance);
    let remaining = if display.remaining_guesses <= 2 {
        remaining.red().bold()
    } else {
        remaining.yellow()
    };
    out.push_str(&format!("  Remaining: {remaining} wrong guesses\n"));
    out
}

/// One-line feedback for a guess submission
#[must_use]
pub fn render_guess(result: &GuessResult) -> String {
    match result.letter {
        None => "Please enter a letter A-Z.".yellow().to_string(),
        Some(letter) if !result.applied && result.state == RoundState::InProgress => {
            format!("You already guessed {letter}.").yellow().to_string()
        }
        Some(_) if !result.applied => "No round in progress. Type 'new' to start one."
            .yellow()
            .to_string(),
        Some(letter) if result.correct => format!("✓ {letter} is in the word!").green().to_string(),
        Some(letter) => format!("✗ No {letter} in the word.").red().to_string(),
    }
}

/// Banner shown when a round ends; empty while the round is still running
#[must_use]
pub fn render_outcome(display: &DisplayState) -> String {
    let answer = display.answer.as_deref().unwrap_or_default();
    match display.state {
        RoundState::Won => {
            let banner = "═".repeat(50);
            format!(
                "\n{}\n  {}\n  The word was {}.\n{}\n",
                banner.bright_cyan(),
                "🎉 You won!".bright_green().bold(),
                answer.bright_white().bold(),
                banner.bright_cyan()
            )
        }
        RoundState::Lost => {
            let banner = "═".repeat(50);
            format!(
                "\n{}\n  {}\n  The word was {}.\n{}\n",
                banner.bright_cyan(),
                "💀 You lost.".bright_red().bold(),
                format!("\"{answer}\"").bright_white().bold(),
                banner.bright_cyan()
            )
        }
        RoundState::NotStarted | RoundState::InProgress => String::new(),
    }
}

/// Plain one-line summary of the masked word, used in status messages
#[must_use]
pub fn word_summary(display: &DisplayState) -> String {
    masked_word(&display.cells)
}

fn spaced(letters: &str) -> String {
    if letters.is_empty() {
        "-".to_string()
    } else {
        letters
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
