//! Line-oriented save format
//!
//! ```text
//! #hangman-save v1      schema marker (absent in legacy saves)
//! APPLE                 secret word
//! 2                     number of revealed positions
//! P                     letter of each revealed position, in position order
//! P
//! 1                     wrong guesses (allowance - remaining)
//! 2                     number of guessed letter records
//! 15                    alphabet index of each guess, in guess order
//! 25
//! ```
//!
//! Fields are positional. Their order is part of the format; any change must
//! bump the schema version.

use super::RoundSnapshot;
use crate::core::{Letter, SecretWord};
use crate::error::GameError;
use std::iter::Enumerate;
use std::str::{FromStr, Lines};

/// Prefix of the schema marker line
pub const SCHEMA_PREFIX: &str = "#hangman-save v";

/// Version written by [`encode`]
pub const SCHEMA_VERSION: u32 = 1;

/// Serialize a snapshot to save text
///
/// # Examples
/// ```
/// use hangman::core::Letter;
/// use hangman::save::{RoundSnapshot, encode};
///
/// let snapshot = RoundSnapshot {
///     word: "CAT".to_string(),
///     revealed_letters: vec![Letter::from_char('C').unwrap()],
///     wrong_guesses: 1,
///     guesses: vec![Letter::from_char('Z').unwrap(), Letter::from_char('C').unwrap()],
/// };
/// assert_eq!(encode(&snapshot), "#hangman-save v1\nCAT\n1\nC\n1\n2\n25\n2\n");
/// ```
#[must_use]
pub fn encode(snapshot: &RoundSnapshot) -> String {
    let mut lines =
        Vec::with_capacity(5 + snapshot.revealed_letters.len() + snapshot.guesses.len());

    lines.push(format!("{SCHEMA_PREFIX}{SCHEMA_VERSION}"));
    lines.push(snapshot.word.to_ascii_uppercase());
    lines.push(snapshot.revealed_letters.len().to_string());
    lines.extend(snapshot.revealed_letters.iter().map(ToString::to_string));
    lines.push(snapshot.wrong_guesses.to_string());
    lines.push(snapshot.guesses.len().to_string());
    lines.extend(snapshot.guesses.iter().map(|l| l.index().to_string()));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Parse save text into a snapshot
///
/// Accepts both versioned and legacy (marker-less) saves. Trailing blank
/// lines are ignored; any other leftover line is an error.
///
/// # Errors
///
/// Returns `GameError::CorruptSave` on missing lines, non-numeric counts,
/// invalid letters, out-of-range indices, unknown schema versions or trailing
/// data.
pub fn decode(text: &str) -> Result<RoundSnapshot, GameError> {
    let mut reader = SaveReader::new(text);

    let first = reader.line("secret word")?;
    let word_line = match first.strip_prefix(SCHEMA_PREFIX) {
        Some(version) => {
            let version: u32 = version.trim().parse().map_err(|_| {
                GameError::corrupt(format!("unreadable schema version {version:?}"))
            })?;
            if version != SCHEMA_VERSION {
                return Err(GameError::corrupt(format!(
                    "unsupported save version {version}"
                )));
            }
            reader.line("secret word")?
        }
        None => first,
    };

    let word = SecretWord::new(word_line)
        .map_err(|e| GameError::corrupt(format!("invalid secret word {word_line:?}: {e}")))?;

    let revealed_count: usize = reader.number("revealed letter count")?;
    if revealed_count > word.len() {
        return Err(GameError::corrupt(format!(
            "{revealed_count} revealed letters declared for a {}-letter word",
            word.len()
        )));
    }
    let revealed_letters = (0..revealed_count)
        .map(|_| reader.letter())
        .collect::<Result<Vec<_>, _>>()?;

    let wrong_guesses: u32 = reader.number("wrong guess count")?;

    let guess_count: usize = reader.number("guessed letter count")?;
    let guesses = (0..guess_count)
        .map(|i| reader.letter_index(i, guess_count))
        .collect::<Result<Vec<_>, _>>()?;

    reader.finish()?;

    Ok(RoundSnapshot {
        word: word.text().to_string(),
        revealed_letters,
        wrong_guesses,
        guesses,
    })
}

/// Sequential reader over trimmed save lines with line-numbered errors
struct SaveReader<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> SaveReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    fn line(&mut self, what: &str) -> Result<&'a str, GameError> {
        self.numbered_line(what).map(|(_, line)| line)
    }

    fn numbered_line(&mut self, what: &str) -> Result<(usize, &'a str), GameError> {
        self.lines
            .next()
            .map(|(i, line)| (i + 1, line.trim()))
            .ok_or_else(|| GameError::corrupt(format!("expected {what}, reached end of data")))
    }

    fn number<T: FromStr>(&mut self, what: &str) -> Result<T, GameError> {
        let (line_no, line) = self.numbered_line(what)?;
        line.parse().map_err(|_| {
            GameError::corrupt(format!("line {line_no}: expected {what}, found {line:?}"))
        })
    }

    fn letter(&mut self) -> Result<Letter, GameError> {
        let (line_no, line) = self.numbered_line("revealed letter")?;
        let mut chars = line.chars();
        match (chars.next().and_then(Letter::from_char), chars.next()) {
            (Some(letter), None) => Ok(letter),
            _ => Err(GameError::corrupt(format!(
                "line {line_no}: expected a single letter, found {line:?}"
            ))),
        }
    }

    fn letter_index(&mut self, i: usize, total: usize) -> Result<Letter, GameError> {
        let what = format!("guessed letter index {} of {total}", i + 1);
        let (line_no, line) = self.numbered_line(&what)?;
        line.parse::<usize>()
            .ok()
            .and_then(Letter::from_index)
            .ok_or_else(|| {
                GameError::corrupt(format!(
                    "line {line_no}: expected a letter index 0-25, found {line:?}"
                ))
            })
    }

    fn finish(mut self) -> Result<(), GameError> {
        match self.lines.find(|(_, line)| !line.trim().is_empty()) {
            Some((i, line)) => Err(GameError::corrupt(format!(
                "line {}: unexpected trailing data {:?}",
                i + 1,
                line.trim()
            ))),
            None => Ok(()),
        }
    }
}
