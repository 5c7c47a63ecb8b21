//! Secret word representation
//!
//! A `SecretWord` stores the uppercase word along with letter position indices
//! so a guess can reveal every matching position at once.

use super::Letter;
use rustc_hash::FxHashMap;
use std::fmt;

/// The word being guessed in a round
///
/// Invariant: non-empty and made only of letters `A`-`Z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<Letter>,
    positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word may only contain letters A-Z, found {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word, normalizing to uppercase
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("ice cream").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = trimmed
            .chars()
            .map(|c| Letter::from_char(c).ok_or(WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text: letters.iter().map(|l| l.as_char()).collect(),
            letters,
            positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.positions.len()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
