//! A single guessable letter
//!
//! Letters are always stored uppercase and carry their zero-based alphabet
//! index (A=0 .. Z=25), which is also what the save format records.

use std::fmt;

/// Number of letters in the guessable alphabet
pub const ALPHABET_LEN: usize = 26;

/// An uppercase ASCII letter `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Parse a letter from a character, ignoring case
    ///
    /// Returns `None` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('a'), Letter::from_char('A'));
    /// assert!(Letter::from_char('7').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Build a letter from its alphabet index (A=0 .. Z=25)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(b'A' + index as u8))
        } else {
            None
        }
    }

    /// Zero-based alphabet index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
