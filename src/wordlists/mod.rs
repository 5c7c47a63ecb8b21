//! Word lists for hangman
//!
//! A round draws its secret word from a [`WordSource`]: either a text file
//! (one word per line, `words.txt` by default) or the list embedded at build
//! time.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN_WORDS, BUILTIN_WORDS_COUNT};

use crate::core::SecretWord;
use crate::error::GameError;
use log::info;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default word list file name
pub const DEFAULT_WORD_FILE: &str = "words.txt";

/// Keyword selecting the embedded list on the command line
pub const BUILTIN_KEYWORD: &str = "builtin";

/// Where a round's word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Builtin,
    /// A text file, one word per line
    File(PathBuf),
}

impl Default for WordSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_WORD_FILE))
    }
}

impl WordSource {
    /// Load every usable word from this source
    ///
    /// # Errors
    ///
    /// Returns `GameError::ResourceMissing` if the file cannot be opened or
    /// read, and `GameError::EmptyWordList` if it holds no valid words.
    pub fn load(&self) -> Result<Vec<SecretWord>, GameError> {
        let words = match self {
            Self::Builtin => loader::words_from_slice(BUILTIN_WORDS),
            Self::File(path) => {
                loader::load_from_file(path).map_err(|e| GameError::ResourceMissing {
                    source: self.to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        if words.is_empty() {
            return Err(GameError::EmptyWordList {
                source: self.to_string(),
            });
        }

        info!("loaded {} words from {self}", words.len());
        Ok(words)
    }
}

impl FromStr for WordSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(BUILTIN_KEYWORD) {
            Ok(Self::Builtin)
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "{BUILTIN_KEYWORD}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN_WORDS.len(), BUILTIN_WORDS_COUNT);
    }

    #[test]
    fn builtin_words_are_valid() {
        for &word in BUILTIN_WORDS {
            assert!(
                SecretWord::new(word).is_ok(),
                "Builtin word '{word}' is not a valid secret word"
            );
        }
    }

    #[test]
    fn builtin_source_loads() {
        let words = WordSource::Builtin.load().unwrap();
        assert_eq!(words.len(), BUILTIN_WORDS_COUNT);
    }

    #[test]
    fn default_source_is_words_txt() {
        assert_eq!(
            WordSource::default(),
            WordSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn parse_keyword_and_path() {
        assert_eq!("builtin".parse::<WordSource>(), Ok(WordSource::Builtin));
        assert_eq!("BUILTIN".parse::<WordSource>(), Ok(WordSource::Builtin));
        assert_eq!(
            "lists/animals.txt".parse::<WordSource>(),
            Ok(WordSource::File(PathBuf::from("lists/animals.txt")))
        );
    }

    #[test]
    fn missing_file_is_resource_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::File(dir.path().join("words.txt"));
        assert!(matches!(
            source.load(),
            Err(GameError::ResourceMissing { .. })
        ));
    }

    #[test]
    fn file_without_words_is_empty_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "\n123\n  \n").unwrap();

        assert!(matches!(
            WordSource::File(path).load(),
            Err(GameError::EmptyWordList { .. })
        ));
    }
}
