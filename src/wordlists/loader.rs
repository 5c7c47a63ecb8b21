//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::SecretWord;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Parse word list text, one word per line
///
/// Blank lines and entries that are not valid secret words are skipped.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::load_from_str;
///
/// let words = load_from_str("apple\n\nbanana\nice cream\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "BANANA");
/// ```
#[must_use]
pub fn load_from_str(content: &str) -> Vec<SecretWord> {
    let mut skipped = 0usize;
    let words: Vec<SecretWord> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            SecretWord::new(trimmed)
                .inspect_err(|e| {
                    skipped += 1;
                    debug!("skipping word list entry {trimmed:?}: {e}");
                })
                .ok()
        })
        .collect();

    if skipped > 0 {
        debug!("loaded {} words, skipped {skipped} invalid entries", words.len());
    }
    words
}

/// Load words from a file
///
/// Returns a vector of valid words, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(load_from_str(&content))
}

/// Convert embedded string slice to word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["cat", "Dog", "EMU"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
        assert_eq!(words[2].text(), "EMU");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "", "x-ray", "dog"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
    }

    #[test]
    fn load_from_str_preserves_order() {
        let words = load_from_str("zebra\r\napple\nmango\n");
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, ["ZEBRA", "APPLE", "MANGO"]);
    }

    #[test]
    fn load_from_str_empty_input() {
        assert!(load_from_str("").is_empty());
        assert!(load_from_str("\n\n  \n").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lantern").unwrap();
        writeln!(file, "meadow").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "LANTERN");
    }

    #[test]
    fn load_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
