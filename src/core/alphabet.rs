//! Per-letter guess tracking for A-Z

use super::{ALPHABET_LEN, Letter};

/// What is known about one letter of the alphabet this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterMark {
    #[default]
    Unguessed,
    Correct,
    Incorrect,
}

impl LetterMark {
    #[must_use]
    pub const fn is_guessed(self) -> bool {
        !matches!(self, Self::Unguessed)
    }
}

/// Tracks which letters have been guessed and whether each guess hit
///
/// Recording is one-shot per letter: once a letter carries an outcome, later
/// calls for it are ignored, so replaying a save cannot double count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlphabetTracker {
    marks: [LetterMark; ALPHABET_LEN],
}

impl AlphabetTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of guessing `letter`
    ///
    /// Returns `true` if the letter was newly recorded, `false` if it had
    /// already been guessed (in which case nothing changes).
    pub fn mark_guessed(&mut self, letter: Letter, was_correct: bool) -> bool {
        let slot = &mut self.marks[letter.index()];
        if slot.is_guessed() {
            return false;
        }
        *slot = if was_correct {
            LetterMark::Correct
        } else {
            LetterMark::Incorrect
        };
        true
    }

    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.marks[letter.index()].is_guessed()
    }

    #[inline]
    #[must_use]
    pub fn mark(&self, letter: Letter) -> LetterMark {
        self.marks[letter.index()]
    }

    /// Marks for all 26 letters, indexed by alphabet position
    #[must_use]
    pub const fn marks(&self) -> &[LetterMark; ALPHABET_LEN] {
        &self.marks
    }

    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|&&m| m == LetterMark::Incorrect)
            .count()
    }

    pub fn clear(&mut self) {
        self.marks = [LetterMark::Unguessed; ALPHABET_LEN];
    }
}
