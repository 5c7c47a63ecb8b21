//! Secret word selection and per-position reveal state

use crate::core::{Letter, SecretWord, WordError};
use crate::error::GameError;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Reveal state of one position in the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterState {
    /// The player found this position by guessing its letter
    pub guessed: bool,
    /// The position is shown (guessed, or exposed after a loss)
    pub visible: bool,
}

/// Pick a word uniformly at random from a loaded list
///
/// # Errors
///
/// Returns `GameError::EmptyWordList` if `words` is empty.
pub fn pick_random<R: Rng + ?Sized>(
    words: &[SecretWord],
    rng: &mut R,
) -> Result<SecretWord, GameError> {
    words
        .choose(rng)
        .cloned()
        .ok_or_else(|| GameError::EmptyWordList {
            source: "word list".to_string(),
        })
}

/// Holds the active secret word and which of its positions are revealed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSelector {
    word: Option<SecretWord>,
    states: Vec<LetterState>,
    unguessed: usize,
}

impl WordSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit secret word and reset its reveal state
    ///
    /// # Errors
    ///
    /// Returns `WordError` if `raw` is not a valid secret word; the current
    /// word is left untouched in that case.
    pub fn set_chosen_word(&mut self, raw: &str) -> Result<(), WordError> {
        let word = SecretWord::new(raw)?;
        self.set_word(word);
        Ok(())
    }

    /// Install an already validated word and reset its reveal state
    pub fn set_word(&mut self, word: SecretWord) {
        self.states = vec![LetterState::default(); word.len()];
        self.unguessed = word.len();
        self.word = Some(word);
    }

    /// Reveal every unrevealed position holding `letter`
    ///
    /// Decrements the unguessed count once per newly revealed position.
    /// Returns whether the word contains `letter` at all, so a letter whose
    /// positions are all already revealed still reports `true`.
    pub fn check_guess(&mut self, letter: Letter) -> bool {
        let Some(word) = &self.word else {
            return false;
        };

        for &pos in word.positions_of(letter) {
            let state = &mut self.states[pos];
            if !state.guessed {
                state.guessed = true;
                state.visible = true;
                self.unguessed -= 1;
            }
        }

        word.contains(letter)
    }

    /// Make every position visible without counting it as guessed
    pub fn reveal_all(&mut self) {
        for state in &mut self.states {
            state.visible = true;
        }
    }

    #[inline]
    #[must_use]
    pub const fn unguessed_count(&self) -> usize {
        self.unguessed
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> Option<&SecretWord> {
        self.word.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.states
    }

    /// Letters of guessed positions, in position order
    #[must_use]
    pub fn revealed_letters(&self) -> Vec<Letter> {
        self.word.as_ref().map_or_else(Vec::new, |word| {
            word.letters()
                .iter()
                .zip(&self.states)
                .filter(|(_, state)| state.guessed)
                .map(|(&letter, _)| letter)
                .collect()
        })
    }

    /// Clear the word, its reveal state and the unguessed count
    pub fn reset(&mut self) {
        self.word = None;
        self.states.clear();
        self.unguessed = 0;
    }
}
