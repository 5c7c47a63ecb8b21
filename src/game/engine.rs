//! The round state machine
//!
//! `Game` owns every piece of mutable round state: the selector, the letter
//! tracker, the guess budget and the guess history. Front ends drive it with
//! discrete calls and render [`DisplayState`].

use super::selector::{WordSelector, pick_random};
use crate::config::DEFAULT_ALLOWANCE;
use crate::core::{ALPHABET_LEN, AlphabetTracker, Letter, LetterMark, SecretWord};
use crate::error::GameError;
use crate::save::RoundSnapshot;
use crate::wordlists::WordSource;
use log::{debug, info};
use rand::Rng;

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    /// `Won` and `Lost` accept no further guesses
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of a single guess submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    /// The parsed letter, `None` if the input was not a letter
    pub letter: Option<Letter>,
    /// Whether the secret word contains the letter
    pub correct: bool,
    /// `false` when the submission was a no-op
    pub applied: bool,
    /// Round state after the submission
    pub state: RoundState,
}

/// One position of the secret word as the player sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden,
    /// Found by a correct guess
    Guessed(Letter),
    /// Shown after a loss without having been guessed
    Exposed(Letter),
}

impl Cell {
    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Self::Hidden => None,
            Self::Guessed(l) | Self::Exposed(l) => Some(l),
        }
    }
}

/// Read-only projection of a round for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub word_length: usize,
    pub cells: Vec<Cell>,
    pub remaining_guesses: u32,
    pub allowance: u32,
    pub wrong_guesses: u32,
    pub state: RoundState,
    pub letters: [LetterMark; ALPHABET_LEN],
    /// The secret word, present only once the round is over
    pub answer: Option<String>,
}

/// A hangman game: at most one round at a time
#[derive(Debug, Clone)]
pub struct Game {
    selector: WordSelector,
    alphabet: AlphabetTracker,
    guesses: Vec<Letter>,
    allowance: u32,
    remaining: u32,
    state: RoundState,
    modified: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with no round started
    #[must_use]
    pub fn new() -> Self {
        Self {
            selector: WordSelector::new(),
            alphabet: AlphabetTracker::new(),
            guesses: Vec::new(),
            allowance: DEFAULT_ALLOWANCE,
            remaining: DEFAULT_ALLOWANCE,
            state: RoundState::NotStarted,
            modified: false,
        }
    }

    /// Start a fresh round with a random word from `source`
    ///
    /// # Errors
    ///
    /// Returns `GameError::ResourceMissing` or `GameError::EmptyWordList` if
    /// no word could be drawn; the current round is left untouched.
    pub fn start_new_round(
        &mut self,
        source: &WordSource,
        allowance: u32,
    ) -> Result<(), GameError> {
        self.start_new_round_with_rng(source, allowance, &mut rand::rng())
    }

    /// Same as [`Game::start_new_round`] with an explicit random source
    ///
    /// # Errors
    ///
    /// See [`Game::start_new_round`].
    pub fn start_new_round_with_rng<R: Rng + ?Sized>(
        &mut self,
        source: &WordSource,
        allowance: u32,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let words = source.load()?;
        let word = pick_random(&words, rng)?;
        self.start_round_with_word(word, allowance);
        Ok(())
    }

    /// Start a fresh round with a known word
    ///
    /// An allowance of zero is raised to one.
    pub fn start_round_with_word(&mut self, word: SecretWord, allowance: u32) {
        info!(
            "starting round: {} letters ({} distinct), {allowance} wrong guesses allowed",
            word.len(),
            word.distinct_letters()
        );
        *self = Self::fresh_round(word, allowance);
    }

    fn fresh_round(word: SecretWord, allowance: u32) -> Self {
        let allowance = allowance.max(1);
        let mut game = Self::new();
        game.selector.set_word(word);
        game.allowance = allowance;
        game.remaining = allowance;
        game.state = RoundState::InProgress;
        game
    }

    /// Rebuild a round by replaying previously guessed letters
    ///
    /// Letters go through the same evaluation as live play, repeats are
    /// no-ops. The replayed wrong guesses must equal `wrong_guesses`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::CorruptSave` if the word is invalid, the wrong
    /// guess total exceeds the allowance or disagrees with the replay, or a
    /// guess is recorded after the round would have ended. The current round
    /// is left untouched on error.
    pub fn restore_round(
        &mut self,
        word: &str,
        guesses: &[Letter],
        wrong_guesses: u32,
        allowance: u32,
    ) -> Result<(), GameError> {
        let game = Self::replay(word, guesses, wrong_guesses, allowance)?;
        self.commit_restore(game);
        Ok(())
    }

    /// Rebuild a round from a decoded save
    ///
    /// On top of [`Game::restore_round`], the snapshot's revealed letters
    /// must match what the replay revealed.
    ///
    /// # Errors
    ///
    /// Returns `GameError::CorruptSave` on any inconsistency; the current
    /// round is left untouched on error.
    pub fn restore(&mut self, snapshot: &RoundSnapshot, allowance: u32) -> Result<(), GameError> {
        let game = Self::replay(
            &snapshot.word,
            &snapshot.guesses,
            snapshot.wrong_guesses,
            allowance,
        )?;

        let revealed = game.selector.revealed_letters();
        if revealed != snapshot.revealed_letters {
            return Err(GameError::corrupt(format!(
                "save lists revealed letters {} but the guesses reveal {}",
                letters_to_string(&snapshot.revealed_letters),
                letters_to_string(&revealed)
            )));
        }

        self.commit_restore(game);
        Ok(())
    }

    fn replay(
        word: &str,
        guesses: &[Letter],
        wrong_guesses: u32,
        allowance: u32,
    ) -> Result<Self, GameError> {
        let word = SecretWord::new(word)
            .map_err(|e| GameError::corrupt(format!("invalid secret word {word:?}: {e}")))?;
        let mut game = Self::fresh_round(word, allowance);

        if wrong_guesses > game.allowance {
            return Err(GameError::corrupt(format!(
                "{wrong_guesses} wrong guesses exceed the allowance of {}",
                game.allowance
            )));
        }

        for &letter in guesses {
            if game.alphabet.is_guessed(letter) {
                continue;
            }
            if game.state.is_terminal() {
                return Err(GameError::corrupt(format!(
                    "guess {letter} recorded after the round ended"
                )));
            }
            game.apply_guess(letter);
        }

        if game.wrong_guesses() != wrong_guesses {
            return Err(GameError::corrupt(format!(
                "save declares {wrong_guesses} wrong guesses but the guesses contain {}",
                game.wrong_guesses()
            )));
        }

        game.remaining = game.allowance - wrong_guesses;
        Ok(game)
    }

    fn commit_restore(&mut self, game: Self) {
        info!(
            "restored round: {} guesses replayed, {} remaining, {:?}",
            game.guesses.len(),
            game.remaining,
            game.state
        );
        *self = game;
        self.modified = false;
    }

    /// Submit a guess from raw input
    ///
    /// Non-letter input is a no-op.
    pub fn submit_guess(&mut self, input: char) -> GuessResult {
        match Letter::from_char(input) {
            Some(letter) => self.submit_letter(letter),
            None => GuessResult {
                letter: None,
                correct: false,
                applied: false,
                state: self.state,
            },
        }
    }

    /// Submit a letter guess
    ///
    /// A no-op (returning the current state) if the round is not in progress
    /// or the letter has already been guessed this round.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Letter, SecretWord};
    /// use hangman::game::{Game, RoundState};
    ///
    /// let mut game = Game::new();
    /// game.start_round_with_word(SecretWord::new("cat").unwrap(), 10);
    ///
    /// let result = game.submit_letter(Letter::from_char('c').unwrap());
    /// assert!(result.correct);
    /// assert_eq!(result.state, RoundState::InProgress);
    /// ```
    pub fn submit_letter(&mut self, letter: Letter) -> GuessResult {
        if self.state != RoundState::InProgress || self.alphabet.is_guessed(letter) {
            return GuessResult {
                letter: Some(letter),
                correct: self.alphabet.mark(letter) == LetterMark::Correct,
                applied: false,
                state: self.state,
            };
        }

        let correct = self.apply_guess(letter);
        self.modified = !self.state.is_terminal();
        debug!(
            "guess {letter}: correct={correct}, remaining={}, unguessed={}, state={:?}",
            self.remaining,
            self.selector.unguessed_count(),
            self.state
        );

        GuessResult {
            letter: Some(letter),
            correct,
            applied: true,
            state: self.state,
        }
    }

    /// Evaluate a not-yet-guessed letter and settle the round state
    ///
    /// Loss is checked before win.
    fn apply_guess(&mut self, letter: Letter) -> bool {
        self.guesses.push(letter);
        let correct = self.selector.check_guess(letter);
        self.alphabet.mark_guessed(letter, correct);

        if !correct {
            self.remaining = self.remaining.saturating_sub(1);
        }
        debug_assert_eq!(
            self.alphabet.incorrect_count(),
            (self.allowance - self.remaining) as usize
        );

        self.state = if self.remaining == 0 {
            self.selector.reveal_all();
            RoundState::Lost
        } else if self.selector.unguessed_count() == 0 {
            RoundState::Won
        } else {
            RoundState::InProgress
        };

        correct
    }

    /// Project the round for rendering
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        let cells = self.selector.word().map_or_else(Vec::new, |word| {
            word.letters()
                .iter()
                .zip(self.selector.states())
                .map(|(&letter, state)| match (state.guessed, state.visible) {
                    (true, _) => Cell::Guessed(letter),
                    (false, true) => Cell::Exposed(letter),
                    (false, false) => Cell::Hidden,
                })
                .collect()
        });

        DisplayState {
            word_length: cells.len(),
            cells,
            remaining_guesses: self.remaining,
            allowance: self.allowance,
            wrong_guesses: self.wrong_guesses(),
            state: self.state,
            letters: *self.alphabet.marks(),
            answer: self
                .selector
                .word()
                .filter(|_| self.state.is_terminal())
                .map(|w| w.text().to_string()),
        }
    }

    /// The reconstructable part of the current round
    ///
    /// Returns `None` before the first round.
    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        let word = self.selector.word()?;
        Some(RoundSnapshot {
            word: word.text().to_string(),
            revealed_letters: self.selector.revealed_letters(),
            wrong_guesses: self.wrong_guesses(),
            guesses: self.guesses.clone(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn allowance(&self) -> u32 {
        self.allowance
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.allowance - self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn unguessed_count(&self) -> usize {
        self.selector.unguessed_count()
    }

    /// Letters guessed this round, in guess order
    #[must_use]
    pub fn guesses(&self) -> &[Letter] {
        &self.guesses
    }

    #[must_use]
    pub const fn alphabet(&self) -> &AlphabetTracker {
        &self.alphabet
    }

    #[must_use]
    pub const fn secret_word(&self) -> Option<&SecretWord> {
        self.selector.word()
    }

    /// Whether guesses were made since the round started, loaded or was saved
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}

fn letters_to_string(letters: &[Letter]) -> String {
    if letters.is_empty() {
        "none".to_string()
    } else {
        letters.iter().map(|l| l.as_char()).collect()
    }
}
