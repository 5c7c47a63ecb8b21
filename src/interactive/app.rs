//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{Game, RoundState};
use crate::output::word_summary;
use crate::save::{SAVE_EXTENSION, load_game, save_game};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::{Path, PathBuf};

/// Application state
pub struct App {
    pub game: Game,
    pub config: GameConfig,
    pub input_mode: InputMode,
    pub path_buffer: String,
    pub last_save_path: Option<PathBuf>,
    pub pending: Option<PendingAction>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    SavePath,
    LoadPath,
    ConfirmDiscard,
}

/// An action waiting on the "save first?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewRound,
    Load,
    Quit,
}

impl PendingAction {
    const fn describe(self) -> &'static str {
        match self {
            Self::NewRound => "starting a new game",
            Self::Load => "loading",
            Self::Quit => "quitting",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(),
            config,
            input_mode: InputMode::Guessing,
            path_buffer: String::new(),
            last_save_path: None,
            pending: None,
            messages: vec![Message {
                text: "Welcome to Hangman! Type letters to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn new_game(&mut self) {
        match self
            .game
            .start_new_round(&self.config.word_source, self.config.allowance)
        {
            Ok(()) => {
                self.stats.rounds += 1;
                self.add_message("New game started! Guess a letter.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn guess(&mut self, c: char) {
        let result = self.game.submit_guess(c);
        let Some(letter) = result.letter else {
            return;
        };

        if !result.applied {
            match result.state {
                RoundState::InProgress => {
                    self.add_message(&format!("Already guessed {letter}"), MessageStyle::Info);
                }
                RoundState::NotStarted => {
                    self.add_message("Press Ctrl+N to start a game", MessageStyle::Info);
                }
                RoundState::Won | RoundState::Lost => {}
            }
            return;
        }

        match result.state {
            RoundState::Won => {
                self.stats.won += 1;
                self.add_message("🎉 You won! Ctrl+N for a new game.", MessageStyle::Success);
            }
            RoundState::Lost => {
                self.stats.lost += 1;
                let answer = self.game.display_state().answer.unwrap_or_default();
                self.add_message(
                    &format!("You lost. The word was \"{answer}\"."),
                    MessageStyle::Error,
                );
            }
            _ if result.correct => {
                self.add_message(&format!("✓ {letter} is in the word"), MessageStyle::Success);
            }
            _ => self.add_message(&format!("✗ No {letter}"), MessageStyle::Error),
        }
    }

    /// Run `action` now, or ask to save first if the round has unsaved guesses
    pub fn request(&mut self, action: PendingAction) {
        if self.game.is_modified() {
            self.pending = Some(action);
            self.input_mode = InputMode::ConfirmDiscard;
            self.add_message(
                &format!("Save before {}? (y)es / (n)o / Esc", action.describe()),
                MessageStyle::Info,
            );
        } else {
            self.perform(action);
        }
    }

    fn perform(&mut self, action: PendingAction) {
        self.pending = None;
        match action {
            PendingAction::NewRound => {
                self.input_mode = InputMode::Guessing;
                self.new_game();
            }
            PendingAction::Load => self.begin_path_entry(InputMode::LoadPath),
            PendingAction::Quit => self.should_quit = true,
        }
    }

    pub fn begin_save(&mut self) {
        if self.game.state() == RoundState::InProgress {
            self.begin_path_entry(InputMode::SavePath);
        } else {
            self.add_message("Nothing to save", MessageStyle::Info);
        }
    }

    fn begin_path_entry(&mut self, mode: InputMode) {
        self.path_buffer = self
            .last_save_path
            .as_deref()
            .map_or_else(|| format!("hangman.{SAVE_EXTENSION}"), |p| p.display().to_string());
        self.input_mode = mode;
    }

    pub fn save_to(&mut self, path: &Path) -> bool {
        match save_game(&mut self.game, path) {
            Ok(_) => {
                self.last_save_path = Some(path.to_path_buf());
                self.add_message(&format!("Saved to {}", path.display()), MessageStyle::Success);
                true
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                false
            }
        }
    }

    pub fn load_from(&mut self, path: &Path) {
        match load_game(&mut self.game, path, self.config.allowance) {
            Ok(()) => {
                self.stats.rounds += 1;
                self.last_save_path = Some(path.to_path_buf());
                let summary = word_summary(&self.game.display_state());
                self.add_message(
                    &format!("Loaded {} ({summary})", path.display()),
                    MessageStyle::Success,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn submit_path(&mut self) {
        let path = PathBuf::from(self.path_buffer.trim());
        let mode = self.input_mode;
        self.input_mode = InputMode::Guessing;

        if path.as_os_str().is_empty() {
            self.add_message("No file name given", MessageStyle::Error);
            self.pending = None;
            return;
        }

        match mode {
            InputMode::SavePath => {
                let saved = self.save_to(&path);
                // Continue what the save prompt interrupted, unless saving failed
                if let Some(action) = self.pending.take()
                    && saved
                {
                    self.perform(action);
                }
            }
            InputMode::LoadPath => self.load_from(&path),
            InputMode::Guessing | InputMode::ConfirmDiscard => {}
        }
    }

    fn cancel(&mut self) {
        self.input_mode = InputMode::Guessing;
        self.pending = None;
        self.path_buffer.clear();
        self.add_message("Cancelled", MessageStyle::Info);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Char('c' | 'q') if ctrl => self.request(PendingAction::Quit),
                KeyCode::Char('n') if ctrl => self.request(PendingAction::NewRound),
                KeyCode::Char('s') if ctrl => self.begin_save(),
                KeyCode::Char('o') if ctrl => self.request(PendingAction::Load),
                KeyCode::Esc => self.request(PendingAction::Quit),
                KeyCode::Char(c) if !ctrl => self.guess(c),
                _ => {}
            },
            InputMode::ConfirmDiscard => match key.code {
                KeyCode::Char('y' | 'Y') => self.begin_path_entry(InputMode::SavePath),
                KeyCode::Char('n' | 'N') => {
                    if let Some(action) = self.pending {
                        self.perform(action);
                    }
                }
                KeyCode::Esc => self.cancel(),
                _ => {}
            },
            InputMode::SavePath | InputMode::LoadPath => match key.code {
                KeyCode::Esc => self.cancel(),
                KeyCode::Enter => self.submit_path(),
                KeyCode::Backspace => {
                    self.path_buffer.pop();
                }
                KeyCode::Char(c) if !ctrl => self.path_buffer.push(c),
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App, load: Option<&Path>) -> Result<()> {
    match load {
        Some(path) => app.load_from(path),
        None => app.new_game(),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::wordlists::WordSource;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn code(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(word: &str) -> App {
        let mut app = App::new(GameConfig::new(10, WordSource::Builtin));
        app.game
            .start_round_with_word(SecretWord::new(word).unwrap(), 10);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(c));
        }
    }

    #[test]
    fn letters_are_guesses() {
        let mut app = app_with("cat");
        type_text(&mut app, "caz");
        assert_eq!(app.game.remaining_guesses(), 9);
        assert_eq!(app.game.unguessed_count(), 1);
    }

    #[test]
    fn winning_updates_stats() {
        let mut app = app_with("ab");
        type_text(&mut app, "ab");
        assert_eq!(app.game.state(), RoundState::Won);
        assert_eq!(app.stats.won, 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn quit_without_changes_is_immediate() {
        let mut app = app_with("cat");
        app.handle_key(code(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn quit_with_changes_asks_first() {
        let mut app = app_with("cat");
        type_text(&mut app, "c");
        app.handle_key(ctrl('q'));

        assert!(!app.should_quit);
        assert_eq!(app.input_mode, InputMode::ConfirmDiscard);
        assert_eq!(app.pending, Some(PendingAction::Quit));

        app.handle_key(key('n'));
        assert!(app.should_quit);
    }

    #[test]
    fn confirm_escape_cancels() {
        let mut app = app_with("cat");
        type_text(&mut app, "c");
        app.handle_key(ctrl('n'));
        app.handle_key(code(KeyCode::Esc));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.pending.is_none());
        assert_eq!(app.game.guesses().len(), 1);
    }

    #[test]
    fn save_then_continue_pending_quit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tui.hng");

        let mut app = app_with("cat");
        type_text(&mut app, "cz");
        app.handle_key(ctrl('c'));
        app.handle_key(key('y'));
        assert_eq!(app.input_mode, InputMode::SavePath);

        app.path_buffer = path.display().to_string();
        app.handle_key(code(KeyCode::Enter));

        assert!(path.exists());
        assert!(app.should_quit);
        assert!(!app.game.is_modified());
    }

    #[test]
    fn save_and_load_through_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.hng");

        let mut app = app_with("lantern");
        type_text(&mut app, "nq");
        let expected = app.game.display_state();

        app.handle_key(ctrl('s'));
        app.path_buffer.clear();
        type_text(&mut app, &path.display().to_string());
        app.handle_key(code(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Guessing);

        let mut other = app_with("zebra");
        other.handle_key(ctrl('o'));
        assert_eq!(other.input_mode, InputMode::LoadPath);
        other.path_buffer = path.display().to_string();
        other.handle_key(code(KeyCode::Enter));

        assert_eq!(other.game.display_state(), expected);
        assert_eq!(other.stats.rounds, 1);
    }

    #[test]
    fn finishing_a_loaded_round_counts_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dog.hng");
        std::fs::write(&path, "DOG\n1\nO\n0\n1\n14\n").unwrap();

        let mut app = App::new(GameConfig::new(10, WordSource::Builtin));
        app.load_from(&path);
        type_text(&mut app, "dg");

        assert_eq!(app.game.state(), RoundState::Won);
        assert_eq!(app.stats, Statistics { rounds: 1, won: 1, lost: 0 });
    }

    #[test]
    fn failed_load_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with("cat");
        app.load_from(&dir.path().join("missing.hng"));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.game.secret_word().unwrap().text(), "CAT");
        assert_eq!(app.stats.rounds, 0);
    }

    #[test]
    fn new_game_with_missing_word_list_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::File(dir.path().join("words.txt"));
        let mut app = App::new(GameConfig::new(10, source));

        app.new_game();
        assert_eq!(app.game.state(), RoundState::NotStarted);
        assert!(app.messages.last().unwrap().text.contains("words.txt"));
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app_with("cat");
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
