// Integration tests for the hangman library
// These drive the public API the way a front end does

use hangman::GameError;
use hangman::commands::run_simple_with;
use hangman::config::GameConfig;
use hangman::core::{Letter, SecretWord};
use hangman::game::{Cell, Game, RoundState};
use hangman::save::{decode, encode, load_game, save_game};
use hangman::wordlists::WordSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::Path;

fn game_with(word: &str, allowance: u32) -> Game {
    let mut game = Game::new();
    game.start_round_with_word(SecretWord::new(word).unwrap(), allowance);
    game
}

fn run_script(config: &GameConfig, load: Option<&Path>, script: &str) -> String {
    let mut output = Vec::new();
    run_simple_with(config, load, script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn covering_every_letter_wins() {
    for word in ["a", "cat", "banana", "mississippi", "rhythm", "abcdefghijklmnopqrstuvwxyz"] {
        let mut game = game_with(word, 10);
        for c in word.chars() {
            game.submit_guess(c);
        }
        assert_eq!(game.state(), RoundState::Won, "word {word}");
        assert_eq!(game.unguessed_count(), 0);
        assert_eq!(game.remaining_guesses(), 10);
    }
}

#[test]
fn loss_lands_exactly_when_budget_is_spent() {
    for allowance in 1..=10 {
        let mut game = game_with("jazz", allowance);
        let misses: Vec<char> = "bcdefghikl".chars().collect();

        for (i, &c) in misses.iter().take(allowance as usize).enumerate() {
            let result = game.submit_guess(c);
            assert!(!result.correct);
            let expected = if i + 1 == allowance as usize {
                RoundState::Lost
            } else {
                RoundState::InProgress
            };
            assert_eq!(result.state, expected, "allowance {allowance}, miss {}", i + 1);
        }
        assert_eq!(game.remaining_guesses(), 0);
    }
}

#[test]
fn random_rounds_are_winnable_with_a_full_alphabet_sweep() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = Game::new();

    for _ in 0..25 {
        game.start_new_round_with_rng(&WordSource::Builtin, 26, &mut rng)
            .unwrap();
        for letter in Letter::all() {
            game.submit_letter(letter);
        }
        assert_eq!(game.state(), RoundState::Won);
        assert_eq!(game.unguessed_count(), 0);
    }
}

#[test]
fn display_state_round_trips_through_save_text() {
    let scripts = ["", "e", "xyz", "aeiou", "tqnrwmb"];
    for word in ["lantern", "apple", "mississippi"] {
        for script in scripts {
            let mut game = game_with(word, 10);
            for c in script.chars() {
                game.submit_guess(c);
            }
            if game.state() != RoundState::InProgress {
                continue;
            }

            let text = encode(&game.snapshot().unwrap());
            let mut restored = Game::new();
            restored.restore(&decode(&text).unwrap(), 10).unwrap();

            assert_eq!(restored.display_state(), game.display_state(), "{word}/{script}");
            assert_eq!(restored.guesses(), game.guesses());
        }
    }
}

#[test]
fn restored_round_plays_on_identically() {
    let mut live = game_with("pumpkin", 10);
    for c in "pzk".chars() {
        live.submit_guess(c);
    }

    let mut restored = Game::new();
    restored
        .restore(&decode(&encode(&live.snapshot().unwrap())).unwrap(), 10)
        .unwrap();

    for c in "umin".chars() {
        let a = live.submit_guess(c);
        let b = restored.submit_guess(c);
        assert_eq!(a, b);
    }
    assert_eq!(restored.state(), RoundState::Won);
}

#[test]
fn legacy_save_loads() {
    // No schema marker; guesses are A, Z, P, X
    let legacy = "APPLE\n3\nA\nP\nP\n2\n4\n0\n25\n15\n23\n";
    let mut game = Game::new();
    game.restore(&decode(legacy).unwrap(), 10).unwrap();

    let display = game.display_state();
    assert_eq!(display.remaining_guesses, 8);
    assert_eq!(
        display.cells,
        vec![
            Cell::Guessed(Letter::from_char('A').unwrap()),
            Cell::Guessed(Letter::from_char('P').unwrap()),
            Cell::Guessed(Letter::from_char('P').unwrap()),
            Cell::Hidden,
            Cell::Hidden,
        ]
    );
}

#[test]
fn legacy_save_with_repeated_indices_loads() {
    // Older saves could list a correct letter twice
    let legacy = "CAT\n1\nC\n1\n3\n2\n2\n25\n";
    let mut game = Game::new();
    game.restore(&decode(legacy).unwrap(), 10).unwrap();
    assert_eq!(game.remaining_guesses(), 9);
    assert_eq!(game.guesses().len(), 2);
}

#[test]
fn truncated_save_is_rejected_and_state_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.hng");
    // Declares 5 index lines, provides 3
    fs::write(&path, "CAT\n1\nC\n2\n5\n2\n25\n24\n").unwrap();

    let mut game = game_with("dog", 10);
    game.submit_guess('o');
    game.submit_guess('x');
    let before = game.display_state();

    let err = load_game(&mut game, &path, 10).unwrap_err();
    assert!(matches!(err, GameError::CorruptSave(_)));
    assert_eq!(game.display_state(), before);
    assert_eq!(game.guesses().len(), 2);
    assert!(game.is_modified());
}

#[test]
fn inconsistent_save_is_rejected() {
    // Claims 3 wrong guesses but only Z is wrong
    let text = "CAT\n1\nC\n3\n2\n2\n25\n";
    let snapshot = decode(text).unwrap();
    let mut game = game_with("dog", 10);
    assert!(matches!(
        game.restore(&snapshot, 10),
        Err(GameError::CorruptSave(_))
    ));
    assert_eq!(game.secret_word().unwrap().text(), "DOG");
}

#[test]
fn save_file_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.hng");

    let mut game = game_with("volcano", 7);
    for c in "oxv".chars() {
        game.submit_guess(c);
    }
    assert!(save_game(&mut game, &path).unwrap());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("#hangman-save v1\nVOLCANO\n"));

    let mut restored = Game::new();
    load_game(&mut restored, &path, 7).unwrap();
    assert_eq!(restored.display_state(), game.display_state());
}

#[test]
fn simple_mode_plays_a_round_from_a_word_file() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "cat\n").unwrap();
    let config = GameConfig::new(10, WordSource::File(words));

    let output = run_script(&config, None, "c\na\nz\nt\nquit\n");

    assert!(output.contains("New game started"));
    assert!(output.contains("No Z in the word"));
    assert!(output.contains("You won"));
    assert!(output.contains("CAT"));
    assert!(output.contains("Thanks for playing"));
}

#[test]
fn simple_mode_reports_missing_word_list() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::new(10, WordSource::File(dir.path().join("words.txt")));

    let output = run_script(&config, None, "a\nquit\n");

    assert!(output.contains("could not be loaded"));
    assert!(output.contains("No round in progress"));
}

#[test]
fn simple_mode_offers_to_save_before_quitting() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "meadow\n").unwrap();
    let save = dir.path().join("quit.hng");
    let config = GameConfig::new(10, WordSource::File(words));

    let script = format!("m\nx\nquit\nyes\n{}\n", save.display());
    let output = run_script(&config, None, &script);

    assert!(output.contains("Save the game before quitting?"));
    assert!(output.contains("Saved to"));

    let mut restored = Game::new();
    load_game(&mut restored, &save, 10).unwrap();
    assert_eq!(restored.remaining_guesses(), 9);
    assert_eq!(restored.guesses().len(), 2);
}

#[test]
fn simple_mode_resumes_from_save() {
    let dir = tempfile::tempdir().unwrap();
    let save = dir.path().join("resume.hng");
    fs::write(&save, "DOG\n1\nO\n0\n1\n14\n").unwrap();
    let config = GameConfig::new(10, WordSource::Builtin);

    let output = run_script(&config, Some(&save), "d\ng\nquit\n");

    assert!(output.contains("Loaded"));
    assert!(output.contains("You won"));
}

#[test]
fn simple_mode_rejects_corrupt_save() {
    let dir = tempfile::tempdir().unwrap();
    let save = dir.path().join("bad.hng");
    fs::write(&save, "DOG\nlots\n").unwrap();
    let config = GameConfig::new(10, WordSource::Builtin);

    let output = run_script(&config, Some(&save), "quit\n");
    assert!(output.contains("Save data is corrupt"));
}
