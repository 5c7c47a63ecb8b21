//! Formatting utilities for terminal output

use crate::core::{Letter, LetterMark};
use crate::game::Cell;

/// Number of drawing stages after the empty gallows
pub const GALLOWS_STAGES: usize = 10;

const GALLOWS_WIDTH: usize = 9;
const GALLOWS_HEIGHT: usize = 7;

type Stroke = (usize, usize, char);

// Each stage adds its strokes on top of the previous ones.
const GALLOWS_PARTS: [&[Stroke]; GALLOWS_STAGES] = [
    // Base
    &[
        (6, 0, '='),
        (6, 1, '='),
        (6, 2, '='),
        (6, 3, '='),
        (6, 4, '='),
        (6, 5, '='),
        (6, 6, '='),
        (6, 7, '='),
        (6, 8, '='),
    ],
    // Pole
    &[(0, 6, '+'), (1, 6, '|'), (2, 6, '|'), (3, 6, '|'), (4, 6, '|'), (5, 6, '|')],
    // Beam
    &[(0, 2, '+'), (0, 3, '-'), (0, 4, '-'), (0, 5, '-')],
    // Rope
    &[(1, 2, '|')],
    // Head
    &[(2, 2, 'O')],
    // Body
    &[(3, 2, '|')],
    // Left arm
    &[(3, 1, '/')],
    // Right arm
    &[(3, 3, '\\')],
    // Left leg
    &[(4, 1, '/')],
    // Right leg
    &[(4, 3, '\\')],
];

/// Map wrong guesses onto a drawing stage (0 = nothing drawn)
///
/// The last stage is reached exactly when the allowance is used up.
#[must_use]
pub fn gallows_stage(wrong_guesses: u32, allowance: u32) -> usize {
    if allowance == 0 || wrong_guesses == 0 {
        return 0;
    }
    let wrong = wrong_guesses.min(allowance) as usize;
    (wrong * GALLOWS_STAGES).div_ceil(allowance as usize)
}

/// Draw the gallows at `stage` as fixed-width lines
#[must_use]
pub fn gallows_lines(stage: usize) -> Vec<String> {
    let mut grid = [[' '; GALLOWS_WIDTH]; GALLOWS_HEIGHT];
    for part in GALLOWS_PARTS.iter().take(stage) {
        for &(row, col, ch) in *part {
            grid[row][col] = ch;
        }
    }
    grid.iter().map(|row| row.iter().collect()).collect()
}

/// The secret word with unknown positions as underscores, e.g. `C _ T`
#[must_use]
pub fn masked_word(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| cell.letter().map_or('_', Letter::as_char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters guessed correctly and incorrectly, alphabetical
#[must_use]
pub fn guessed_letters(marks: &[LetterMark]) -> (String, String) {
    let mut hits = String::new();
    let mut misses = String::new();
    for (letter, &mark) in Letter::all().zip(marks) {
        match mark {
            LetterMark::Correct => hits.push(letter.as_char()),
            LetterMark::Incorrect => misses.push(letter.as_char()),
            LetterMark::Unguessed => {}
        }
    }
    (hits, misses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn stage_scales_with_allowance() {
        assert_eq!(gallows_stage(0, 10), 0);
        assert_eq!(gallows_stage(3, 10), 3);
        assert_eq!(gallows_stage(10, 10), 10);
        assert_eq!(gallows_stage(1, 1), 10);
        assert_eq!(gallows_stage(1, 6), 2);
        assert_eq!(gallows_stage(6, 6), 10);
    }

    #[test]
    fn stage_clamps_past_allowance() {
        assert_eq!(gallows_stage(12, 10), 10);
        assert_eq!(gallows_stage(3, 0), 0);
    }

    #[test]
    fn empty_gallows_is_blank() {
        let lines = gallows_lines(0);
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn full_gallows() {
        let lines = gallows_lines(GALLOWS_STAGES);
        assert_eq!(
            lines,
            [
                "  +---+  ",
                "  |   |  ",
                "  O   |  ",
                " /|\\  |  ",
                " / \\  |  ",
                "      |  ",
                "=========",
            ]
        );
    }

    #[test]
    fn masked_word_mixes_letters_and_blanks() {
        let cells = [
            Cell::Guessed(letter('C')),
            Cell::Hidden,
            Cell::Exposed(letter('T')),
        ];
        assert_eq!(masked_word(&cells), "C _ T");
        assert_eq!(masked_word(&[]), "");
    }

    #[test]
    fn guessed_letters_splits_hits_and_misses() {
        let mut marks = [LetterMark::Unguessed; 26];
        marks[letter('Z').index()] = LetterMark::Incorrect;
        marks[letter('A').index()] = LetterMark::Correct;
        marks[letter('E').index()] = LetterMark::Incorrect;

        let (hits, misses) = guessed_letters(&marks);
        assert_eq!(hits, "A");
        assert_eq!(misses, "EZ");
    }
}
