//! TUI rendering with ratatui
//!
//! Gallows, word boxes and the letter board for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Letter, LetterMark};
use crate::game::{Cell, DisplayState, RoundState};
use crate::output::formatters::{gallows_lines, gallows_stage};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Letters per row on the letter board
const BOARD_COLUMNS: usize = 7;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let display = app.game.display_state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word and letters
        ])
        .split(chunks[1]);

    render_gallows_panel(f, &display, main_chunks[0]);
    render_play_panel(f, app, &display, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows_panel(f: &mut Frame, display: &DisplayState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(3)])
        .split(area);

    let color = match display.state {
        RoundState::Lost => Color::Red,
        RoundState::Won => Color::Green,
        RoundState::NotStarted | RoundState::InProgress => Color::White,
    };
    let stage = gallows_stage(display.wrong_guesses, display.allowance);
    let lines: Vec<Line> = gallows_lines(stage).into_iter().map(Line::from).collect();

    let drawing = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(drawing, chunks[0]);

    let percent = if display.allowance == 0 {
        0
    } else {
        (display.remaining_guesses * 100 / display.allowance) as u16
    };
    let gauge = Gauge::default()
        .block(Block::default().title(" Remaining ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(if display.remaining_guesses <= 2 {
            Color::Red
        } else {
            Color::Yellow
        }))
        .percent(percent)
        .label(format!(
            "{}/{} wrong guesses left",
            display.remaining_guesses, display.allowance
        ));
    f.render_widget(gauge, chunks[1]);
}

fn render_play_panel(f: &mut Frame, app: &App, display: &DisplayState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(6), // Letter board
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, display, chunks[0]);
    render_letter_board(f, display, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, display: &DisplayState, area: Rect) {
    let spans: Vec<Span> = display
        .cells
        .iter()
        .flat_map(|&cell| {
            let (text, style) = match cell {
                Cell::Hidden => (
                    " _ ".to_string(),
                    Style::default().fg(Color::White).bg(Color::Black),
                ),
                Cell::Guessed(l) => (
                    format!(" {l} "),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                // Letters the player missed, shown after a loss
                Cell::Exposed(l) => (
                    format!(" {l} "),
                    Style::default().fg(Color::LightRed).bg(Color::DarkGray),
                ),
            };
            [Span::styled(text, style), Span::raw(" ")]
        })
        .collect();

    let title = if display.cells.is_empty() {
        " Word ".to_string()
    } else {
        format!(" Word ({} letters) ", display.word_length)
    };
    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(word, area);
}

fn render_letter_board(f: &mut Frame, display: &DisplayState, area: Rect) {
    let letters: Vec<Letter> = Letter::all().collect();
    let lines: Vec<Line> = letters
        .chunks(BOARD_COLUMNS)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&letter| {
                    let style = match display.letters[letter.index()] {
                        LetterMark::Correct => Style::default().fg(Color::Black).bg(Color::Green),
                        LetterMark::Incorrect => Style::default().fg(Color::Black).bg(Color::Red),
                        LetterMark::Unguessed => Style::default().fg(Color::White),
                    };
                    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type a letter to guess ",
            String::new(),
            Color::Yellow,
        ),
        InputMode::ConfirmDiscard => (
            " Unsaved progress | y: save first  n: discard  Esc: cancel ",
            String::new(),
            Color::Magenta,
        ),
        InputMode::SavePath => (
            " Save to file | Enter to save, Esc to cancel ",
            app.path_buffer.clone(),
            Color::Cyan,
        ),
        InputMode::LoadPath => (
            " Load from file | Enter to load, Esc to cancel ",
            app.path_buffer.clone(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats = &app.stats;
    let stats_text = format!(
        "Rounds: {} | Won: {} | Lost: {}{}",
        stats.rounds,
        stats.won,
        stats.lost,
        if app.game.is_modified() { " | unsaved" } else { "" }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("^N: New | ^S: Save | ^O: Load | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
