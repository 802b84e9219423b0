//! TUI application state and logic

use crate::game::{Game, GuessOutcome};
use crate::generator::{Generator, LetterSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: LetterSource> {
    pub generator: Generator<'a, S>,
    pub game: Option<Game>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: ThreadRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Puzzle solved or revealed; answers are shown
    Finished,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_played: usize,
    pub puzzles_completed: usize,
    pub total_points: u32,
    pub words_found: usize,
}

impl<'a, S: LetterSource> App<'a, S> {
    #[must_use]
    pub fn new(generator: Generator<'a, S>) -> Self {
        Self {
            generator,
            game: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Make words using the center letter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
            rng: rand::rng(),
        }
    }

    /// Generate a fresh puzzle and start playing it
    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.input_mode = InputMode::Playing;

        match self.generator.generate() {
            Ok(puzzle) => {
                self.stats.puzzles_played += 1;
                let game = Game::new(puzzle);
                let count = game.answers().len();
                let complete = game.is_complete();
                self.game = Some(game);

                if complete {
                    self.input_mode = InputMode::Finished;
                    self.add_message("This puzzle has no answers.", MessageStyle::Error);
                    self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!("New puzzle: {count} words to find"),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err) => {
                warn!("Puzzle generation failed: {err}");
                self.game = None;
                self.add_message(
                    &format!("Could not generate a puzzle: {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Submit the typed word
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.is_empty() {
            return;
        }
        let Some(game) = self.game.as_mut() else {
            self.add_message("No puzzle loaded. Press Tab for a new one.", MessageStyle::Error);
            return;
        };

        let outcome = game.submit(&input);
        let complete = game.is_complete();

        if let GuessOutcome::Accepted { points, .. } = &outcome {
            self.stats.total_points += points;
            self.stats.words_found += 1;
            self.add_message(&outcome.to_string(), MessageStyle::Success);
        } else {
            self.add_message(&outcome.to_string(), MessageStyle::Error);
        }

        if complete {
            self.stats.puzzles_completed += 1;
            self.input_mode = InputMode::Finished;
            self.add_message("🐝 Queen Bee! Every word found!", MessageStyle::Success);
            self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
        }
    }

    /// Give up on the current puzzle and show the answers
    pub fn reveal(&mut self) {
        let Some(game) = &self.game else {
            return;
        };
        let missed = game.missed_words().len();
        self.input_mode = InputMode::Finished;
        self.add_message(&format!("Revealed: you missed {missed} words"), MessageStyle::Info);
        self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
    }

    pub fn shuffle(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.shuffle(&mut self.rng);
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.reveal();
                }
                KeyCode::Tab => self.new_game(),
                KeyCode::Char(' ') => self.shuffle(),
                KeyCode::Char(c)
                    if c.is_alphabetic() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    self.input_buffer.extend(c.to_uppercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: LetterSource>(app: App<'_, S>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, S: LetterSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    app.new_game();

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, LetterSet};
    use crate::generator::{GeneratorConfig, ScriptedDraw};

    fn dict() -> Dictionary {
        Dictionary::new(["TASTE", "SUITE", "SEAT", "QUIZ"])
    }

    fn app(dict: &Dictionary, puzzles: usize) -> App<'_, ScriptedDraw> {
        let set = LetterSet::parse("AEIOUST").unwrap();
        let source = ScriptedDraw::new(std::iter::repeat_n(set, puzzles));
        App::new(Generator::new(source, dict, GeneratorConfig::new(4, 1)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word<S: LetterSource>(app: &mut App<'_, S>, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn new_game_loads_puzzle() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.center(), 'E');
        assert_eq!(app.stats.puzzles_played, 1);
    }

    #[test]
    fn typing_uppercases_and_backspace_removes() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();

        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.input_buffer, "SE");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "S");
    }

    #[test]
    fn accepted_word_updates_stats() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();

        type_word(&mut app, "seat");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.stats.total_points, 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn rejected_word_reports_error() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();

        type_word(&mut app, "quiz");

        assert_eq!(app.stats.words_found, 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn finding_every_word_finishes() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();

        for word in ["taste", "suite", "seat"] {
            type_word(&mut app, word);
        }

        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.puzzles_completed, 1);
        assert_eq!(app.stats.total_points, 11);
    }

    #[test]
    fn reveal_then_quit() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.input_mode, InputMode::Finished);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn generation_failure_is_reported() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();
        app.handle_key(key(KeyCode::Tab));

        assert!(app.game.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        type_word(&mut app, "seat");
        assert_eq!(app.stats.words_found, 0);
    }

    #[test]
    fn space_shuffles_without_typing() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.input_buffer.is_empty());

        let mut outer = app.game.as_ref().unwrap().outer_letters().to_vec();
        outer.sort_unstable();
        assert_eq!(outer, vec!['A', 'I', 'O', 'S', 'T', 'U']);
    }

    #[test]
    fn control_letters_are_not_typed() {
        let dict = dict();
        let mut app = app(&dict, 1);
        app.new_game();

        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::SHIFT));
        assert_eq!(app.input_buffer, "E");
        assert!(!app.should_quit);
    }

    #[test]
    fn puzzle_without_answers_starts_finished() {
        let dict = Dictionary::new(["QUIZ"]);
        let mut app = app(&dict, 2);
        app.new_game();

        assert!(app.game.as_ref().unwrap().is_complete());
        assert_eq!(app.input_mode, InputMode::Finished);

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.stats.puzzles_played, 2);
        assert_eq!(app.input_mode, InputMode::Finished);
    }

    #[test]
    fn duplicate_answers_can_still_be_finished() {
        let dict = Dictionary::new(["TASTE", "SEAT", "SEAT"]);
        let mut app = app(&dict, 1);
        app.new_game();

        type_word(&mut app, "taste");
        type_word(&mut app, "seat");

        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.puzzles_completed, 1);
    }

    #[test]
    fn ctrl_c_quits() {
        let dict = dict();
        let mut app = app(&dict, 0);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
