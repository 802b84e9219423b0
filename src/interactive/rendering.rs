//! TUI rendering with ratatui
//!
//! Honeycomb, found words, and score progress for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::game::Game;
use crate::generator::LetterSource;
use crate::output::formatters::honeycomb_lines;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: LetterSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_hive_panel(f, app, main_chunks[0]);
    render_words_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_hive_panel<S: LetterSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Honeycomb
            Constraint::Length(3), // Score gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_honeycomb(f, app.game.as_ref(), chunks[0]);
    render_score(f, app.game.as_ref(), chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_honeycomb(f: &mut Frame, game: Option<&Game>, area: Rect) {
    let block = Block::default()
        .title(" Hive ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(game) = game else {
        f.render_widget(Paragraph::new("No puzzle loaded").block(block), area);
        return;
    };

    let letter = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let center = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let [top, middle, bottom] = honeycomb_lines(game.center(), game.outer_letters());
    let content = vec![
        Line::from(""),
        Line::styled(top, letter),
        Line::styled(middle, center),
        Line::styled(bottom, letter),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_score(f: &mut Frame, game: Option<&Game>, area: Rect) {
    let (percent, label) = game.map_or((0, String::new()), |game| {
        (
            (game.progress() * 100.0).min(100.0) as u16,
            format!(
                "{}/{} points | {} words left",
                game.score(),
                game.max_score(),
                game.remaining()
            ),
        )
    });

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_words_panel<S: LetterSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let Some(game) = &app.game else {
        let empty = Paragraph::new("Press Tab to generate a puzzle")
            .block(Block::default().title(" Words ").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let found = Style::default().fg(Color::Green);
    let missed = Style::default().fg(Color::DarkGray);

    let spans: Vec<Span> = if app.input_mode == InputMode::Finished {
        game.answers()
            .iter()
            .map(|word| {
                let style = if game.found_words().contains(word) {
                    found
                } else {
                    missed
                };
                Span::styled(format!("{word}  "), style)
            })
            .collect()
    } else {
        game.found_words()
            .iter()
            .map(|word| Span::styled(format!("{word}  "), found))
            .collect()
    };

    let title = if app.input_mode == InputMode::Finished {
        format!(" All {} Answers ", game.answers().len())
    } else {
        format!(" Found {} ", game.found_words().len())
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages<S: LetterSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
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

fn render_input<S: LetterSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Puzzle over | Press 'n' for new puzzle or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Playing => (
            " Type a word | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
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

fn render_status<S: LetterSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let puzzles_text = format!(
        "Puzzles: {} | Completed: {}",
        app.stats.puzzles_played, app.stats.puzzles_completed
    );
    let puzzles = Paragraph::new(puzzles_text).alignment(Alignment::Center);
    f.render_widget(puzzles, chunks[0]);

    let points_text = format!(
        "Words: {} | Points: {}",
        app.stats.words_found, app.stats.total_points
    );
    let points = Paragraph::new(points_text).alignment(Alignment::Center);
    f.render_widget(points, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Finished => "q: Quit | n: New Puzzle",
        InputMode::Playing => "Space: Shuffle | Tab: New | Ctrl-R: Reveal | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, LetterSet};
    use crate::generator::{Generator, GeneratorConfig, ScriptedDraw};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_hive_and_found_words() {
        let dict = Dictionary::new(["TASTE", "SUITE", "SEAT"]);
        let set = LetterSet::parse("AEIOUST").unwrap();
        let generator = Generator::new(ScriptedDraw::new([set]), &dict, GeneratorConfig::new(4, 1));
        let mut app = App::new(generator);
        app.new_game();
        app.input_buffer = "TASTE".to_string();
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("SPELLING BEE"));
        assert!(text.contains("[E]"));
        assert!(text.contains("Found 1"));
        assert!(text.contains("TASTE"));
    }

    #[test]
    fn renders_without_puzzle() {
        let dict = Dictionary::default();
        let generator = Generator::new(ScriptedDraw::default(), &dict, GeneratorConfig::default());
        let app = App::new(generator);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("No puzzle loaded"));
    }
}
