//! Simple interactive CLI mode
//!
//! Text-based Spelling Bee game without TUI

use crate::game::{Game, GuessOutcome};
use crate::generator::{Generator, LetterSource};
use crate::output::display::{print_honeycomb, print_word_columns};
use crate::output::formatters::create_progress_bar;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a
/// puzzle cannot be generated.
pub fn run_simple<S: LetterSource>(generator: &mut Generator<'_, S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spelling Bee - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words from the seven letters. Every word must use the center");
    println!(
        "letter and be at least {} letters long. Letters can repeat.\n",
        generator.config().min_length
    );
    println!("Commands: 'shuffle', 'words' to list finds, 'reveal' to give up,");
    println!("          'new' for a new puzzle, 'quit' to exit\n");

    let mut rng = rand::rng();
    let Some(mut game) = new_game(generator, play_again)? else {
        return Ok(());
    };

    loop {
        print_status(&game);
        let input = get_user_input("Word")?;

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing! Final score: {}\n", game.score());
                return Ok(());
            }
            "new" | "n" => {
                println!("\n🔄 New puzzle!\n");
                match new_game(generator, play_again)? {
                    Some(next) => game = next,
                    None => return Ok(()),
                }
            }
            "shuffle" | "s" => game.shuffle(&mut rng),
            "words" | "w" => {
                if game.found_words().is_empty() {
                    println!("No words found yet.\n");
                } else {
                    print_word_columns(game.found_words());
                    println!();
                }
            }
            "reveal" | "r" => {
                reveal(&game);
                if !play_again()? {
                    return Ok(());
                }
                match new_game(generator, play_again)? {
                    Some(next) => game = next,
                    None => return Ok(()),
                }
            }
            _ => {
                let outcome = game.submit(&input);
                print_outcome(&outcome);

                if game.is_complete() {
                    println!("\n{}", "═".repeat(70).bright_cyan());
                    println!(
                        "{}",
                        "        🐝  Q U E E N   B E E !  Every word found  🐝        "
                            .bright_green()
                            .bold()
                    );
                    println!("{}", "═".repeat(70).bright_cyan());
                    println!(
                        "\n  Final score: {}\n",
                        game.score().to_string().bright_cyan().bold()
                    );
                    if !play_again()? {
                        return Ok(());
                    }
                    match new_game(generator, play_again)? {
                        Some(next) => game = next,
                        None => return Ok(()),
                    }
                }
            }
        }
    }
}

/// Generate puzzles until one has answers
///
/// A puzzle with nothing to find is shown and skipped; `retry` decides
/// whether to draw another. Returns `None` when the player declines.
fn new_game<S, F>(generator: &mut Generator<'_, S>, mut retry: F) -> Result<Option<Game>, String>
where
    S: LetterSource,
    F: FnMut() -> Result<bool, String>,
{
    loop {
        let game = generator.generate().map(Game::new).map_err(|e| e.to_string())?;
        if !game.is_complete() {
            return Ok(Some(game));
        }

        print_honeycomb(game.center(), game.outer_letters());
        println!("\n❌ {}\n", "This puzzle has no answers.".red());
        if !retry()? {
            return Ok(None);
        }
    }
}

fn print_status(game: &Game) {
    println!("────────────────────────────────────────────────────────────");
    print_honeycomb(game.center(), game.outer_letters());
    println!(
        "\n  Score: {} / {}  [{}]  {} words left",
        game.score().to_string().bright_yellow().bold(),
        game.max_score(),
        create_progress_bar(game.progress(), 1.0, 20).green(),
        game.remaining()
    );
    println!("────────────────────────────────────────────────────────────");
}

fn print_outcome(outcome: &GuessOutcome) {
    let text = outcome.to_string();
    if outcome.is_accepted() {
        println!("✓ {}\n", text.green().bold());
    } else {
        println!("❌ {}\n", text.red());
    }
}

fn reveal(game: &Game) {
    let missed = game.missed_words();
    println!(
        "\nYou found {} of {} words.",
        game.found_words().len(),
        game.answers().len()
    );
    if !missed.is_empty() {
        println!("Missed words:");
        print_word_columns(&missed);
    }
    println!();
}

fn play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    if matches!(answer.as_str(), "yes" | "y") {
        println!("\n🔄 New puzzle!\n");
        Ok(true)
    } else {
        println!("\n👋 Thanks for playing!\n");
        Ok(false)
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
