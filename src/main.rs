//! Spelling Bee - CLI
//!
//! Puzzle generator with TUI and text play modes, plus tools for inspecting
//! letter sets and maintaining the dictionary.

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use spelling_bee::{
    commands::{
        analyze_letters, apply_suggestions, draw_source, filter_dictionary, find_words, generate,
        run_batch, run_simple,
    },
    core::Dictionary,
    generator::{Alphabet, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_LENGTH, Generator, GeneratorConfig},
    output::{
        print_analysis_result, print_batch_result, print_filter_report, print_generate_result,
        print_json, print_suggestion_report, print_words_result,
    },
    wordlists::loader::{embedded, load_from_file},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee puzzle generator and player",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited word file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Options shared by every command that generates puzzles
#[derive(Args, Clone)]
struct GenerateArgs {
    /// Shortest word that counts as an answer
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Letter sets drawn per puzzle (each tried with all seven centers)
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Letters to draw from; repeat a letter to make it more likely
    #[arg(long)]
    alphabet: Option<String>,

    /// Seed for reproducible puzzles
    #[arg(short, long)]
    seed: Option<u64>,
}

impl GenerateArgs {
    fn config(&self) -> Result<GeneratorConfig> {
        let config = GeneratorConfig::new(self.min_length, self.attempts);
        Ok(match &self.alphabet {
            Some(letters) => config.with_alphabet(Alphabet::new(letters)?),
            None => config,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play(GenerateArgs),

    /// Simple text game without TUI
    Simple(GenerateArgs),

    /// Generate one puzzle
    Generate {
        #[command(flatten)]
        options: GenerateArgs,

        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
    },

    /// List dictionary words spellable with the given letters
    Words {
        /// Allowed letters, e.g. "aeioust"
        letters: String,

        /// Shortest word to list
        #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a seven-letter set under each center letter
    Analyze {
        /// Seven distinct letters
        letters: String,

        /// Shortest word that counts as an answer
        #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,
    },

    /// Generate many puzzles and summarize their quality
    Batch {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        #[command(flatten)]
        options: GenerateArgs,
    },

    /// Remove excluded words from a dictionary file
    Filter {
        /// Dictionary file to clean
        dictionary_file: PathBuf,

        /// File listing words to remove, one per line
        #[arg(short, long)]
        exclusions: PathBuf,

        /// Write here instead of overwriting the dictionary
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report what would change without writing
        #[arg(long)]
        what_if: bool,
    },

    /// Apply an add/remove suggestions JSON file to a dictionary file
    Suggest {
        /// Dictionary file to update
        dictionary_file: PathBuf,

        /// Suggestions file: { "add": [...], "remove": [...] }
        #[arg(short = 'f', long)]
        suggestions: PathBuf,

        /// Report what would change without writing either file
        #[arg(long)]
        what_if: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str) -> Result<Dictionary> {
    let dictionary = match source {
        "embedded" => embedded(),
        path => load_from_file(path)?,
    };
    debug!("Dictionary ready with {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or_else(|| {
        Commands::Play(GenerateArgs {
            min_length: DEFAULT_MIN_LENGTH,
            attempts: DEFAULT_MAX_ATTEMPTS,
            alphabet: None,
            seed: None,
        })
    });
    let verbose = cli.verbose > 0;
    let dictionary = || load_dictionary(&cli.dictionary);

    match command {
        Commands::Play(options) => run_play_command(&options, &dictionary()?),
        Commands::Simple(options) => run_simple_command(&options, &dictionary()?),
        Commands::Generate { options, json } => {
            let result = generate(&dictionary()?, &options.config()?, options.seed)?;
            if json {
                print_json(&result.puzzle)?;
            } else {
                print_generate_result(&result, verbose);
            }
            Ok(())
        }
        Commands::Words {
            letters,
            min_length,
            json,
        } => {
            let result = find_words(&dictionary()?, &letters, min_length)?;
            if json {
                print_json(&result)?;
            } else {
                print_words_result(&result);
            }
            Ok(())
        }
        Commands::Analyze {
            letters,
            min_length,
        } => {
            let result =
                analyze_letters(&dictionary()?, &letters, min_length).map_err(|e| anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Batch { count, options } => {
            let dictionary = dictionary()?;
            println!("Generating {count} puzzles...");
            let result = run_batch(&dictionary, &options.config()?, count, options.seed, true)?;
            print_batch_result(&result);
            Ok(())
        }
        Commands::Filter {
            dictionary_file,
            exclusions,
            output,
            what_if,
        } => {
            let report =
                filter_dictionary(&dictionary_file, &exclusions, output.as_deref(), what_if)?;
            print_filter_report(&report, verbose);
            Ok(())
        }
        Commands::Suggest {
            dictionary_file,
            suggestions,
            what_if,
        } => {
            let report = apply_suggestions(&dictionary_file, &suggestions, what_if)?;
            print_suggestion_report(&report);
            Ok(())
        }
    }
}

fn run_simple_command(options: &GenerateArgs, dictionary: &Dictionary) -> Result<()> {
    let mut generator = Generator::new(draw_source(options.seed), dictionary, options.config()?);
    run_simple(&mut generator).map_err(|e| anyhow!(e))
}

fn run_play_command(options: &GenerateArgs, dictionary: &Dictionary) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let generator = Generator::new(draw_source(options.seed), dictionary, options.config()?);
    run_tui(App::new(generator))
}
