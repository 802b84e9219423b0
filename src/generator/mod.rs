//! Spelling Bee puzzle generation
//!
//! - `filter` - which dictionary words a letter set can spell
//! - `scoring` - per-word points and the puzzle quality heuristic
//! - `draw` - injectable letter-set sources (random or scripted)
//! - `search` - the random-restart search folding over candidates

mod alphabet;
mod config;
mod draw;
mod filter;
mod scoring;
mod search;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_LENGTH, GeneratorConfig};
pub use draw::{LetterSource, RandomDraw, ScriptedDraw};
pub use filter::{AllowedLetters, valid_words};
pub use scoring::{CandidateStats, heuristic_score, word_points};
pub use search::{
    Candidate, Generator, Puzzle, SearchState, evaluate_candidate, evaluate_letter_set,
    generate_puzzle, search,
};
