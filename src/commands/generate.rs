//! Puzzle generation command
//!
//! Runs one search and returns the winning puzzle.

use crate::core::{Dictionary, PuzzleError};
use crate::generator::{GeneratorConfig, Puzzle, RandomDraw, generate_puzzle};
use log::debug;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Result of generating a puzzle
pub struct GenerateResult {
    pub puzzle: Puzzle,
    pub duration: Duration,
    pub seed: Option<u64>,
}

/// Random draw source, seeded when `seed` is given
#[must_use]
pub fn draw_source(seed: Option<u64>) -> RandomDraw<StdRng> {
    seed.map_or_else(RandomDraw::from_thread_rng, RandomDraw::seeded)
}

/// Generate a single puzzle
///
/// # Errors
///
/// Returns an error if the config is invalid or the dictionary is empty.
pub fn generate(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    seed: Option<u64>,
) -> Result<GenerateResult, PuzzleError> {
    let start = Instant::now();
    let mut source = draw_source(seed);
    let puzzle = generate_puzzle(dictionary, config, &mut source)?;
    let duration = start.elapsed();

    debug!(
        "Generated {} (center {}) with {} words, score {:.1} in {:?}",
        puzzle.letters,
        puzzle.center_letter,
        puzzle.valid_words.len(),
        puzzle.stats.heuristic_score,
        duration
    );

    Ok(GenerateResult {
        puzzle,
        duration,
        seed,
    })
}
