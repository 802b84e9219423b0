//! Batch generation command
//!
//! Generates many puzzles in parallel and summarizes their quality.

use crate::core::{Dictionary, LETTER_SET_SIZE, PuzzleError};
use crate::generator::{GeneratorConfig, Puzzle, RandomDraw, generate_puzzle};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Statistics from a batch run
pub struct BatchResult {
    pub total_puzzles: usize,
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub average_words: f64,
    /// Puzzles whose best candidate had no answers at all
    pub empty_puzzles: usize,
    /// Index `n` counts puzzles whose answers use `n` distinct letters
    pub letter_distribution: [usize; LETTER_SET_SIZE + 1],
    pub best: Option<Puzzle>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles in parallel
///
/// With a seed, puzzle `i` draws from `seed + i`, so the batch is
/// reproducible no matter how work is split across threads.
///
/// # Errors
///
/// Returns the first generation error (invalid config or empty dictionary).
pub fn run_batch(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    count: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<BatchResult, PuzzleError> {
    info!("Generating {count} puzzles from {} words", dictionary.len());

    let pb = if show_progress {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");
        ProgressBar::new(count as u64).with_style(style)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let puzzles: Vec<Puzzle> = (0..count)
        .into_par_iter()
        .map(|index| {
            let mut source = match seed {
                Some(seed) => RandomDraw::seeded(seed.wrapping_add(index as u64)),
                None => RandomDraw::from_thread_rng(),
            };
            let puzzle = generate_puzzle(dictionary, config, &mut source);
            pb.inc(1);
            puzzle
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(summarize(puzzles, duration))
}

fn summarize(puzzles: Vec<Puzzle>, duration: Duration) -> BatchResult {
    let total_puzzles = puzzles.len();
    let scores = puzzles.iter().map(|p| p.stats.heuristic_score);

    let (average_score, average_words) = if total_puzzles > 0 {
        let score_sum: f64 = scores.clone().sum();
        let word_sum: usize = puzzles.iter().map(|p| p.valid_words.len()).sum();
        (
            score_sum / total_puzzles as f64,
            word_sum as f64 / total_puzzles as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let min_score = scores.clone().reduce(f64::min).unwrap_or(0.0);
    let max_score = scores.reduce(f64::max).unwrap_or(0.0);

    let empty_puzzles = puzzles.iter().filter(|p| p.valid_words.is_empty()).count();

    let mut letter_distribution = [0; LETTER_SET_SIZE + 1];
    for puzzle in &puzzles {
        let used = puzzle.stats.used_letter_count.min(LETTER_SET_SIZE);
        letter_distribution[used] += 1;
    }

    let best = puzzles
        .into_iter()
        .max_by(|a, b| a.stats.heuristic_score.total_cmp(&b.stats.heuristic_score));

    BatchResult {
        total_puzzles,
        average_score,
        min_score,
        max_score,
        average_words,
        empty_puzzles,
        letter_distribution,
        best,
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
